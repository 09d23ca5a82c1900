//! # seqasm
//!
//! DNA 字符串匹配与 read 组装的经典算法库。
//!
//! - **精确 / 近似匹配**：朴素扫描、带坏字符与好后缀规则的 Boyer-Moore
//! - **比对**：编辑距离、基于罚分矩阵的全局比对
//! - **组装**：前后缀重叠、k-mer 候选索引、重叠图、穷举与贪心最短公共超串
//!
//! ## 快速示例
//!
//! ```rust
//! use seqasm::matching::{boyer_moore_with_counts, BoyerMoore};
//! use seqasm::assembly::{greedy_scs_indexed, OverlapGraph};
//!
//! let text = b"GCTAGCTCTCGCTAGCTCGA";
//! let table = BoyerMoore::dna(b"GCTAGCTC").unwrap();
//! let hits = boyer_moore_with_counts(b"GCTAGCTC", &table, text).unwrap();
//! assert_eq!(hits.occurrences, vec![0, 10]);
//!
//! let reads = ["CCT", "CTT", "TGC", "TGG", "GAT", "ATT"];
//! let graph = OverlapGraph::build(&reads, 2).unwrap();
//! assert_eq!(graph.edges[&(0, 1)], 2);
//! assert_eq!(greedy_scs_indexed(&reads, 1).unwrap().len(), 11);
//! ```
//!
//! ## 模块说明
//!
//! - [`matching`] — 朴素匹配、Boyer-Moore 预处理与匹配
//! - [`assembly`] — 重叠、重叠图、SCS、De Bruijn 边
//! - [`index`] — read k-mer 索引及其持久化
//! - [`align`] — 编辑距离与全局比对
//! - [`io`] — FASTA / FASTQ 读取
//! - [`util`] — 字母表、质量值与 GC 统计

pub mod align;
pub mod assembly;
pub mod error;
pub mod index;
pub mod io;
pub mod logging;
pub mod matching;
pub mod util;

pub use error::{Result, SeqasmError};
