pub mod debruijn;
pub mod graph;
pub mod greedy;
pub mod overlap;
pub mod scs;

pub use graph::OverlapGraph;
pub use greedy::{greedy_scs, greedy_scs_indexed};
pub use overlap::{naive_overlap_map, overlap};
pub use scs::{scs, scs_with_count, sup_count, ExactScs};

use crate::error::{Result, SeqasmError};

/// 穷举 SCS 的默认 read 数上限（n! 个排列）
pub const EXACT_SCS_MAX_READS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScsMethod {
    Exact,
    Greedy,
    GreedyIndexed,
}

/// 组装相关参数
#[derive(Debug, Clone, Copy)]
pub struct AssemblyOpt {
    /// 最小重叠长度 / k-mer 长度
    pub min_overlap: usize,
    /// 重叠图并行线程数；1 表示串行
    pub threads: usize,
    pub scs_method: ScsMethod,
    /// 穷举 SCS 允许的最大 read 数
    pub max_exact_reads: usize,
}

impl Default for AssemblyOpt {
    fn default() -> Self {
        Self { min_overlap: 3, threads: 1, scs_method: ScsMethod::GreedyIndexed, max_exact_reads: EXACT_SCS_MAX_READS }
    }
}

impl AssemblyOpt {
    pub fn validate(&self) -> Result<()> {
        if self.min_overlap == 0 {
            return Err(SeqasmError::InvalidOverlapLength);
        }
        Ok(())
    }
}

/// 按选项构建重叠图
pub fn overlap_graph<R: AsRef<[u8]> + Sync>(reads: &[R], opt: &AssemblyOpt) -> Result<OverlapGraph> {
    opt.validate()?;
    if opt.threads > 1 {
        OverlapGraph::build_par(reads, opt.min_overlap)
    } else {
        OverlapGraph::build(reads, opt.min_overlap)
    }
}

/// 按选项组装超串。穷举方法在 read 数超过 `max_exact_reads` 时返回 `None`。
pub fn assemble<R: AsRef<[u8]>>(reads: &[R], opt: &AssemblyOpt) -> Result<Option<Vec<u8>>> {
    opt.validate()?;
    match opt.scs_method {
        ScsMethod::Exact if reads.len() > opt.max_exact_reads => Ok(None),
        ScsMethod::Exact => Ok(Some(scs(reads))),
        ScsMethod::Greedy => greedy_scs(reads, opt.min_overlap).map(Some),
        ScsMethod::GreedyIndexed => greedy_scs_indexed(reads, opt.min_overlap).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assemble_dispatches_and_guards_exact_search() {
        let reads = ["CCT", "CTT", "TGC", "TGG", "GAT", "ATT"];
        let mut opt = AssemblyOpt { min_overlap: 1, ..AssemblyOpt::default() };
        let greedy = assemble(&reads, &opt).unwrap().unwrap();
        opt.scs_method = ScsMethod::Exact;
        let exact = assemble(&reads, &opt).unwrap().unwrap();
        assert_eq!(greedy.len(), exact.len());

        opt.max_exact_reads = 5;
        assert_eq!(assemble(&reads, &opt).unwrap(), None);
    }

    #[test]
    fn zero_min_overlap_rejected() {
        let opt = AssemblyOpt { min_overlap: 0, ..AssemblyOpt::default() };
        assert!(assemble(&["ACGT"], &opt).is_err());
        assert!(overlap_graph(&["ACGT"], &opt).is_err());
    }

    #[test]
    fn threaded_graph_matches_serial() {
        let reads = ["TTACGTAC", "CGTACCGT", "ACCGTTTA", "GTTTACGG"];
        let serial = overlap_graph(&reads, &AssemblyOpt::default()).unwrap();
        let threaded = overlap_graph(&reads, &AssemblyOpt { threads: 4, ..AssemblyOpt::default() }).unwrap();
        assert_eq!(serial, threaded);
    }
}
