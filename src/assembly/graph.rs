use std::collections::BTreeMap;

use log::debug;
use rayon::prelude::*;

use super::overlap::overlap_unchecked;
use crate::error::{Result, SeqasmError};
use crate::index::kmer::KmerIndex;

/// 有向重叠图：`(source, target) -> 重叠长度`，source 的后缀等于 target 的前缀。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlapGraph {
    pub k: usize,
    pub edges: BTreeMap<(usize, usize), usize>,
    /// 至少有一条出边的 read 数
    pub reads_with_edges: usize,
}

impl OverlapGraph {
    /// 构建所有重叠长度 >= k 的边。k-mer 索引只建一次。
    pub fn build<R: AsRef<[u8]>>(reads: &[R], k: usize) -> Result<Self> {
        let index = KmerIndex::build(reads, k)?;
        Self::build_with_index(reads, &index)
    }

    /// 复用已有索引；`index` 必须由同一批 reads 构建，read 数不一致时返回
    /// `IndexReadCountMismatch`。
    pub fn build_with_index<R: AsRef<[u8]>>(reads: &[R], index: &KmerIndex) -> Result<Self> {
        check_k(index.k)?;
        if index.num_reads() != reads.len() {
            return Err(SeqasmError::IndexReadCountMismatch { indexed: index.num_reads(), given: reads.len() });
        }
        let per_read: Vec<Vec<(usize, usize)>> =
            (0..reads.len()).map(|i| out_edges(reads, index, i)).collect();
        Ok(Self::from_out_edges(index.k, per_read))
    }

    /// 与 [`build`](Self::build) 结果相同，逐 read 的候选验证在 rayon 线程池上并行。
    pub fn build_par<R: AsRef<[u8]> + Sync>(reads: &[R], k: usize) -> Result<Self> {
        let index = KmerIndex::build(reads, k)?;
        let per_read: Vec<Vec<(usize, usize)>> =
            (0..reads.len()).into_par_iter().map(|i| out_edges(reads, &index, i)).collect();
        Ok(Self::from_out_edges(k, per_read))
    }

    fn from_out_edges(k: usize, per_read: Vec<Vec<(usize, usize)>>) -> Self {
        let mut edges = BTreeMap::new();
        let mut reads_with_edges = 0usize;
        for (src, outs) in per_read.into_iter().enumerate() {
            if !outs.is_empty() {
                reads_with_edges += 1;
            }
            for (dst, olen) in outs {
                edges.insert((src, dst), olen);
            }
        }
        debug!("overlap graph: k={} edges={} reads_with_edges={}", k, edges.len(), reads_with_edges);
        Self { k, edges, reads_with_edges }
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// 按重叠长度降序、下标升序排列的出边
    pub fn successors(&self, src: usize) -> Vec<(usize, usize)> {
        let mut outs: Vec<(usize, usize)> =
            self.edges.range((src, 0)..=(src, usize::MAX)).map(|(&(_, dst), &olen)| (dst, olen)).collect();
        outs.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        outs
    }
}

fn check_k(k: usize) -> Result<()> {
    if k == 0 {
        return Err(SeqasmError::InvalidKmerLength(k));
    }
    Ok(())
}

/// read `i` 的出边 (target, olen)，target 升序
fn out_edges<R: AsRef<[u8]>>(reads: &[R], index: &KmerIndex, i: usize) -> Vec<(usize, usize)> {
    let read = reads[i].as_ref();
    index
        .suffix_candidates(read)
        .iter()
        .filter(|&&j| j != i)
        .filter_map(|&j| {
            let olen = overlap_unchecked(read, reads[j].as_ref(), index.k);
            (olen > 0).then_some((j, olen))
        })
        .collect()
}
