use std::collections::HashMap;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SeqasmError};

/// k-mer -> 包含该 k-mer（任意位置）的 read 下标。
///
/// 只是候选过滤：命中不代表存在前后缀对齐的重叠，仍需用
/// [`overlap`](crate::assembly::overlap::overlap) 验证。
/// 下标列表按升序存储且无重复，保证遍历顺序确定。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KmerIndex {
    pub k: usize,
    /// 构建时的 read 数，下标均小于它
    num_reads: usize,
    map: HashMap<Vec<u8>, Vec<usize>>,
}

impl KmerIndex {
    pub fn build<R: AsRef<[u8]>>(reads: &[R], k: usize) -> Result<Self> {
        if k == 0 {
            return Err(SeqasmError::InvalidKmerLength(k));
        }
        let mut map: HashMap<Vec<u8>, Vec<usize>> = HashMap::new();
        for (ri, read) in reads.iter().enumerate() {
            let read = read.as_ref();
            if read.len() < k {
                continue;
            }
            for kmer in read.windows(k) {
                let ids = map.entry(kmer.to_vec()).or_default();
                // 同一 read 内重复出现的 k-mer 只记一次；ri 单调递增，检查末尾即可
                if ids.last() != Some(&ri) {
                    ids.push(ri);
                }
            }
        }
        trace!("kmer index: k={} reads={} distinct_kmers={}", k, reads.len(), map.len());
        Ok(Self { k, num_reads: reads.len(), map })
    }

    /// 包含 `kmer` 的 read 下标（升序），不存在时为空
    pub fn candidates(&self, kmer: &[u8]) -> &[usize] {
        self.map.get(kmer).map(Vec::as_slice).unwrap_or(&[])
    }

    /// 包含 `read` 的 k 长后缀的 read 下标；read 短于 k 时为空
    pub fn suffix_candidates(&self, read: &[u8]) -> &[usize] {
        if read.len() < self.k {
            return &[];
        }
        self.candidates(&read[read.len() - self.k..])
    }

    /// 构建索引时的 read 数
    pub fn num_reads(&self) -> usize {
        self.num_reads
    }

    /// 不同 k-mer 的数量
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexes_every_kmer_once_per_read() {
        let reads = ["ACGAC", "GACT", "TT"];
        let idx = KmerIndex::build(&reads, 3).unwrap();
        assert_eq!(idx.candidates(b"ACG"), &[0]);
        assert_eq!(idx.candidates(b"GAC"), &[0, 1]);
        assert_eq!(idx.candidates(b"ACT"), &[1]);
        assert!(idx.candidates(b"TTT").is_empty());
        // ACG CGA GAC ACT
        assert_eq!(idx.len(), 4);

        assert_eq!(idx.num_reads(), 3);

        let idx = KmerIndex::build(&["AAAA"], 2).unwrap();
        assert_eq!(idx.candidates(b"AA"), &[0]);
    }

    #[test]
    fn suffix_lookup() {
        let reads = ["TTACGT", "CGTACC", "GT"];
        let idx = KmerIndex::build(&reads, 3).unwrap();
        assert_eq!(idx.suffix_candidates(b"TTACGT"), &[0, 1]);
        assert!(idx.suffix_candidates(b"GT").is_empty());
    }

    #[test]
    fn zero_k_is_invalid() {
        assert_eq!(KmerIndex::build(&["ACGT"], 0), Err(SeqasmError::InvalidKmerLength(0)));
    }

    #[test]
    fn k_longer_than_reads_gives_empty_index() {
        let idx = KmerIndex::build(&["ACG", "GT"], 4).unwrap();
        assert!(idx.is_empty());
    }
}
