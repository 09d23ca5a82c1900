//! 贪心最短公共超串。
//!
//! 每轮在当前工作集中找重叠最长（>= k）的有序 read 对 (a, b)，用 `a + b[olen..]`
//! 替换二者并追加到工作集末尾；没有可合并的 read 对时按工作集顺序直接拼接。
//!
//! 并列时取源下标优先、目标下标升序的第一个 read 对。朴素全对扫描与
//! k-mer 索引加速两种实现使用同一遍历顺序，因此结果逐字节一致。

use log::{debug, trace};

use super::overlap::overlap_unchecked;
use crate::error::{Result, SeqasmError};
use crate::index::kmer::KmerIndex;

/// 一次合并候选：(源下标, 目标下标, 重叠长度)
pub type BestOverlap = (usize, usize, usize);

/// 全部有序 read 对中重叠最长的一对；没有 >= k 的重叠时返回 None
pub fn pick_maximal_overlap<R: AsRef<[u8]>>(reads: &[R], k: usize) -> Option<BestOverlap> {
    let mut best: Option<BestOverlap> = None;
    for (i, a) in reads.iter().enumerate() {
        for (j, b) in reads.iter().enumerate() {
            if i == j {
                continue;
            }
            let olen = overlap_unchecked(a.as_ref(), b.as_ref(), k);
            if olen > best.map_or(0, |(_, _, o)| o) {
                best = Some((i, j, olen));
            }
        }
    }
    best
}

/// 同 [`pick_maximal_overlap`]，只验证 k-mer 索引给出的候选。索引按当前工作集重建。
pub fn pick_maximal_overlap_indexed<R: AsRef<[u8]>>(reads: &[R], k: usize) -> Result<Option<BestOverlap>> {
    let index = KmerIndex::build(reads, k)?;
    let mut best: Option<BestOverlap> = None;
    for (i, a) in reads.iter().enumerate() {
        let a = a.as_ref();
        for &j in index.suffix_candidates(a) {
            if i == j {
                continue;
            }
            let olen = overlap_unchecked(a, reads[j].as_ref(), k);
            if olen > best.map_or(0, |(_, _, o)| o) {
                best = Some((i, j, olen));
            }
        }
    }
    Ok(best)
}

fn greedy_merge<R, F>(reads: &[R], k: usize, mut pick: F) -> Result<Vec<u8>>
where
    R: AsRef<[u8]>,
    F: FnMut(&[Vec<u8>]) -> Result<Option<BestOverlap>>,
{
    if k == 0 {
        return Err(SeqasmError::InvalidOverlapLength);
    }
    let mut working: Vec<Vec<u8>> = reads.iter().map(|r| r.as_ref().to_vec()).collect();
    let mut merges = 0usize;

    while let Some((i, j, olen)) = pick(&working)? {
        // 先移除较大下标，较小下标才不会失效
        let (a, b) = if i < j {
            let b = working.remove(j);
            (working.remove(i), b)
        } else {
            let a = working.remove(i);
            (a, working.remove(j))
        };
        let mut merged = a;
        merged.extend_from_slice(&b[olen..]);
        trace!("merge #{}: ({}, {}) olen={} -> len {}", merges + 1, i, j, olen, merged.len());
        working.push(merged);
        merges += 1;
    }

    debug!("greedy scs: k={} merges={} remaining_reads={}", k, merges, working.len());
    Ok(working.concat())
}

/// 朴素全对扫描的贪心 SCS
pub fn greedy_scs<R: AsRef<[u8]>>(reads: &[R], k: usize) -> Result<Vec<u8>> {
    greedy_merge(reads, k, |w| Ok(pick_maximal_overlap(w, k)))
}

/// k-mer 索引加速的贪心 SCS，每次合并后重建索引
pub fn greedy_scs_indexed<R: AsRef<[u8]>>(reads: &[R], k: usize) -> Result<Vec<u8>> {
    greedy_merge(reads, k, |w| pick_maximal_overlap_indexed(w, k))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembly::scs::scs;

    #[test]
    fn classic_example_length_eleven() {
        let reads = ["CCT", "CTT", "TGC", "TGG", "GAT", "ATT"];
        let naive = greedy_scs(&reads, 1).unwrap();
        let indexed = greedy_scs_indexed(&reads, 1).unwrap();
        assert_eq!(naive, b"TGCCTTGGATT");
        assert_eq!(indexed, naive);
        assert_eq!(naive.len(), scs(&reads).len());
    }

    #[test]
    fn agrees_with_exact_on_small_inputs() {
        let cases: [&[&str]; 3] = [
            &["ABC", "BCA", "CAB"],
            &["GAT", "TAG", "TCG", "TGC", "AAT", "ATA"],
            &["ACG", "TTT", "GGG"],
        ];
        let expected: [&[u8]; 3] = [b"CABCA", b"TCGATAGAATGC", b"TTTACGGG"];
        for (reads, want) in cases.into_iter().zip(expected) {
            let g = greedy_scs(reads, 1).unwrap();
            assert_eq!(g, want);
            assert_eq!(greedy_scs_indexed(reads, 1).unwrap(), g);
            assert_eq!(g.len(), scs(reads).len());
        }
    }

    #[test]
    fn tie_break_is_first_pair_in_index_order() {
        let reads = ["ACGGTAC", "GTACGGA", "TACGTAC", "AAAAACG"];
        assert_eq!(pick_maximal_overlap(&reads, 3), Some((0, 1, 4)));
        assert_eq!(pick_maximal_overlap_indexed(&reads, 3).unwrap(), Some((0, 1, 4)));
        let want = b"TACGTACAAAAACGGTACGGA";
        assert_eq!(greedy_scs(&reads, 3).unwrap(), want);
        assert_eq!(greedy_scs_indexed(&reads, 3).unwrap(), want);
    }

    #[test]
    fn duplicate_reads_collapse() {
        let reads = ["AC", "CC", "AC"];
        assert_eq!(greedy_scs(&reads, 1).unwrap(), b"ACC");
        assert_eq!(greedy_scs_indexed(&reads, 1).unwrap(), b"ACC");
    }

    #[test]
    fn degenerate_inputs() {
        assert!(greedy_scs::<&str>(&[], 3).unwrap().is_empty());
        assert_eq!(greedy_scs_indexed(&["ACGT"], 3).unwrap(), b"ACGT");
        // 没有 >= k 的重叠：按原顺序拼接
        assert_eq!(greedy_scs(&["ACGT", "TTTT", "GGCA"], 2).unwrap(), b"ACGTTTTTGGCA");
        assert_eq!(greedy_scs_indexed(&["ACGT", "TTTT", "GGCA"], 2).unwrap(), b"ACGTTTTTGGCA");
        assert_eq!(greedy_scs(&["ACGT"], 0), Err(SeqasmError::InvalidOverlapLength));
        assert_eq!(greedy_scs_indexed(&["ACGT"], 0), Err(SeqasmError::InvalidOverlapLength));
    }
}
