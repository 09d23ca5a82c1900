//! 穷举最短公共超串（SCS）。
//!
//! 按字典序枚举 read 下标的全部排列，每个排列中相邻 read 以最大重叠（至少 1）拼接，
//! 保留第一个严格最短的结果。复杂度 O(n! · n) 次拼接外加 O(n²) 次重叠计算，
//! 只适合十条以内的短 read，用作贪心算法的正确性基线。

use log::debug;

use super::overlap::overlap_unchecked;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactScs {
    pub superstring: Vec<u8>,
    /// 达到最短长度的排列数
    pub shortest_count: usize,
    /// 枚举的排列总数（n!）
    pub permutations: usize,
}

/// 字典序下一个排列；已是最后一个排列时返回 false
fn next_permutation(p: &mut [usize]) -> bool {
    let n = p.len();
    if n < 2 {
        return false;
    }
    let mut i = n - 1;
    while i > 0 && p[i - 1] >= p[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }
    let mut j = n - 1;
    while p[j] <= p[i - 1] {
        j -= 1;
    }
    p.swap(i - 1, j);
    p[i..].reverse();
    true
}

pub fn scs_with_count<R: AsRef<[u8]>>(reads: &[R]) -> ExactScs {
    let n = reads.len();
    if n == 0 {
        return ExactScs { superstring: Vec::new(), shortest_count: 1, permutations: 1 };
    }

    // 两两重叠只算一次
    let mut olap = vec![0usize; n * n];
    for i in 0..n {
        for j in 0..n {
            if i != j {
                olap[i * n + j] = overlap_unchecked(reads[i].as_ref(), reads[j].as_ref(), 1);
            }
        }
    }
    let total_len: usize = reads.iter().map(|r| r.as_ref().len()).sum();

    let mut perm: Vec<usize> = (0..n).collect();
    let mut best_len = usize::MAX;
    let mut best_perm = perm.clone();
    let mut shortest_count = 0usize;
    let mut permutations = 0usize;
    loop {
        permutations += 1;
        let saved: usize = perm.windows(2).map(|w| olap[w[0] * n + w[1]]).sum();
        let len = total_len - saved;
        if len < best_len {
            best_len = len;
            best_perm.copy_from_slice(&perm);
            shortest_count = 1;
        } else if len == best_len {
            shortest_count += 1;
        }
        if !next_permutation(&mut perm) {
            break;
        }
    }

    let mut superstring = reads[best_perm[0]].as_ref().to_vec();
    for w in best_perm.windows(2) {
        let next = reads[w[1]].as_ref();
        superstring.extend_from_slice(&next[olap[w[0] * n + w[1]]..]);
    }
    debug!(
        "exact scs: reads={} permutations={} best_len={} shortest_count={}",
        n, permutations, best_len, shortest_count
    );
    ExactScs { superstring, shortest_count, permutations }
}

/// 穷举得到的最短公共超串（并列时取字典序最先枚举到的排列）
pub fn scs<R: AsRef<[u8]>>(reads: &[R]) -> Vec<u8> {
    scs_with_count(reads).superstring
}

/// 达到最短超串长度的排列个数
pub fn sup_count<R: AsRef<[u8]>>(reads: &[R]) -> usize {
    scs_with_count(reads).shortest_count
}
