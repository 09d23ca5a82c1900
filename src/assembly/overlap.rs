use std::collections::BTreeMap;

use crate::error::{Result, SeqasmError};

/// `a` 的后缀等于 `b` 的前缀时的最长重叠长度，要求至少 `min_length`，否则为 0。
///
/// 从左向右查找 `b[..min_length]` 在 `a` 中的出现位置 `start`，第一个使
/// `a[start..]` 成为 `b` 前缀的 `start` 即给出最长重叠：更靠右的起点只会得到更短的后缀。
///
/// `min_length == 0` 返回 `InvalidOverlapLength`。
pub fn overlap(a: &[u8], b: &[u8], min_length: usize) -> Result<usize> {
    if min_length == 0 {
        return Err(SeqasmError::InvalidOverlapLength);
    }
    Ok(overlap_unchecked(a, b, min_length))
}

/// 调用方已保证 `min_length >= 1`
pub(crate) fn overlap_unchecked(a: &[u8], b: &[u8], min_length: usize) -> usize {
    debug_assert!(min_length >= 1);
    if min_length > a.len() || min_length > b.len() {
        return 0;
    }
    let prefix = &b[..min_length];
    let mut start = 0usize;
    while let Some(pos) = find_from(a, prefix, start) {
        if b.starts_with(&a[pos..]) {
            return a.len() - pos;
        }
        start = pos + 1;
    }
    0
}

/// `needle` 在 `haystack[from..]` 中第一次出现的位置（相对整个 haystack）
fn find_from(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if from + needle.len() > haystack.len() {
        return None;
    }
    haystack[from..]
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|p| p + from)
}

/// 所有有序 read 对 (i, j)，i != j，重叠长度 >= `min_length` 的朴素全对计算。
pub fn naive_overlap_map<R: AsRef<[u8]>>(reads: &[R], min_length: usize) -> Result<BTreeMap<(usize, usize), usize>> {
    if min_length == 0 {
        return Err(SeqasmError::InvalidOverlapLength);
    }
    let mut olaps = BTreeMap::new();
    for (i, a) in reads.iter().enumerate() {
        for (j, b) in reads.iter().enumerate() {
            if i == j {
                continue;
            }
            let olen = overlap_unchecked(a.as_ref(), b.as_ref(), min_length);
            if olen > 0 {
                olaps.insert((i, j), olen);
            }
        }
    }
    Ok(olaps)
}
