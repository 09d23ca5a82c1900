use log::debug;

use super::preproc::BoyerMoore;
use super::MatchCounts;
use crate::error::Result;

/// Boyer-Moore 匹配，同时统计对齐次数与字符比较次数。
///
/// `pattern` 必须是构建 `table` 时使用的模式串。每个对齐位置自右向左比较，
/// 失配时位移取 `max(1, 坏字符, 好后缀)`，完全匹配时取 `max(1, match_skip)`，
/// 因此每轮至少前进 1。参与坏字符查表的文本字符若不在字母表中则返回错误。
pub fn boyer_moore_with_counts(pattern: &[u8], table: &BoyerMoore, text: &[u8]) -> Result<MatchCounts> {
    debug_assert_eq!(pattern, table.pattern());
    let m = pattern.len();
    let n = text.len();
    let mut counts = MatchCounts::default();

    let mut i = 0usize;
    while i + m <= n {
        let mut shift = 1usize;
        let mut mismatched = false;
        counts.alignments += 1;
        for j in (0..m).rev() {
            counts.comparisons += 1;
            if pattern[j] != text[i + j] {
                let skip_bc = table.bad_character_rule(j, text[i + j])?;
                let skip_gs = table.good_suffix_rule(j);
                shift = shift.max(skip_bc).max(skip_gs);
                mismatched = true;
                break;
            }
        }
        if !mismatched {
            counts.occurrences.push(i);
            shift = shift.max(table.match_skip());
        }
        i += shift;
    }

    debug!(
        "boyer-moore: pattern_len={} text_len={} occurrences={} alignments={} comparisons={}",
        m,
        n,
        counts.occurrences.len(),
        counts.alignments,
        counts.comparisons
    );
    Ok(counts)
}

/// 只返回匹配起点（升序）
pub fn boyer_moore(pattern: &[u8], table: &BoyerMoore, text: &[u8]) -> Result<Vec<usize>> {
    boyer_moore_with_counts(pattern, table, text).map(|c| c.occurrences)
}
