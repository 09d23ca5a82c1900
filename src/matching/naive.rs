use super::MatchCounts;

/// 朴素精确匹配：返回 `p` 在 `t` 中所有出现位置
pub fn naive(t: &[u8], p: &[u8]) -> Vec<usize> {
    naive_with_counts(t, p).occurrences
}

/// 朴素精确匹配，并统计对齐与比较次数（用于与 Boyer-Moore 对照）
pub fn naive_with_counts(t: &[u8], p: &[u8]) -> MatchCounts {
    let mut counts = MatchCounts::default();
    if p.len() > t.len() {
        return counts;
    }
    for i in 0..=t.len() - p.len() {
        counts.alignments += 1;
        let mut matched = true;
        for j in 0..p.len() {
            counts.comparisons += 1;
            if t[i + j] != p[j] {
                matched = false;
                break;
            }
        }
        if matched {
            counts.occurrences.push(i);
        }
    }
    counts
}

/// 允许最多 `max_mismatches` 个错配（Hamming 距离）的朴素匹配
pub fn naive_mismatch(t: &[u8], p: &[u8], max_mismatches: usize) -> Vec<usize> {
    let mut matches = Vec::new();
    if p.len() > t.len() {
        return matches;
    }
    for i in 0..=t.len() - p.len() {
        let mut mismatches = 0usize;
        let ok = p.iter().zip(&t[i..]).all(|(a, b)| {
            if a != b {
                mismatches += 1;
            }
            mismatches <= max_mismatches
        });
        if ok {
            matches.push(i);
        }
    }
    matches
}

pub fn longest_common_prefix<'a>(s1: &'a [u8], s2: &[u8]) -> &'a [u8] {
    let n = s1.iter().zip(s2).take_while(|(a, b)| a == b).count();
    &s1[..n]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn naive_finds_all_occurrences() {
        assert_eq!(naive(b"AACAAGCAAGC", b"AAG"), vec![3, 7]);
        assert_eq!(naive(b"AAAA", b"AA"), vec![0, 1, 2]);
        assert!(naive(b"AC", b"ACG").is_empty());
    }

    #[test]
    fn naive_counts() {
        let c = naive_with_counts(b"ACGT", b"GT");
        assert_eq!(c.occurrences, vec![2]);
        assert_eq!(c.alignments, 3);
        // A≠G, C≠G, G=G T=T
        assert_eq!(c.comparisons, 4);
    }

    #[test]
    fn mismatch_tolerant_matching() {
        let t = b"ACTTTACGTA";
        assert_eq!(naive_mismatch(t, b"ACG", 0), vec![5]);
        assert_eq!(naive_mismatch(t, b"ACG", 1), vec![0, 5]);
        assert!(naive_mismatch(b"AC", b"ACG", 3).is_empty());
    }

    #[test]
    fn common_prefix() {
        assert_eq!(longest_common_prefix(b"ACCATGT", b"ACCAGAC"), b"ACCA");
        assert_eq!(longest_common_prefix(b"", b"ACG"), b"");
    }
}
