pub mod bm;
pub mod naive;
pub mod preproc;

pub use bm::{boyer_moore, boyer_moore_with_counts};
pub use naive::{longest_common_prefix, naive, naive_mismatch, naive_with_counts};
pub use preproc::BoyerMoore;

use crate::error::Result;
use crate::util::dna::{Alphabet, DNA};

/// 一次匹配的结果与性能计数
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchCounts {
    /// 匹配起点（升序）
    pub occurrences: Vec<usize>,
    /// 尝试过的对齐位置数
    pub alignments: usize,
    /// 字符比较总次数（包括导致失配的那一次）
    pub comparisons: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMethod {
    Naive,
    BoyerMoore,
}

#[derive(Debug, Clone)]
pub struct MatchOpt {
    pub method: MatchMethod,
    /// 字母表符号，按给定顺序编号
    pub alphabet: Vec<u8>,
    /// >0 时改用允许错配的朴素匹配，不再统计计数
    pub max_mismatches: usize,
}

impl Default for MatchOpt {
    fn default() -> Self {
        Self { method: MatchMethod::BoyerMoore, alphabet: DNA.to_vec(), max_mismatches: 0 }
    }
}

/// 按选项在 `text` 中查找 `pattern`
pub fn search(pattern: &[u8], text: &[u8], opt: &MatchOpt) -> Result<MatchCounts> {
    if opt.max_mismatches > 0 {
        let occurrences = naive_mismatch(text, pattern, opt.max_mismatches);
        return Ok(MatchCounts { occurrences, ..MatchCounts::default() });
    }
    match opt.method {
        MatchMethod::Naive => Ok(naive_with_counts(text, pattern)),
        MatchMethod::BoyerMoore => {
            let table = BoyerMoore::new(pattern, Alphabet::new(&opt.alphabet)?)?;
            boyer_moore_with_counts(pattern, &table, text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_dispatches_by_method() {
        let text = b"GCTAGCTCTCGCTAGCTCGA";
        let bm = search(b"GCTAGCTC", text, &MatchOpt::default()).unwrap();
        assert_eq!(bm.occurrences, vec![0, 10]);
        assert_eq!(bm.alignments, 3);

        let opt = MatchOpt { method: MatchMethod::Naive, ..MatchOpt::default() };
        let nv = search(b"GCTAGCTC", text, &opt).unwrap();
        assert_eq!(nv.occurrences, bm.occurrences);
        assert_eq!(nv.alignments, 13);
        assert!(nv.comparisons > bm.comparisons);
    }

    #[test]
    fn search_with_mismatches_uses_naive_scan() {
        let opt = MatchOpt { max_mismatches: 1, ..MatchOpt::default() };
        let res = search(b"ACG", b"ACTTTACGTA", &opt).unwrap();
        assert_eq!(res.occurrences, vec![0, 5]);
        assert_eq!(res.alignments, 0);
    }

    #[test]
    fn search_rejects_empty_pattern_for_boyer_moore() {
        assert!(search(b"", b"ACGT", &MatchOpt::default()).is_err());
    }
}
