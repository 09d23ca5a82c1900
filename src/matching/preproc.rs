//! Boyer-Moore 预处理：坏字符表与好后缀表。
//!
//! 好后缀规则沿用 Gusfield 的记号：
//! - `N[j]`：以 j 结尾、同时是模式串后缀的最长子串长度（反转串的 Z 数组）
//! - `L'[i]`：后缀 `P[i..]` 在别处出现、且前一个字符不同的最右结束位置 + 1
//! - `L[i]`：`max(L'[2..=i])`，好后缀规则实际使用的表
//! - `l'[i]`：`P[i..]` 的后缀中同时是 P 前缀的最长长度

use crate::error::{Result, SeqasmError};
use crate::util::dna::Alphabet;

/// Z 算法（Gusfield 定理 1.4.1）：`z[k]` 为 `s[k..]` 与 `s` 的最长公共前缀长度。
pub fn z_array(s: &[u8]) -> Vec<usize> {
    let n = s.len();
    if n == 0 {
        return Vec::new();
    }
    let mut z = vec![0usize; n];
    z[0] = n;
    if n == 1 {
        return z;
    }

    // s[1..] 与前缀的初始比较
    for i in 1..n {
        if s[i] == s[i - 1] {
            z[1] += 1;
        } else {
            break;
        }
    }

    // [l, r] 为当前最右的 Z-box
    let (mut l, mut r) = (0usize, 0usize);
    if z[1] > 0 {
        l = 1;
        r = z[1];
    }

    for k in 2..n {
        if k > r {
            for i in k..n {
                if s[i] == s[i - k] {
                    z[k] += 1;
                } else {
                    break;
                }
            }
            l = k;
            r = k + z[k] - 1;
        } else {
            let nbeta = r - k + 1;
            let zkp = z[k - l];
            if nbeta > zkp {
                z[k] = zkp;
            } else {
                let mut nmatch = 0usize;
                for i in (r + 1)..n {
                    if s[i] == s[i - k] {
                        nmatch += 1;
                    } else {
                        break;
                    }
                }
                l = k;
                r += nmatch;
                z[k] = r - k + 1;
            }
        }
    }
    z
}

/// `N` 数组：反转串的 Z 数组再反转。
pub fn n_array(s: &[u8]) -> Vec<usize> {
    let rev: Vec<u8> = s.iter().rev().copied().collect();
    let mut n = z_array(&rev);
    n.reverse();
    n
}

pub fn big_l_prime_array(p: &[u8], n: &[usize]) -> Vec<usize> {
    let m = p.len();
    let mut lp = vec![0usize; m];
    for j in 0..m.saturating_sub(1) {
        let i = m - n[j];
        if i < m {
            lp[i] = j + 1;
        }
    }
    lp
}

pub fn big_l_array(p: &[u8], lp: &[usize]) -> Vec<usize> {
    let m = p.len();
    let mut l = vec![0usize; m];
    if m < 2 {
        return l;
    }
    l[1] = lp[1];
    for i in 2..m {
        l[i] = l[i - 1].max(lp[i]);
    }
    l
}

pub fn small_l_prime_array(n: &[usize]) -> Vec<usize> {
    let m = n.len();
    let mut small_lp = vec![0usize; m];
    for i in 0..m {
        // 长度 i+1 的前缀同时是后缀
        if n[i] == i + 1 {
            small_lp[m - i - 1] = i + 1;
        }
    }
    // 向左抹平
    for i in (0..m.saturating_sub(1)).rev() {
        if small_lp[i] == 0 {
            small_lp[i] = small_lp[i + 1];
        }
    }
    small_lp
}

/// 返回 `(L', L, l')`
pub fn good_suffix_table(p: &[u8]) -> (Vec<usize>, Vec<usize>, Vec<usize>) {
    let n = n_array(p);
    let lp = big_l_prime_array(p, &n);
    let big_l = big_l_array(p, &lp);
    let small_lp = small_l_prime_array(&n);
    (lp, big_l, small_lp)
}

/// 一个模式串的 Boyer-Moore 预处理结果，构建后只读。
#[derive(Debug, Clone)]
pub struct BoyerMoore {
    pattern: Vec<u8>,
    alphabet: Alphabet,
    /// 坏字符表（行优先展平）：`bad_char[i * sigma + c]` 为 `P[..i]` 中 c 最右出现位置 + 1，0 表示未出现
    bad_char: Vec<u32>,
    big_l: Vec<usize>,
    small_l_prime: Vec<usize>,
}

impl BoyerMoore {
    pub fn new(pattern: &[u8], alphabet: Alphabet) -> Result<Self> {
        if pattern.is_empty() {
            return Err(SeqasmError::EmptyPattern);
        }
        let sigma = alphabet.len();
        let mut bad_char = Vec::with_capacity(pattern.len() * sigma);
        let mut next = vec![0u32; sigma];
        for (i, &c) in pattern.iter().enumerate() {
            let ci = alphabet.rank_checked(c)?;
            bad_char.extend_from_slice(&next);
            next[ci] = i as u32 + 1;
        }
        let (_, big_l, small_l_prime) = good_suffix_table(pattern);

        Ok(Self { pattern: pattern.to_vec(), alphabet, bad_char, big_l, small_l_prime })
    }

    /// DNA 字母表的便捷构造
    pub fn dna(pattern: &[u8]) -> Result<Self> {
        Self::new(pattern, Alphabet::dna())
    }

    pub fn pattern(&self) -> &[u8] {
        &self.pattern
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// 在位置 i 与文本字符 c 失配时的坏字符位移
    #[inline]
    pub fn bad_character_rule(&self, i: usize, c: u8) -> Result<usize> {
        let ci = self.alphabet.rank_checked(c)?;
        let occ = self.bad_char[i * self.alphabet.len() + ci] as usize;
        // occ 为出现位置 + 1，未出现时位移为 i + 1
        Ok(i + 1 - occ)
    }

    /// 在位置 i 失配时的好后缀位移（失配位于最后一位时为 0）
    #[inline]
    pub fn good_suffix_rule(&self, i: usize) -> usize {
        let m = self.big_l.len();
        debug_assert!(i < m);
        if i == m - 1 {
            return 0;
        }
        let i = i + 1;
        if self.big_l[i] > 0 {
            m - self.big_l[i]
        } else {
            m - self.small_l_prime[i]
        }
    }

    /// 完全匹配后的位移
    #[inline]
    pub fn match_skip(&self) -> usize {
        let m = self.small_l_prime.len();
        if m < 2 {
            return 1;
        }
        m - self.small_l_prime[1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn z_array_examples() {
        assert_eq!(z_array(b"GGTAGGT"), vec![7, 1, 0, 0, 3, 1, 0]);
        assert_eq!(z_array(b"AAAA"), vec![4, 3, 2, 1]);
        assert_eq!(z_array(b"A"), vec![1]);
        assert!(z_array(b"").is_empty());
    }

    #[test]
    fn z_array_matches_brute_force() {
        let s = b"ACACGACACGTACACGACACA";
        let z = z_array(s);
        for k in 1..s.len() {
            let lcp = s[k..].iter().zip(s.iter()).take_while(|(a, b)| a == b).count();
            assert_eq!(z[k], lcp, "k={}", k);
        }
    }

    #[test]
    fn good_suffix_tables_for_known_patterns() {
        let (lp, big_l, small_lp) = good_suffix_table(b"GGTAGGT");
        assert_eq!(lp, vec![0, 0, 0, 0, 3, 0, 0]);
        assert_eq!(big_l, vec![0, 0, 0, 0, 3, 3, 3]);
        assert_eq!(small_lp, vec![7, 3, 3, 3, 3, 0, 0]);

        let (lp, big_l, small_lp) = good_suffix_table(b"TCAATCA");
        assert_eq!(n_array(b"TCAATCA"), vec![0, 0, 3, 1, 0, 0, 7]);
        assert_eq!(lp, vec![0, 0, 0, 0, 3, 0, 4]);
        assert_eq!(big_l, vec![0, 0, 0, 0, 3, 3, 4]);
        assert_eq!(small_lp, vec![7, 3, 3, 3, 3, 0, 0]);
    }

    #[test]
    fn good_suffix_rule_and_match_skip() {
        let bm = BoyerMoore::dna(b"TCAATCA").unwrap();
        let gs: Vec<usize> = (0..7).map(|i| bm.good_suffix_rule(i)).collect();
        assert_eq!(gs, vec![4, 4, 4, 4, 4, 3, 0]);
        assert_eq!(bm.match_skip(), 4);

        let bm = BoyerMoore::dna(b"ACAC").unwrap();
        assert_eq!(bm.match_skip(), 2);
        let bm = BoyerMoore::dna(b"AAAA").unwrap();
        assert_eq!(bm.match_skip(), 1);
        assert_eq!(bm.good_suffix_rule(0), 1);
    }

    #[test]
    fn bad_character_rule_shifts() {
        let bm = BoyerMoore::dna(b"TCAA").unwrap();
        // 行：位置 0..4；列：A C G T
        let expected = [[1, 1, 1, 1], [2, 2, 2, 1], [3, 1, 3, 2], [1, 2, 4, 3]];
        for (i, row) in expected.iter().enumerate() {
            for (ci, &c) in b"ACGT".iter().enumerate() {
                assert_eq!(bm.bad_character_rule(i, c).unwrap(), row[ci], "i={} c={}", i, c as char);
            }
        }
    }

    #[test]
    fn single_symbol_pattern() {
        let bm = BoyerMoore::dna(b"G").unwrap();
        assert_eq!(bm.good_suffix_rule(0), 0);
        assert_eq!(bm.match_skip(), 1);
        assert_eq!(bm.bad_character_rule(0, b'A').unwrap(), 1);
    }

    #[test]
    fn rejects_empty_pattern_and_foreign_symbols() {
        assert_eq!(BoyerMoore::dna(b"").unwrap_err(), SeqasmError::EmptyPattern);
        assert!(matches!(
            BoyerMoore::dna(b"ACNT"),
            Err(SeqasmError::SymbolNotInAlphabet { symbol: 'N', .. })
        ));
        let bm = BoyerMoore::dna(b"ACGT").unwrap();
        assert!(bm.bad_character_rule(2, b'x').is_err());
    }
}
