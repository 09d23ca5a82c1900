use crate::error::{Result, SeqasmError};

/// 标准 DNA 字母表
pub const DNA: &[u8] = b"ACGT";

const NO_RANK: u8 = u8::MAX;
/// 序号 255 留作“不在字母表中”
const MAX_SYMBOLS: usize = NO_RANK as usize;

/// 有限字母表：符号 -> 序号的 O(1) 查表。
///
/// 序号按构造时给出的顺序分配，最多 255 个符号。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<u8>,
    ranks: [u8; 256],
}

impl Alphabet {
    pub fn new(symbols: &[u8]) -> Result<Self> {
        if symbols.is_empty() {
            return Err(SeqasmError::EmptyAlphabet);
        }
        if symbols.len() > MAX_SYMBOLS {
            return Err(SeqasmError::AlphabetTooLarge(symbols.len()));
        }
        let mut ranks = [NO_RANK; 256];
        for (i, &s) in symbols.iter().enumerate() {
            if ranks[s as usize] != NO_RANK {
                return Err(SeqasmError::DuplicateSymbol(s as char));
            }
            ranks[s as usize] = i as u8;
        }
        Ok(Self { symbols: symbols.to_vec(), ranks })
    }

    pub fn dna() -> Self {
        let mut ranks = [NO_RANK; 256];
        for (i, &s) in DNA.iter().enumerate() {
            ranks[s as usize] = i as u8;
        }
        Self { symbols: DNA.to_vec(), ranks }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    #[inline]
    pub fn rank(&self, symbol: u8) -> Option<usize> {
        match self.ranks[symbol as usize] {
            NO_RANK => None,
            r => Some(r as usize),
        }
    }

    /// 与 `rank` 相同，但越界字符返回 `SymbolNotInAlphabet`
    pub fn rank_checked(&self, symbol: u8) -> Result<usize> {
        self.rank(symbol).ok_or_else(|| self.violation(symbol))
    }

    /// 校验整条序列都在字母表内
    pub fn validate(&self, seq: &[u8]) -> Result<()> {
        match seq.iter().find(|&&b| self.rank(b).is_none()) {
            Some(&b) => Err(self.violation(b)),
            None => Ok(()),
        }
    }

    fn violation(&self, symbol: u8) -> SeqasmError {
        SeqasmError::SymbolNotInAlphabet {
            symbol: symbol as char,
            alphabet: String::from_utf8_lossy(&self.symbols).into_owned(),
        }
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::dna()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dna_ranks_follow_symbol_order() {
        let a = Alphabet::dna();
        assert_eq!(a.len(), 4);
        assert_eq!(a.rank(b'A'), Some(0));
        assert_eq!(a.rank(b'T'), Some(3));
        assert_eq!(a.rank(b'N'), None);
        assert_eq!(a.rank(b'a'), None);
    }

    #[test]
    fn custom_alphabet_keeps_given_order() {
        let a = Alphabet::new(b"CATG").unwrap();
        assert_eq!(a.rank(b'C'), Some(0));
        assert_eq!(a.rank(b'G'), Some(3));
    }

    #[test]
    fn rejects_empty_and_duplicate_alphabets() {
        assert_eq!(Alphabet::new(b""), Err(SeqasmError::EmptyAlphabet));
        assert_eq!(Alphabet::new(b"ACGA"), Err(SeqasmError::DuplicateSymbol('A')));
    }

    #[test]
    fn rejects_alphabet_over_255_symbols() {
        let all: Vec<u8> = (0..=255u8).collect();
        assert_eq!(Alphabet::new(&all), Err(SeqasmError::AlphabetTooLarge(256)));
        let a = Alphabet::new(&all[..255]).unwrap();
        assert_eq!(a.len(), 255);
        assert_eq!(a.rank(254), Some(254));
        assert_eq!(a.rank(255), None);
    }

    #[test]
    fn validate_reports_first_violation() {
        let a = Alphabet::dna();
        assert!(a.validate(b"ACGTTGCA").is_ok());
        match a.validate(b"ACNGX") {
            Err(SeqasmError::SymbolNotInAlphabet { symbol, alphabet }) => {
                assert_eq!(symbol, 'N');
                assert_eq!(alphabet, "ACGT");
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
