//! 算法层错误类型。
//!
//! 文件读写与 CLI 仍使用 `anyhow`；这里只覆盖纯算法入口的参数错误。

use thiserror::Error;

/// 算法层统一结果类型
pub type Result<T> = std::result::Result<T, SeqasmError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SeqasmError {
    /// Boyer-Moore 预处理不接受空模式串
    #[error("pattern must not be empty")]
    EmptyPattern,

    /// 最小重叠长度必须 >= 1
    #[error("minimum overlap length must be at least 1")]
    InvalidOverlapLength,

    /// k-mer 长度必须 >= 1
    #[error("invalid k-mer length: {0}")]
    InvalidKmerLength(usize),

    #[error("alphabet must contain at least one symbol")]
    EmptyAlphabet,

    #[error("duplicate symbol '{0}' in alphabet")]
    DuplicateSymbol(char),

    /// 字母表最多 255 个符号
    #[error("alphabet has {0} symbols, at most 255 are supported")]
    AlphabetTooLarge(usize),

    /// 模式串或文本中出现字母表之外的字符
    #[error("symbol '{symbol}' is not in alphabet \"{alphabet}\"")]
    SymbolNotInAlphabet { symbol: char, alphabet: String },

    /// k-mer 索引与传入的 reads 不是同一批
    #[error("k-mer index was built from {indexed} reads, got {given}")]
    IndexReadCountMismatch { indexed: usize, given: usize },

    /// 质量字符低于 Phred+33 偏移
    #[error("invalid Phred+33 quality character '{0}'")]
    InvalidQuality(char),

    /// 打分矩阵必须是 (sigma+1) x (sigma+1)
    #[error("score matrix must have {expected} rows of {expected} columns, got {rows} rows")]
    ScoreMatrixShape { expected: usize, rows: usize },
}
