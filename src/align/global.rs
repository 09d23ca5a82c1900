use std::fmt::Write as _;

use crate::error::{Result, SeqasmError};
use crate::util::dna::Alphabet;

/// 罚分矩阵：(sigma+1) x (sigma+1)，最后一行/列为空位。值越小越好。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreMatrix {
    alphabet: Alphabet,
    /// 行优先展平
    penalties: Vec<i32>,
}

impl ScoreMatrix {
    pub fn new(alphabet: Alphabet, rows: &[Vec<i32>]) -> Result<Self> {
        let dim = alphabet.len() + 1;
        if rows.len() != dim || rows.iter().any(|r| r.len() != dim) {
            return Err(SeqasmError::ScoreMatrixShape { expected: dim, rows: rows.len() });
        }
        Ok(Self { alphabet, penalties: rows.concat() })
    }

    /// 转换 2、颠换 4、空位 8
    pub fn dna_default() -> Self {
        let alphabet = Alphabet::dna();
        // A C G T -
        let penalties = vec![
            0, 4, 2, 4, 8, //
            4, 0, 4, 2, 8, //
            2, 4, 0, 4, 8, //
            4, 2, 4, 0, 8, //
            8, 8, 8, 8, 8,
        ];
        Self { alphabet, penalties }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    #[inline]
    fn at(&self, r: usize, c: usize) -> i32 {
        self.penalties[r * (self.alphabet.len() + 1) + c]
    }

    #[inline]
    fn gap_rank(&self) -> usize {
        self.alphabet.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalAlignment {
    pub score: i32,
    /// M：对齐（含错配），I：仅消耗 x，D：仅消耗 y
    pub cigar: String,
    /// 错配 + 空位数
    pub nm: u32,
}

struct Dp {
    d: Vec<i32>,
    cols: usize,
    xr: Vec<usize>,
    yr: Vec<usize>,
}

fn fill(x: &[u8], y: &[u8], sm: &ScoreMatrix) -> Result<Dp> {
    let xr: Vec<usize> = x.iter().map(|&b| sm.alphabet.rank_checked(b)).collect::<Result<_>>()?;
    let yr: Vec<usize> = y.iter().map(|&b| sm.alphabet.rank_checked(b)).collect::<Result<_>>()?;
    let gap = sm.gap_rank();
    let rows = x.len() + 1;
    let cols = y.len() + 1;
    let mut d = vec![0i32; rows * cols];

    for i in 1..rows {
        d[i * cols] = d[(i - 1) * cols] + sm.at(xr[i - 1], gap);
    }
    for j in 1..cols {
        d[j] = d[j - 1] + sm.at(gap, yr[j - 1]);
    }
    for i in 1..rows {
        for j in 1..cols {
            let hdist = d[i * cols + j - 1] + sm.at(gap, yr[j - 1]);
            let vdist = d[(i - 1) * cols + j] + sm.at(xr[i - 1], gap);
            let ddist = d[(i - 1) * cols + j - 1] + sm.at(xr[i - 1], yr[j - 1]);
            d[i * cols + j] = hdist.min(vdist).min(ddist);
        }
    }
    Ok(Dp { d, cols, xr, yr })
}

/// 全局比对的最小罚分
pub fn global_alignment_score(x: &[u8], y: &[u8], sm: &ScoreMatrix) -> Result<i32> {
    let dp = fill(x, y, sm)?;
    Ok(dp.d[x.len() * dp.cols + y.len()])
}

/// 全局比对并回溯出 CIGAR。并列时依次偏好对角、x 方向、y 方向。
pub fn global_align(x: &[u8], y: &[u8], sm: &ScoreMatrix) -> Result<GlobalAlignment> {
    let Dp { d, cols, xr, yr } = fill(x, y, sm)?;
    let gap = sm.gap_rank();

    let mut ops: Vec<char> = Vec::with_capacity(x.len() + y.len());
    let mut nm = 0u32;
    let (mut i, mut j) = (x.len(), y.len());
    while i > 0 || j > 0 {
        let here = d[i * cols + j];
        if i > 0 && j > 0 && here == d[(i - 1) * cols + j - 1] + sm.at(xr[i - 1], yr[j - 1]) {
            if x[i - 1] != y[j - 1] {
                nm += 1;
            }
            ops.push('M');
            i -= 1;
            j -= 1;
        } else if i > 0 && here == d[(i - 1) * cols + j] + sm.at(xr[i - 1], gap) {
            ops.push('I');
            nm += 1;
            i -= 1;
        } else {
            ops.push('D');
            nm += 1;
            j -= 1;
        }
    }
    ops.reverse();

    Ok(GlobalAlignment { score: d[x.len() * cols + y.len()], cigar: ops_to_cigar(&ops), nm })
}

pub fn ops_to_cigar(ops: &[char]) -> String {
    let mut cigar = String::new();
    let Some((&first, rest)) = ops.split_first() else {
        return cigar;
    };
    let mut cur = first;
    let mut len = 1usize;
    for &op in rest {
        if op == cur {
            len += 1;
        } else {
            let _ = write!(&mut cigar, "{}{}", len, cur);
            cur = op;
            len = 1;
        }
    }
    let _ = write!(&mut cigar, "{}{}", len, cur);
    cigar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_example() {
        let sm = ScoreMatrix::dna_default();
        let x = b"ATCTACACTCGATGC";
        let y = b"TGCTACACCGATGC";
        assert_eq!(global_alignment_score(x, y, &sm).unwrap(), 16);
        let aln = global_align(x, y, &sm).unwrap();
        assert_eq!(aln.score, 16);
        assert_eq!(aln.cigar, "8M1I6M");
        assert_eq!(aln.nm, 3);
    }

    #[test]
    fn single_gap_and_transition() {
        let sm = ScoreMatrix::dna_default();
        let aln = global_align(b"GCGTATGC", b"GCTATGC", &sm).unwrap();
        assert_eq!((aln.score, aln.cigar.as_str(), aln.nm), (8, "2M1I5M", 1));
        let aln = global_align(b"ACGT", b"ACGGT", &sm).unwrap();
        assert_eq!(aln.cigar, "2M1D2M");
        // C->G 为颠换
        assert_eq!(global_alignment_score(b"AGGT", b"ACGT", &sm).unwrap(), 4);
    }

    #[test]
    fn empty_sides_are_all_gaps() {
        let sm = ScoreMatrix::dna_default();
        assert_eq!(global_align(b"", b"ACG", &sm).unwrap().cigar, "3D");
        assert_eq!(global_align(b"ACG", b"", &sm).unwrap().score, 24);
        assert_eq!(global_align(b"", b"", &sm).unwrap().cigar, "");
    }

    #[test]
    fn custom_matrix_and_errors() {
        let alphabet = Alphabet::new(b"CATG").unwrap();
        let rows = vec![
            vec![0, 4, 2, 4, 8],
            vec![4, 0, 4, 2, 8],
            vec![2, 4, 0, 4, 8],
            vec![4, 2, 4, 0, 8],
            vec![8, 8, 8, 8, 8],
        ];
        let sm = ScoreMatrix::new(alphabet.clone(), &rows).unwrap();
        let x = b"ATCTACACTCGATGC";
        let y = b"TGCTACACCGATGC";
        assert_eq!(
            global_alignment_score(x, y, &sm).unwrap(),
            global_alignment_score(x, y, &ScoreMatrix::dna_default()).unwrap()
        );

        assert!(matches!(
            ScoreMatrix::new(alphabet, &rows[..4]),
            Err(SeqasmError::ScoreMatrixShape { expected: 5, rows: 4 })
        ));
        assert!(global_alignment_score(b"ACN", b"ACG", &sm).is_err());
    }

    #[test]
    fn cigar_run_length() {
        assert_eq!(ops_to_cigar(&['M', 'M', 'I', 'M']), "2M1I1M");
        assert_eq!(ops_to_cigar(&['D', 'D', 'D']), "3D");
        assert_eq!(ops_to_cigar(&[]), "");
    }
}
