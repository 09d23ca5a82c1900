/// 编辑距离 DP 矩阵，`D[i][j]` 为 `x[..i]` 与 `y[..j]` 的编辑距离。
pub fn edit_distance_matrix(x: &[u8], y: &[u8]) -> Vec<Vec<usize>> {
    let mut d = vec![vec![0usize; y.len() + 1]; x.len() + 1];
    for (i, row) in d.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=y.len() {
        d[0][j] = j;
    }
    for i in 1..=x.len() {
        for j in 1..=y.len() {
            let hdist = d[i][j - 1] + 1;
            let vdist = d[i - 1][j] + 1;
            let ddist = d[i - 1][j - 1] + usize::from(x[i - 1] != y[j - 1]);
            d[i][j] = hdist.min(vdist).min(ddist);
        }
    }
    d
}

pub fn edit_distance(x: &[u8], y: &[u8]) -> usize {
    edit_distance_matrix(x, y)[x.len()][y.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_distance_examples() {
        assert_eq!(edit_distance(b"ATCTACACTCGATGC", b"TGCTACACCGATGC"), 3);
        assert_eq!(edit_distance(b"TACCAGATTCGAGGCC", b"TACCAGATCGAGGCC"), 1);
        assert_eq!(edit_distance(b"shake spea", b"Shakespear"), 3);
        assert_eq!(edit_distance(b"", b"ACG"), 3);
        assert_eq!(edit_distance(b"ACGT", b"ACGT"), 0);
    }

    #[test]
    fn matrix_borders() {
        let d = edit_distance_matrix(b"AC", b"ACG");
        assert_eq!(d.len(), 3);
        assert_eq!(d[0], vec![0, 1, 2, 3]);
        assert_eq!(d[2][0], 2);
        assert_eq!(d[2][3], 1);
    }
}
