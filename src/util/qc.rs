use crate::error::{Result, SeqasmError};

/// Phred+33 编码偏移
pub const PHRED_OFFSET: u8 = 33;

/// 直方图最少的分箱数（Illumina 质量值一般 < 50）
pub const MIN_HIST_BINS: usize = 50;

#[inline]
pub fn phred33_to_q(qual: u8) -> Result<u8> {
    qual.checked_sub(PHRED_OFFSET)
        .ok_or(SeqasmError::InvalidQuality(qual as char))
}

/// 统计所有质量串中每个质量值出现的次数。
/// 返回的 Vec 下标即质量值，长度至少为 `MIN_HIST_BINS`。
pub fn quality_histogram<Q: AsRef<[u8]>>(qualities: &[Q]) -> Result<Vec<usize>> {
    let mut hist = vec![0usize; MIN_HIST_BINS];
    for qual in qualities {
        for &c in qual.as_ref() {
            let q = phred33_to_q(c)? as usize;
            if q >= hist.len() {
                hist.resize(q + 1, 0);
            }
            hist[q] += 1;
        }
    }
    Ok(hist)
}

/// 每个位置上 G/C 所占比例，长度等于最长 read。
pub fn gc_by_pos<R: AsRef<[u8]>>(reads: &[R]) -> Vec<f64> {
    let width = reads.iter().map(|r| r.as_ref().len()).max().unwrap_or(0);
    let mut gc = vec![0usize; width];
    let mut totals = vec![0usize; width];
    for read in reads {
        for (i, &b) in read.as_ref().iter().enumerate() {
            if b == b'C' || b == b'G' {
                gc[i] += 1;
            }
            totals[i] += 1;
        }
    }
    gc.iter()
        .zip(&totals)
        .map(|(&g, &t)| if t > 0 { g as f64 / t as f64 } else { 0.0 })
        .collect()
}
