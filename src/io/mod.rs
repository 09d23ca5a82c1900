pub mod fasta;
pub mod fastq;

use anyhow::{Context, Result};
use std::io::BufRead;
use std::path::Path;

/// Loads reads from either a FASTQ or a FASTA file, chosen by the first
/// non-blank byte ('@' means FASTQ).
pub fn read_reads<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<u8>>> {
    let path = path.as_ref();
    let fh = std::fs::File::open(path)
        .with_context(|| format!("cannot open reads file '{}'", path.display()))?;
    let mut reader = std::io::BufReader::new(fh);
    let first = reader
        .fill_buf()?
        .iter()
        .copied()
        .find(|b| !b.is_ascii_whitespace());
    if first == Some(b'@') {
        Ok(fastq::read_fastq(path)?.0)
    } else {
        fasta::read_sequences(path)
    }
}
