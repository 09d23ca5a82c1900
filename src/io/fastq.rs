use anyhow::{anyhow, bail, Context, Result};
use std::io::BufRead;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct FastqRecord {
    pub id: String,
    pub seq: Vec<u8>,
    pub qual: Vec<u8>,
}

/// Four-line FASTQ reader (name, sequence, '+', quality). Reading stops at
/// end of input or at the first record whose sequence line is empty.
pub struct FastqReader<R: BufRead> {
    reader: R,
    buf: String,
    done: bool,
}

impl<R: BufRead> FastqReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, buf: String::new(), done: false }
    }

    fn line(&mut self) -> Result<Option<&str>> {
        self.buf.clear();
        if self.reader.read_line(&mut self.buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(self.buf.trim_end()))
    }

    pub fn next_record(&mut self) -> Result<Option<FastqRecord>> {
        if self.done { return Ok(None); }

        let id = match self.line()? {
            Some(h) if h.starts_with('@') => h[1..].split_whitespace().next().unwrap_or("").to_string(),
            Some("") | None => { self.done = true; return Ok(None); }
            Some(_) => bail!("FASTQ header not starting with '@'"),
        };

        let seq = self.line()?.unwrap_or("").as_bytes().to_vec();
        if seq.is_empty() {
            self.done = true;
            return Ok(None);
        }

        match self.line()? {
            Some(l) if l.starts_with('+') => {}
            _ => bail!("missing '+' line for read '{}'", id),
        }

        let qual = self
            .line()?
            .ok_or_else(|| anyhow!("missing quality line for read '{}'", id))?
            .as_bytes()
            .to_vec();
        if qual.len() != seq.len() {
            bail!("seq/qual length mismatch for read '{}'", id);
        }

        Ok(Some(FastqRecord { id, seq, qual }))
    }
}

impl<R: BufRead> Iterator for FastqReader<R> {
    type Item = Result<FastqRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}

/// Reads a FASTQ file into parallel lists of sequences and quality strings.
pub fn read_fastq<P: AsRef<Path>>(path: P) -> Result<(Vec<Vec<u8>>, Vec<Vec<u8>>)> {
    let path = path.as_ref();
    let fh = std::fs::File::open(path)
        .with_context(|| format!("cannot open FASTQ '{}'", path.display()))?;
    let mut sequences = Vec::new();
    let mut qualities = Vec::new();
    for rec in FastqReader::new(std::io::BufReader::new(fh)) {
        let rec = rec?;
        sequences.push(rec.seq);
        qualities.push(rec.qual);
    }
    Ok((sequences, qualities))
}
