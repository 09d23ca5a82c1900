use anyhow::{Context, Result};
use std::io::BufRead;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct FastaRecord {
    pub id: String,
    pub seq: Vec<u8>,
}

/// Streaming FASTA reader. Sequence lines are upper-cased and stripped of
/// whitespace; lines before the first header are ignored.
pub struct FastaReader<R: BufRead> {
    reader: R,
    line: String,
    pending_id: Option<String>,
    done: bool,
}

impl<R: BufRead> FastaReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, line: String::new(), pending_id: None, done: false }
    }

    fn read_line(&mut self) -> Result<bool> {
        self.line.clear();
        Ok(self.reader.read_line(&mut self.line)? > 0)
    }

    fn header_id(line: &str) -> String {
        line[1..].split_whitespace().next().unwrap_or("").to_string()
    }

    pub fn next_record(&mut self) -> Result<Option<FastaRecord>> {
        if self.done {
            return Ok(None);
        }

        let id = match self.pending_id.take() {
            Some(id) => id,
            None => loop {
                if !self.read_line()? {
                    self.done = true;
                    return Ok(None);
                }
                if self.line.starts_with('>') {
                    break Self::header_id(&self.line);
                }
            },
        };

        let mut seq = Vec::new();
        while self.read_line()? {
            if self.line.starts_with('>') {
                self.pending_id = Some(Self::header_id(&self.line));
                return Ok(Some(FastaRecord { id, seq }));
            }
            seq.extend(
                self.line
                    .bytes()
                    .filter(|b| !b.is_ascii_whitespace())
                    .map(|b| b.to_ascii_uppercase()),
            );
        }
        self.done = true;
        Ok(Some(FastaRecord { id, seq }))
    }
}

impl<R: BufRead> Iterator for FastaReader<R> {
    type Item = Result<FastaRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}

/// Reads every record of a FASTA file and concatenates the sequences into a
/// single genome string.
pub fn read_genome<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let fh = std::fs::File::open(path)
        .with_context(|| format!("cannot open FASTA '{}'", path.display()))?;
    let mut genome = Vec::new();
    for rec in FastaReader::new(std::io::BufReader::new(fh)) {
        genome.extend_from_slice(&rec?.seq);
    }
    Ok(genome)
}

/// Reads every record of a FASTA file as a separate read.
pub fn read_sequences<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<u8>>> {
    let path = path.as_ref();
    let fh = std::fs::File::open(path)
        .with_context(|| format!("cannot open FASTA '{}'", path.display()))?;
    FastaReader::new(std::io::BufReader::new(fh))
        .map(|rec| rec.map(|r| r.seq))
        .collect()
}
