use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;

use super::kmer::KmerIndex;

/// 索引构建元信息
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct IndexMeta {
    pub reads_file: Option<String>,
    pub build_args: Option<String>,
    pub build_timestamp: Option<String>,
}

/// 可落盘的 read 集合 + k-mer 索引，供 `graph --index` 复用。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReadIndex {
    pub meta: IndexMeta,
    pub reads: Vec<Vec<u8>>,
    pub kmers: KmerIndex,
}

impl ReadIndex {
    pub fn build(reads: Vec<Vec<u8>>, k: usize) -> crate::Result<Self> {
        let kmers = KmerIndex::build(&reads, k)?;
        Ok(Self { meta: IndexMeta::default(), reads, kmers })
    }

    #[inline]
    pub fn k(&self) -> usize {
        self.kmers.k
    }

    pub fn set_meta(&mut self, meta: IndexMeta) {
        self.meta = meta;
    }

    pub fn save_to_file(&self, path: &str) -> Result<()> {
        let f = std::fs::File::create(path).with_context(|| format!("cannot create index '{}'", path))?;
        let mut w = std::io::BufWriter::new(f);
        bincode::serialize_into(&mut w, self)?;
        w.flush()?;
        Ok(())
    }

    pub fn load_from_file(path: &str) -> Result<Self> {
        let f = std::fs::File::open(path).with_context(|| format!("cannot open index '{}'", path))?;
        let idx: Self = bincode::deserialize_from(std::io::BufReader::new(f))?;
        Ok(idx)
    }
}
