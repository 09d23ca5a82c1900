pub mod kmer;
pub mod store;

pub use kmer::KmerIndex;
pub use store::{IndexMeta, ReadIndex};
