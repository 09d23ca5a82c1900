pub mod dna;
pub mod qc;
