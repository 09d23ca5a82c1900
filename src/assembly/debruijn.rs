use std::collections::BTreeSet;

use crate::error::{Result, SeqasmError};

/// 一条 De Bruijn 边：(左 (k-1)-mer, 右 (k-1)-mer)
pub type DbEdge = (Vec<u8>, Vec<u8>);

/// 对 `text` 的每个 k-mer 生成一条从左 (k-1)-mer 指向右 (k-1)-mer 的边。
/// 边按 k-mer 在文本中的位置排列（允许重复），节点去重排序。
pub fn de_bruijnize(text: &[u8], k: usize) -> Result<(Vec<DbEdge>, BTreeSet<Vec<u8>>)> {
    if k < 2 {
        return Err(SeqasmError::InvalidKmerLength(k));
    }
    let mut edges = Vec::new();
    let mut nodes = BTreeSet::new();
    if text.len() < k {
        return Ok((edges, nodes));
    }
    for kmer in text.windows(k) {
        let left = kmer[..k - 1].to_vec();
        let right = kmer[1..].to_vec();
        nodes.insert(left.clone());
        nodes.insert(right.clone());
        edges.push((left, right));
    }
    Ok((edges, nodes))
}
