//! 演示如何在 library 模式下使用 seqasm 进行匹配与组装。
//!
//! 运行方式：
//! ```bash
//! cargo run --example simple_assembly
//! ```

use seqasm::align;
use seqasm::assembly::{self, AssemblyOpt, OverlapGraph, ScsMethod};
use seqasm::matching::{self, BoyerMoore};

fn main() -> seqasm::Result<()> {
    // 1. 参考序列与模式
    let genome = b"ACGTACGTAGCTGATCGTAGCTAGCTAGCTGATCGTAGCTAGCTAGCTGAT";
    let pattern = b"GCTGATCGTAG";
    println!("参考序列: {}", String::from_utf8_lossy(genome));
    println!("参考长度: {} bp", genome.len());

    // 2. 朴素匹配与 Boyer-Moore 对比
    let naive = matching::naive_with_counts(genome, pattern);
    let table = BoyerMoore::dna(pattern)?;
    let bm = matching::boyer_moore_with_counts(pattern, &table, genome)?;
    println!("\n匹配 '{}':", String::from_utf8_lossy(pattern));
    println!("  naive: 位置={:?}, 对齐={}, 比较={}", naive.occurrences, naive.alignments, naive.comparisons);
    println!("  bm:    位置={:?}, 对齐={}, 比较={}", bm.occurrences, bm.alignments, bm.comparisons);

    // 3. 重叠图
    let reads = ["CCT", "CTT", "TGC", "TGG", "GAT", "ATT"];
    let graph = OverlapGraph::build(&reads, 2)?;
    println!("\n重叠图 (k=2): 边数={}, 有出边的 read={}", graph.num_edges(), graph.reads_with_edges);
    for (&(src, dst), &olen) in &graph.edges {
        println!("  {} -> {} (overlap={})", reads[src], reads[dst], olen);
    }

    // 4. 最短公共超串
    let exact = assembly::scs_with_count(&reads);
    println!("\n穷举 SCS: {} (长度={}, 等长解={})",
        String::from_utf8_lossy(&exact.superstring), exact.superstring.len(), exact.shortest_count);

    let opt = AssemblyOpt { min_overlap: 1, scs_method: ScsMethod::GreedyIndexed, ..AssemblyOpt::default() };
    if let Some(greedy) = assembly::assemble(&reads, &opt)? {
        println!("贪心 SCS: {} (长度={})", String::from_utf8_lossy(&greedy), greedy.len());
    }

    // 5. 编辑距离与全局比对
    let x = b"TACCAGATTCGAATTCG";
    let y = b"TACCAGATCGAATTCGA";
    let aln = align::global_align(x, y, &align::ScoreMatrix::dna_default())?;
    println!("\n全局比对:");
    println!("  X:      {}", String::from_utf8_lossy(x));
    println!("  Y:      {}", String::from_utf8_lossy(y));
    println!("  编辑距离: {}", align::edit_distance(x, y));
    println!("  Score:  {}", aln.score);
    println!("  CIGAR:  {}", aln.cigar);
    println!("  NM:     {}", aln.nm);

    println!("\n完成！");
    Ok(())
}
