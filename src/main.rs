use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;

use seqasm::align;
use seqasm::assembly::{self, AssemblyOpt, OverlapGraph, ScsMethod};
use seqasm::index::{IndexMeta, ReadIndex};
use seqasm::io;
use seqasm::matching::{self, MatchMethod, MatchOpt};
use seqasm::util::qc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Parser, Debug)]
#[command(name = "seqasm", author, version, about = "DNA string matching and read assembly", arg_required_else_help = true)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Worker threads for overlap graph construction
    #[arg(short = 't', long = "threads", default_value_t = 1, global = true)]
    threads: usize,
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum CliMatchMethod {
    Naive,
    Bm,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum CliScsMethod {
    Exact,
    Greedy,
    GreedyIndexed,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search a pattern in a FASTA genome
    Match {
        /// Genome FASTA file (all records concatenated)
        genome: String,
        /// Pattern to search for
        pattern: String,
        #[arg(short, long, value_enum, default_value_t = CliMatchMethod::Bm)]
        method: CliMatchMethod,
        #[arg(long, default_value = "ACGT")]
        alphabet: String,
        /// Allow up to N mismatches (naive scan)
        #[arg(long = "mismatches", default_value_t = 0)]
        max_mismatches: usize,
    },
    /// Build a k-mer index of a read set and save it
    Index {
        /// Reads file (FASTQ or FASTA)
        reads: String,
        #[arg(short, default_value_t = 3)]
        k: usize,
        /// Output prefix for the index file
        #[arg(short, long, default_value = "reads")]
        output: String,
    },
    /// Build the overlap graph of a read set
    Graph {
        /// Reads file (FASTQ or FASTA); ignored when --index is given
        reads: Option<String>,
        /// Saved read index (.kidx)
        #[arg(short = 'i', long = "index")]
        index: Option<String>,
        #[arg(short, default_value_t = 3)]
        k: usize,
        /// Print every edge as "src<TAB>dst<TAB>overlap"
        #[arg(long)]
        edges: bool,
    },
    /// Assemble a shortest common superstring
    Scs {
        /// Reads file (FASTQ or FASTA)
        reads: String,
        #[arg(short, long, value_enum, default_value_t = CliScsMethod::GreedyIndexed)]
        method: CliScsMethod,
        /// Minimum overlap for greedy merging
        #[arg(short, default_value_t = 3)]
        k: usize,
        /// Refuse exhaustive search above this many reads
        #[arg(long = "max-exact", default_value_t = assembly::EXACT_SCS_MAX_READS)]
        max_exact_reads: usize,
    },
    /// Edit distance and global alignment of two sequences
    Align {
        x: String,
        y: String,
    },
    /// Quality histogram and GC content by position of a FASTQ file
    Qc {
        reads: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    seqasm::logging::init(cli.verbose);
    if cli.threads > 1 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .map_err(|e| anyhow!("cannot configure thread pool: {}", e))?;
    }

    match cli.command {
        Commands::Match { genome, pattern, method, alphabet, max_mismatches } => {
            let opt = MatchOpt {
                method: match method {
                    CliMatchMethod::Naive => MatchMethod::Naive,
                    CliMatchMethod::Bm => MatchMethod::BoyerMoore,
                },
                alphabet: alphabet.into_bytes(),
                max_mismatches,
            };
            run_match(&genome, pattern.as_bytes(), &opt)
        }
        Commands::Index { reads, k, output } => run_index(&reads, k, &output),
        Commands::Graph { reads, index, k, edges } => {
            let opt = AssemblyOpt { min_overlap: k, threads: cli.threads, ..AssemblyOpt::default() };
            run_graph(reads.as_deref(), index.as_deref(), &opt, edges)
        }
        Commands::Scs { reads, method, k, max_exact_reads } => {
            let scs_method = match method {
                CliScsMethod::Exact => ScsMethod::Exact,
                CliScsMethod::Greedy => ScsMethod::Greedy,
                CliScsMethod::GreedyIndexed => ScsMethod::GreedyIndexed,
            };
            let opt = AssemblyOpt { min_overlap: k, threads: cli.threads, scs_method, max_exact_reads };
            run_scs(&reads, &opt)
        }
        Commands::Align { x, y } => run_align(x.as_bytes(), y.as_bytes()),
        Commands::Qc { reads } => run_qc(&reads),
    }
}

fn run_match(genome_path: &str, pattern: &[u8], opt: &MatchOpt) -> Result<()> {
    let genome = io::fasta::read_genome(genome_path)?;
    info!("genome: {} ({} bp)", genome_path, genome.len());
    let res = matching::search(pattern, &genome, opt)?;
    println!("occurrences: {}", res.occurrences.len());
    println!("positions: {:?}", res.occurrences);
    if opt.max_mismatches == 0 {
        println!("alignments: {}", res.alignments);
        println!("comparisons: {}", res.comparisons);
    }
    Ok(())
}

fn run_index(reads_path: &str, k: usize, output: &str) -> Result<()> {
    let reads = io::read_reads(reads_path)?;
    if reads.is_empty() {
        anyhow::bail!("reads file '{}' contains no sequences", reads_path);
    }
    println!("reads: {}", reads.len());

    let mut idx = ReadIndex::build(reads, k)?;
    idx.set_meta(IndexMeta {
        reads_file: Some(reads_path.to_string()),
        build_args: Some(std::env::args().collect::<Vec<_>>().join(" ")),
        build_timestamp: Some(chrono::Utc::now().to_rfc3339()),
    });
    println!("distinct {}-mers: {}", k, idx.kmers.len());

    let out_path = format!("{}.kidx", output);
    idx.save_to_file(&out_path)?;
    println!("read index saved: {}", out_path);
    Ok(())
}

fn run_graph(reads_path: Option<&str>, index_path: Option<&str>, opt: &AssemblyOpt, print_edges: bool) -> Result<()> {
    let graph = match (index_path, reads_path) {
        (Some(p), _) => {
            let idx = ReadIndex::load_from_file(p)?;
            info!("loaded read index {} (k={}, reads={})", p, idx.k(), idx.reads.len());
            OverlapGraph::build_with_index(&idx.reads, &idx.kmers)?
        }
        (None, Some(p)) => {
            let reads = io::read_reads(p)?;
            info!("reads: {} ({} sequences)", p, reads.len());
            assembly::overlap_graph(&reads, opt)?
        }
        (None, None) => anyhow::bail!("either a reads file or --index is required"),
    };

    println!("k: {}", graph.k);
    println!("edges: {}", graph.num_edges());
    println!("reads_with_edges: {}", graph.reads_with_edges);
    if print_edges {
        for (&(src, dst), &olen) in &graph.edges {
            println!("{}\t{}\t{}", src, dst, olen);
        }
    }
    Ok(())
}

fn run_scs(reads_path: &str, opt: &AssemblyOpt) -> Result<()> {
    let reads = io::read_reads(reads_path)?;
    info!("reads: {} ({} sequences)", reads_path, reads.len());
    let superstring = assembly::assemble(&reads, opt)?.ok_or_else(|| {
        anyhow!("exhaustive search refused for {} reads (limit {}, see --max-exact)", reads.len(), opt.max_exact_reads)
    })?;
    println!("length: {}", superstring.len());
    println!("{}", String::from_utf8_lossy(&superstring));
    Ok(())
}

fn run_align(x: &[u8], y: &[u8]) -> Result<()> {
    println!("edit_distance: {}", align::edit_distance(x, y));
    let aln = align::global_align(x, y, &align::ScoreMatrix::dna_default())?;
    println!("global_score: {}", aln.score);
    println!("cigar: {}", aln.cigar);
    println!("nm: {}", aln.nm);
    Ok(())
}

fn run_qc(reads_path: &str) -> Result<()> {
    let (seqs, quals) = io::fastq::read_fastq(reads_path)?;
    info!("reads: {} ({} records)", reads_path, seqs.len());
    let hist = qc::quality_histogram(&quals)?;
    println!("# quality\tcount");
    for (q, n) in hist.iter().enumerate().filter(|&(_, &n)| n > 0) {
        println!("{}\t{}", q, n);
    }
    println!("# position\tgc_fraction");
    for (i, gc) in qc::gc_by_pos(&seqs).iter().enumerate() {
        println!("{}\t{:.4}", i, gc);
    }
    Ok(())
}
