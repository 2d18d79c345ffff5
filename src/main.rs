use clap::Parser;
use rust_python_clade_counts::counts::{ab_counts, cc_counts, MIN_POLYTOMY};
use rust_python_clade_counts::io::parse_dir;
use rust_python_clade_counts::sim::make_sims;
use std::path::PathBuf;
use std::time::Instant;

/// Count clade patterns (polytomy sizes, clade proportions) across paired
/// simulation runs and print the CC and AB count tuples.
#[derive(Parser, Debug)]
#[command(name = "clade-counts", version, about = "CC/AB clade pattern counts for paired simulation runs")]
struct Args {
    /// Root directory holding the two cladogram subdirectories
    #[arg(short = 'r', long = "root", default_value = "./cumulative_results")]
    root: PathBuf,

    /// Subdirectory of 1-mutation cladogram files
    #[arg(long = "one-mut-dir", default_value = "clade_analyses_CC")]
    one_mut_dir: String,

    /// Subdirectory of 2-mutation cladogram files
    #[arg(long = "two-muts-dir", default_value = "clade_analyses_AB")]
    two_muts_dir: String,

    /// Polytomy threshold for the polytomy-gated counters
    #[arg(long = "min-polytomy", default_value_t = MIN_POLYTOMY)]
    min_polytomy: usize,

    /// Quiet mode: suppresses progress messages on stdout
    #[arg(short = 'q', long = "quiet", default_value_t = false)]
    quiet: bool,
}

fn main() {
    let args = Args::parse();

    // Load both datasets fully into memory
    let t0 = Instant::now();
    let one_mut = match parse_dir(args.root.join(&args.one_mut_dir), 1) {
        Ok(cgs) => cgs,
        Err(e) => {
            eprintln!("Failed to load 1-mut dataset: {e}");
            std::process::exit(2);
        }
    };
    let two_muts = match parse_dir(args.root.join(&args.two_muts_dir), 2) {
        Ok(cgs) => cgs,
        Err(e) => {
            eprintln!("Failed to load 2-mut dataset: {e}");
            std::process::exit(2);
        }
    };
    let read_s = t0.elapsed().as_secs_f64();
    log_if(!args.quiet, format!("Reading in cladograms {read_s:.3}s"));
    log_if(!args.quiet, format!(
        "Read {} 1-mut and {} 2-mut cladograms",
        one_mut.len(),
        two_muts.len()
    ));

    // Pair the runs; analysis never proceeds with partial data
    let t1 = Instant::now();
    let sims = match make_sims(one_mut, two_muts) {
        Ok(sims) => sims,
        Err(e) => {
            eprintln!("Failed to pair datasets: {e}");
            std::process::exit(3);
        }
    };
    let pair_s = t1.elapsed().as_secs_f64();
    log_if(!args.quiet, format!("Pairing {} runs {pair_s:.3}s", sims.len()));

    let t2 = Instant::now();
    let cc = cc_counts(&sims, args.min_polytomy);
    let ab = ab_counts(&sims, args.min_polytomy);
    let count_s = t2.elapsed().as_secs_f64();
    log_if(!args.quiet, format!("Counting patterns {count_s:.3}s"));

    // Published tallies for the original dataset: CC (116, 74, 16, 0),
    // which we match, and AB (119, 45, 5), where the third counter is
    // known to come out different.
    println!("cc_counts {:?}", cc.as_tuple());
    println!("ab_counts {:?}", ab.as_tuple());
}

fn log_if(show: bool, msg: String) {
    if show { println!("{}", msg); }
}
