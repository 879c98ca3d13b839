//! Trial driver for the flip-metered sorting algorithms.
//!
//! Run with: cargo run --release --bin flipsort-driver -- <command>
//!
//! Usage:
//!   flipsort-driver all                         Manual, correctness, performance and scaling runs
//!   flipsort-driver manual                      Sort the fixed example and show before/after
//!   flipsort-driver correctness --trials 1m     Random permutations of lengths 2..=41
//!   flipsort-driver performance --trials 1000   Mean counters over random inputs of length 2000
//!   flipsort-driver scaling --max-len 4096      Counters for N = 4, 8, ..., 4096
//!   flipsort-driver -a all -a bubble_flip ...   Pick algorithms (default: coalescing_insertion)

mod trials;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use flipsort::{BioArray, SortAlgorithm, all_algorithms};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::trials::{
    MANUAL_INPUT, PerformanceSummary, SortFailure, collect_scaling, run_correctness,
    run_performance, sort_manual_input,
};

fn parse_count(s: &str) -> Result<usize, String> {
    let s = s.to_lowercase();
    let (num_str, multiplier) = if let Some(num) = s.strip_suffix('m') {
        (num, 1_000_000)
    } else if let Some(num) = s.strip_suffix('k') {
        (num, 1_000)
    } else {
        (s.as_str(), 1)
    };

    num_str
        .parse::<f64>()
        .map_err(|e| format!("Invalid number '{}': {}", s, e))
        .and_then(|n| {
            if n.is_finite() && n >= 0.0 {
                Ok((n * multiplier as f64) as usize)
            } else {
                Err(format!("Invalid count '{}'", s))
            }
        })
}

/// Algorithms named by one `--algorithm` occurrence.
#[derive(Clone, Debug, PartialEq)]
struct AlgorithmSelection(Vec<SortAlgorithm>);

fn parse_algorithms(s: &str) -> Result<AlgorithmSelection, String> {
    if s == "all" {
        return Ok(AlgorithmSelection(all_algorithms().to_vec()));
    }
    s.parse::<SortAlgorithm>()
        .map(|algo| AlgorithmSelection(vec![algo]))
}

#[derive(Parser, Debug)]
#[command(name = "flipsort-driver", about = "Run flip-metered sorts and report their cost")]
struct Cli {
    /// Algorithm to run; repeatable, `all` selects every algorithm.
    #[arg(short, long = "algorithm", value_parser = parse_algorithms, global = true)]
    algorithms: Vec<AlgorithmSelection>,

    /// Seed for reproducible inputs (default: fresh entropy).
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Every run below, in order, with default settings.
    All,
    /// Sort [6, 7, 8, 9, 10, 5, 4, 3, 2, 1] and print it before and after.
    Manual,
    /// Random permutations; fails on the first unsorted result.
    Correctness(CorrectnessArgs),
    /// Mean compares, flips and estimated cost over random inputs.
    Performance(PerformanceArgs),
    /// Counters for doubling input sizes.
    Scaling(ScalingArgs),
}

#[derive(Args, Debug, Clone)]
struct CorrectnessArgs {
    #[arg(long, default_value = "1m", value_parser = parse_count)]
    trials: usize,
    #[arg(long, default_value_t = 2)]
    min_len: usize,
    #[arg(long, default_value_t = 41)]
    max_len: usize,
}

impl Default for CorrectnessArgs {
    fn default() -> Self {
        Self {
            trials: 1_000_000,
            min_len: 2,
            max_len: 41,
        }
    }
}

#[derive(Args, Debug, Clone)]
struct PerformanceArgs {
    #[arg(long, default_value = "100", value_parser = parse_count)]
    trials: usize,
    #[arg(long, default_value = "2000", value_parser = parse_count)]
    len: usize,
}

impl Default for PerformanceArgs {
    fn default() -> Self {
        Self {
            trials: 100,
            len: 2000,
        }
    }
}

#[derive(Args, Debug, Clone)]
struct ScalingArgs {
    #[arg(long, default_value = "4", value_parser = parse_count)]
    min_len: usize,
    #[arg(long, default_value = "16384", value_parser = parse_count)]
    max_len: usize,
}

impl Default for ScalingArgs {
    fn default() -> Self {
        Self {
            min_len: 4,
            max_len: 16_384,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut algorithms = Vec::new();
    for algo in cli.algorithms.into_iter().flat_map(|selection| selection.0) {
        if !algorithms.contains(&algo) {
            algorithms.push(algo);
        }
    }
    if algorithms.is_empty() {
        algorithms.push(SortAlgorithm::CoalescingInsertion);
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    for algo in algorithms {
        let ok = match &cli.command {
            Command::All => {
                manual(algo)
                    && correctness(algo, &mut rng, &CorrectnessArgs::default())
                    && performance(algo, &mut rng, &PerformanceArgs::default())
                    && scaling(algo, &mut rng, &ScalingArgs::default())
            }
            Command::Manual => manual(algo),
            Command::Correctness(args) => correctness(algo, &mut rng, args),
            Command::Performance(args) => performance(algo, &mut rng, args),
            Command::Scaling(args) => scaling(algo, &mut rng, args),
        };
        if !ok {
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}

fn report_failure(algo: SortAlgorithm, failure: &SortFailure) {
    eprintln!("{algo} (trial {})", failure.trial);
    eprintln!("Failed to sort array: {:?}", failure.input);
    eprintln!("After attempted sort: {}", failure.output);
    if let Some(i) = failure.output.first_inversion() {
        let values = failure.output.as_slice();
        eprintln!(
            "Out of order at positions {} and {}: {} > {}",
            i,
            i + 1,
            values[i],
            values[i + 1]
        );
    }
}

fn manual(algo: SortAlgorithm) -> bool {
    println!();
    println!("Simple manual test for {algo}");
    println!("Before sorting: {}", BioArray::new(&MANUAL_INPUT));
    let arr = sort_manual_input(algo);
    println!(" After sorting: {arr}");
    println!("Sorted correctly? {}", arr.is_sorted());
    arr.is_sorted()
}

fn correctness(algo: SortAlgorithm, rng: &mut StdRng, args: &CorrectnessArgs) -> bool {
    if args.min_len > args.max_len {
        eprintln!(
            "--min-len ({}) must not exceed --max-len ({})",
            args.min_len, args.max_len
        );
        return false;
    }

    println!("Starting randomized correctness tests for {algo}");
    match run_correctness(algo, rng, args.trials, args.min_len, args.max_len) {
        Ok(()) => {
            println!(
                "Completed {} randomized correctness tests for {algo}",
                args.trials
            );
            true
        }
        Err(failure) => {
            report_failure(algo, &failure);
            false
        }
    }
}

fn performance(algo: SortAlgorithm, rng: &mut StdRng, args: &PerformanceArgs) -> bool {
    print!(
        "Running {} performance trials for {:<40}.",
        args.trials,
        algo.to_string()
    );
    let _ = io::stdout().flush();

    let tick = (args.trials / 10).max(1);
    let result = run_performance(algo, rng, args.trials, args.len, |trial| {
        if trial % tick == tick - 1 {
            print!(".");
            let _ = io::stdout().flush();
        }
    });

    match result {
        Ok(PerformanceSummary {
            mean_compares,
            mean_flips,
            mean_cost,
            ..
        }) => {
            println!(" compares={mean_compares:.0} flips={mean_flips:.0} robotTime={mean_cost:.0}");
            println!("{mean_cost:10.0}");
            true
        }
        Err(failure) => {
            println!();
            eprintln!("BUG: Failed to correctly sort some array of size {}", args.len);
            report_failure(algo, &failure);
            false
        }
    }
}

fn scaling(algo: SortAlgorithm, rng: &mut StdRng, args: &ScalingArgs) -> bool {
    println!("Collecting data for {algo}:\n");
    println!("     N  \tflipCount\tcompare4Count\tRobotTime");

    let rows = collect_scaling(algo, rng, args.min_len, args.max_len);
    let mut ok = true;
    for row in &rows {
        if !row.sorted {
            eprintln!("BUG: Failed to correctly sort some array of size {}", row.len);
            ok = false;
        }
        println!(
            "{:10}\t{:10}\t{:10}\t{:10.1}",
            row.len,
            row.counters.flips,
            row.counters.compares,
            row.counters.estimated_cost()
        );
    }
    ok
}
