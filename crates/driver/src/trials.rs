//! Trial loops behind the driver subcommands. Everything here is pure with
//! respect to the console so the loops can be tested directly.

use flipsort::{BioArray, Counters, SortAlgorithm, sort_bio_array};
use rand::Rng;
use rand::seq::SliceRandom;

pub const MANUAL_INPUT: [f64; 10] = [6.0, 7.0, 8.0, 9.0, 10.0, 5.0, 4.0, 3.0, 2.0, 1.0];

/// Input and attempted result of the first trial that came back unsorted.
#[derive(Clone, Debug, PartialEq)]
pub struct SortFailure {
    pub trial: usize,
    pub input: Vec<f64>,
    pub output: BioArray,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PerformanceSummary {
    pub trials: usize,
    pub len: usize,
    pub mean_compares: f64,
    pub mean_flips: f64,
    pub mean_cost: f64,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScalingRow {
    pub len: usize,
    pub counters: Counters,
    pub sorted: bool,
}

pub fn sort_manual_input(algo: SortAlgorithm) -> BioArray {
    let mut arr = BioArray::new(&MANUAL_INPUT);
    sort_bio_array(algo, &mut arr);
    arr
}

/// `1.0, 2.0, ..., len` in uniformly random order.
fn random_permutation<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<f64> {
    let mut data = (1..=len).map(|v| v as f64).collect::<Vec<_>>();
    data.shuffle(rng);
    data
}

/// `len` independent samples from `[0, 1)`.
fn random_uniform<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<f64> {
    (0..len).map(|_| rng.random::<f64>()).collect()
}

/// Length used by trial `t` when cycling through `[min_len, max_len]`.
#[inline]
pub fn cycled_len(t: usize, min_len: usize, max_len: usize) -> usize {
    debug_assert!(min_len <= max_len);
    min_len + t % (max_len - min_len + 1)
}

/// Sorts `trials` random permutations, cycling lengths through
/// `[min_len, max_len]`, and stops at the first unsorted result.
pub fn run_correctness<R: Rng + ?Sized>(
    algo: SortAlgorithm,
    rng: &mut R,
    trials: usize,
    min_len: usize,
    max_len: usize,
) -> Result<(), SortFailure> {
    for trial in 0..trials {
        let input = random_permutation(rng, cycled_len(trial, min_len, max_len));
        let mut output = BioArray::new(&input);
        sort_bio_array(algo, &mut output);
        if !output.is_sorted() {
            return Err(SortFailure {
                trial,
                input,
                output,
            });
        }
    }
    Ok(())
}

/// Averages the primitive counters over `trials` uniform inputs of length
/// `len`. `on_trial` is called after every trial with its zero-based index.
pub fn run_performance<R: Rng + ?Sized>(
    algo: SortAlgorithm,
    rng: &mut R,
    trials: usize,
    len: usize,
    mut on_trial: impl FnMut(usize),
) -> Result<PerformanceSummary, SortFailure> {
    let mut compares = 0.0;
    let mut flips = 0.0;
    let mut cost = 0.0;

    for trial in 0..trials {
        let input = random_uniform(rng, len);
        let mut output = BioArray::new(&input);
        sort_bio_array(algo, &mut output);
        if !output.is_sorted() {
            return Err(SortFailure {
                trial,
                input,
                output,
            });
        }
        compares += output.compare_count() as f64;
        flips += output.flip_count() as f64;
        cost += output.estimated_cost();
        on_trial(trial);
    }

    let n = trials.max(1) as f64;
    Ok(PerformanceSummary {
        trials,
        len,
        mean_compares: compares / n,
        mean_flips: flips / n,
        mean_cost: cost / n,
    })
}

/// One uniform input per length `min_len, 2 * min_len, ...` up to `max_len`.
pub fn collect_scaling<R: Rng + ?Sized>(
    algo: SortAlgorithm,
    rng: &mut R,
    min_len: usize,
    max_len: usize,
) -> Vec<ScalingRow> {
    let mut rows = Vec::new();
    let mut len = min_len.max(1);
    while len <= max_len {
        let mut arr = BioArray::new(&random_uniform(rng, len));
        sort_bio_array(algo, &mut arr);
        rows.push(ScalingRow {
            len,
            counters: arr.counters(),
            sorted: arr.is_sorted(),
        });
        len *= 2;
    }
    rows
}
