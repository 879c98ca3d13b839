use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 500;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 800;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
const RNG_SEED: u64 = 0x5EED_2026;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// `1.0, 2.0, ..., len` in uniformly random order.
pub fn random_permutation<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<f64> {
    let mut data = (1..=len).map(|v| v as f64).collect::<Vec<_>>();
    data.shuffle(rng);
    data
}

/// `len` independent samples from `[0, 1)`.
pub fn random_uniform<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<f64> {
    (0..len).map(|_| rng.random::<f64>()).collect()
}

/// `0.0, 1.0, ..., len - 1` with `len / 100` (at least one) random swaps.
pub fn nearly_sorted<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<f64> {
    let mut data = (0..len).map(|v| v as f64).collect::<Vec<_>>();
    if len < 2 {
        return data;
    }
    let swaps = (len / 100).max(1);
    for _ in 0..swaps {
        let a = rng.random_range(0..len);
        let b = rng.random_range(0..len);
        data.swap(a, b);
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_permutation_is_a_permutation() {
        let mut rng = default_rng();
        for len in [0_usize, 1, 2, 41, 500] {
            let mut data = random_permutation(&mut rng, len);
            data.sort_by(f64::total_cmp);
            let expected = (1..=len).map(|v| v as f64).collect::<Vec<_>>();
            assert_eq!(data, expected);
        }
    }

    #[test]
    fn random_uniform_stays_in_unit_interval() {
        let mut rng = default_rng();
        let data = random_uniform(&mut rng, 4096);
        assert_eq!(data.len(), 4096);
        assert!(data.iter().all(|&v| (0.0..1.0).contains(&v)));
    }

    #[test]
    fn nearly_sorted_keeps_values() {
        let mut rng = default_rng();
        let mut data = nearly_sorted(&mut rng, 1000);
        data.sort_by(f64::total_cmp);
        assert!(data.iter().enumerate().all(|(i, &v)| v == i as f64));
        assert_eq!(nearly_sorted(&mut rng, 1), vec![0.0]);
    }
}
