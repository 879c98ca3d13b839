mod algorithms;
mod bio_array;

use std::fmt;
use std::str::FromStr;

pub use bio_array::{BioArray, COMPARE_COST, Counters};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    CoalescingInsertion,
    BinaryFlipInsertion,
    BubbleFlip,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 3] = [
    SortAlgorithm::CoalescingInsertion,
    SortAlgorithm::BinaryFlipInsertion,
    SortAlgorithm::BubbleFlip,
];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::CoalescingInsertion => "coalescing_insertion",
        SortAlgorithm::BinaryFlipInsertion => "binary_flip_insertion",
        SortAlgorithm::BubbleFlip => "bubble_flip",
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(algorithm_name(*self))
    }
}

impl FromStr for SortAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        all_algorithms()
            .iter()
            .copied()
            .find(|&algo| algorithm_name(algo) == s)
            .ok_or_else(|| {
                let known = all_algorithms()
                    .iter()
                    .map(|&algo| algorithm_name(algo))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("unknown algorithm '{s}' (expected one of: {known})")
            })
    }
}

/// Sorts `arr` into non-decreasing order with the coalescing insertion scan,
/// touching the data only through `compare4` and `flip`.
pub fn sort(arr: &mut BioArray) {
    algorithms::coalescing_insertion_sort::sort(arr);
}

pub fn sort_bio_array(algo: SortAlgorithm, arr: &mut BioArray) {
    match algo {
        SortAlgorithm::CoalescingInsertion => algorithms::coalescing_insertion_sort::sort(arr),
        SortAlgorithm::BinaryFlipInsertion => algorithms::binary_flip_insertion_sort::sort(arr),
        SortAlgorithm::BubbleFlip => algorithms::bubble_flip_sort::sort(arr),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use bench::random_permutation;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn assert_sorts_like_std(data: &[f64]) {
        for &algo in all_algorithms() {
            let mut arr = BioArray::new(data);
            sort_bio_array(algo, &mut arr);

            let mut expected = data.to_vec();
            expected.sort_by(f64::total_cmp);

            assert_eq!(
                arr.as_slice(),
                expected.as_slice(),
                "algorithm={} input={:?}",
                algorithm_name(algo),
                data,
            );
        }
    }

    /// Calls `f` with every permutation of `data` (Heap's algorithm).
    fn for_each_permutation(data: &mut [f64], f: &mut impl FnMut(&[f64])) {
        let n = data.len();
        let mut c = vec![0usize; n];
        f(data);
        let mut i = 0;
        while i < n {
            if c[i] < i {
                if i % 2 == 0 {
                    data.swap(0, i);
                } else {
                    data.swap(c[i], i);
                }
                f(data);
                c[i] += 1;
                i = 0;
            } else {
                c[i] = 0;
                i += 1;
            }
        }
    }

    #[test]
    fn algorithm_names_are_unique_and_parse_back() {
        let mut seen = HashSet::new();
        for &algo in all_algorithms() {
            assert!(seen.insert(algorithm_name(algo)));
            assert_eq!(algorithm_name(algo).parse::<SortAlgorithm>(), Ok(algo));
            assert_eq!(algo.to_string(), algorithm_name(algo));
        }
        assert!("quick_sort".parse::<SortAlgorithm>().is_err());
    }

    #[test]
    fn short_inputs_make_no_calls() {
        for data in [vec![], vec![5.0]] {
            for &algo in all_algorithms() {
                let mut arr = BioArray::new(&data);
                sort_bio_array(algo, &mut arr);
                assert_eq!(arr.as_slice(), data.as_slice());
                assert_eq!(arr.counters(), Counters::default());
            }
        }
    }

    #[test]
    fn edge_cases() {
        let cases = [
            vec![1.0, 2.0],
            vec![2.0, 1.0],
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            vec![6.0, 5.0, 4.0, 3.0, 2.0, 1.0],
            vec![7.0; 64],
            vec![f64::MIN, 1.0, f64::MAX, 0.0, -0.5, f64::MAX, 2.0],
            vec![5.0, 5.0, 3.0, 3.0, 1.0, 1.0, 4.0, 4.0, 2.0, 2.0, 0.0, 0.0],
            vec![-1.5, 2.25, -1.5, 1e-9, 0.0, 1e9],
        ];

        for case in &cases {
            assert_sorts_like_std(case);
        }
    }

    #[test]
    fn sorts_descending_tail_example() {
        let mut arr = BioArray::new(&[6.0, 7.0, 8.0, 9.0, 10.0, 5.0, 4.0, 3.0, 2.0, 1.0]);
        sort(&mut arr);
        let expected = (1..=10).map(f64::from).collect::<Vec<_>>();
        assert_eq!(arr.as_slice(), expected.as_slice());
        assert!(arr.is_sorted());
    }

    #[test]
    fn sorted_input_costs_one_compare_per_step() {
        for n in [2_usize, 3, 10, 100, 2000] {
            let data = (0..n).map(|v| (v / 3) as f64).collect::<Vec<_>>();
            for algo in [
                SortAlgorithm::CoalescingInsertion,
                SortAlgorithm::BinaryFlipInsertion,
            ] {
                let mut arr = BioArray::new(&data);
                sort_bio_array(algo, &mut arr);
                assert_eq!(arr.compare_count(), n as u64 - 1, "{algo} n={n}");
                assert_eq!(arr.flip_count(), 0, "{algo} n={n}");
                assert_eq!(arr.as_slice(), data.as_slice());
            }
        }
    }

    #[test]
    fn counters_accumulate_across_sorts() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        let mut arr = BioArray::from(random_permutation(&mut rng, 50));
        let before = arr.counters();
        sort(&mut arr);
        let after_first = arr.counters();
        assert!(after_first.flips >= before.flips);
        assert!(after_first.compares > before.compares);

        sort(&mut arr);
        let after_second = arr.counters();
        assert_eq!(after_second.flips, after_first.flips);
        assert_eq!(after_second.compares, after_first.compares + 49);
        assert!(after_second.estimated_cost() > after_first.estimated_cost());
    }

    #[test]
    fn fixed_seed_random_cases() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        for &size in &[2_usize, 3, 8, 31, 32, 63, 64, 127, 128, 511] {
            let data = (0..size).map(|_| rng.random::<f64>()).collect::<Vec<_>>();
            assert_sorts_like_std(&data);
        }
    }

    #[test]
    fn fixed_seed_many_duplicates() {
        let mut rng = StdRng::seed_from_u64(0xD0D1_2026);
        for &size in &[64_usize, 257, 1024] {
            let data = (0..size)
                .map(|_| rng.random_range(0..16) as f64 * 0.25)
                .collect::<Vec<_>>();
            assert_sorts_like_std(&data);
        }
    }

    #[test]
    fn coalescing_agrees_with_single_insertion_on_all_permutations() {
        for len in 0..=8 {
            let mut data = (0..len).map(|v| v as f64).collect::<Vec<_>>();
            for_each_permutation(&mut data, &mut |perm: &[f64]| {
                let mut coalescing = BioArray::new(perm);
                sort_bio_array(SortAlgorithm::CoalescingInsertion, &mut coalescing);
                let mut single = BioArray::new(perm);
                sort_bio_array(SortAlgorithm::BinaryFlipInsertion, &mut single);

                assert!(coalescing.is_sorted(), "input={perm:?}");
                assert_eq!(coalescing.as_slice(), single.as_slice(), "input={perm:?}");
                assert!(coalescing.flip_count() <= single.flip_count(), "input={perm:?}");
            });
        }
    }

    #[test]
    fn coalescing_agrees_with_single_insertion_on_all_small_multisets() {
        // Every word over a 3-letter alphabet, so ordered pairs include ties.
        for len in 0..=8_u32 {
            for code in 0..3_usize.pow(len) {
                let mut rest = code;
                let data = (0..len)
                    .map(|_| {
                        let digit = rest % 3;
                        rest /= 3;
                        digit as f64
                    })
                    .collect::<Vec<_>>();

                let mut coalescing = BioArray::new(&data);
                sort_bio_array(SortAlgorithm::CoalescingInsertion, &mut coalescing);
                let mut single = BioArray::new(&data);
                sort_bio_array(SortAlgorithm::BinaryFlipInsertion, &mut single);

                assert!(coalescing.is_sorted(), "input={data:?}");
                assert_eq!(coalescing.as_slice(), single.as_slice(), "input={data:?}");
                assert!(coalescing.flip_count() <= single.flip_count(), "input={data:?}");
            }
        }
    }

    fn run_random_permutation_trials(trials: usize) {
        const MIN_LEN: usize = 2;
        const MAX_LEN: usize = 41;

        let mut rng = StdRng::seed_from_u64(0xB10_5EED);
        for t in 0..trials {
            let len = MIN_LEN + t % (MAX_LEN - MIN_LEN + 1);
            let data = random_permutation(&mut rng, len);
            let mut arr = BioArray::new(&data);
            sort(&mut arr);
            assert!(
                arr.is_sorted(),
                "failed to sort {data:?}, got {arr} (first inversion at {:?})",
                arr.first_inversion()
            );
        }
    }

    #[test]
    fn random_permutations_small_lengths() {
        run_random_permutation_trials(20_000);
    }

    #[test]
    #[ignore = "million-trial sweep; run with --ignored"]
    fn random_permutations_small_lengths_full_sweep() {
        run_random_permutation_trials(1_000_000);
    }
}
