use std::fmt;

/// Weight of one comparator call relative to one flip in [`BioArray::estimated_cost`].
pub const COMPARE_COST: f64 = 0.008;

/// Snapshot of the primitive counters of a [`BioArray`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Counters {
    pub flips: u64,
    pub compares: u64,
}

impl Counters {
    #[inline]
    pub fn estimated_cost(self) -> f64 {
        self.flips as f64 + self.compares as f64 * COMPARE_COST
    }
}

/// Opaque array of reals that can only be inspected through a metered 4-way
/// comparator and only be rearranged through metered range reversals.
///
/// - `compare4` / `is_non_decreasing4` cost one compare each, however many of
///   the four indices coincide.
/// - `flip(lo, hi)` reverses `[lo, hi]` inclusive and costs one flip, however
///   long the range is.
/// - Indices out of range panic.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BioArray {
    values: Vec<f64>,
    counters: Counters,
}

impl BioArray {
    pub fn new(values: &[f64]) -> Self {
        Self::from(values.to_vec())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns `[w, x, y, z]` stably reordered so that the values at the
    /// returned positions are non-decreasing.
    pub fn compare4(&mut self, w: usize, x: usize, y: usize, z: usize) -> [usize; 4] {
        let mut order = [w, x, y, z];
        for &idx in &order {
            self.check_index(idx);
        }
        self.counters.compares += 1;

        for i in 1..order.len() {
            let mut j = i;
            while j > 0 && self.values[order[j]] < self.values[order[j - 1]] {
                order.swap(j, j - 1);
                j -= 1;
            }
        }
        order
    }

    /// `a[w] <= a[x] <= a[y] <= a[z]`, at the price of one compare.
    pub fn is_non_decreasing4(&mut self, w: usize, x: usize, y: usize, z: usize) -> bool {
        for idx in [w, x, y, z] {
            self.check_index(idx);
        }
        self.counters.compares += 1;

        let a = &self.values;
        a[w] <= a[x] && a[x] <= a[y] && a[y] <= a[z]
    }

    /// Reverses `[lo, hi]` inclusive.
    pub fn flip(&mut self, lo: usize, hi: usize) {
        assert!(
            lo <= hi,
            "flip range is inverted: lo={lo} > hi={hi} (len={})",
            self.len()
        );
        self.check_index(hi);
        self.counters.flips += 1;
        self.values[lo..=hi].reverse();
    }

    #[inline]
    pub fn flip_count(&self) -> u64 {
        self.counters.flips
    }

    #[inline]
    pub fn compare_count(&self) -> u64 {
        self.counters.compares
    }

    #[inline]
    pub fn counters(&self) -> Counters {
        self.counters
    }

    #[inline]
    pub fn estimated_cost(&self) -> f64 {
        self.counters.estimated_cost()
    }

    /// Verification only. Sorting code must not call this.
    pub fn is_sorted(&self) -> bool {
        self.first_inversion().is_none()
    }

    /// Smallest `i` with `a[i] > a[i + 1]`, if any.
    pub fn first_inversion(&self) -> Option<usize> {
        self.values.windows(2).position(|w| w[0] > w[1])
    }

    /// Read-only view for verification and reporting.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    #[inline]
    fn check_index(&self, idx: usize) {
        assert!(
            idx < self.values.len(),
            "index out of range: idx={idx} len={}",
            self.values.len()
        );
    }
}

impl From<Vec<f64>> for BioArray {
    fn from(values: Vec<f64>) -> Self {
        Self {
            values,
            counters: Counters::default(),
        }
    }
}

impl FromIterator<f64> for BioArray {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl fmt::Display for BioArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.values)
    }
}
