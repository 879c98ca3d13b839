use crate::BioArray;

use super::common::{insert_single, leq, lower_bound, rotate_block_left};

/// Binary insertion over a growing sorted prefix `[0, i)`.
///
/// Each step either finds `a[i]` already in place (one compare), plants the
/// ordered pair `a[i], a[i + 1]` with a single block rotation when the
/// second element's insertion point is not right of the first's, or falls
/// back to inserting `a[i]` alone with at most two flips.
pub fn sort(arr: &mut BioArray) {
    let n = arr.len();
    if n < 2 {
        return;
    }

    let mut i = 1;
    while i < n {
        i = step(arr, i);
    }
}

/// Extends the sorted prefix `[0, i)` by one or two elements and returns the
/// new cursor.
pub(crate) fn step(arr: &mut BioArray, i: usize) -> usize {
    debug_assert!(i >= 1 && i < arr.len());
    if leq(arr, i - 1, i) {
        return i + 1;
    }

    if i + 1 < arr.len() && try_insert_pair(arr, i) {
        return i + 2;
    }

    insert_single(arr, i);
    i + 1
}

/// Inserts `a[i], a[i + 1]` into `[0, i)` with one rotation if the pair is
/// ordered, still belongs left of `a[i - 1]`, and the second element's
/// insertion point is not right of the first's. Returns whether it did.
fn try_insert_pair(arr: &mut BioArray, i: usize) -> bool {
    debug_assert!(i >= 1 && i + 1 < arr.len());
    if !leq(arr, i, i + 1) || leq(arr, i - 1, i + 1) {
        return false;
    }

    let pos1 = lower_bound(arr, i, 0, i - 1);
    // Searches through `i`: the unmoved `a[i]` bounds `a[i + 1]` from below.
    let pos2 = lower_bound(arr, i + 1, 0, i);
    if pos2 > pos1 {
        return false;
    }

    rotate_block_left(arr, pos2, i, i + 1);
    true
}
