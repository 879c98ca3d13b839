use crate::BioArray;

/// `a[p] <= a[q]` with a single compare: `(p, p, q, q)` keeps `p` in front
/// unless `a[q]` is strictly smaller.
#[inline]
pub fn leq(arr: &mut BioArray, p: usize, q: usize) -> bool {
    arr.compare4(p, p, q, q)[0] == p
}

/// Insertion index for the value at `key` into the sorted range `[lo, hi]`,
/// returned in `[lo, hi + 1]`.
///
/// - Empty range (`lo > hi`): `lo`.
/// - `a[hi] <= key`: `hi + 1`, so a key equal to the last element goes after it.
/// - `a[lo] > key`: `lo`.
/// - Otherwise the first position holding an element `>= key`.
///
/// Costs `O(log(hi - lo))` compares and no flips.
pub fn lower_bound(arr: &mut BioArray, key: usize, mut lo: usize, mut hi: usize) -> usize {
    if lo > hi {
        return lo;
    }
    if leq(arr, hi, key) {
        return hi + 1;
    }
    if !leq(arr, lo, key) {
        return lo;
    }

    while lo < hi {
        let mid = lo + ((hi - lo) >> 1);
        if leq(arr, key, mid) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}

/// Turns `A = [pos, l - 1]`, `B = [l, r]` into `B A`, each part keeping its
/// internal order.
///
/// Costs 0 flips when `pos == l`, 2 when `A` is a single element and 3
/// otherwise.
pub fn rotate_block_left(arr: &mut BioArray, pos: usize, l: usize, r: usize) {
    debug_assert!(pos <= l && l <= r);
    if pos == l {
        return;
    }
    if pos + 1 == l {
        arr.flip(l, r);
        arr.flip(pos, r);
        return;
    }
    arr.flip(pos, l - 1);
    arr.flip(l, r);
    arr.flip(pos, r);
}

/// Moves the element at `i` into the sorted prefix `[0, i)` with at most
/// two flips. The caller guarantees `[0, i)` is sorted.
pub fn insert_single(arr: &mut BioArray, i: usize) {
    debug_assert!(i > 0 && i < arr.len());
    let pos = lower_bound(arr, i, 0, i - 1);
    if pos == i {
        return;
    }
    if pos + 1 == i {
        arr.flip(pos, i);
        return;
    }
    // [pos, i - 1] reversed, then the whole block: x lands in front and the
    // displaced run is restored.
    arr.flip(pos, i - 1);
    arr.flip(pos, i);
}
