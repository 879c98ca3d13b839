use crate::BioArray;

/// Neighbour-swapping bubble sort: every pass compares `a[i], a[i + 1]` with
/// `compare4(i, i, i + 1, i + 1)` and flips the pair when out of order, until
/// a pass makes no flip. Baseline only; it ignores both the 4-way comparator
/// and long flips.
pub fn sort(arr: &mut BioArray) {
    let n = arr.len();
    if n < 2 {
        return;
    }

    loop {
        let mut any_flip = false;
        for i in 0..n - 1 {
            let order = arr.compare4(i, i, i + 1, i + 1);
            if order[0] != i {
                arr.flip(i, i + 1);
                any_flip = true;
            }
        }
        if !any_flip {
            break;
        }
    }
}
