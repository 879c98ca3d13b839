use crate::BioArray;

use super::common::{insert_single, leq};

pub fn sort(arr: &mut BioArray) {
    let n = arr.len();
    if n < 2 {
        return;
    }

    for i in 1..n {
        if !leq(arr, i - 1, i) {
            insert_single(arr, i);
        }
    }
}
