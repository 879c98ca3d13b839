pub(crate) mod binary_flip_insertion_sort;
pub(crate) mod bubble_flip_sort;
pub(crate) mod coalescing_insertion_sort;
pub(crate) mod common;
