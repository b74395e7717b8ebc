//! Adapter for an owned numeric sequence, accessed through an exclusive
//! mutable borrow. Direct slice indexing, no translation needed; this is the
//! reference form of the three.

use crate::select::{self, Sequence};

sort_impl!("selection_sequence", |v: &mut Vec<i32>, n: usize| {
    sort_sequence(v, n)
});

struct SliceSeq<'a, T> {
    data: &'a mut [T],
}

impl<T: Ord> Sequence for SliceSeq<'_, T> {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn is_less(&mut self, a: usize, b: usize) -> bool {
        self.data[a] < self.data[b]
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
    }
}

/// Sorts the first `n` elements of `data` in ascending order, in place.
///
/// # Panics
///
/// Panics if `n` is greater than `data.len()`.
#[inline]
pub fn sort_sequence<T: Ord>(data: &mut [T], n: usize) {
    select::sort_prefix(&mut SliceSeq { data }, n);
}

/// Sorts all of `data` in ascending order, in place.
#[inline]
pub fn sort<T: Ord>(data: &mut [T]) {
    let n = data.len();
    sort_sequence(data, n);
}
