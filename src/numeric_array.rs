//! Adapter for a contiguous fixed-width integer buffer that the caller keeps
//! owning. Unlike the owned-sequence adapter, element access goes through
//! explicit index-checked value reads and writes, and a swap copies values
//! through one temporary slot.

use crate::select::{self, Sequence};

sort_impl!("selection_numeric_array", |v: &mut Vec<i32>, n: usize| {
    sort_numeric_array(v, n)
});

struct ArrayRef<'a> {
    buf: &'a mut [i32],
}

impl ArrayRef<'_> {
    fn at(&self, idx: usize) -> i32 {
        self.buf[idx]
    }

    fn set(&mut self, idx: usize, val: i32) {
        self.buf[idx] = val;
    }
}

impl Sequence for ArrayRef<'_> {
    fn len(&self) -> usize {
        self.buf.len()
    }

    fn is_less(&mut self, a: usize, b: usize) -> bool {
        self.at(a) < self.at(b)
    }

    fn swap(&mut self, a: usize, b: usize) {
        let tmp = self.at(a);
        self.set(a, self.at(b));
        self.set(b, tmp);
    }
}

/// Sorts the first `n` elements of the buffer in ascending order, in place
/// through the given reference. Positions at `n` and beyond are neither read
/// nor written.
///
/// # Panics
///
/// Panics if `n` is greater than `data.len()`.
#[inline]
pub fn sort_numeric_array(data: &mut [i32], n: usize) {
    select::sort_prefix(&mut ArrayRef { buf: data }, n);
}

/// Sorts the whole buffer in ascending order, in place.
#[inline]
pub fn sort(data: &mut [i32]) {
    let n = data.len();
    sort_numeric_array(data, n);
}
