//! Adapter for a dynamically-compared list that the caller keeps owning. The
//! sorter holds the caller's `&mut Vec` for the whole call and mutates the
//! structure directly. Elements are opaque: they are only ever compared and
//! swapped, never copied out, so a swap re-binds two positions to each
//! other's element.

use std::cmp::Ordering;

use crate::select::{self, Sequence};

sort_impl!("selection_ref_list", |v: &mut Vec<i32>, n: usize| {
    sort_reference_list(v, n)
});

struct ListRef<'a, T, F> {
    list: &'a mut Vec<T>,
    is_less: F,
}

impl<T, F: FnMut(&T, &T) -> bool> Sequence for ListRef<'_, T, F> {
    fn len(&self) -> usize {
        self.list.len()
    }

    fn is_less(&mut self, a: usize, b: usize) -> bool {
        (self.is_less)(&self.list[a], &self.list[b])
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.list.swap(a, b);
    }
}

/// Sorts the first `n` elements of the caller's list in ascending `Ord`
/// order, in place through the given reference.
///
/// # Panics
///
/// Panics if `n` is greater than `data.len()`.
#[inline]
pub fn sort_reference_list<T: Ord>(data: &mut Vec<T>, n: usize) {
    sort_reference_list_by(data, n, T::cmp);
}

/// Sorts the first `n` elements of the caller's list in the ascending order
/// defined by `compare`, in place through the given reference.
///
/// A panicking comparator unwinds through this call unchanged; the list then
/// still holds its original set of elements, in unspecified order. A
/// comparator that violates a total order yields an unspecified order as
/// well, the call terminates regardless.
///
/// # Panics
///
/// Panics if `n` is greater than `data.len()`.
#[inline]
pub fn sort_reference_list_by<T, F>(data: &mut Vec<T>, n: usize, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    select::sort_prefix(
        &mut ListRef {
            list: data,
            is_less: |a: &T, b: &T| compare(a, b).is_lt(),
        },
        n,
    );
}
