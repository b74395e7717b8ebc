//! In-place selection sort over three container representations: an owned
//! numeric sequence, a dynamically-compared list mutated through the caller's
//! reference, and a fixed-width numeric array. All three share one core loop,
//! parametrized over the [`select::Sequence`] capability.

macro_rules! sort_impl {
    ($name:expr, $sort_prefix_fn:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort_prefix(v: &mut Vec<i32>, n: usize) {
                ($sort_prefix_fn)(v, n);
            }
        }
    };
}

pub mod numeric_array;
pub mod ref_list;
pub mod select;
pub mod sequence;

pub use numeric_array::sort_numeric_array;
pub use ref_list::{sort_reference_list, sort_reference_list_by};
pub use sequence::sort_sequence;
