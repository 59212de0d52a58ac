//! # Cmpsort
//!
//! `cmpsort` provides textbook sorting routines driven entirely by a caller-supplied three-way
//! comparator instead of the element type's built-in ordering.
//!
//! ## Algorithms
//!
//! - **Merge**: [`merge_by`] combines two sorted slices in linear time.
//! - **Merge Sort**: [`merge_sort_by`] returns a sorted copy in `O(n log n)`.
//! - **Copying Quicksort**: [`quicksort_copy_by`] splits around a random pivot into less,
//!   equal and greater groups and returns a sorted copy.
//! - **In-place Quicksort**: [`quicksort_inplace_by`] runs Lomuto partitioning directly over the
//!   caller's slice, using only swaps and no buffer proportional to the input.
//!
//! Each `_by` function has a plain counterpart ([`merge_sort`], [`quicksort_inplace`], ...)
//! which orders with [`cmp_standard`].
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! ```rust
//! use cmpsort::{cmp_last_digit, merge_sort, merge_sort_by};
//!
//! assert_eq!(merge_sort(&[3, 1, 2]), vec![1, 2, 3]);
//!
//! let by_digit = merge_sort_by(&[21, 5, 14, 32], cmp_last_digit);
//! let digits: Vec<i32> = by_digit.iter().map(|x| x % 10).collect();
//! assert_eq!(digits, vec![1, 2, 4, 5]);
//! ```
//!
//! ### Custom Comparators
//!
//! Any `FnMut(&T, &T) -> Ordering` works, including closures over struct fields.
//!
//! ```rust
//! use cmpsort::quicksort_inplace_by;
//!
//! struct User {
//!     name: &'static str,
//!     age: u32,
//! }
//!
//! let mut users = vec![
//!     User { name: "Bob", age: 41 },
//!     User { name: "Alice", age: 29 },
//! ];
//!
//! quicksort_inplace_by(&mut users, |a, b| a.age.cmp(&b.age));
//! assert_eq!(users[0].name, "Alice");
//! ```
//!
//! ### Reproducible Pivots
//!
//! The quicksorts choose pivots at random. A [`Sorter`] owns the generator so results (including
//! the relative order of ties) can be replayed from a seed.
//!
//! ```rust
//! use cmpsort::Sorter;
//!
//! let mut sorter = Sorter::seeded(7);
//! assert_eq!(sorter.quicksort_copy(&[2.5, -1.0, 0.0]), vec![-1.0, 0.0, 2.5]);
//! ```
//!
//! ## Stability
//!
//! None of the routines guarantee stability. Merge takes from the right input on ties, and the
//! quicksorts reorder equal elements depending on the pivots drawn.

pub mod algo;
pub mod core;
pub mod error;
pub mod sorter;

pub use crate::algo::{
    Strategy, merge, merge_by, merge_sort, merge_sort_by, quicksort_copy, quicksort_copy_by,
    quicksort_inplace, quicksort_inplace_by, try_merge_by,
};
pub use crate::core::{
    LastDigit, by_tag, cmp_last_digit, cmp_reverse, cmp_standard, is_sorted_by,
    ordering_from_tag, ordering_to_tag,
};
pub use crate::error::{Input, Result, SortError};
pub use crate::sorter::{SEED_ENV_VAR, Sorter};

pub mod prelude {
    pub use crate::algo::{
        merge, merge_by, merge_sort, merge_sort_by, quicksort_copy, quicksort_copy_by,
        quicksort_inplace, quicksort_inplace_by,
    };
    pub use crate::core::{cmp_last_digit, cmp_reverse, cmp_standard, is_sorted_by};
    pub use crate::sorter::Sorter;
}
