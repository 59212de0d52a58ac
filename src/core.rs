//! Comparators and ordering helpers.
//!
//! This module defines:
//! - The three stock comparators: [`cmp_standard`], [`cmp_reverse`] and [`cmp_last_digit`].
//! - [`LastDigit`]: The trait bounding [`cmp_last_digit`] to integer types.
//! - Conversions between [`Ordering`] and the `-1 / 0 / 1` integer tags.
//!
//! Every sort routine in this crate accepts any `FnMut(&T, &T) -> Ordering`, so these
//! functions can be passed by name:
//!
//! ```
//! use cmpsort::{cmp_reverse, merge_sort_by};
//!
//! let sorted = merge_sort_by(&[2, 9, 4], cmp_reverse);
//! assert_eq!(sorted, vec![9, 4, 2]);
//! ```

use std::cmp::Ordering;

use crate::error::{Result, SortError};

/// Orders from lowest to highest.
///
/// Pairs that are neither `a < b` nor `b < a` (for example a NaN against anything) compare
/// [`Ordering::Equal`].
#[inline]
pub fn cmp_standard<T: PartialOrd + ?Sized>(a: &T, b: &T) -> Ordering {
    if a < b {
        Ordering::Less
    } else if b < a {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Orders from highest to lowest.
#[inline]
pub fn cmp_reverse<T: PartialOrd + ?Sized>(a: &T, b: &T) -> Ordering {
    cmp_standard(a, b).reverse()
}

/// Orders integers by their last decimal digit only.
///
/// Values sharing a last digit compare equal regardless of magnitude. Negative values use the
/// non-negative remainder, so `-21` sorts with the `9`s.
///
/// Only integer types implement [`LastDigit`], so other element types are rejected at compile
/// time:
///
/// ```compile_fail
/// use cmpsort::{cmp_last_digit, merge_sort_by};
///
/// let _ = merge_sort_by(&[1.5, 2.5], cmp_last_digit);
/// ```
///
/// ```compile_fail
/// use cmpsort::{cmp_last_digit, quicksort_inplace_by};
///
/// let mut words = vec!["ten", "one"];
/// quicksort_inplace_by(&mut words, cmp_last_digit);
/// ```
#[inline]
pub fn cmp_last_digit<T: LastDigit>(a: &T, b: &T) -> Ordering {
    cmp_standard(&a.last_digit(), &b.last_digit())
}

/// Integer types that expose their last decimal digit.
pub trait LastDigit {
    /// Returns the Euclidean remainder of `self` divided by 10, always in `0..=9`.
    fn last_digit(&self) -> u8;
}

macro_rules! impl_last_digit {
    ($($t:ty),* $(,)?) => {
        $(
            impl LastDigit for $t {
                #[inline]
                fn last_digit(&self) -> u8 {
                    // Always in 0..=9, the cast cannot truncate.
                    self.rem_euclid(10) as u8
                }
            }
        )*
    };
}

impl_last_digit!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Converts an [`Ordering`] to its integer tag.
#[inline]
pub fn ordering_to_tag(ordering: Ordering) -> i32 {
    ordering as i32
}

/// Converts an integer tag back to an [`Ordering`].
///
/// Only `-1`, `0` and `1` are accepted; anything else is [`SortError::InvalidTag`].
pub fn ordering_from_tag(tag: i32) -> Result<Ordering> {
    match tag {
        -1 => Ok(Ordering::Less),
        0 => Ok(Ordering::Equal),
        1 => Ok(Ordering::Greater),
        other => Err(SortError::InvalidTag(other)),
    }
}

/// Adapts an integer-returning comparator, interpreting the tag by its sign like C `qsort`.
///
/// ```
/// use cmpsort::{by_tag, quicksort_copy_by};
///
/// let sorted = quicksort_copy_by(&[3, 1, 2], by_tag(|a: &i32, b: &i32| a - b));
/// assert_eq!(sorted, vec![1, 2, 3]);
/// ```
pub fn by_tag<T, F>(mut compare: F) -> impl FnMut(&T, &T) -> Ordering
where
    F: FnMut(&T, &T) -> i32,
{
    move |a, b| compare(a, b).cmp(&0)
}

/// Returns `true` if no adjacent pair of `v` compares [`Ordering::Greater`].
pub fn is_sorted_by<T, F>(v: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    first_descent(v, &mut compare).is_none()
}

/// Index of the first element that compares greater than its successor.
pub(crate) fn first_descent<T, F>(v: &[T], compare: &mut F) -> Option<usize>
where
    F: FnMut(&T, &T) -> Ordering,
{
    v.windows(2)
        .position(|pair| compare(&pair[0], &pair[1]) == Ordering::Greater)
}
