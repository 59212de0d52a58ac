//! Core sorting algorithms (merge sort and randomized quicksort).
//!
//! This module implements:
//! - **Merge**: Linear-time merge of two sorted sequences.
//! - **Merge Sort**: Top-down divide and conquer built on the merge step.
//! - **Copying Quicksort**: Three-way split around a random pivot into fresh vectors.
//! - **In-place Quicksort**: Lomuto partitioning over the caller's slice with a random pivot.
//!
//! Every routine has a default form ordering by [`cmp_standard`] and a `_by` form taking any
//! `FnMut(&T, &T) -> Ordering`. The free functions draw pivots from the thread-local generator;
//! use [`Sorter`](crate::Sorter) to control the randomness.

use std::cmp::Ordering;
use std::mem;

use log::trace;
use rand::Rng;

use crate::core::{cmp_standard, first_descent};
use crate::error::{Input, Result, SortError};

/// How [`quicksort_inplace`] walks the partitions it produces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Recurse into the smaller side and loop on the larger one. Call depth stays below
    /// `log2(len)` and nothing is allocated.
    #[default]
    Recursive,
    /// Keep pending ranges on an explicit work stack instead of the call stack.
    ExplicitStack,
}

/// Merges two sorted slices into a new sorted vector.
///
/// # Examples
///
/// ```
/// use cmpsort::merge;
///
/// assert_eq!(merge(&[1, 3, 5], &[2, 4, 6]), vec![1, 2, 3, 4, 5, 6]);
/// ```
pub fn merge<T: PartialOrd + Clone>(xs: &[T], ys: &[T]) -> Vec<T> {
    merge_by(xs, ys, cmp_standard)
}

/// Merges two slices, each sorted under `compare`, into a new vector sorted under `compare`.
///
/// Runs in `O(xs.len() + ys.len())`. When `compare` reports a tie the element from `ys` is
/// emitted first, so the merge is not stable with respect to `xs`.
///
/// Inputs that are not sorted produce an unspecified (but complete) result; see
/// [`try_merge_by`] for a checked version.
pub fn merge_by<T, F>(xs: &[T], ys: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    trace!("merge: left={} right={}", xs.len(), ys.len());
    merge_iter(xs.iter().cloned(), ys.iter().cloned(), &mut compare)
}

/// Like [`merge_by`], but first verifies that both inputs are sorted under `compare`.
///
/// # Errors
///
/// [`SortError::Unsorted`] naming the offending input and the index of its first descent.
pub fn try_merge_by<T, F>(xs: &[T], ys: &[T], mut compare: F) -> Result<Vec<T>>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if let Some(index) = first_descent(xs, &mut compare) {
        return Err(SortError::Unsorted {
            input: Input::Left,
            index,
        });
    }
    if let Some(index) = first_descent(ys, &mut compare) {
        return Err(SortError::Unsorted {
            input: Input::Right,
            index,
        });
    }

    Ok(merge_by(xs, ys, compare))
}

/// Returns a sorted copy of `v` using merge sort.
///
/// # Examples
///
/// ```
/// use cmpsort::merge_sort;
///
/// let data = vec![5, 1, 4, 2];
/// assert_eq!(merge_sort(&data), vec![1, 2, 4, 5]);
/// assert_eq!(data, vec![5, 1, 4, 2]);
/// ```
pub fn merge_sort<T: PartialOrd + Clone>(v: &[T]) -> Vec<T> {
    merge_sort_by(v, cmp_standard)
}

/// Returns a copy of `v` sorted under `compare` using merge sort.
///
/// `O(n log n)` comparisons, `O(n)` auxiliary memory. Each element is cloned exactly once.
pub fn merge_sort_by<T, F>(v: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    trace!("merge_sort: len={}", v.len());
    merge_sort_owned(v.to_vec(), &mut compare)
}

/// Returns a sorted copy of `v` using quicksort with a random pivot.
///
/// # Examples
///
/// ```
/// use cmpsort::quicksort_copy;
///
/// assert_eq!(quicksort_copy(&[3, 1, 2]), vec![1, 2, 3]);
/// ```
pub fn quicksort_copy<T: PartialOrd + Clone>(v: &[T]) -> Vec<T> {
    quicksort_copy_by(v, cmp_standard)
}

/// Returns a copy of `v` sorted under `compare` using quicksort with a random pivot.
///
/// Expected `O(n log n)`. Pivots come from [`rand::rng`].
pub fn quicksort_copy_by<T, F>(v: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort_copy_with(v, &mut compare, &mut rand::rng())
}

/// Sorts `v` in place using Lomuto-partition quicksort with a random pivot.
///
/// # Examples
///
/// ```
/// use cmpsort::quicksort_inplace;
///
/// let mut data = vec!["pear", "apple", "fig"];
/// quicksort_inplace(&mut data);
/// assert_eq!(data, vec!["apple", "fig", "pear"]);
/// ```
pub fn quicksort_inplace<T: PartialOrd>(v: &mut [T]) {
    quicksort_inplace_by(v, cmp_standard);
}

/// Sorts `v` in place under `compare` using Lomuto-partition quicksort with a random pivot.
///
/// Elements are only ever swapped, and no buffer proportional to `v.len()` is allocated.
/// Pivots come from [`rand::rng`].
pub fn quicksort_inplace_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort_inplace_with(v, &mut compare, &mut rand::rng(), Strategy::default());
}

pub(crate) fn quicksort_copy_with<T, F, R>(v: &[T], compare: &mut F, rng: &mut R) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
    R: Rng,
{
    trace!("quicksort_copy: len={}", v.len());
    quicksort_owned(v.to_vec(), compare, rng)
}

pub(crate) fn quicksort_inplace_with<T, F, R>(
    v: &mut [T],
    compare: &mut F,
    rng: &mut R,
    strategy: Strategy,
) where
    F: FnMut(&T, &T) -> Ordering,
    R: Rng,
{
    trace!("quicksort_inplace: len={} strategy={:?}", v.len(), strategy);
    match strategy {
        Strategy::Recursive => quicksort_recursive(v, compare, rng),
        Strategy::ExplicitStack => quicksort_explicit_stack(v, compare, rng),
    }
}

pub(crate) fn merge_sort_owned<T, F>(mut v: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len <= 1 {
        return v;
    }

    // Left half gets the smaller share on odd lengths.
    let right = v.split_off(len / 2);
    let left = merge_sort_owned(v, compare);
    let right = merge_sort_owned(right, compare);

    merge_iter(left, right, compare)
}

fn merge_iter<T, I, J, F>(xs: I, ys: J, compare: &mut F) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    I::IntoIter: ExactSizeIterator,
    J: IntoIterator<Item = T>,
    J::IntoIter: ExactSizeIterator,
    F: FnMut(&T, &T) -> Ordering,
{
    let xs = xs.into_iter();
    let ys = ys.into_iter();
    let mut merged = Vec::with_capacity(xs.len() + ys.len());

    let mut xs = xs.peekable();
    let mut ys = ys.peekable();

    loop {
        let take_left = match (xs.peek(), ys.peek()) {
            (Some(x), Some(y)) => compare(x, y) == Ordering::Less,
            _ => break,
        };

        if take_left {
            merged.extend(xs.next());
        } else {
            merged.extend(ys.next());
        }
    }

    // At most one of these is non-empty.
    merged.extend(xs);
    merged.extend(ys);

    merged
}

/// Three-way split around a random pivot.
///
/// The elements equal to the pivot are kept as they are rather than reproduced from the pivot,
/// so coarse comparators like [`cmp_last_digit`](crate::cmp_last_digit) still yield a
/// permutation of the input.
fn quicksort_owned<T, F, R>(mut v: Vec<T>, compare: &mut F, rng: &mut R) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
    R: Rng,
{
    let len = v.len();
    if len <= 1 {
        return v;
    }

    let pivot = v.swap_remove(rng.random_range(0..len));

    let mut less = Vec::new();
    let mut equal = Vec::new();
    let mut greater = Vec::new();

    for elem in v {
        match compare(&elem, &pivot) {
            Ordering::Less => less.push(elem),
            Ordering::Equal => equal.push(elem),
            Ordering::Greater => greater.push(elem),
        }
    }

    let mut sorted = quicksort_owned(less, compare, rng);
    sorted.reserve(len - sorted.len());
    sorted.push(pivot);
    sorted.append(&mut equal);
    sorted.append(&mut quicksort_owned(greater, compare, rng));

    sorted
}

fn quicksort_recursive<T, F, R>(mut v: &mut [T], compare: &mut F, rng: &mut R)
where
    F: FnMut(&T, &T) -> Ordering,
    R: Rng,
{
    loop {
        if v.len() < 2 {
            return;
        }

        let mid = lomuto_partition(v, compare, rng);
        let (left, right) = mem::take(&mut v).split_at_mut(mid);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quicksort_recursive(left, compare, rng);
            v = right;
        } else {
            quicksort_recursive(right, compare, rng);
            v = left;
        }
    }
}

fn quicksort_explicit_stack<T, F, R>(v: &mut [T], compare: &mut F, rng: &mut R)
where
    F: FnMut(&T, &T) -> Ordering,
    R: Rng,
{
    if v.len() < 2 {
        return;
    }

    // Half-open `[lo, hi)` ranges. Popping the smaller side first bounds the stack to
    // `log2(len) + 1` entries.
    let mut pending: Vec<(usize, usize)> = Vec::with_capacity(usize::BITS as usize);
    pending.push((0, v.len()));

    while let Some((lo, hi)) = pending.pop() {
        let mid = lo + lomuto_partition(&mut v[lo..hi], compare, rng);
        let left = (lo, mid);
        let right = (mid + 1, hi);

        let (larger, smaller) = if left.1 - left.0 < right.1 - right.0 {
            (right, left)
        } else {
            (left, right)
        };

        for range in [larger, smaller] {
            if range.1 - range.0 >= 2 {
                pending.push(range);
            }
        }
    }
}

/// Lomuto partition of `v` around a randomly chosen element.
///
/// The pivot is swapped to the end, every element comparing less is moved in front of the
/// store boundary, and the pivot is then swapped onto the boundary. Returns the pivot's final
/// index. `v` must not be empty.
fn lomuto_partition<T, F, R>(v: &mut [T], compare: &mut F, rng: &mut R) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
    R: Rng,
{
    let last = v.len() - 1;
    v.swap(rng.random_range(0..=last), last);

    let mut store = 0;
    for i in 0..last {
        if compare(&v[i], &v[last]) == Ordering::Less {
            v.swap(i, store);
            store += 1;
        }
    }

    v.swap(store, last);
    store
}
