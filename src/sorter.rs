//! Configurable entry point owning the pivot randomness.
//!
//! The free functions in [`algo`](crate::algo) pull pivots from the thread-local generator.
//! A [`Sorter`] instead threads its own generator through every call, which makes runs
//! reproducible under a fixed seed and lets callers pick the in-place [`Strategy`].

use std::cmp::Ordering;
use std::env;
use std::ffi::OsString;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::algo::{self, Strategy};
use crate::core::cmp_standard;
use crate::error::{Result, SortError};

/// Environment variable read by [`Sorter::from_env`].
pub const SEED_ENV_VAR: &str = "CMPSORT_SEED";

/// Sorting front end with an explicit source of pivot randomness.
///
/// # Examples
///
/// ```
/// use cmpsort::{Sorter, Strategy, cmp_reverse};
///
/// let mut sorter = Sorter::seeded(42).strategy(Strategy::ExplicitStack);
///
/// let mut data = vec![3, 9, 1, 7];
/// sorter.quicksort_inplace_by(&mut data, cmp_reverse);
/// assert_eq!(data, vec![9, 7, 3, 1]);
/// ```
#[derive(Clone, Debug)]
pub struct Sorter<R = StdRng> {
    rng: R,
    strategy: Strategy,
}

impl Sorter<StdRng> {
    /// Creates a sorter seeded from the operating system.
    pub fn new() -> Self {
        debug!("sorter seeded from os");
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates a sorter whose pivot choices are fully determined by `seed`.
    pub fn seeded(seed: u64) -> Self {
        debug!("sorter seeded with {seed}");
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Creates a sorter seeded from [`SEED_ENV_VAR`], falling back to [`Sorter::new`] when the
    /// variable is unset.
    ///
    /// # Errors
    ///
    /// [`SortError::InvalidSeed`] if the variable is set but is not a `u64`, and
    /// [`SortError::SeedNotUnicode`] if it is set to bytes that are not UTF-8.
    pub fn from_env() -> Result<Self> {
        Self::from_seed_var(env::var_os(SEED_ENV_VAR))
    }

    fn from_seed_var(var: Option<OsString>) -> Result<Self> {
        match var {
            None => Ok(Self::new()),
            Some(raw) => match raw.into_string() {
                Ok(value) => Ok(Self::seeded(parse_seed(value)?)),
                Err(raw) => Err(SortError::SeedNotUnicode {
                    value: raw.to_string_lossy().into_owned(),
                }),
            },
        }
    }
}

impl Default for Sorter<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Sorter<R> {
    /// Wraps an existing generator.
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            strategy: Strategy::default(),
        }
    }

    /// Sets the traversal used by [`Sorter::quicksort_inplace_by`].
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        debug!("sorter strategy set to {strategy:?}");
        self.strategy = strategy;
        self
    }

    /// Returns the traversal [`Sorter::quicksort_inplace_by`] will use.
    pub fn current_strategy(&self) -> Strategy {
        self.strategy
    }

    /// See [`algo::merge`]. Merging is deterministic and ignores the generator.
    pub fn merge<T: PartialOrd + Clone>(&self, xs: &[T], ys: &[T]) -> Vec<T> {
        self.merge_by(xs, ys, cmp_standard)
    }

    /// See [`algo::merge_by`].
    pub fn merge_by<T, F>(&self, xs: &[T], ys: &[T], compare: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        algo::merge_by(xs, ys, compare)
    }

    /// See [`algo::merge_sort`]. Merge sort is deterministic and ignores the generator.
    pub fn merge_sort<T: PartialOrd + Clone>(&self, v: &[T]) -> Vec<T> {
        self.merge_sort_by(v, cmp_standard)
    }

    /// See [`algo::merge_sort_by`].
    pub fn merge_sort_by<T, F>(&self, v: &[T], compare: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        algo::merge_sort_by(v, compare)
    }

    /// Returns a copy of `v` sorted with [`cmp_standard`], drawing pivots from this sorter.
    pub fn quicksort_copy<T: PartialOrd + Clone>(&mut self, v: &[T]) -> Vec<T> {
        self.quicksort_copy_by(v, cmp_standard)
    }

    /// See [`algo::quicksort_copy_by`].
    pub fn quicksort_copy_by<T, F>(&mut self, v: &[T], mut compare: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        algo::quicksort_copy_with(v, &mut compare, &mut self.rng)
    }

    /// Sorts `v` in place with [`cmp_standard`], using this sorter's generator and strategy.
    pub fn quicksort_inplace<T: PartialOrd>(&mut self, v: &mut [T]) {
        self.quicksort_inplace_by(v, cmp_standard);
    }

    /// See [`algo::quicksort_inplace_by`].
    pub fn quicksort_inplace_by<T, F>(&mut self, v: &mut [T], mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        algo::quicksort_inplace_with(v, &mut compare, &mut self.rng, self.strategy);
    }
}

fn parse_seed(value: String) -> Result<u64> {
    value
        .trim()
        .parse()
        .map_err(|source| SortError::InvalidSeed { value, source })
}
