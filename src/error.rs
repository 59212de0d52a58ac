//! Error type for the checked surfaces of the crate.
//!
//! The sort routines themselves are total. Only tag conversion, the checked
//! merge and environment-driven configuration can fail.

use std::fmt;
use std::num::ParseIntError;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SortError>;

/// Which argument of a merge violated the sortedness precondition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Left,
    Right,
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Left => f.write_str("left"),
            Input::Right => f.write_str("right"),
        }
    }
}

#[derive(Debug, Error)]
pub enum SortError {
    #[error("comparator returned {0}, expected one of -1, 0, 1")]
    InvalidTag(i32),

    /// `index` is the position of the first element that compares greater
    /// than its successor.
    #[error("{input} merge input is not sorted at index {index}")]
    Unsorted { input: Input, index: usize },

    #[error("invalid pivot seed {value:?}")]
    InvalidSeed {
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// The seed variable is set but holds bytes that are not UTF-8. `value` is the lossy
    /// rendering of those bytes.
    #[error("pivot seed {value:?} is not valid unicode")]
    SeedNotUnicode { value: String },
}
