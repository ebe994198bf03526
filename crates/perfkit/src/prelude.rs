//! Commonly used types and functions for convenient importing.
//!
//! # Usage
//!
//! ```
//! use perfkit::prelude::*;
//!
//! assert_eq!(sequence_sum(10), 143);
//! assert_eq!(count_occurrences("aaa", "aa"), 2);
//! assert_eq!(repeat_concat(&["ab"], 2).unwrap(), "abab");
//! ```

// Error types
pub use crate::error::{Error, Result};

// Traits
pub use crate::traits::SequenceElement;

// Sequence calculator
pub use crate::sequence::{
    checked_sequence_sum, fibonacci, sequence_sum, sequence_sum_as, FibonacciMemo,
    MAX_MEMO_TERMS,
};

// Substring locator
pub use crate::search::{
    count_occurrences, find_occurrences, find_occurrences_into, fold_char, Search,
};

// Strings and collections
pub use crate::concat::{repeat_concat, repeat_concat_into};
pub use crate::filter::{filter_and_transform, filter_and_transform_into, SQUARE_THRESHOLD};
