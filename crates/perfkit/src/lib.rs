//! perfkit: paired baseline and optimized routines
//!
//! This crate collects small routines where a straightforward implementation
//! and a tuned one are easy to compare. Every tuned routine has a reference
//! it is tested against, and the `perfkit-experiments` crate benchmarks the
//! pairs.
//!
//! # Features
//!
//! - **Memoization**: Fibonacci sums in O(n) instead of O(φⁿ)
//! - **Unicode-safe search**: case-insensitive substring offsets counted in
//!   `char`s, with original-case match text
//! - **Generics**: sums accumulate in any primitive integer type
//! - **Checked arithmetic**: `checked_*` and `_into` variants report overflow
//!   as typed errors
//!
//! # Quick Start
//!
//! ```
//! use perfkit::prelude::*;
//!
//! // 1 + 1 + 2 + 3 + 5
//! assert_eq!(sequence_sum(5), 12);
//!
//! let found = find_occurrences("FooBar", "bar");
//! assert_eq!(found[&3], "Bar");
//! ```
//!
//! # Available Routines
//!
//! ## Sequences
//! - [`sequence::sequence_sum()`]: memoized sum of the first N Fibonacci terms
//! - [`sequence::checked_sequence_sum()`]: the same, generic and overflow-checked
//! - [`sequence::sequence_sum_recursive()`]: naive exponential reference
//!
//! ## Search
//! - [`search::find_occurrences()`]: case-insensitive, overlapping substring offsets
//! - [`search::Search`]: configurable case sensitivity and overlap
//!
//! ## Strings and Collections
//! - [`concat::repeat_concat()`]: repeated concatenation with one allocation
//! - [`filter::filter_and_transform()`]: fused even-square filter
//!
//! # Error Handling
//!
//! The core routines are total. Checked variants return [`Result<T, Error>`]:
//!
//! ```
//! use perfkit::prelude::*;
//!
//! assert!(checked_sequence_sum::<u8>(12).is_err());
//! assert!(filter_and_transform(&[i64::MAX - 1]).is_err());
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::nursery)]
#![warn(clippy::needless_collect)]
#![warn(clippy::or_fun_call)]
#![warn(clippy::inefficient_to_string)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]

pub mod concat;
pub mod error;
pub mod filter;
pub mod prelude;
pub mod search;
pub mod sequence;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use search::{find_occurrences, Search};
pub use sequence::sequence_sum;
pub use traits::SequenceElement;
