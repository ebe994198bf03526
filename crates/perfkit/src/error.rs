//! Error types for perfkit.
//!
//! The two core routines ([`sequence_sum`](crate::sequence::sequence_sum) and
//! [`find_occurrences`](crate::search::find_occurrences)) are total and never
//! return an error. The types here cover the checked and buffer-filling
//! variants, where an integer width or a buffer size can be exceeded.

use thiserror::Error;

/// The main error type for perfkit operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An arithmetic result no longer fits in the chosen integer type.
    ///
    /// For the sequence calculator `index` is the first Fibonacci index whose
    /// term or running sum overflowed. For the even-square filter it is the
    /// position of the offending input value.
    #[error("arithmetic overflow in {operation} at index {index}")]
    Overflow {
        /// Name of the operation that overflowed.
        operation: &'static str,
        /// Index at which the overflow was detected.
        index: u64,
    },

    /// Failed to convert a numeric value to the target type.
    #[error("numeric conversion failed: {context}")]
    NumericConversion {
        /// Description of the conversion that failed.
        context: &'static str,
    },

    /// The requested output size does not fit in `usize`.
    #[error("output capacity overflow in {operation}")]
    CapacityOverflow {
        /// Name of the operation whose output would be too large.
        operation: &'static str,
    },
}

/// Convenience type alias for Results using the perfkit Error type.
pub type Result<T> = std::result::Result<T, Error>;
