//! Core traits for perfkit integer routines.
//!
//! The sequence calculator is generic over the integer type it accumulates
//! in. [`SequenceElement`] abstracts over every primitive integer so callers
//! that need more headroom than `i64` can pick `u128` or `i128` without a
//! separate code path.
//!
//! # Example
//!
//! ```
//! use perfkit::traits::SequenceElement;
//!
//! fn checked_total<T: SequenceElement>(values: &[u64]) -> perfkit::Result<T> {
//!     let mut total = T::zero();
//!     for &v in values {
//!         total = total.checked_step(T::from_u64(v)?).ok_or(perfkit::Error::Overflow {
//!             operation: "checked_total",
//!             index: v,
//!         })?;
//!     }
//!     Ok(total)
//! }
//!
//! assert_eq!(checked_total::<u8>(&[100, 100]).ok(), Some(200));
//! assert!(checked_total::<u8>(&[200, 100]).is_err());
//! ```

use std::fmt::Debug;

use num_traits::{NumCast, PrimInt};

use crate::error::{Error, Result};

/// A trait for integer types the sequence calculator can accumulate in.
///
/// # Type Bounds
///
/// - `PrimInt`: primitive integer arithmetic, including checked addition
/// - `Default + Debug`: available on every primitive integer
/// - `Send + Sync + 'static`: values can cross threads freely
pub trait SequenceElement: PrimInt + Default + Debug + Send + Sync + 'static {
    /// Creates a sequence element from a `u64` value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_u64(value: u64) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "u64 to sequence element",
        })
    }

    /// Adds two elements, returning `None` when the result does not fit.
    #[inline]
    #[must_use]
    fn checked_step(self, other: Self) -> Option<Self> {
        self.checked_add(&other)
    }
}

impl SequenceElement for u8 {}
impl SequenceElement for u16 {}
impl SequenceElement for u32 {}
impl SequenceElement for u64 {}
impl SequenceElement for u128 {}
impl SequenceElement for usize {}
impl SequenceElement for i8 {}
impl SequenceElement for i16 {}
impl SequenceElement for i32 {}
impl SequenceElement for i64 {}
impl SequenceElement for i128 {}
impl SequenceElement for isize {}
