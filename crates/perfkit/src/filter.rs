//! Single-pass even-square filter.
//!
//! Keeps the even inputs, squares them, and keeps the squares above
//! [`SQUARE_THRESHOLD`]. The three steps run fused in one loop, writing
//! straight into the output vector with no intermediate collections.

use tracing::debug;

use crate::error::{Error, Result};

/// Squares must be strictly greater than this to be kept.
pub const SQUARE_THRESHOLD: i64 = 100;

/// Clears `output` and fills it with the kept squares, in input order.
///
/// Returns the number of values written.
///
/// # Errors
///
/// Returns `Error::Overflow` with the input position if squaring an even
/// value overflows `i64`. `output` holds the squares kept before that
/// position.
pub fn filter_and_transform_into(numbers: &[i64], output: &mut Vec<i64>) -> Result<usize> {
    output.clear();

    for (index, &value) in numbers.iter().enumerate() {
        if value % 2 != 0 {
            continue;
        }
        let square = value.checked_mul(value).ok_or_else(|| {
            debug!(index, value, "square overflowed");
            Error::Overflow {
                operation: "filter_and_transform",
                index: index as u64,
            }
        })?;
        if square > SQUARE_THRESHOLD {
            output.push(square);
        }
    }

    Ok(output.len())
}

/// Squares of the even inputs that exceed [`SQUARE_THRESHOLD`], in input order.
///
/// # Errors
///
/// Returns `Error::Overflow` if squaring an even input overflows `i64`.
///
/// # Example
///
/// ```
/// use perfkit::filter::filter_and_transform;
///
/// // 2² = 4 and 10² = 100 are not above the threshold; odd values are dropped.
/// let kept = filter_and_transform(&[2, 3, 10, 11, 12, -20]).unwrap();
/// assert_eq!(kept, vec![144, 400]);
/// ```
pub fn filter_and_transform(numbers: &[i64]) -> Result<Vec<i64>> {
    let mut output = Vec::new();
    filter_and_transform_into(numbers, &mut output)?;
    Ok(output)
}
