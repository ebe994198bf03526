//! Repeated string concatenation with a single up-front allocation.
//!
//! Appending parts one by one to a growing string reallocates every time the
//! buffer fills. Here the exact output length is computed first, the buffer
//! is reserved once, and every append is a plain copy.

use crate::error::{Error, Result};

/// Exact byte length of `parts` concatenated `repeat_count` times.
///
/// # Errors
///
/// Returns `Error::CapacityOverflow` if the length does not fit in `usize`.
///
/// ```
/// use perfkit::concat::concat_capacity;
///
/// assert_eq!(concat_capacity(&["ab", "c"], 4).unwrap(), 12);
/// assert!(concat_capacity(&["ab"], usize::MAX).is_err());
/// ```
pub fn concat_capacity<S: AsRef<str>>(parts: &[S], repeat_count: usize) -> Result<usize> {
    let overflow = Error::CapacityOverflow {
        operation: "repeat_concat",
    };
    let round = parts
        .iter()
        .try_fold(0_usize, |acc, part| acc.checked_add(part.as_ref().len()))
        .ok_or(overflow.clone())?;
    round.checked_mul(repeat_count).ok_or(overflow)
}

/// Appends `parts`, in order, `repeat_count` times to `output`.
///
/// Existing contents of `output` are kept. The additional space is reserved
/// before the first append.
///
/// # Errors
///
/// Returns `Error::CapacityOverflow` if the appended length does not fit in
/// `usize`. `output` is left untouched in that case.
pub fn repeat_concat_into<S: AsRef<str>>(
    parts: &[S],
    repeat_count: usize,
    output: &mut String,
) -> Result<()> {
    let additional = concat_capacity(parts, repeat_count)?;
    if additional == 0 {
        return Ok(());
    }
    output.reserve_exact(additional);

    for _ in 0..repeat_count {
        for part in parts {
            output.push_str(part.as_ref());
        }
    }

    Ok(())
}

/// Concatenates `parts`, in order, `repeat_count` times.
///
/// No parts or zero repeats give an empty string.
///
/// # Errors
///
/// Returns `Error::CapacityOverflow` if the output length does not fit in
/// `usize`.
///
/// # Example
///
/// ```
/// use perfkit::concat::repeat_concat;
///
/// assert_eq!(repeat_concat(&["ab", "-"], 3).unwrap(), "ab-ab-ab-");
/// assert_eq!(repeat_concat::<&str>(&[], 10).unwrap(), "");
/// ```
pub fn repeat_concat<S: AsRef<str>>(parts: &[S], repeat_count: usize) -> Result<String> {
    let mut output = String::new();
    repeat_concat_into(parts, repeat_count, &mut output)?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]
    use super::*;

    #[test]
    fn test_basic_concat() {
        let parts = vec!["Hello", ", ", "World"];
        assert_eq!(repeat_concat(&parts, 1).unwrap(), "Hello, World");
        assert_eq!(
            repeat_concat(&parts, 2).unwrap(),
            "Hello, WorldHello, World"
        );
    }

    #[test]
    fn test_zero_repeats() {
        assert_eq!(repeat_concat(&["abc"], 0).unwrap(), "");
    }

    #[test]
    fn test_owned_parts() {
        let parts: Vec<String> = vec!["x".into(), "yz".into()];
        assert_eq!(repeat_concat(&parts, 3).unwrap(), "xyzxyzxyz");
    }

    #[test]
    fn test_exact_capacity() {
        let parts = ["ä", "bc"];
        let result = repeat_concat(&parts, 5).unwrap();
        assert_eq!(result.len(), concat_capacity(&parts, 5).unwrap());
        assert_eq!(result.len(), 20);
    }

    #[test]
    fn test_into_appends() {
        let mut output = String::from(">");
        repeat_concat_into(&["ab"], 2, &mut output).unwrap();
        assert_eq!(output, ">abab");
    }

    #[test]
    fn test_capacity_overflow() {
        let result = repeat_concat(&["ab"], usize::MAX);
        assert_eq!(
            result,
            Err(Error::CapacityOverflow {
                operation: "repeat_concat"
            })
        );

        let mut output = String::from("kept");
        assert!(repeat_concat_into(&["ab"], usize::MAX, &mut output).is_err());
        assert_eq!(output, "kept");
    }

    #[test]
    fn test_empty_parts_with_huge_count() {
        // Nothing to copy, so no capacity issue and no work.
        assert_eq!(repeat_concat(&["", ""], usize::MAX).unwrap(), "");
    }
}
