//! Memoized Fibonacci sequence sums.
//!
//! Computes the sum of the first N Fibonacci terms, caching every term in a
//! per-call memo table so each F(k) is evaluated exactly once.
//!
//! # Formula
//!
//! ```text
//! F(0) = 0, F(1) = 1, F(k) = F(k-1) + F(k-2)
//! sequence_sum(n) = F(1) + F(2) + ... + F(n)      (0 for n <= 0)
//! ```
//!
//! # Complexity
//!
//! - Memoized: O(n) time, O(n) auxiliary space.
//! - [`sequence_sum_recursive`]: O(φⁿ) time. Kept as the reference the
//!   memoized path is checked and benchmarked against.
//!
//! # Integer Width
//!
//! `sequence_sum(n)` equals `F(n + 2) - 1`, so it outgrows `i64` past
//! `n = 90`. [`sequence_sum`] panics beyond that; use
//! [`checked_sequence_sum`] for an error instead, or pick a wider type with
//! [`sequence_sum_as`].

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::traits::SequenceElement;

/// Upper bound on the number of terms a memo table can hold.
///
/// F(186) is the largest term that fits in `u128`.
pub const MAX_MEMO_TERMS: usize = 188;

/// Lazily filled table of Fibonacci terms, keyed by index.
///
/// `terms[k]` holds F(k). The table only grows; a term is stored before it is
/// used to derive the next one, so asking for F(k) after F(j), j > k, is a
/// lookup.
///
/// # Example
///
/// ```
/// use perfkit::sequence::FibonacciMemo;
///
/// let mut memo = FibonacciMemo::<u64>::new();
/// assert_eq!(memo.term(10).unwrap(), 55);
/// assert_eq!(memo.len(), 11);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FibonacciMemo<T> {
    terms: Vec<T>,
}

impl<T: SequenceElement> Default for FibonacciMemo<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: SequenceElement> FibonacciMemo<T> {
    /// Creates a memo table seeded with F(0) and F(1).
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(2)
    }

    /// Creates a memo table with room for indices up to `max_index` without
    /// reallocating.
    ///
    /// The reservation is capped at [`MAX_MEMO_TERMS`]: past that point every
    /// supported `T` has already overflowed, so `term` can never store more.
    #[must_use]
    pub fn with_capacity(max_index: usize) -> Self {
        let terms_needed = max_index.saturating_add(1).clamp(2, MAX_MEMO_TERMS);
        let mut terms = Vec::with_capacity(terms_needed);
        terms.push(T::zero());
        terms.push(T::one());
        Self { terms }
    }

    /// Returns F(`index`), computing and caching any missing terms below it.
    ///
    /// # Errors
    ///
    /// - `Error::Overflow` if some F(k), k ≤ `index`, does not fit in `T`.
    ///   Terms computed before the overflow stay cached.
    /// - `Error::NumericConversion` if `index` does not fit in `usize`.
    pub fn term(&mut self, index: u64) -> Result<T> {
        let target = usize::try_from(index).map_err(|_| Error::NumericConversion {
            context: "fibonacci index to usize",
        })?;

        while self.terms.len() <= target {
            let next = self.terms.len();
            let (older, newer) = (self.terms[next - 2], self.terms[next - 1]);
            let term = newer.checked_step(older).ok_or(Error::Overflow {
                operation: "fibonacci",
                index: next as u64,
            })?;
            self.terms.push(term);
        }

        Ok(self.terms[target])
    }

    /// Returns the cached term at `index` without computing anything.
    #[inline]
    #[must_use]
    pub fn cached(&self, index: usize) -> Option<T> {
        self.terms.get(index).copied()
    }

    /// Number of cached terms, counting F(0).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Always `false`: F(0) and F(1) are seeded on construction.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Sums F(1)..=F(`n`) in `T`, reporting overflow instead of panicking.
///
/// Returns `Ok(0)` for `n <= 0`.
///
/// # Errors
///
/// Returns `Error::Overflow` naming the first index whose term
/// (`operation: "fibonacci"`) or running sum (`operation: "sequence_sum"`)
/// does not fit in `T`.
///
/// # Example
///
/// ```
/// use perfkit::sequence::checked_sequence_sum;
///
/// assert_eq!(checked_sequence_sum::<u8>(11).unwrap(), 232);
/// assert!(checked_sequence_sum::<u8>(12).is_err());
/// assert_eq!(checked_sequence_sum::<u128>(100).unwrap(), 927_372_692_193_078_999_175);
/// ```
pub fn checked_sequence_sum<T: SequenceElement>(n: i64) -> Result<T> {
    if n <= 0 {
        return Ok(T::zero());
    }
    trace!(n, "computing memoized sequence sum");

    let n = n.unsigned_abs();
    let mut memo = FibonacciMemo::<T>::new();
    let mut sum = T::zero();

    for index in 1..=n {
        let term = memo.term(index).inspect_err(|err| {
            debug!(n, %err, "sequence term overflowed");
        })?;
        sum = sum.checked_step(term).ok_or_else(|| {
            debug!(n, index, "sequence sum overflowed");
            Error::Overflow {
                operation: "sequence_sum",
                index,
            }
        })?;
    }

    Ok(sum)
}

/// Sums F(1)..=F(`n`) in any [`SequenceElement`] type.
///
/// Returns 0 for `n <= 0`.
///
/// # Panics
///
/// Panics if the sum does not fit in `T`. Use [`checked_sequence_sum`] to
/// get an error instead.
///
/// # Example
///
/// ```
/// use perfkit::sequence::sequence_sum_as;
///
/// let wide: u128 = sequence_sum_as(120);
/// assert_eq!(wide, 14_028_366_653_498_915_298_923_760);
/// ```
#[must_use]
pub fn sequence_sum_as<T: SequenceElement>(n: i64) -> T {
    match checked_sequence_sum(n) {
        Ok(sum) => sum,
        Err(err) => panic!("sequence_sum({n}) does not fit in the target integer: {err}"),
    }
}

/// Sums the first `n` Fibonacci terms: F(1) + ... + F(`n`).
///
/// Returns 0 for `n <= 0`. Each term is computed once through a memo table
/// local to this call.
///
/// # Panics
///
/// Panics for `n > 90`, where the sum exceeds `i64::MAX`.
///
/// # Example
///
/// ```
/// use perfkit::sequence::sequence_sum;
///
/// // 1 + 1 + 2 + 3 + 5
/// assert_eq!(sequence_sum(5), 12);
/// assert_eq!(sequence_sum(0), 0);
/// assert_eq!(sequence_sum(-7), 0);
/// ```
#[must_use]
pub fn sequence_sum(n: i64) -> i64 {
    sequence_sum_as(n)
}

/// Returns F(`index`), or 0 for negative indices.
///
/// # Panics
///
/// Panics for `index > 92`, where F(index) exceeds `i64::MAX`.
#[must_use]
pub fn fibonacci(index: i64) -> i64 {
    if index <= 0 {
        return 0;
    }
    match FibonacciMemo::<i64>::new().term(index.unsigned_abs()) {
        Ok(term) => term,
        Err(err) => panic!("fibonacci({index}) does not fit in i64: {err}"),
    }
}

/// Largest `n` for which [`checked_sequence_sum::<T>`](checked_sequence_sum) succeeds.
///
/// ```
/// use perfkit::sequence::max_checked_index;
///
/// assert_eq!(max_checked_index::<u8>(), 11);
/// assert_eq!(max_checked_index::<i64>(), 90);
/// ```
#[must_use]
pub fn max_checked_index<T: SequenceElement>() -> i64 {
    let mut memo = FibonacciMemo::<T>::new();
    let mut sum = T::zero();
    let mut last_ok = 0_u64;

    loop {
        let index = last_ok + 1;
        let Ok(term) = memo.term(index) else {
            break;
        };
        let Some(next) = sum.checked_step(term) else {
            break;
        };
        sum = next;
        last_ok = index;
    }

    i64::try_from(last_ok).unwrap_or(i64::MAX)
}

/// Naive recursive F(`index`) with no caching; 0 for negative indices.
///
/// Exponential time. Reference implementation only.
#[must_use]
pub fn fibonacci_recursive(index: i64) -> i64 {
    if index <= 1 {
        return index.max(0);
    }
    fibonacci_recursive(index - 1) + fibonacci_recursive(index - 2)
}

/// Sums F(1)..=F(`n`) using [`fibonacci_recursive`] for every term.
///
/// Exponential time. Reference implementation only.
#[must_use]
pub fn sequence_sum_recursive(n: i64) -> i64 {
    (1..=n).map(fibonacci_recursive).sum()
}
