//! Unoptimized baselines for the perfkit routines.
//!
//! Each function here is the straightforward version of a perfkit routine
//! and produces the same result. Benchmarks time the two side by side;
//! the tests below check that they agree.
//!
//! | Baseline                         | Optimized counterpart                    | Cost of the baseline                 |
//! |----------------------------------|------------------------------------------|--------------------------------------|
//! | [`sequence_sum_recursive`]       | [`perfkit::sequence::sequence_sum`]      | exponential recomputation            |
//! | [`find_occurrences_allocating`]  | [`perfkit::search::find_occurrences`]    | one `String` per candidate window    |
//! | [`concat_reallocating`]          | [`perfkit::concat::repeat_concat`]       | a fresh string per append            |
//! | [`filter_three_pass`]            | [`perfkit::filter::filter_and_transform`]| two intermediate vectors             |

use std::collections::BTreeMap;

use perfkit::search::fold_char;

pub use perfkit::sequence::{fibonacci_recursive, sequence_sum_recursive};

/// Window-by-window search that allocates a folded `String` per candidate.
///
/// Same results as [`perfkit::search::find_occurrences`].
#[must_use]
pub fn find_occurrences_allocating(text: &str, query: &str) -> BTreeMap<usize, String> {
    let mut result = BTreeMap::new();

    let lower_text: String = text.chars().map(fold_char).collect();
    let lower_query: String = query.chars().map(fold_char).collect();
    let text_len = lower_text.chars().count();
    let query_len = lower_query.chars().count();

    if query_len == 0 {
        return result;
    }

    for i in 0..text_len {
        if i + query_len > text_len {
            break;
        }
        let candidate: String = lower_text.chars().skip(i).take(query_len).collect();
        if candidate == lower_query {
            result.insert(i, text.chars().skip(i).take(query_len).collect());
        }
    }

    result
}

/// Repeated concatenation building a new `String` on every append.
///
/// Same result as [`perfkit::concat::repeat_concat`].
#[must_use]
pub fn concat_reallocating<S: AsRef<str>>(parts: &[S], repeat_count: usize) -> String {
    let mut result = String::new();
    for _ in 0..repeat_count {
        for part in parts {
            result = format!("{result}{}", part.as_ref());
        }
    }
    result
}

/// Three separate passes: keep evens, square, keep squares above the threshold.
///
/// Same result as [`perfkit::filter::filter_and_transform`] for inputs whose
/// even squares fit in `i64`. Uses wrapping multiplication.
#[must_use]
pub fn filter_three_pass(numbers: &[i64]) -> Vec<i64> {
    let mut filtered = Vec::new();
    for &n in numbers {
        if n % 2 == 0 {
            filtered.push(n);
        }
    }

    let mut squared = Vec::new();
    for &n in &filtered {
        squared.push(n.wrapping_mul(n));
    }

    let mut result = Vec::new();
    for &n in &squared {
        if n > perfkit::filter::SQUARE_THRESHOLD {
            result.push(n);
        }
    }
    result
}
