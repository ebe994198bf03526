//! Synthetic data generators for reproducible benchmarks.
//!
//! This module provides deterministic data generators using seeded RNG
//! to ensure reproducibility across benchmark runs.
//!
//! # Key Features
//!
//! - **Deterministic**: Same seed always produces identical output
//! - **Mixed case and scripts**: generated text mixes ASCII and multi-byte
//!   letters in both cases, so case folding and char offsets are exercised
//! - **Planted matches**: a known query can be inserted at a chosen rate
//!
//! # Example Usage
//!
//! ```
//! use perfkit_experiments::data::{generate_integers, generate_parts, generate_text};
//!
//! let text = generate_text(1000, 42);
//! assert_eq!(text.chars().count(), 1000);
//!
//! let numbers = generate_integers(500, 42);
//! assert_eq!(numbers.len(), 500);
//!
//! let parts = generate_parts(8, 5, 42);
//! assert_eq!(parts.len(), 8);
//! ```

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Alphabet for generated text: ASCII, Latin-1 and Greek letters in both
/// cases, plus a space.
pub const TEXT_ALPHABET: [char; 16] = [
    'a', 'A', 'b', 'B', 'e', 'E', 'r', 'R', 'ä', 'Ä', 'ö', 'Ö', 'σ', 'Σ', 'ß', ' ',
];

/// Range of generated integers (inclusive on both ends).
pub const INTEGER_RANGE: (i64, i64) = (-1_000_000, 1_000_000);

/// Generates `n` chars of text drawn uniformly from [`TEXT_ALPHABET`].
#[must_use]
pub fn generate_text(n: usize, seed: u64) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| TEXT_ALPHABET[rng.random_range(0..TEXT_ALPHABET.len())])
        .collect()
}

/// Generates `n` chars of text with `query` planted at roughly `rate` of
/// the positions, each char randomly uppercased.
///
/// The output is exactly `n` chars long; a plant that would cross the end is
/// truncated.
///
/// # Panics
///
/// Panics if `rate` is not within `0.0..=1.0`.
#[must_use]
pub fn generate_text_with_matches(n: usize, query: &str, rate: f64, seed: u64) -> String {
    assert!((0.0..=1.0).contains(&rate), "rate must be in [0, 1]");

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let planted: Vec<char> = query.chars().collect();
    let mut chars = Vec::with_capacity(n);

    while chars.len() < n {
        let r: f64 = rng.random();
        if !planted.is_empty() && r < rate {
            for &c in &planted {
                let flip: bool = rng.random();
                chars.push(if flip { flip_case(c) } else { c });
            }
        } else {
            chars.push(TEXT_ALPHABET[rng.random_range(0..TEXT_ALPHABET.len())]);
        }
    }

    chars.truncate(n);
    chars.into_iter().collect()
}

/// Uppercases `c` when its uppercase form is a single char.
fn flip_case(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(flipped), None) => flipped,
        _ => c,
    }
}

/// Generates `n` integers uniformly from [`INTEGER_RANGE`].
#[must_use]
pub fn generate_integers(n: usize, seed: u64) -> Vec<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let (low, high) = INTEGER_RANGE;
    (0..n).map(|_| rng.random_range(low..=high)).collect()
}

/// Generates `count` string parts, each 1 to `max_len` chars long.
#[must_use]
pub fn generate_parts(count: usize, max_len: usize, seed: u64) -> Vec<String> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let max_len = max_len.max(1);
    (0..count)
        .map(|_| {
            let len = rng.random_range(1..=max_len);
            (0..len)
                .map(|_| TEXT_ALPHABET[rng.random_range(0..TEXT_ALPHABET.len())])
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_text_deterministic() {
        assert_eq!(generate_text(200, 7), generate_text(200, 7));
        assert_ne!(generate_text(200, 7), generate_text(200, 8));
    }

    #[test]
    fn test_generate_text_length_in_chars() {
        let text = generate_text(1234, 42);
        assert_eq!(text.chars().count(), 1234);
        assert!(text.chars().all(|c| TEXT_ALPHABET.contains(&c)));
    }

    #[test]
    fn test_generate_text_with_matches_plants_query() {
        let text = generate_text_with_matches(5_000, "bear", 0.05, 42);
        assert_eq!(text.chars().count(), 5_000);
        let found = perfkit::search::count_occurrences(&text, "bear");
        assert!(found > 50, "expected planted matches, found {found}");
    }

    #[test]
    fn test_generate_text_with_zero_rate() {
        let text = generate_text_with_matches(100, "bear", 0.0, 1);
        assert_eq!(text.chars().count(), 100);
    }

    #[test]
    fn test_generate_integers_in_range() {
        let numbers = generate_integers(1_000, 3);
        let (low, high) = INTEGER_RANGE;
        assert!(numbers.iter().all(|n| (low..=high).contains(n)));
        assert_eq!(numbers, generate_integers(1_000, 3));
    }

    #[test]
    fn test_generate_parts() {
        let parts = generate_parts(20, 4, 9);
        assert_eq!(parts.len(), 20);
        assert!(parts.iter().all(|p| (1..=4).contains(&p.chars().count())));
    }
}
