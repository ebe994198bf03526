//! perfkit-experiments: Benchmark suite and micro-experiments
//!
//! This crate contains synthetic data generators, the unoptimized baselines
//! each perfkit routine is compared against, and the criterion experiments
//! (E01-E03) that time each pair.
//!
//! # Modules
//!
//! - [`data`] - Synthetic data generators with seeded RNG for reproducible benchmarks
//! - [`baseline`] - Straightforward implementations kept for comparison
//!
//! # Example
//!
//! ```
//! use perfkit_experiments::baseline::find_occurrences_allocating;
//! use perfkit_experiments::data::generate_text_with_matches;
//!
//! // Generate reproducible text with planted matches
//! let text = generate_text_with_matches(1000, "bear", 0.05, 42);
//!
//! // The baseline and the optimized search agree
//! assert_eq!(
//!     find_occurrences_allocating(&text, "bear"),
//!     perfkit::find_occurrences(&text, "bear"),
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod baseline;
pub mod data;
