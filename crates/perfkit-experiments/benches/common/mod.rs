//! Shared benchmark utilities and standard data sizes for perfkit experiments.
//!
//! This module provides:
//! - Standard data sizes for consistent benchmarking across experiments
//! - Criterion configuration presets for different benchmark scenarios
//! - Helper functions for benchmark setup
//!
//! # Standard Data Sizes
//!
//! - `SIZE_1K`: 1,000 elements - quick iteration, and the only size the
//!   quadratic baselines are run at comfortably
//! - `SIZE_10K`: 10,000 elements
//! - `SIZE_100K`: 100,000 elements - optimized routines only
//!
//! # Example Usage
//!
//! ```ignore
//! use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
//!
//! mod common;
//! use common::{format_size, BASELINE_DATA_SIZES};
//!
//! fn my_benchmark(c: &mut Criterion) {
//!     for &size in &BASELINE_DATA_SIZES {
//!         let data = generate_data(size);
//!         c.bench_with_input(
//!             BenchmarkId::new("my_operation", format_size(size)),
//!             &data,
//!             |b, data| b.iter(|| black_box(operation(black_box(data)))),
//!         );
//!     }
//! }
//! ```

#![allow(dead_code)]

use std::time::Duration;

// ============================================================================
// Standard Data Sizes
// ============================================================================

/// Small dataset: 1,000 elements.
pub const SIZE_1K: usize = 1_000;

/// Medium dataset: 10,000 elements.
pub const SIZE_10K: usize = 10_000;

/// Large dataset: 100,000 elements.
pub const SIZE_100K: usize = 100_000;

/// Sizes for optimized routines.
pub const DATA_SIZES: [usize; 3] = [SIZE_1K, SIZE_10K, SIZE_100K];

/// Sizes for baselines whose cost grows faster than linearly.
pub const BASELINE_DATA_SIZES: [usize; 2] = [SIZE_1K, SIZE_10K];

// ============================================================================
// Criterion Configuration
// ============================================================================

/// Default measurement time for benchmarks (5 seconds).
pub const DEFAULT_MEASUREMENT_TIME: Duration = Duration::from_secs(5);

/// Extended measurement time for slow baselines (10 seconds).
pub const EXTENDED_MEASUREMENT_TIME: Duration = Duration::from_secs(10);

/// Default sample size for benchmarks.
pub const DEFAULT_SAMPLE_SIZE: usize = 100;

/// Reduced sample size for long-running benchmarks.
pub const REDUCED_SAMPLE_SIZE: usize = 50;

/// Minimum sample size criterion accepts.
pub const MINIMUM_SAMPLE_SIZE: usize = 10;

// ============================================================================
// Benchmark Group Names
// ============================================================================

/// Group name for E01 memoized vs recursive sequence sums.
pub const GROUP_E01_SEQUENCE_MEMO: &str = "e01_sequence_memo";

/// Group name for E02 substring search.
pub const GROUP_E02_SUBSTRING_SEARCH: &str = "e02_substring_search";

/// Group name for E03 concatenation and filtering.
pub const GROUP_E03_CONCAT_FILTER: &str = "e03_concat_filter";

// ============================================================================
// Seed Values for Reproducibility
// ============================================================================

/// Default seed for reproducible benchmark data generation.
pub const DEFAULT_SEED: u64 = 42;

/// Query planted into generated text.
pub const PLANTED_QUERY: &str = "bär";

/// Fraction of generation steps that plant [`PLANTED_QUERY`].
pub const PLANT_RATE: f64 = 0.01;

// ============================================================================
// Helper Functions
// ============================================================================

/// Returns an appropriate sample size based on data size.
#[inline]
pub const fn sample_size_for_data_size(data_size: usize) -> usize {
    match data_size {
        0..=10_000 => DEFAULT_SAMPLE_SIZE,
        _ => REDUCED_SAMPLE_SIZE,
    }
}

/// Returns an appropriate measurement time based on data size.
#[inline]
pub const fn measurement_time_for_data_size(data_size: usize) -> Duration {
    match data_size {
        0..=10_000 => DEFAULT_MEASUREMENT_TIME,
        _ => EXTENDED_MEASUREMENT_TIME,
    }
}

/// Formats a data size for display in benchmark IDs.
///
/// - 1000 -> "1K"
/// - 100000 -> "100K"
/// - 500 -> "500"
pub fn format_size(size: usize) -> String {
    match size {
        s if s >= 1_000_000 => format!("{}M", s / 1_000_000),
        s if s >= 1_000 => format!("{}K", s / 1_000),
        s => s.to_string(),
    }
}
