//! Error Handling Examples
//!
//! This example demonstrates the checked variants and the errors they report.
//!
//! Run with: `cargo run --example error_handling`

use perfkit::concat::repeat_concat;
use perfkit::filter::filter_and_transform;
use perfkit::sequence::{checked_sequence_sum, max_checked_index, sequence_sum};
use perfkit::Error;

fn main() {
    println!("=== Error Handling Examples ===");
    println!();

    // Example 1: Total functions never fail
    println!("1. Core Routines Are Total:");
    println!("   sequence_sum(-5) = {}", sequence_sum(-5));
    println!("   sequence_sum(50) = {}", sequence_sum(50));
    println!();

    // Example 2: Overflow in a narrow type
    println!("2. Overflow in u8:");
    match checked_sequence_sum::<u8>(20) {
        Ok(sum) => println!("   Unexpected success: {sum}"),
        Err(Error::Overflow { operation, index }) => {
            println!("   Caught Overflow error (expected)");
            println!("   Details: {operation} overflowed at index {index}");
            println!(
                "   Fix: keep n <= {} or use a wider type",
                max_checked_index::<u8>()
            );
        }
        Err(e) => println!("   Unexpected error: {e}"),
    }
    println!();

    // Example 3: Widening instead of failing
    println!("3. Widening to u128:");
    match checked_sequence_sum::<u128>(150) {
        Ok(sum) => println!("   sequence_sum(150) = {sum}"),
        Err(e) => println!("   Unexpected error: {e}"),
    }
    println!();

    // Example 4: Overflow while squaring
    println!("4. Filter Overflow:");
    match filter_and_transform(&[12, 14, i64::MAX - 1]) {
        Ok(values) => println!("   Unexpected success: {values:?}"),
        Err(e) => println!("   Caught error (expected): {e}"),
    }
    println!();

    // Example 5: Output that cannot be sized
    println!("5. Concatenation Capacity:");
    match repeat_concat(&["ab", "cd"], usize::MAX) {
        Ok(_) => println!("   Unexpected success"),
        Err(Error::CapacityOverflow { operation }) => {
            println!("   Caught CapacityOverflow in {operation} (expected)");
        }
        Err(e) => println!("   Unexpected error: {e}"),
    }
}
