//! # fibalgo-core
//!
//! Four ways to compute the nth Fibonacci number: naive recursion,
//! iterative accumulation, Binet's closed form, and fast doubling.
//! Calculations are dispatched by version number and timed per call.

pub mod calculator;
pub mod closed_form;
pub mod comparison;
pub mod constants;
pub mod dispatch;
pub mod fastdoubling;
pub mod growth;
pub mod iterative;
pub mod recursive;
pub mod registry;
pub mod timing;
pub mod version;

// Re-exports
pub use calculator::{Calculator, FibError};
pub use comparison::{analyze_comparison, compare_all, ComparisonEntry, Verdict};
pub use constants::{
    exit_codes, CLOSED_FORM_EXACT_MAX, FIB_TABLE, MAX_FIB_U64, RECURSIVE_COMPARE_LIMIT,
};
pub use dispatch::{compute, compute_with, Computation};
pub use registry::{CalculatorFactory, DefaultFactory};
pub use timing::{timed, TimingRecord};
pub use version::{AlgorithmVersion, ParseVersionError};

use num_bigint::BigUint;

/// Compute F(n) using the fast doubling algorithm.
///
/// This is a convenience function for simple use cases. Use [`compute`] to
/// pick an algorithm and get timing.
///
/// # Example
/// ```
/// assert_eq!(fibalgo_core::fibonacci(10).to_string(), "55");
/// assert_eq!(fibalgo_core::fibonacci(0).to_string(), "0");
/// ```
#[must_use]
pub fn fibonacci(n: u64) -> BigUint {
    fastdoubling::fib_fast_doubling(n)
}
