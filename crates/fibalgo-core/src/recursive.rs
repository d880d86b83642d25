//! Naive recursive Fibonacci on native integers.
//!
//! Runs in O(phi^n) time with O(n) recursion depth. Values past F(93) wrap
//! around `u64`; that is a known limit of this variant.

use num_bigint::BigUint;

use crate::calculator::{Calculator, FibError};
use crate::constants::{MAX_FIB_U64, RECURSIVE_WARN_THRESHOLD};

/// Compute F(n) by unmemoized recursion, wrapping on overflow.
///
/// # Example
/// ```
/// assert_eq!(fibalgo_core::recursive::fib_recursive(10), 55);
/// ```
#[must_use]
pub fn fib_recursive(n: u64) -> u64 {
    match n {
        0 => 0,
        1 => 1,
        _ => fib_recursive(n - 1).wrapping_add(fib_recursive(n - 2)),
    }
}

/// Calculator wrapper around [`fib_recursive`].
pub struct NaiveRecursive;

impl NaiveRecursive {
    /// Create a new `NaiveRecursive` calculator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NaiveRecursive {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator for NaiveRecursive {
    fn calculate(&self, n: u64) -> Result<BigUint, FibError> {
        if n > RECURSIVE_WARN_THRESHOLD {
            tracing::warn!(n, "naive recursion is exponential and may not finish");
        }
        Ok(BigUint::from(fib_recursive(n)))
    }

    fn name(&self) -> &'static str {
        "Recursive"
    }

    fn exact_up_to(&self) -> Option<u64> {
        Some(MAX_FIB_U64)
    }
}
