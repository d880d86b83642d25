//! Iterative Fibonacci with a three-term sliding window.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::calculator::{Calculator, FibError};

/// Compute F(n) with O(n) big-integer additions.
///
/// The window `(prev2, prev1, current)` holds `(F(k-2), F(k-1), F(k))` and
/// starts at k = 2, so the loop runs for k in 3..=n.
///
/// # Example
/// ```
/// use fibalgo_core::iterative::fib_iterative;
/// assert_eq!(fib_iterative(50).to_string(), "12586269025");
/// ```
#[must_use]
pub fn fib_iterative(n: u64) -> BigUint {
    let mut prev2 = BigUint::zero();
    let mut prev1 = BigUint::one();

    match n {
        0 => return prev2,
        1 => return prev1,
        _ => {}
    }

    // F(2) = F(1) + F(0)
    let mut current = &prev1 + &prev2;
    for _ in 3..=n {
        prev2 = std::mem::replace(&mut prev1, current);
        current = &prev1 + &prev2;
    }
    current
}

/// Calculator wrapper around [`fib_iterative`].
pub struct Iterative;

impl Iterative {
    /// Create a new `Iterative` calculator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Iterative {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator for Iterative {
    fn calculate(&self, n: u64) -> Result<BigUint, FibError> {
        Ok(fib_iterative(n))
    }

    fn name(&self) -> &'static str {
        "Iterative"
    }

    fn exact_up_to(&self) -> Option<u64> {
        None
    }
}
