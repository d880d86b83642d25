//! Fast Doubling algorithm for Fibonacci computation.
//!
//! Uses the doubling identities:
//!   F(2k)   = F(k) * (2*F(k+1) - F(k))
//!   F(2k+1) = F(k)^2 + F(k+1)^2
//!
//! Iterates over the bits of n from MSB to LSB, so F(n) costs O(log n)
//! big-integer multiplications.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::calculator::{Calculator, FibError};

/// Compute F(n) exactly by fast doubling.
///
/// # Example
/// ```
/// use fibalgo_core::fastdoubling::fib_fast_doubling;
/// assert_eq!(fib_fast_doubling(100).to_string(), "354224848179261915075");
/// ```
#[must_use]
pub fn fib_fast_doubling(n: u64) -> BigUint {
    let num_bits = u64::BITS - n.leading_zeros();
    let mut fk = BigUint::zero();
    let mut fk1 = BigUint::one();

    // n = 0 has no set bits and returns F(0) untouched.
    for i in (0..num_bits).rev() {
        // loop invariant: fk = F(m), fk1 = F(m + 1)
        let t = (&fk1 << 1u32) - &fk;
        let f2k = &fk * &t;
        let f2k1 = &fk * &fk + &fk1 * &fk1;
        fk = f2k;
        fk1 = f2k1;

        if (n >> i) & 1 == 1 {
            // (F(2m), F(2m+1)) -> (F(2m+1), F(2m+2))
            std::mem::swap(&mut fk, &mut fk1);
            fk1 += &fk;
        }
    }

    fk
}

/// Fast Doubling calculator.
///
/// # Example
/// ```
/// use fibalgo_core::calculator::Calculator;
/// use fibalgo_core::fastdoubling::FastDoubling;
///
/// let result = FastDoubling::new().calculate(50).unwrap();
/// assert_eq!(result.to_string(), "12586269025");
/// ```
pub struct FastDoubling;

impl FastDoubling {
    /// Create a new `FastDoubling` calculator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FastDoubling {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator for FastDoubling {
    fn calculate(&self, n: u64) -> Result<BigUint, FibError> {
        Ok(fib_fast_doubling(n))
    }

    fn name(&self) -> &'static str {
        "FastDoubling"
    }

    fn exact_up_to(&self) -> Option<u64> {
        None
    }
}
