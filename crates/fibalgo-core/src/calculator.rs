//! Calculator trait and the error type shared by every algorithm.
//!
//! `Calculator` is the seam between the four algorithm implementations and
//! the dispatcher: each algorithm is a unit struct that computes F(n) and
//! describes the range over which its answer is exact.

use num_bigint::BigUint;

use crate::version::AlgorithmVersion;

/// Error type for Fibonacci calculations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FibError {
    /// The requested algorithm number is not one of 1, 2, 3 or 4.
    #[error("'{0}' is not a valid algorithm number; valid numbers are [1, 2, 3, 4]")]
    InvalidAlgorithmVersion(u32),

    /// The floating-point evaluation of Binet's formula left the f64 range.
    #[error("closed-form approximation overflowed f64 at n={n}")]
    ClosedFormOverflow {
        /// The index that could not be evaluated.
        n: u64,
    },

    /// An algorithm disagreed with the reference inside its exact range.
    #[error("{0} disagrees with the fast doubling reference")]
    Mismatch(AlgorithmVersion),

    /// A calculation error occurred.
    #[error("calculation error: {0}")]
    Calculation(String),
}

/// Public trait for Fibonacci calculators.
pub trait Calculator: Send + Sync {
    /// Calculate F(n).
    fn calculate(&self, n: u64) -> Result<BigUint, FibError>;

    /// Get the name of this calculator.
    fn name(&self) -> &'static str;

    /// Largest n for which the result is guaranteed exact.
    ///
    /// `None` means the algorithm is exact for every n.
    fn exact_up_to(&self) -> Option<u64>;

    /// Whether the result for `n` is guaranteed exact.
    fn is_exact_for(&self, n: u64) -> bool {
        self.exact_up_to().map_or(true, |limit| n <= limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Bounded;

    impl Calculator for Bounded {
        fn calculate(&self, n: u64) -> Result<BigUint, FibError> {
            Ok(BigUint::from(n))
        }

        fn name(&self) -> &'static str {
            "Bounded"
        }

        fn exact_up_to(&self) -> Option<u64> {
            Some(10)
        }
    }

    #[test]
    fn is_exact_for_respects_limit() {
        assert!(Bounded.is_exact_for(10));
        assert!(!Bounded.is_exact_for(11));
    }

    #[test]
    fn fib_error_display() {
        let err = FibError::InvalidAlgorithmVersion(5);
        assert_eq!(
            err.to_string(),
            "'5' is not a valid algorithm number; valid numbers are [1, 2, 3, 4]"
        );

        let err = FibError::ClosedFormOverflow { n: 2000 };
        assert_eq!(
            err.to_string(),
            "closed-form approximation overflowed f64 at n=2000"
        );

        let err = FibError::Calculation("test".into());
        assert_eq!(err.to_string(), "calculation error: test");
    }

    #[test]
    fn mismatch_names_the_algorithm() {
        let err = FibError::Mismatch(AlgorithmVersion::Iterative);
        assert_eq!(
            err.to_string(),
            "Iterative disagrees with the fast doubling reference"
        );
    }
}
