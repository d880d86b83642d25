//! Closed-form (Binet) approximation evaluated in `f64`.
//!
//! F(n) = (phi^n - (-phi)^-n) / sqrt(5)
//!
//! Exact in real arithmetic, but f64 carries only 53 bits of mantissa, so the
//! truncated result drifts from the true value once F(n) outgrows that
//! precision (n = 72 on IEEE-754 doubles). Past n = 1474 phi^n is no longer
//! finite and the calculation is reported as an error. The drift is kept on
//! purpose: this variant exists to be compared against the exact ones.

use num_bigint::BigUint;
use num_traits::FromPrimitive;

use crate::calculator::{Calculator, FibError};
use crate::constants::CLOSED_FORM_EXACT_MAX;

/// Evaluate Binet's formula in `f64`, without truncation.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn binet(n: u64) -> f64 {
    let sqrt5 = 5f64.sqrt();
    let phi = (1.0 + sqrt5) / 2.0;
    let exponent = n as f64;
    (phi.powf(exponent) - (-phi).powf(-exponent)) / sqrt5
}

/// Approximate F(n) by truncating [`binet`] toward zero.
///
/// # Errors
///
/// Returns [`FibError::ClosedFormOverflow`] when the f64 evaluation is not
/// finite.
///
/// # Example
/// ```
/// use fibalgo_core::closed_form::fib_closed_form;
/// assert_eq!(fib_closed_form(10).unwrap().to_string(), "55");
/// ```
pub fn fib_closed_form(n: u64) -> Result<BigUint, FibError> {
    BigUint::from_f64(binet(n)).ok_or(FibError::ClosedFormOverflow { n })
}

/// Calculator wrapper around [`fib_closed_form`].
pub struct ClosedForm;

impl ClosedForm {
    /// Create a new `ClosedForm` calculator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for ClosedForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator for ClosedForm {
    fn calculate(&self, n: u64) -> Result<BigUint, FibError> {
        if n > CLOSED_FORM_EXACT_MAX {
            tracing::warn!(
                n,
                exact_up_to = CLOSED_FORM_EXACT_MAX,
                "closed-form result is approximate at this index"
            );
        }
        fib_closed_form(n)
    }

    fn name(&self) -> &'static str {
        "ClosedForm"
    }

    fn exact_up_to(&self) -> Option<u64> {
        Some(CLOSED_FORM_EXACT_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{CLOSED_FORM_MAX_N, FIB_TABLE};

    #[test]
    fn base_cases() {
        assert_eq!(fib_closed_form(0).unwrap(), BigUint::ZERO);
        assert_eq!(fib_closed_form(1).unwrap(), BigUint::from(1u32));
    }

    #[test]
    fn exact_for_small_n() {
        for n in 0..=70u64 {
            assert_eq!(
                fib_closed_form(n).unwrap(),
                BigUint::from(FIB_TABLE[n as usize]),
                "F({n})"
            );
        }
    }

    #[test]
    fn last_finite_index() {
        assert!(binet(CLOSED_FORM_MAX_N).is_finite());
        assert!(fib_closed_form(CLOSED_FORM_MAX_N).is_ok());
    }

    #[test]
    fn overflow_is_reported() {
        let n = CLOSED_FORM_MAX_N + 1;
        assert_eq!(
            fib_closed_form(n),
            Err(FibError::ClosedFormOverflow { n })
        );
    }

    #[test]
    fn calculator_reports_exact_range() {
        let calc = ClosedForm::new();
        assert!(calc.is_exact_for(CLOSED_FORM_EXACT_MAX));
        assert!(!calc.is_exact_for(CLOSED_FORM_EXACT_MAX + 1));
    }
}
