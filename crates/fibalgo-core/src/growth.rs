//! Size estimates for F(n).

use crate::constants::{LOG10_PHI, LOG2_PHI};

/// Upper estimate of the bit length of F(n).
///
/// F(n) ~ phi^n / sqrt(5), so it grows by log2(phi) ~ 0.694 bits per step.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn estimated_bits(n: u64) -> u64 {
    (n as f64 * LOG2_PHI).ceil() as u64
}

/// Upper estimate of the decimal digit count of F(n).
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn estimated_digits(n: u64) -> u64 {
    ((n as f64 * LOG10_PHI).ceil() as u64).max(1)
}
