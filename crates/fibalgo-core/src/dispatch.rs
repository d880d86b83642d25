//! Version dispatch with per-call timing.

use num_bigint::BigUint;

use crate::calculator::FibError;
use crate::growth::estimated_bits;
use crate::registry::{CalculatorFactory, DefaultFactory};
use crate::timing::{timed, TimingRecord};
use crate::version::AlgorithmVersion;

/// Result of one timed calculation.
#[derive(Debug, Clone)]
pub struct Computation {
    /// Algorithm that produced the value.
    pub version: AlgorithmVersion,
    /// Requested index.
    pub n: u64,
    /// F(n) as computed by `version`.
    pub value: BigUint,
    /// Timing of the whole top-level call.
    pub timing: TimingRecord,
}

impl Computation {
    /// Time spent in the calculation, in seconds.
    #[must_use]
    pub fn calculation_secs(&self) -> f64 {
        self.timing.as_secs_f64()
    }
}

/// Compute F(n) with the algorithm numbered `version` (1-4).
///
/// # Errors
///
/// Returns [`FibError::InvalidAlgorithmVersion`] for a version outside 1-4,
/// or whatever the selected algorithm reports.
///
/// # Example
/// ```
/// let result = fibalgo_core::compute(10, 4).unwrap();
/// assert_eq!(result.value.to_string(), "55");
///
/// assert!(fibalgo_core::compute(10, 5).is_err());
/// ```
pub fn compute(n: u64, version: u32) -> Result<Computation, FibError> {
    let version = AlgorithmVersion::try_from(version)?;
    compute_with(&DefaultFactory::new(), n, version)
}

/// Compute F(n) with a calculator taken from `factory`.
pub fn compute_with(
    factory: &dyn CalculatorFactory,
    n: u64,
    version: AlgorithmVersion,
) -> Result<Computation, FibError> {
    let calc = factory.get(version);
    tracing::debug!(
        n,
        algorithm = calc.name(),
        estimated_bits = estimated_bits(n),
        "starting calculation"
    );

    // The timer wraps the whole call, including every recursive frame.
    let (result, timing) = timed(|| calc.calculate(n));
    let value = result?;

    tracing::debug!(
        n,
        algorithm = calc.name(),
        elapsed_ns = timing.as_nanos(),
        bits = value.bits(),
        "calculation finished"
    );

    Ok(Computation {
        version,
        n,
        value,
        timing,
    })
}
