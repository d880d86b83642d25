//! Run every algorithm on the same n and check them against fast doubling.
//!
//! Algorithms run one after another on the calling thread. Each entry carries
//! a verdict; a disagreement only counts as a mismatch when the algorithm
//! claims to be exact at that n.

use num_bigint::BigUint;

use crate::calculator::FibError;
use crate::dispatch::{compute_with, Computation};
use crate::registry::CalculatorFactory;
use crate::version::AlgorithmVersion;

/// How one algorithm's result relates to the reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Same value as the reference.
    Agrees,
    /// Different value, outside the algorithm's exact range.
    ExpectedDivergence,
    /// Different value inside the algorithm's exact range.
    Mismatch,
    /// Not run (naive recursion above the limit).
    Skipped,
    /// The algorithm returned an error.
    Failed(FibError),
}

impl Verdict {
    /// Short label for tables.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Agrees => "OK",
            Self::ExpectedDivergence => "APPROX",
            Self::Mismatch => "MISMATCH",
            Self::Skipped => "SKIPPED",
            Self::Failed(_) => "ERROR",
        }
    }
}

/// One row of a comparison run.
#[derive(Debug, Clone)]
pub struct ComparisonEntry {
    /// Algorithm that ran.
    pub version: AlgorithmVersion,
    /// The computation, if the algorithm ran and succeeded.
    pub computation: Option<Computation>,
    /// Relation to the reference.
    pub verdict: Verdict,
}

/// Run every available algorithm for `n`.
///
/// Naive recursion is skipped when `n > recursive_limit`. The reference is
/// the fast-doubling result, which is always computed.
pub fn compare_all(
    factory: &dyn CalculatorFactory,
    n: u64,
    recursive_limit: u64,
) -> Vec<ComparisonEntry> {
    let mut entries: Vec<ComparisonEntry> = factory
        .available()
        .iter()
        .map(|&version| {
            if version == AlgorithmVersion::Recursive && n > recursive_limit {
                tracing::info!(n, recursive_limit, "skipping naive recursion");
                return ComparisonEntry {
                    version,
                    computation: None,
                    verdict: Verdict::Skipped,
                };
            }
            match compute_with(factory, n, version) {
                Ok(computation) => ComparisonEntry {
                    version,
                    computation: Some(computation),
                    verdict: Verdict::Agrees,
                },
                Err(e) => ComparisonEntry {
                    version,
                    computation: None,
                    verdict: Verdict::Failed(e),
                },
            }
        })
        .collect();

    let Some(reference) = reference_value(&entries) else {
        return entries;
    };

    for entry in &mut entries {
        if let Some(computation) = &entry.computation {
            if computation.value != reference {
                entry.verdict = if factory.get(entry.version).is_exact_for(n) {
                    Verdict::Mismatch
                } else {
                    Verdict::ExpectedDivergence
                };
            }
        }
    }

    entries
}

fn reference_value(entries: &[ComparisonEntry]) -> Option<BigUint> {
    entries
        .iter()
        .find(|e| e.version == AlgorithmVersion::FastDoubling)
        .and_then(|e| e.computation.as_ref())
        .map(|c| c.value.clone())
}

/// Fail on the first unexpected disagreement.
pub fn analyze_comparison(entries: &[ComparisonEntry]) -> Result<(), FibError> {
    if entries.iter().all(|e| e.computation.is_none()) {
        return Err(FibError::Calculation("no valid results".into()));
    }

    if let Some(entry) = entries.iter().find(|e| e.verdict == Verdict::Mismatch) {
        return Err(FibError::Mismatch(entry.version));
    }

    let agreeing = entries
        .iter()
        .filter(|e| e.verdict == Verdict::Agrees)
        .count();
    tracing::info!(agreeing, total = entries.len(), "comparison finished");
    Ok(())
}
