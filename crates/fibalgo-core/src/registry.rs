//! Calculator factory and registry.

use crate::calculator::Calculator;
use crate::closed_form::ClosedForm;
use crate::fastdoubling::FastDoubling;
use crate::iterative::Iterative;
use crate::recursive::NaiveRecursive;
use crate::version::AlgorithmVersion;

/// Factory trait for looking up calculators.
pub trait CalculatorFactory: Send + Sync {
    /// Get the calculator for a version.
    fn get(&self, version: AlgorithmVersion) -> &dyn Calculator;

    /// List all available versions.
    fn available(&self) -> &[AlgorithmVersion];
}

/// Default factory holding one instance of each algorithm.
#[derive(Default)]
pub struct DefaultFactory {
    recursive: NaiveRecursive,
    iterative: Iterative,
    closed_form: ClosedForm,
    fast_doubling: FastDoubling,
}

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CalculatorFactory for DefaultFactory {
    fn get(&self, version: AlgorithmVersion) -> &dyn Calculator {
        match version {
            AlgorithmVersion::Recursive => &self.recursive,
            AlgorithmVersion::Iterative => &self.iterative,
            AlgorithmVersion::ClosedForm => &self.closed_form,
            AlgorithmVersion::FastDoubling => &self.fast_doubling,
        }
    }

    fn available(&self) -> &[AlgorithmVersion] {
        &AlgorithmVersion::ALL
    }
}
