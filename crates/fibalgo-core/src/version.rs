//! Algorithm selection by version number.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::calculator::FibError;

/// One of the four Fibonacci algorithms, numbered as on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[repr(u32)]
pub enum AlgorithmVersion {
    /// Unmemoized recursion on native integers.
    Recursive = 1,
    /// Sliding-window accumulation on big integers.
    Iterative = 2,
    /// Binet's formula evaluated in f64.
    ClosedForm = 3,
    /// Fast doubling on big integers.
    FastDoubling = 4,
}

impl AlgorithmVersion {
    /// Every version, in numeric order.
    pub const ALL: [Self; 4] = [
        Self::Recursive,
        Self::Iterative,
        Self::ClosedForm,
        Self::FastDoubling,
    ];

    /// The numeric version (1-4).
    #[must_use]
    pub fn number(self) -> u32 {
        self as u32
    }

    /// Human-readable algorithm name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Recursive => "Recursive",
            Self::Iterative => "Iterative",
            Self::ClosedForm => "ClosedForm",
            Self::FastDoubling => "FastDoubling",
        }
    }
}

impl TryFrom<u32> for AlgorithmVersion {
    type Error = FibError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Recursive),
            2 => Ok(Self::Iterative),
            3 => Ok(Self::ClosedForm),
            4 => Ok(Self::FastDoubling),
            other => Err(FibError::InvalidAlgorithmVersion(other)),
        }
    }
}

/// Error returned when a version string cannot be turned into a version.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseVersionError {
    /// Not an unsigned integer once dashes are removed.
    #[error("'{0}' is not a valid algorithm number")]
    Format(String),
    /// A number, but not one of the four versions.
    #[error(transparent)]
    Invalid(#[from] FibError),
}

impl FromStr for AlgorithmVersion {
    type Err = ParseVersionError;

    /// Accepts `"4"` as well as the flag form `"-4"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits: String = s.trim().chars().filter(|c| *c != '-').collect();
        let number: u32 = digits
            .parse()
            .map_err(|_| ParseVersionError::Format(s.to_string()))?;
        Ok(Self::try_from(number)?)
    }
}

impl fmt::Display for AlgorithmVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
