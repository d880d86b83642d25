//! Application configuration from CLI arguments and environment.

use std::path::PathBuf;

use clap::Parser;
use fibalgo_core::{AlgorithmVersion, ParseVersionError, RECURSIVE_COMPARE_LIMIT};

use crate::errors::AppError;

/// FibAlgo: compute the nth Fibonacci number with one of four algorithms.
#[derive(Parser, Debug)]
#[command(name = "fibalgo", version, about)]
pub struct AppConfig {
    /// Algorithm: 1 recursive, 2 iterative, 3 closed form, 4 fast doubling,
    /// or "all" to compare them. "-4" is accepted for "4".
    #[arg(
        value_name = "VERSION",
        allow_negative_numbers = true,
        required_unless_present = "completion"
    )]
    pub algorithm: Option<String>,

    /// Index of the Fibonacci number to compute.
    #[arg(
        value_name = "N",
        allow_negative_numbers = true,
        required_unless_present = "completion"
    )]
    pub n: Option<String>,

    /// File the result is written to.
    #[arg(short, long, default_value = "out.txt", env = "FIBALGO_OUTPUT")]
    pub output: PathBuf,

    /// Quiet mode (no report on stdout).
    #[arg(short, long)]
    pub quiet: bool,

    /// Show the algorithm, result size and a preview of the value.
    #[arg(short, long)]
    pub details: bool,

    /// Show the full value in the preview.
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,

    /// Skip naive recursion above this n when comparing all algorithms.
    #[arg(long, default_value_t = RECURSIVE_COMPARE_LIMIT)]
    pub recursive_limit: u64,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

/// What to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// One algorithm.
    Single(AlgorithmVersion),
    /// Every algorithm, checked against fast doubling.
    Compare,
}

/// Validated request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub mode: Mode,
    pub n: u64,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validate the positional arguments.
    pub fn request(&self) -> Result<Request, AppError> {
        let version = self
            .algorithm
            .as_deref()
            .ok_or(AppError::MissingArgument("VERSION"))?;
        let n = self.n.as_deref().ok_or(AppError::MissingArgument("N"))?;
        Ok(Request {
            mode: parse_mode(version)?,
            n: parse_index(n)?,
        })
    }
}

/// Parse the algorithm argument.
pub fn parse_mode(s: &str) -> Result<Mode, AppError> {
    if s.trim().eq_ignore_ascii_case("all") {
        return Ok(Mode::Compare);
    }
    match s.parse::<AlgorithmVersion>() {
        Ok(version) => Ok(Mode::Single(version)),
        Err(ParseVersionError::Format(raw)) => Err(AppError::InvalidVersionFormat(raw)),
        Err(ParseVersionError::Invalid(e)) => Err(AppError::Fib(e)),
    }
}

/// Parse `n` as a non-negative integer.
pub fn parse_index(s: &str) -> Result<u64, AppError> {
    let trimmed = s.trim();
    if let Ok(n) = trimmed.parse::<u64>() {
        return Ok(n);
    }
    match trimmed.parse::<i128>() {
        Ok(v) if v < 0 => Err(AppError::NegativeIndex(trimmed.to_string())),
        _ => Err(AppError::InvalidIndex(s.to_string())),
    }
}
