//! CLI result presenter.

use std::fmt::Write as _;
use std::path::Path;

use fibalgo_core::comparison::{ComparisonEntry, Verdict};
use fibalgo_core::timing::TimingRecord;
use fibalgo_core::Computation;
use serde::Serialize;

use crate::output::{format_number, format_result, format_seconds};

/// Machine-readable summary of one calculation.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Algorithm name.
    pub algorithm: &'static str,
    /// Algorithm number (1-4).
    pub version: u32,
    /// Requested index.
    pub n: u64,
    /// Decimal digits in the result.
    pub digits: usize,
    /// Bits in the result.
    pub bits: u64,
    /// Calculation time in seconds.
    pub calculation_seconds: f64,
    /// Write time in seconds.
    pub write_seconds: f64,
    /// File the result was written to.
    pub output: String,
}

impl Report {
    /// Build a report from a computation and its write timing.
    #[must_use]
    pub fn new(computation: &Computation, write: &TimingRecord, output: &Path) -> Self {
        Self {
            algorithm: computation.version.name(),
            version: computation.version.number(),
            n: computation.n,
            digits: computation.value.to_string().len(),
            bits: computation.value.bits(),
            calculation_seconds: computation.calculation_secs(),
            write_seconds: write.as_secs_f64(),
            output: output.display().to_string(),
        }
    }
}

/// One row of the comparison table in JSON form.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonRow {
    /// Algorithm name.
    pub algorithm: &'static str,
    /// Verdict label.
    pub verdict: &'static str,
    /// Calculation time in seconds, if the algorithm ran.
    pub calculation_seconds: Option<f64>,
    /// Error message, if the algorithm failed.
    pub error: Option<String>,
}

impl From<&ComparisonEntry> for ComparisonRow {
    fn from(entry: &ComparisonEntry) -> Self {
        Self {
            algorithm: entry.version.name(),
            verdict: entry.verdict.label(),
            calculation_seconds: entry.computation.as_ref().map(Computation::calculation_secs),
            error: match &entry.verdict {
                Verdict::Failed(e) => Some(e.to_string()),
                _ => None,
            },
        }
    }
}

/// Trait for presenting results to the user.
pub trait ResultPresenter {
    /// Present a single calculation.
    fn present_result(
        &self,
        computation: &Computation,
        write: &TimingRecord,
        output: &Path,
    ) -> serde_json::Result<()>;

    /// Present a comparison run.
    fn present_comparison(&self, entries: &[ComparisonEntry]) -> serde_json::Result<()>;

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
    details: bool,
    json: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool, details: bool, json: bool) -> Self {
        Self {
            verbose,
            quiet,
            details,
            json,
        }
    }

    /// Render the report for a single calculation, as text or JSON.
    pub fn render_result(
        &self,
        computation: &Computation,
        write: &TimingRecord,
        output: &Path,
    ) -> serde_json::Result<String> {
        if self.json {
            let report = Report::new(computation, write, output);
            return serde_json::to_string_pretty(&report).map(|json| json + "\n");
        }

        let mut out = String::new();

        if self.details {
            let value = &computation.value;
            let _ = writeln!(out, "Algorithm: {}", computation.version);
            let _ = writeln!(out, "N: {}", format_number(computation.n));
            let _ = writeln!(out, "Result bits: {}", value.bits());
            let _ = writeln!(out, "Result digits: {}", value.to_string().len());
            let _ = writeln!(
                out,
                "F({}) = {}",
                format_number(computation.n),
                format_result(value, self.verbose)
            );
            let _ = writeln!(out, "Output: {}", output.display());
        }

        let _ = writeln!(
            out,
            "Calculation time: {} seconds",
            format_seconds(computation.timing.elapsed())
        );
        let _ = writeln!(out, "Write time: {} seconds", format_seconds(write.elapsed()));
        Ok(out)
    }

    /// Render the comparison table, as text or JSON.
    pub fn render_comparison(&self, entries: &[ComparisonEntry]) -> serde_json::Result<String> {
        if self.json {
            let rows: Vec<ComparisonRow> = entries.iter().map(ComparisonRow::from).collect();
            return serde_json::to_string_pretty(&rows).map(|json| json + "\n");
        }

        let mut out = String::new();

        let _ = writeln!(out, "{:-<60}", "");
        for entry in entries {
            let time = entry.computation.as_ref().map_or_else(
                || "-".to_string(),
                |c| format!("{}s", format_seconds(c.timing.elapsed())),
            );
            let _ = write!(
                out,
                "  {:<14} {:>16} [{}]",
                entry.version.name(),
                time,
                entry.verdict.label()
            );
            if let Verdict::Failed(e) = &entry.verdict {
                let _ = write!(out, " {e}");
            }
            out.push('\n');
        }
        Ok(out)
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(
        &self,
        computation: &Computation,
        write: &TimingRecord,
        output: &Path,
    ) -> serde_json::Result<()> {
        if self.quiet {
            return Ok(());
        }
        print!("{}", self.render_result(computation, write, output)?);
        Ok(())
    }

    fn present_comparison(&self, entries: &[ComparisonEntry]) -> serde_json::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let rendered = self.render_comparison(entries)?;
        if !self.json {
            crate::ui::print_header("Comparison Results");
        }
        print!("{rendered}");
        Ok(())
    }

    /// Errors are printed even in quiet mode.
    fn present_error(&self, error: &str) {
        crate::ui::print_error(error);
    }
}
