//! CLI output formatting and the result file writer.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Duration;

use fibalgo_core::timing::{timed, TimingRecord};
use num_bigint::BigUint;

/// Format a `BigUint` for display, potentially truncating.
#[must_use]
pub fn format_result(value: &BigUint, verbose: bool) -> String {
    let s = value.to_string();
    if !verbose && s.len() > 100 {
        format!("{}...{} ({} digits)", &s[..50], &s[s.len() - 50..], s.len())
    } else {
        s
    }
}

/// Format a duration as seconds with six decimal places.
#[must_use]
pub fn format_seconds(d: Duration) -> String {
    format!("{:.6}", d.as_secs_f64())
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Write the decimal value and a newline to `path`.
///
/// Only the write itself is timed; creating the file is not.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &Path, value: &BigUint) -> io::Result<TimingRecord> {
    let mut file = BufWriter::new(File::create(path)?);
    let (result, timing) = timed(|| -> io::Result<()> {
        writeln!(file, "{value}")?;
        file.flush()
    });
    result?;
    tracing::debug!(path = %path.display(), elapsed_ns = timing.as_nanos(), "result written");
    Ok(timing)
}
