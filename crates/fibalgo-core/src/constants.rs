//! Constants for algorithm ranges, growth estimates and exit codes.

/// Maximum Fibonacci index that fits in a u64.
/// F(93) = 12200160415121876738
pub const MAX_FIB_U64: u64 = 93;

/// Largest n for which the f64 Binet evaluation truncates to the exact value
/// on IEEE-754 doubles. Tests assert agreement up to 70 and log the rest.
pub const CLOSED_FORM_EXACT_MAX: u64 = 71;

/// Largest n for which phi^n is still finite in f64.
pub const CLOSED_FORM_MAX_N: u64 = 1474;

/// Naive recursion is skipped above this index when comparing algorithms.
pub const RECURSIVE_COMPARE_LIMIT: u64 = 35;

/// Above this index the naive recursion logs a warning before running.
pub const RECURSIVE_WARN_THRESHOLD: u64 = 45;

/// log2(phi), the number of bits F(n) gains per step.
pub const LOG2_PHI: f64 = 0.694_241_913_630_617_3;

/// log10(phi), the number of decimal digits F(n) gains per step.
pub const LOG10_PHI: f64 = 0.208_987_640_249_978_73;

/// Precomputed Fibonacci values for n = 0..=93.
///
/// F(93) = 12,200,160,415,121,876,738 is the largest Fibonacci number
/// that fits in `u64`. F(94) = 19,740,274,219,868,223,167 overflows
/// `u64::MAX` (18,446,744,073,709,551,615).
pub const FIB_TABLE: [u64; 94] = {
    let mut table = [0u64; 94];
    table[0] = 0;
    table[1] = 1;
    let mut i = 2;
    while i < 94 {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};

/// Process exit codes used by the `fibalgo` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Malformed or negative `n`, or wrong argument count.
    pub const ERROR_USAGE: i32 = 2;
    /// Algorithm results did not match during comparison.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Algorithm number outside [1, 2, 3, 4].
    pub const ERROR_INVALID_ALGORITHM: i32 = 4;
    /// The output file could not be written.
    pub const ERROR_OUTPUT: i32 = 5;
}
