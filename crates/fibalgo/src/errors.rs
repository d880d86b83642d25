//! Error handling and exit codes.

use std::io;
use std::path::PathBuf;

use fibalgo_core::constants::exit_codes;
use fibalgo_core::FibError;

/// Errors raised at the command-line boundary.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The algorithm argument is not a number.
    #[error("'{0}' is not a valid algorithm number; valid numbers are [1, 2, 3, 4] or 'all'")]
    InvalidVersionFormat(String),

    /// `n` is not an integer that fits in 64 bits.
    #[error("'n' must be a non-negative integer, got '{0}'")]
    InvalidIndex(String),

    /// `n` is negative.
    #[error("'n' must be non-negative, got {0}")]
    NegativeIndex(String),

    /// A positional argument is absent.
    #[error("missing required argument <{0}>")]
    MissingArgument(&'static str),

    /// The result file could not be created or written.
    #[error("output could not be written to {}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A calculation error from the core library.
    #[error(transparent)]
    Fib(#[from] FibError),
}

/// Exit code for a core calculation error.
pub fn fib_exit_code(err: &FibError) -> i32 {
    match err {
        FibError::InvalidAlgorithmVersion(_) => exit_codes::ERROR_INVALID_ALGORITHM,
        FibError::Mismatch(_) => exit_codes::ERROR_MISMATCH,
        FibError::ClosedFormOverflow { .. } | FibError::Calculation(_) => {
            exit_codes::ERROR_GENERIC
        }
    }
}

/// Exit code for a command-line error.
pub fn app_exit_code(err: &AppError) -> i32 {
    match err {
        AppError::InvalidVersionFormat(_) => exit_codes::ERROR_INVALID_ALGORITHM,
        AppError::InvalidIndex(_) | AppError::NegativeIndex(_) | AppError::MissingArgument(_) => {
            exit_codes::ERROR_USAGE
        }
        AppError::OutputWrite { .. } => exit_codes::ERROR_OUTPUT,
        AppError::Fib(e) => fib_exit_code(e),
    }
}

/// Map any error that reached `main` to a process exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(app) = err.downcast_ref::<AppError>() {
        app_exit_code(app)
    } else if let Some(fib) = err.downcast_ref::<FibError>() {
        fib_exit_code(fib)
    } else {
        exit_codes::ERROR_GENERIC
    }
}
