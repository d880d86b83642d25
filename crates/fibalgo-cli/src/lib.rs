//! # fibalgo-cli
//!
//! CLI output, report presentation, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use output::write_to_file;
pub use presenter::{CLIResultPresenter, Report, ResultPresenter};
