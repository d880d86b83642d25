//! Application entry point and dispatch.

use std::path::Path;

use anyhow::Result;
use num_bigint::BigUint;

use fibalgo_cli::presenter::{CLIResultPresenter, ResultPresenter};
use fibalgo_cli::write_to_file;
use fibalgo_core::timing::TimingRecord;
use fibalgo_core::{
    analyze_comparison, compare_all, compute_with, AlgorithmVersion, DefaultFactory,
};

use crate::config::{AppConfig, Mode};
use crate::errors::AppError;

/// Run the application. Errors are reported through the presenter before
/// they are returned.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        fibalgo_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let presenter =
        CLIResultPresenter::new(config.verbose, config.quiet, config.details, config.json);
    execute(config, &presenter).inspect_err(|err| presenter.present_error(&format!("{err:#}")))
}

fn execute(config: &AppConfig, presenter: &CLIResultPresenter) -> Result<()> {
    let request = config.request()?;
    tracing::debug!(?request, output = %config.output.display(), "validated request");
    let factory = DefaultFactory::new();

    match request.mode {
        Mode::Single(version) => run_single(config, &factory, presenter, version, request.n),
        Mode::Compare => run_comparison(config, &factory, presenter, request.n),
    }
}

fn run_single(
    config: &AppConfig,
    factory: &DefaultFactory,
    presenter: &CLIResultPresenter,
    version: AlgorithmVersion,
    n: u64,
) -> Result<()> {
    let computation = compute_with(factory, n, version)?;
    let write = write_result(&config.output, &computation.value)?;
    presenter.present_result(&computation, &write, &config.output)?;
    Ok(())
}

fn run_comparison(
    config: &AppConfig,
    factory: &DefaultFactory,
    presenter: &CLIResultPresenter,
    n: u64,
) -> Result<()> {
    let entries = compare_all(factory, n, config.recursive_limit);
    presenter.present_comparison(&entries)?;

    // The fast doubling value is the one written out.
    let reference = entries
        .iter()
        .find(|e| e.version == AlgorithmVersion::FastDoubling)
        .and_then(|e| e.computation.as_ref());
    if let Some(reference) = reference {
        write_result(&config.output, &reference.value)?;
    }

    analyze_comparison(&entries)?;
    Ok(())
}

fn write_result(path: &Path, value: &BigUint) -> Result<TimingRecord, AppError> {
    write_to_file(path, value).map_err(|source| AppError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}
