//! FibAlgo: compute the nth Fibonacci number and time the calculation.

use fibalgo_lib::{app, config, errors};

fn main() {
    // Logs go to stderr so stdout stays clean for reports.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    // Parse CLI args and run
    let config = config::AppConfig::parse();
    // `run` has already reported the error.
    if let Err(err) = app::run(&config) {
        std::process::exit(errors::exit_code(&err));
    }
}
