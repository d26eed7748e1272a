//! Entry point for the `swellcast` binary.
#![forbid(unsafe_code)]

use swellcast_cli::CliError;
use tracing_subscriber::EnvFilter;

/// Filter applied when `RUST_LOG` is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "warn";

fn main() {
    init_logging();
    if let Err(err) = swellcast_cli::run() {
        if let CliError::ArgumentParsing(clap_err) = &err {
            clap_err.exit();
        }
        report(&err);
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[expect(
    clippy::print_stderr,
    reason = "fatal errors are reported to the terminal before exiting"
)]
fn report(err: &CliError) {
    eprintln!("swellcast: {err}");
}
