use std::process::ExitCode;

use clap::Parser;
use glot_extract::cli::{Arguments, ExitStatus};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter, e.g. `GLOT_LOG=debug`.
const LOG_ENV: &str = "GLOT_LOG";

fn main() -> ExitCode {
    init_tracing();

    let args = Arguments::parse();

    match glot_extract::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
