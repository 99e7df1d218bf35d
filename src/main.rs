//! Main application entry point (CLI binary).
//!
//! Thin wrapper around the `urltrace` library: parses arguments, initializes
//! the logger and runs the trace. Per-URL failures are logged by the library
//! and never change the exit code.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use urltrace::initialization::init_logger_with;
use urltrace::{run_trace, Config, Opt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from(Opt::parse());

    init_logger_with(config.log_level.into(), config.log_format)
        .context("Failed to initialize logger")?;

    if let Err(e) = run_trace(config).await {
        eprintln!("urltrace error: {:#}", e);
        process::exit(1);
    }

    Ok(())
}
