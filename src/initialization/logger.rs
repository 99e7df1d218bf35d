//! Logger initialization.
//!
//! This module provides functions to initialize the logger with custom formatting.

use std::io::{IsTerminal, Write};

use colored::*;
use log::LevelFilter;

use crate::config::{LogFormat, LOG_TAG};
use crate::error_handling::InitializationError;

/// Timestamp layout of plain log lines.
const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` to write to stderr. Every plain line starts with
/// the fixed `[URL Tracer]` tag followed by a local timestamp; JSON lines carry
/// the tag in a `tag` field.
///
/// The logger reads from the `RUST_LOG` environment variable by default, but
/// the provided `level` parameter overrides it for this crate.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Show each redirect decision as well as the hops
/// urltrace --log-level debug example.com
///
/// # Inspect connection handling in the HTTP stack
/// RUST_LOG=hyper_util=debug urltrace example.com
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    colored::control::set_override(std::io::stderr().is_terminal());

    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    builder.filter_module("reqwest", LevelFilter::Info);
    builder.filter_module("hyper", LevelFilter::Info);
    builder.filter_module("hyper_util", LevelFilter::Info);
    builder.filter_module("urltrace", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                let line = serde_json::json!({
                    "ts": chrono::Utc::now().timestamp_millis(),
                    "tag": LOG_TAG,
                    "level": record.level().to_string(),
                    "target": record.target(),
                    "msg": record.args().to_string(),
                });
                writeln!(buf, "{line}")
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                let colored_level = match level {
                    log::Level::Error => level.to_string().red(),
                    log::Level::Warn => level.to_string().yellow(),
                    log::Level::Info => level.to_string().green(),
                    log::Level::Debug => level.to_string().blue(),
                    log::Level::Trace => level.to_string().purple(),
                };
                let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();

                writeln!(
                    buf,
                    "{}",
                    format_plain_line(
                        &timestamp,
                        &colored_level.to_string(),
                        &record.args().to_string()
                    )
                )
            });
        }
    }

    // try_init() so that repeated initialization (tests) returns an error instead of panicking
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

/// Lays out one plain log line: tag, timestamp, level, message.
pub fn format_plain_line(timestamp: &str, level: &str, message: &str) -> String {
    format!("[{LOG_TAG}] {timestamp} {level} {message}")
}
