//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and the immutable configuration derived from them.

use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::DEFAULT_TIMEOUT_SECS;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace). Used with the `--log-level` CLI option.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: tagged, timestamped text lines (default)
/// - `Json`: one JSON object per line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Plain,
    Json,
}

/// How a hop's URL is rendered in the trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UrlDisplay {
    /// Host (and explicit port) only.
    #[default]
    Host,
    /// The complete request URL, path and query included.
    Full,
}

impl UrlDisplay {
    /// Maps the `--full-url` flag onto a display mode.
    pub fn from_full_url_flag(full_url: bool) -> Self {
        if full_url {
            UrlDisplay::Full
        } else {
            UrlDisplay::Host
        }
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// urltrace http://www.google.com/mail
/// urltrace --timeout 15 http://www.google.com/mail
/// urltrace -t 15 -f http://www.google.com/mail
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "urltrace",
    version,
    about = "urltrace allows a user to trace a URL's redirects",
    long_about = "urltrace traces the redirect path of one or more URLs, logging the \
                  status code and destination of every hop so that the URLs needed to \
                  reach a given page can be identified."
)]
pub struct Opt {
    /// URLs to trace; inputs without a scheme are requested over http
    #[arg(required = true, value_name = "URL")]
    pub urls: Vec<String>,

    /// Sets the timeout in seconds for a requested URL (0 or less disables it)
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_TIMEOUT_SECS,
        allow_negative_numbers = true
    )]
    pub timeout: i64,

    /// Display the entire URL, not the host portion
    #[arg(short, long)]
    pub full_url: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

/// Immutable trace configuration.
///
/// Built once from [`Opt`] (or directly by library callers) and passed by
/// reference to everything that needs it.
#[derive(Debug, Clone)]
pub struct Config {
    /// Inputs to trace, in order.
    pub urls: Vec<String>,

    /// Timeout as given on the command line, in whole seconds.
    pub timeout_seconds: i64,

    /// Rendering of hop URLs.
    pub url_display: UrlDisplay,

    /// Minimum log level.
    pub log_level: LogLevel,

    /// Log output format.
    pub log_format: LogFormat,
}

impl Config {
    /// Deadline for one complete trace, or `None` when the configured value
    /// is zero or negative.
    pub fn request_timeout(&self) -> Option<Duration> {
        u64::try_from(self.timeout_seconds)
            .ok()
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            urls: Vec::new(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            url_display: UrlDisplay::Host,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            urls: opt.urls,
            timeout_seconds: opt.timeout,
            url_display: UrlDisplay::from_full_url_flag(opt.full_url),
            log_level: opt.log_level,
            log_format: opt.log_format,
        }
    }
}
