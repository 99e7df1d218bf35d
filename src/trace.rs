//! Command driver: traces each input URL in turn.

use std::time::Instant;

use log::{debug, error, info, warn};
use url::Url;

use crate::client::TraceClient;
use crate::config::{Config, DEFAULT_SCHEME};
use crate::error_handling::{categorize_trace_error, FailureKind, InitializationError, TraceError};
use crate::initialization::init_trace_client;
use crate::transport::RoundTrip;

/// Summary of one driver run.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceReport {
    /// Number of inputs processed.
    pub total_urls: usize,
    /// Inputs whose trace reached a final response.
    pub traced: usize,
    /// Inputs that failed to parse or to resolve.
    pub failed: usize,
    /// Wall-clock duration of the run.
    pub elapsed_seconds: f64,
}

/// Builds the client described by `config` and traces every URL in it.
///
/// Per-URL failures are logged and counted; they never abort the batch.
///
/// # Errors
///
/// Returns an `InitializationError` if the HTTP client cannot be built.
pub async fn run_trace(config: Config) -> Result<TraceReport, InitializationError> {
    info!(
        "creating HTTP client with {} second timeout",
        config.timeout_seconds
    );
    if config.request_timeout().is_none() {
        warn!(
            "timeout of {} seconds disables the request deadline",
            config.timeout_seconds
        );
    }

    let client = init_trace_client(&config)?;
    Ok(trace_urls(&client, config.urls.as_slice()).await)
}

/// Traces `urls` sequentially through `client`.
pub async fn trace_urls<T, S>(client: &TraceClient<T>, urls: &[S]) -> TraceReport
where
    T: RoundTrip,
    S: AsRef<str>,
{
    let start = Instant::now();
    let mut traced = 0;
    let mut failed = 0;

    for input in urls {
        let input = input.as_ref();
        match trace_one(client, input).await {
            Ok(()) => traced += 1,
            Err(e) => {
                failed += 1;
                log_failure(&e);
            }
        }
    }

    let report = TraceReport {
        total_urls: urls.len(),
        traced,
        failed,
        elapsed_seconds: start.elapsed().as_secs_f64(),
    };
    debug!(
        "Traced {} URL(s): {} resolved, {} failed in {:.2}s",
        report.total_urls, report.traced, report.failed, report.elapsed_seconds
    );
    report
}

async fn trace_one<T: RoundTrip>(client: &TraceClient<T>, input: &str) -> Result<(), TraceError> {
    let url = parse_target(input)?;
    let response = client.get(url).await?;
    debug!("Trace of {} ended at {}", input, response.status());
    Ok(())
}

fn log_failure(error: &TraceError) {
    match error {
        TraceError::InvalidUrl { .. } | TraceError::UnsupportedScheme { .. } => {
            warn!("error parsing URL: {}.", error);
        }
        _ => match categorize_trace_error(error) {
            FailureKind::Unreachable => error!("site could not be reached. {}", error),
            FailureKind::Other => error!("error when searching for URL: {}", error),
        },
    }
}

/// Parses a command-line input into the URL to request.
///
/// Inputs without a `scheme://` prefix are requested over http. Only http and
/// https are accepted.
///
/// # Errors
///
/// - `TraceError::InvalidUrl` if the input is not a valid URL
/// - `TraceError::UnsupportedScheme` for any scheme other than http or https
pub fn parse_target(input: &str) -> Result<Url, TraceError> {
    let trimmed = input.trim();
    let candidate = if has_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("{DEFAULT_SCHEME}://{trimmed}")
    };

    let url = Url::parse(&candidate).map_err(|source| TraceError::InvalidUrl {
        input: input.to_string(),
        source,
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(TraceError::UnsupportedScheme {
            input: input.to_string(),
            scheme: scheme.to_string(),
        }),
    }
}

/// True when `input` starts with `scheme://`. A `://` that appears after a
/// `/`, `?` or `#` (e.g. inside a query string) does not count.
fn has_scheme(input: &str) -> bool {
    let Some((scheme, _)) = input.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
