//! Error type definitions.

use std::time::Duration;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors that end the trace of a single URL.
#[derive(Error, Debug)]
pub enum TraceError {
    /// The input could not be parsed as a URL.
    #[error("invalid URL {input:?}: {source}")]
    InvalidUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },

    /// The input parsed, but names a scheme other than http or https.
    #[error("unsupported protocol scheme {scheme:?} in {input:?}")]
    UnsupportedScheme { input: String, scheme: String },

    /// A round trip failed at the transport layer.
    #[error(transparent)]
    Transport(#[from] ReqwestError),

    /// The whole chain did not complete within the configured timeout.
    #[error("timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// The redirect limit was reached with a redirect still pending.
    #[error("stopped after {limit} redirects (last URL: {url})")]
    TooManyRedirects { limit: usize, url: String },

    /// A redirect response carried a `Location` header that cannot be followed.
    #[error("failed to follow redirect to {location:?}: {reason}")]
    InvalidRedirect { location: String, reason: String },
}
