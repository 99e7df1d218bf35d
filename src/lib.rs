//! urltrace library: redirect chain tracing
//!
//! Requests each URL with a GET and logs the status code and destination of
//! every hop of the redirect chain, the final response included.
//!
//! Redirects are followed by [`client::TraceClient`] one round trip at a time
//! through a [`transport::RoundTrip`] implementation. Wrapping the default
//! transport in [`transport::InstrumentedTransport`] is what produces the
//! per-hop log lines.
//!
//! # Example
//!
//! ```no_run
//! use urltrace::{run_trace, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     urls: vec!["example.com".to_string()],
//!     timeout_seconds: 5,
//!     ..Default::default()
//! };
//!
//! let report = run_trace(config).await?;
//! println!("{} traced, {} failed", report.traced, report.failed);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

pub mod client;
pub mod config;
pub mod error_handling;
pub mod initialization;
mod trace;
pub mod transport;

pub use config::{Config, LogFormat, LogLevel, Opt, UrlDisplay};
pub use error_handling::{categorize_trace_error, FailureKind, InitializationError, TraceError};
pub use trace::{parse_target, run_trace, trace_urls, TraceReport};
