//! Trace client initialization.

use crate::client::TraceClient;
use crate::config::Config;
use crate::error_handling::InitializationError;
use crate::transport::{HttpTransport, InstrumentedTransport};

/// Initializes the client used for every trace of a run.
///
/// Creates one instrumented transport over the default `reqwest` transport
/// (redirects disabled) and wraps it in a `TraceClient` with the configured
/// timeout. The pair is built once and shared by all URLs.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if the underlying
/// `reqwest::Client` cannot be built.
pub fn init_trace_client(
    config: &Config,
) -> Result<TraceClient<InstrumentedTransport<HttpTransport>>, InitializationError> {
    let transport = InstrumentedTransport::with_default_transport(config.url_display)?;
    Ok(TraceClient::new(transport, config.request_timeout()))
}
