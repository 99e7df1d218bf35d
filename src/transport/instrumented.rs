//! Transport decorator that logs every successful round trip.

use log::info;
use reqwest::StatusCode;
use url::Url;

use super::{HttpTransport, RoundTrip};
use crate::config::UrlDisplay;

/// Wraps a delegate transport and logs one status line per round trip.
///
/// The request and response pass through untouched. Failed round trips are
/// returned to the caller without being logged here.
#[derive(Debug, Clone)]
pub struct InstrumentedTransport<T = HttpTransport> {
    inner: T,
    display: UrlDisplay,
}

impl<T> InstrumentedTransport<T> {
    pub fn new(inner: T, display: UrlDisplay) -> Self {
        Self { inner, display }
    }

    pub fn display(&self) -> UrlDisplay {
        self.display
    }
}

impl InstrumentedTransport<HttpTransport> {
    /// Instruments the platform default transport.
    ///
    /// # Errors
    ///
    /// Returns a `reqwest::Error` if the default transport cannot be built.
    pub fn with_default_transport(display: UrlDisplay) -> Result<Self, reqwest::Error> {
        Ok(Self::new(HttpTransport::new()?, display))
    }
}

impl<T> RoundTrip for InstrumentedTransport<T>
where
    T: RoundTrip + Sync,
{
    async fn round_trip(
        &self,
        request: reqwest::Request,
    ) -> Result<reqwest::Response, reqwest::Error> {
        let url = request.url().clone();
        let response = self.inner.round_trip(request).await?;
        info!("{}", hop_line(response.status(), &url, self.display));
        Ok(response)
    }
}

/// Formats the status line logged for one hop.
pub fn hop_line(status: StatusCode, url: &Url, display: UrlDisplay) -> String {
    match display {
        UrlDisplay::Full => format!("Status: {}, Full URL: {}", status.as_u16(), url),
        UrlDisplay::Host => format!(
            "Status: {}, Base URL: {}",
            status.as_u16(),
            describe_url(url, display)
        ),
    }
}

/// Renders `url` for the given display mode.
///
/// Host mode yields `host[:port]`; the port appears only when the URL names
/// a non-default one. `url` normalizes an explicit default port away, so
/// `http://example.com:80/` renders as `example.com`.
pub fn describe_url(url: &Url, display: UrlDisplay) -> String {
    match display {
        UrlDisplay::Full => url.to_string(),
        UrlDisplay::Host => {
            let host = url.host_str().unwrap_or_default();
            match url.port() {
                Some(port) => format!("{host}:{port}"),
                None => host.to_string(),
            }
        }
    }
}
