//! Default network transport backed by `reqwest`.

use reqwest::ClientBuilder;

use super::RoundTrip;
use crate::config::USER_AGENT;

/// The platform default transport.
///
/// Wraps a `reqwest::Client` with redirect following disabled. No timeout is
/// set here: the deadline covers the whole chain and is enforced one layer up.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Builds the default transport.
    ///
    /// # Errors
    ///
    /// Returns a `reqwest::Error` if the TLS backend or resolver cannot be
    /// initialized.
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = ClientBuilder::new()
            .redirect(reqwest::redirect::Policy::none())
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }
}

impl RoundTrip for HttpTransport {
    async fn round_trip(
        &self,
        request: reqwest::Request,
    ) -> Result<reqwest::Response, reqwest::Error> {
        self.client.execute(request).await
    }
}
