//! Redirect-following HTTP client.
//!
//! This module follows redirect chains hop by hop through a [`RoundTrip`]
//! transport, so every intermediate response passes through the transport
//! (and its instrumentation) on its way to the final one.

use std::time::Duration;

use log::debug;
use reqwest::header::{HeaderValue, LOCATION, REFERER};
use reqwest::{Method, Response};
use url::Url;

use crate::config::{MAX_REDIRECT_BODY_BYTES, MAX_REDIRECT_HOPS, REDIRECT_STATUS_CODES};
use crate::error_handling::TraceError;
use crate::transport::RoundTrip;

/// HTTP client that issues GET requests and follows redirects manually.
#[derive(Debug, Clone)]
pub struct TraceClient<T> {
    transport: T,
    timeout: Option<Duration>,
    max_hops: usize,
}

impl<T: RoundTrip> TraceClient<T> {
    /// Creates a client over `transport`.
    ///
    /// `timeout` bounds a whole trace, every hop included. `None` disables it.
    pub fn new(transport: T, timeout: Option<Duration>) -> Self {
        Self {
            transport,
            timeout,
            max_hops: MAX_REDIRECT_HOPS,
        }
    }

    /// Overrides the maximum number of requests per trace (at least one).
    pub fn with_max_hops(mut self, max_hops: usize) -> Self {
        self.max_hops = max_hops.max(1);
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Issues a GET for `url`, following redirects, and returns the final
    /// response. The body is left unread.
    ///
    /// # Errors
    ///
    /// - `TraceError::Transport` if any round trip fails
    /// - `TraceError::Timeout` if the chain outlives the configured timeout
    /// - `TraceError::TooManyRedirects` if the hop limit is reached
    /// - `TraceError::InvalidRedirect` if a `Location` header cannot be followed
    pub async fn get(&self, url: Url) -> Result<Response, TraceError> {
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.follow(url))
                .await
                .map_err(|_| TraceError::Timeout(limit))?,
            None => self.follow(url).await,
        }
    }

    async fn follow(&self, start: Url) -> Result<Response, TraceError> {
        let mut current = start;
        let mut referer: Option<HeaderValue> = None;

        for _ in 0..self.max_hops {
            let mut request = reqwest::Request::new(Method::GET, current.clone());
            if let Some(value) = referer.take() {
                request.headers_mut().insert(REFERER, value);
            }

            let response = self.transport.round_trip(request).await?;
            let Some(next) = redirect_target(&current, &response)? else {
                return Ok(response);
            };
            drain_redirect_body(response).await;

            debug!("Following redirect {} -> {}", current, next);
            referer = referer_for(&current, &next);
            current = next;
        }

        Err(TraceError::TooManyRedirects {
            limit: self.max_hops,
            url: current.to_string(),
        })
    }
}

/// Returns the URL a response redirects to, or `None` if it is final.
///
/// Only 301, 302, 303, 307 and 308 with a `Location` header redirect. Relative
/// locations are resolved against `current`.
fn redirect_target(current: &Url, response: &Response) -> Result<Option<Url>, TraceError> {
    let status = response.status();
    if !REDIRECT_STATUS_CODES.contains(&status.as_u16()) {
        return Ok(None);
    }

    let Some(location) = response.headers().get(LOCATION) else {
        debug!(
            "Redirect status {} for {} but no Location header",
            status, current
        );
        return Ok(None);
    };

    let location = location
        .to_str()
        .map_err(|e| TraceError::InvalidRedirect {
            location: String::from_utf8_lossy(location.as_bytes()).into_owned(),
            reason: e.to_string(),
        })?;

    let next = current
        .join(location)
        .map_err(|e| TraceError::InvalidRedirect {
            location: location.to_string(),
            reason: e.to_string(),
        })?;

    match next.scheme() {
        "http" | "https" => Ok(Some(next)),
        other => Err(TraceError::InvalidRedirect {
            location: location.to_string(),
            reason: format!("unsupported protocol scheme {other:?}"),
        }),
    }
}

/// Reads a redirect body so its connection can be reused. Stops (and drops
/// the connection) once more than `MAX_REDIRECT_BODY_BYTES` have been read.
async fn drain_redirect_body(mut response: Response) {
    let mut read = 0;
    loop {
        match response.chunk().await {
            Ok(Some(chunk)) => {
                read += chunk.len();
                if read > MAX_REDIRECT_BODY_BYTES {
                    debug!("Redirect body from {} too large, dropping", response.url());
                    break;
                }
            }
            Ok(None) => break,
            Err(e) => {
                debug!("Discarding redirect body from {}: {}", response.url(), e);
                break;
            }
        }
    }
}

/// Referer sent on the request to `next`: the previous URL without fragment
/// or credentials, omitted on an https to http downgrade.
fn referer_for(previous: &Url, next: &Url) -> Option<HeaderValue> {
    if previous.scheme() == "https" && next.scheme() == "http" {
        return None;
    }

    let mut referer = previous.clone();
    referer.set_fragment(None);
    // Fails only for URLs that cannot carry credentials, which have none.
    let _ = referer.set_username("");
    let _ = referer.set_password(None);
    HeaderValue::from_str(referer.as_str()).ok()
}
