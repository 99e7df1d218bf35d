//! Transport layer: one HTTP round trip at a time.
//!
//! A transport sends exactly one request and returns exactly one response. It
//! never follows redirects; that is the job of [`crate::client::TraceClient`],
//! which calls the transport once per hop. This is what makes every hop of a
//! redirect chain individually visible.

mod instrumented;
mod network;

use std::future::Future;

pub use instrumented::{describe_url, hop_line, InstrumentedTransport};
pub use network::HttpTransport;

/// The capability to perform a single HTTP round trip.
pub trait RoundTrip {
    /// Sends `request` and returns the response, without following redirects.
    fn round_trip(
        &self,
        request: reqwest::Request,
    ) -> impl Future<Output = Result<reqwest::Response, reqwest::Error>> + Send;
}
