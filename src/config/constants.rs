//! Configuration constants.

/// Default request timeout in seconds, applied when `--timeout` is not given.
pub const DEFAULT_TIMEOUT_SECS: i64 = 10;

/// Maximum number of requests issued while following one redirect chain.
/// Reaching it with a redirect still pending ends the trace with an error.
pub const MAX_REDIRECT_HOPS: usize = 10;

/// Redirect bodies up to this size are read before following the next hop,
/// letting the connection go back to the pool. Larger bodies are dropped.
pub const MAX_REDIRECT_BODY_BYTES: usize = 2048;

/// Fixed tag printed at the start of every log line.
pub const LOG_TAG: &str = "URL Tracer";

/// Scheme assumed for inputs such as `example.com/path`.
pub const DEFAULT_SCHEME: &str = "http";

/// User-Agent header sent with every request.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Redirect status codes that are followed.
pub const REDIRECT_STATUS_CODES: &[u16] = &[301, 302, 303, 307, 308];
