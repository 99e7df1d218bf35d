//! Error categorization.
//!
//! Separates "the site hung up on us" from every other trace failure, so the
//! driver can word its log line accordingly.

use std::error::Error as StdError;
use std::io;

use super::types::TraceError;

/// Coarse failure classes reported by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The connection reached end-of-stream before a response arrived.
    Unreachable,
    /// Any other failure.
    Other,
}

/// Categorizes a `TraceError` into a `FailureKind`.
///
/// Only transport errors can be `Unreachable`. The error's source chain is
/// walked looking for either an `io::ErrorKind::UnexpectedEof` or a hyper
/// "incomplete message" error, both of which mean the peer closed the
/// connection without answering.
pub fn categorize_trace_error(error: &TraceError) -> FailureKind {
    match error {
        TraceError::Transport(e) if is_end_of_stream(e) => FailureKind::Unreachable,
        _ => FailureKind::Other,
    }
}

fn is_end_of_stream(error: &(dyn StdError + 'static)) -> bool {
    let mut current: Option<&(dyn StdError + 'static)> = Some(error);
    while let Some(err) = current {
        if let Some(io_err) = err.downcast_ref::<io::Error>() {
            if io_err.kind() == io::ErrorKind::UnexpectedEof {
                return true;
            }
        }
        if let Some(hyper_err) = err.downcast_ref::<hyper::Error>() {
            if hyper_err.is_incomplete_message() {
                return true;
            }
        }
        current = err.source();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[derive(Debug)]
    struct Wrapper(io::Error);

    impl std::fmt::Display for Wrapper {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "wrapped")
        }
    }

    impl StdError for Wrapper {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_end_of_stream_found_in_source_chain() {
        let err = Wrapper(io::Error::new(io::ErrorKind::UnexpectedEof, "eof"));
        assert!(is_end_of_stream(&err));
    }

    #[test]
    fn test_other_io_errors_are_not_end_of_stream() {
        let err = Wrapper(io::Error::new(io::ErrorKind::ConnectionRefused, "refused"));
        assert!(!is_end_of_stream(&err));
    }

    #[test]
    fn test_non_transport_errors_are_other() {
        assert_eq!(
            categorize_trace_error(&TraceError::Timeout(Duration::from_secs(1))),
            FailureKind::Other
        );
        assert_eq!(
            categorize_trace_error(&TraceError::TooManyRedirects {
                limit: 10,
                url: "http://example.com/".to_string(),
            }),
            FailureKind::Other
        );
    }
}
