//! Error handling.
//!
//! This module provides:
//! - Error type definitions for startup and per-URL tracing
//! - Categorization of trace failures for user-facing messages
//!
//! Initialization errors are fatal. Trace errors are per URL: they are logged
//! by the driver and the batch continues.

mod categorization;
mod types;

pub use categorization::{categorize_trace_error, FailureKind};
pub use types::{InitializationError, TraceError};
