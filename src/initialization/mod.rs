//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources of a run:
//! - Logger (tagged plain text or JSON)
//! - The trace client and its instrumented transport

mod client;
mod logger;

pub use client::init_trace_client;
pub use logger::{format_plain_line, init_logger_with};
