//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, limits, log tag)
//! - CLI option types and parsing
//! - The immutable `Config` built from parsed options

mod constants;
mod types;

pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, Opt, UrlDisplay};
