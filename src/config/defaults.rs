//! Fallbacks for settings given neither as a flag nor in the file.
//!
//! The check URL and pattern defaults belong to the resolver
//! ([`crate::resolver::DEFAULT_URL`], [`crate::resolver::DEFAULT_PATTERN`]).

pub const METHOD: &str = "POST";

/// Seconds between checks.
pub const POLL_INTERVAL_SECS: u64 = 300;

/// Seconds before any single request is abandoned.
pub const TIMEOUT_SECS: u64 = 10;
