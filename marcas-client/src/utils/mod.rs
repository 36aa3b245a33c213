//! Utility modules.

/// Serde helpers for the service's registration timestamps.
pub mod datetime;

/// Truncation of request/response bodies before they reach the log.
pub mod log_sanitizer;
