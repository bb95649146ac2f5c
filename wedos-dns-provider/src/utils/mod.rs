//! Utility modules.

/// Zone / relative-name decomposition.
pub mod domain;

/// Log sanitization utilities to prevent sensitive data exposure.
pub mod log_sanitizer;
