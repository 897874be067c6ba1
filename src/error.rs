//! Error types for linedex
//!
//! Provides a unified error type for all operations.
//!
//! Absence is not an error: a key missing from the index, or an offset that
//! resolves to a tombstoned line, comes back as `Ok(None)` / `Ok(false)` from
//! the table operations. Only real failures (I/O, bad configuration) surface
//! through [`LinedexError`].

use thiserror::Error;

/// Result type alias using LinedexError
pub type Result<T> = std::result::Result<T, LinedexError>;

/// Unified error type for linedex operations
#[derive(Debug, Error)]
pub enum LinedexError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
