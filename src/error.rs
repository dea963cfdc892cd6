//! Error types for mikor.
//!
//! The resolver itself never fails: every phrase yields some interval. Errors
//! only arise at the I/O and serialization boundary around it.

use thiserror::Error;

/// Errors that can occur in the CLI layer.
#[derive(Debug, Error)]
pub enum MikorError {
    /// Reading phrases from stdin failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),
}
