//! Output formatting for mikor.
//!
//! This module provides formatters for displaying resolved phrases in
//! various formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::MikorError;
use crate::resolver::Resolution;

pub use json::*;
pub use pretty::*;

/// Format a resolved phrase based on output format
///
/// # Errors
///
/// Returns `MikorError::Parse` if JSON serialization fails.
pub fn format_resolution(
    phrase: &str,
    resolution: &Resolution,
    format: OutputFormat,
) -> Result<String, MikorError> {
    match format {
        OutputFormat::Pretty => Ok(format_resolution_pretty(resolution)),
        OutputFormat::Json => format_resolution_json(phrase, resolution),
    }
}
