//! Output handler traits and types
//!
//! This module defines the trait interface for the per-URL output handlers
//! and the errors they report.

use crate::analysis::UrlAnalysis;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write output: {0}")]
    Write(String),

    #[error("Failed to format output: {0}")]
    Format(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for OutputError {
    fn from(e: serde_json::Error) -> Self {
        if e.is_io() {
            OutputError::Write(e.to_string())
        } else {
            OutputError::Format(e.to_string())
        }
    }
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Trait for handlers that emit analyses as they are produced
pub trait OutputHandler {
    /// Records a single analysis
    ///
    /// # Arguments
    ///
    /// * `analysis` - The analysis to emit
    fn record_analysis(&mut self, analysis: &UrlAnalysis) -> OutputResult<()>;

    /// Flushes any buffered output
    ///
    /// Called once after the last analysis.
    fn finalize(&mut self) -> OutputResult<()>;
}
