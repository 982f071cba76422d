//! Output module for rendering analyses and reports
//!
//! This module handles:
//! - Printing per-URL analyses as text or JSON lines
//! - Computing and printing batch statistics
//! - Generating markdown reports

mod json;
mod markdown;
pub mod stats;
mod text;
mod traits;

pub use json::JsonLinesOutput;
pub use markdown::{format_markdown_report, generate_markdown_report, ReportMetadata};
pub use stats::{compute_statistics, print_statistics, BatchStatistics};
pub use text::{format_analysis, format_groups, TextOutput};
pub use traits::{OutputError, OutputHandler, OutputResult};

use crate::config::OutputFormat;
use std::io::Write;

/// Creates the handler for an output format
///
/// # Arguments
///
/// * `format` - The configured output format
/// * `writer` - The destination
/// * `show_summary` - Whether text output adds a summary line per URL
pub fn create_handler<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
    show_summary: bool,
) -> Box<dyn OutputHandler + 'a> {
    match format {
        OutputFormat::Text => Box::new(TextOutput::new(writer, show_summary)),
        OutputFormat::Json => Box::new(JsonLinesOutput::new(writer)),
    }
}
