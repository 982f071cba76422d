//! Plain-text rendering for the terminal

use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;
use std::io::Write;

use crate::analysis::UrlAnalysis;
use crate::media::MediaType;
use crate::output::traits::{OutputHandler, OutputResult};

/// Formats a single analysis as an indented block
///
/// Lines for absent fields are omitted.
pub fn format_analysis(analysis: &UrlAnalysis, show_summary: bool) -> String {
    let mut out = format!("{}\n", analysis.original_url);

    if !analysis.is_valid {
        out.push_str("  Valid: no\n");
        return out;
    }

    out.push_str("  Valid: yes\n");
    if let Some(scheme) = &analysis.scheme {
        out.push_str(&format!("  Scheme: {}\n", scheme));
    }
    if let Some(host) = &analysis.host {
        match analysis.port {
            Some(port) => out.push_str(&format!("  Host: {}:{}\n", host, port)),
            None => out.push_str(&format!("  Host: {}\n", host)),
        }
    }
    if let Some(path) = &analysis.path {
        out.push_str(&format!("  Path: {}\n", path));
    }
    if let Some(query) = &analysis.query {
        out.push_str(&format!("  Query: {}\n", query));
    }
    if let Some(fragment) = &analysis.fragment {
        out.push_str(&format!("  Fragment: {}\n", fragment));
    }

    if analysis.platform.is_known() {
        out.push_str(&format!(
            "  Platform: {} ({})\n",
            analysis.platform.display_name(),
            analysis.platform_category.label()
        ));
    }

    if let Some(ext) = &analysis.file_extension {
        let label = match analysis.media_type {
            MediaType::Unknown => "Unknown",
            other => other.label(),
        };
        out.push_str(&format!("  Media: {} (.{})", label, ext));
        if let Some(mime) = &analysis.mime_type {
            out.push_str(&format!(", {}", mime));
        }
        out.push('\n');
    }

    for (key, value) in &analysis.extracted_ids {
        out.push_str(&format!("  {}: {}\n", key, value));
    }

    if show_summary {
        out.push_str(&format!("  Summary: {}\n", analysis.summary()));
    }

    out
}

/// Formats grouped URLs, largest group first
pub fn format_groups<K>(groups: &HashMap<K, Vec<String>>) -> String
where
    K: Display + Ord + Eq + Hash,
{
    let mut entries: Vec<_> = groups.iter().collect();
    entries.sort_by(|a, b| b.1.len().cmp(&a.1.len()).then_with(|| a.0.cmp(b.0)));

    let mut out = String::new();
    for (key, urls) in entries {
        out.push_str(&format!("{} ({}):\n", key, urls.len()));
        for url in urls {
            out.push_str(&format!("  - {}\n", url));
        }
    }
    out
}

/// Writes analyses as indented text blocks separated by blank lines
pub struct TextOutput<W: Write> {
    writer: W,
    show_summary: bool,
}

impl<W: Write> TextOutput<W> {
    /// Creates a new text handler
    ///
    /// # Arguments
    ///
    /// * `writer` - The destination
    /// * `show_summary` - Whether to add a one-line summary per URL
    pub fn new(writer: W, show_summary: bool) -> Self {
        Self {
            writer,
            show_summary,
        }
    }

    /// Returns the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputHandler for TextOutput<W> {
    fn record_analysis(&mut self, analysis: &UrlAnalysis) -> OutputResult<()> {
        writeln!(self.writer, "{}", format_analysis(analysis, self.show_summary))?;
        Ok(())
    }

    fn finalize(&mut self) -> OutputResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}
