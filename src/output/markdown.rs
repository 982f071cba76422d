//! Markdown report generation
//!
//! This module generates a human-readable markdown report of a batch of
//! analyses: overall statistics, breakdowns by platform, category and media
//! type, and a per-URL table.

use crate::analysis::UrlAnalysis;
use crate::output::stats::{sorted_counts, BatchStatistics};
use crate::output::traits::OutputResult;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::fmt::Display;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Run metadata shown at the top of a report
#[derive(Debug, Clone)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,

    /// SHA-256 of the configuration file, if one was used
    pub config_hash: Option<String>,
}

impl ReportMetadata {
    /// Creates metadata stamped with the current time
    pub fn now(config_hash: Option<String>) -> Self {
        Self {
            generated_at: Utc::now(),
            config_hash,
        }
    }
}

/// Generates a markdown report and writes it to a file
///
/// # Arguments
///
/// * `analyses` - The analyses to report on
/// * `stats` - Statistics computed from the same analyses
/// * `metadata` - Report metadata
/// * `output_path` - Path where the markdown file should be written
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote the report
/// * `Err(OutputError)` - Failed to write the report
pub fn generate_markdown_report(
    analyses: &[UrlAnalysis],
    stats: &BatchStatistics,
    metadata: &ReportMetadata,
    output_path: &Path,
) -> OutputResult<()> {
    let markdown = format_markdown_report(analyses, stats, metadata);

    let mut file = File::create(output_path)?;
    file.write_all(markdown.as_bytes())?;

    Ok(())
}

fn push_breakdown<K: Ord + Copy + Display>(
    md: &mut String,
    title: &str,
    column: &str,
    counts: &HashMap<K, u64>,
) {
    if counts.is_empty() {
        return;
    }

    md.push_str(&format!("## {}\n\n", title));
    md.push_str(&format!("| {} | URLs |\n", column));
    md.push_str("|------|------|\n");
    for (key, count) in sorted_counts(counts) {
        md.push_str(&format!("| {} | {} |\n", key, count));
    }
    md.push('\n');
}

/// Escapes characters that would break a markdown table cell
fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|")
}

/// Formats a batch of analyses as markdown
///
/// # Arguments
///
/// * `analyses` - The analyses to report on
/// * `stats` - Statistics computed from the same analyses
/// * `metadata` - Report metadata
///
/// # Returns
///
/// A formatted markdown string
pub fn format_markdown_report(
    analyses: &[UrlAnalysis],
    stats: &BatchStatistics,
    metadata: &ReportMetadata,
) -> String {
    let mut md = String::new();

    // Title
    md.push_str("# Linkprism URL Report\n\n");

    // Run metadata
    md.push_str("## Run Information\n\n");
    md.push_str(&format!(
        "- **Generated**: {}\n",
        metadata.generated_at.to_rfc3339()
    ));
    if let Some(hash) = &metadata.config_hash {
        md.push_str(&format!("- **Config Hash**: {}\n", hash));
    }
    md.push('\n');

    // Overall statistics
    md.push_str("## Overall Statistics\n\n");
    md.push_str(&format!("- **Total Inputs**: {}\n", stats.total_urls));
    md.push_str(&format!("- **Valid URLs**: {}\n", stats.valid_urls));
    md.push_str(&format!("- **Invalid Inputs**: {}\n", stats.invalid_urls));
    md.push_str(&format!("- **HTTPS URLs**: {}\n", stats.https_urls));
    md.push_str(&format!(
        "- **Known Platforms**: {}\n",
        stats.known_platform_urls()
    ));
    md.push_str(&format!(
        "- **Extracted IDs**: {}\n",
        stats.total_extracted_ids
    ));
    md.push_str(&format!("- **Valid Rate**: {:.2}%\n\n", stats.valid_rate()));

    push_breakdown(&mut md, "Platforms", "Platform", &stats.by_platform);
    push_breakdown(&mut md, "Categories", "Category", &stats.by_category);
    push_breakdown(&mut md, "Media Types", "Media Type", &stats.by_media_type);

    // Per-URL table
    if !analyses.is_empty() {
        md.push_str("## URLs\n\n");
        md.push_str("| URL | Summary |\n");
        md.push_str("|-----|---------|\n");
        for analysis in analyses {
            md.push_str(&format!(
                "| {} | {} |\n",
                escape_cell(&analysis.original_url),
                escape_cell(&analysis.summary())
            ));
        }
        md.push('\n');
    }

    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::output::stats::compute_statistics;
    use tempfile::TempDir;

    fn create_test_batch() -> Vec<UrlAnalysis> {
        [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://github.com/apple/swift/pull/12345",
            "example.com/video.mkv",
            "not a url",
        ]
        .iter()
        .map(|s| analyze(s))
        .collect()
    }

    fn metadata() -> ReportMetadata {
        ReportMetadata {
            generated_at: "2024-01-01T00:00:00Z".parse().unwrap(),
            config_hash: Some("abc123".to_string()),
        }
    }

    #[test]
    fn test_format_markdown_report() {
        let analyses = create_test_batch();
        let stats = compute_statistics(&analyses);
        let markdown = format_markdown_report(&analyses, &stats, &metadata());

        assert!(markdown.contains("# Linkprism URL Report"));
        assert!(markdown.contains("- **Generated**: 2024-01-01T00:00:00+00:00"));
        assert!(markdown.contains("- **Config Hash**: abc123"));
        assert!(markdown.contains("- **Total Inputs**: 4"));
        assert!(markdown.contains("- **Valid URLs**: 3"));
    }

    #[test]
    fn test_markdown_breakdowns() {
        let analyses = create_test_batch();
        let stats = compute_statistics(&analyses);
        let markdown = format_markdown_report(&analyses, &stats, &metadata());

        assert!(markdown.contains("## Platforms"));
        assert!(markdown.contains("| youtube | 1 |"));
        assert!(markdown.contains("| github | 1 |"));
        assert!(markdown.contains("## Media Types"));
        assert!(markdown.contains("| video | 1 |"));
    }

    #[test]
    fn test_markdown_url_table_escapes_pipes() {
        let analyses = create_test_batch();
        let stats = compute_statistics(&analyses);
        let markdown = format_markdown_report(&analyses, &stats, &metadata());

        assert!(markdown.contains("| not a url | Invalid URL |"));
        assert!(markdown.contains("YouTube \\| Secure \\| 1 ID(s)"));
    }

    #[test]
    fn test_empty_report_omits_sections() {
        let stats = compute_statistics(&[]);
        let metadata = ReportMetadata::now(None);
        let markdown = format_markdown_report(&[], &stats, &metadata);

        assert!(!markdown.contains("Config Hash"));
        assert!(!markdown.contains("## Platforms"));
        assert!(!markdown.contains("## URLs"));
    }

    #[test]
    fn test_generate_markdown_report_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.md");

        let analyses = create_test_batch();
        let stats = compute_statistics(&analyses);
        generate_markdown_report(&analyses, &stats, &metadata(), &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# Linkprism URL Report"));
    }
}
