//! Statistics over a batch of analyses
//!
//! This module aggregates a slice of [`UrlAnalysis`] values into counts per
//! platform, category and media type, and prints them for the terminal.

use crate::analysis::UrlAnalysis;
use crate::media::MediaType;
use crate::platform::{Platform, PlatformCategory};
use std::collections::HashMap;
use std::fmt::Display;

/// Batch statistics summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchStatistics {
    /// Total number of input strings
    pub total_urls: u64,

    /// Number of inputs that are valid URLs
    pub valid_urls: u64,

    /// Number of inputs that are not URLs
    pub invalid_urls: u64,

    /// Number of valid URLs using HTTPS
    pub https_urls: u64,

    /// Count of valid URLs by platform (unknown included)
    pub by_platform: HashMap<Platform, u64>,

    /// Count of valid URLs by platform category (unknown included)
    pub by_category: HashMap<PlatformCategory, u64>,

    /// Count of valid URLs with a recognized media type
    pub by_media_type: HashMap<MediaType, u64>,

    /// Number of identifiers extracted across all URLs
    pub total_extracted_ids: u64,
}

impl BatchStatistics {
    /// Returns the share of valid inputs as a percentage
    pub fn valid_rate(&self) -> f64 {
        if self.total_urls == 0 {
            return 0.0;
        }
        (self.valid_urls as f64 / self.total_urls as f64) * 100.0
    }

    /// Returns the number of valid URLs that matched a known platform
    pub fn known_platform_urls(&self) -> u64 {
        self.by_platform
            .iter()
            .filter(|(platform, _)| platform.is_known())
            .map(|(_, count)| count)
            .sum()
    }
}

/// Computes statistics from a batch of analyses
///
/// # Arguments
///
/// * `analyses` - The analyses to aggregate
///
/// # Returns
///
/// The aggregated statistics
pub fn compute_statistics(analyses: &[UrlAnalysis]) -> BatchStatistics {
    let mut stats = BatchStatistics {
        total_urls: analyses.len() as u64,
        ..BatchStatistics::default()
    };

    for analysis in analyses {
        if !analysis.is_valid {
            stats.invalid_urls += 1;
            continue;
        }

        stats.valid_urls += 1;
        if analysis.is_https {
            stats.https_urls += 1;
        }

        *stats.by_platform.entry(analysis.platform).or_insert(0) += 1;
        *stats
            .by_category
            .entry(analysis.platform_category)
            .or_insert(0) += 1;
        if analysis.media_type != MediaType::Unknown {
            *stats.by_media_type.entry(analysis.media_type).or_insert(0) += 1;
        }

        stats.total_extracted_ids += analysis.extracted_ids.len() as u64;
    }

    stats
}

/// Returns map entries sorted by count (descending), then by key
pub fn sorted_counts<K: Ord + Copy>(counts: &HashMap<K, u64>) -> Vec<(K, u64)> {
    let mut entries: Vec<_> = counts.iter().map(|(k, v)| (*k, *v)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries
}

fn print_breakdown<K: Ord + Copy + Display>(title: &str, counts: &HashMap<K, u64>, total: u64) {
    if counts.is_empty() {
        return;
    }

    println!("{}:", title);
    for (key, count) in sorted_counts(counts) {
        let percentage = if total > 0 {
            (count as f64 / total as f64) * 100.0
        } else {
            0.0
        };
        println!("  {}: {} ({:.1}%)", key, count, percentage);
    }
    println!();
}

/// Prints statistics to stdout in a formatted manner
///
/// # Arguments
///
/// * `stats` - The statistics to display
pub fn print_statistics(stats: &BatchStatistics) {
    println!("=== URL Statistics ===\n");

    println!("Overview:");
    println!("  Total inputs: {}", stats.total_urls);
    println!("  Valid URLs: {}", stats.valid_urls);
    println!("  Invalid inputs: {}", stats.invalid_urls);
    println!("  HTTPS URLs: {}", stats.https_urls);
    println!("  Extracted IDs: {}", stats.total_extracted_ids);
    println!();

    print_breakdown("URLs by Platform", &stats.by_platform, stats.valid_urls);
    print_breakdown("URLs by Category", &stats.by_category, stats.valid_urls);
    print_breakdown("URLs by Media Type", &stats.by_media_type, stats.valid_urls);

    println!(
        "Recognition Rate: {} / {} valid URLs matched a known platform",
        stats.known_platform_urls(),
        stats.valid_urls
    );
    println!(
        "Valid Rate: {:.1}% ({} / {} inputs)",
        stats.valid_rate(),
        stats.valid_urls,
        stats.total_urls
    );
}
