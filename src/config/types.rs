use clap::ValueEnum;
use serde::Deserialize;
use std::collections::HashSet;

use crate::analysis::UrlAnalysis;
use crate::media::MediaType;
use crate::platform::{Platform, PlatformCategory};

/// Main configuration structure for Linkprism
///
/// Every section is optional; a missing file behaves like an empty one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    pub filter: FilterConfig,
    pub group: GroupConfig,
}

/// How analyses are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented text blocks
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct OutputConfig {
    /// Output format for per-URL analyses
    pub format: OutputFormat,

    /// Whether text output adds a one-line summary per URL
    pub show_summary: bool,

    /// Path to the markdown report file, if one should be written
    pub markdown_path: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            show_summary: true,
            markdown_path: None,
        }
    }
}

/// Which URLs are reported
///
/// Identifier lists are kept as written in the file and resolved by
/// [`resolve_filter`](super::resolve_filter); an empty list allows everything.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FilterConfig {
    /// Drop inputs that are not valid URLs
    pub valid_only: bool,

    /// Platform identifiers (e.g. "youtube", "github")
    pub platforms: Vec<String>,

    /// Category identifiers (e.g. "video", "web3")
    pub categories: Vec<String>,

    /// Media type identifiers (e.g. "image", "model3d")
    pub media_types: Vec<String>,
}

/// Grouping key for the grouped listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum GroupKey {
    Platform,
    Category,
    MediaType,
}

/// Grouping configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GroupConfig {
    /// Group the listed URLs by this key
    pub by: Option<GroupKey>,
}

/// A resolved filter with identifiers parsed into their enums
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlFilter {
    pub valid_only: bool,
    pub platforms: HashSet<Platform>,
    pub categories: HashSet<PlatformCategory>,
    pub media_types: HashSet<MediaType>,
}

impl UrlFilter {
    /// Returns true if the analysis passes every configured restriction
    pub fn matches(&self, analysis: &UrlAnalysis) -> bool {
        if self.valid_only && !analysis.is_valid {
            return false;
        }
        if !self.platforms.is_empty() && !self.platforms.contains(&analysis.platform) {
            return false;
        }
        if !self.categories.is_empty() && !self.categories.contains(&analysis.platform_category)
        {
            return false;
        }
        if !self.media_types.is_empty() && !self.media_types.contains(&analysis.media_type) {
            return false;
        }
        true
    }

    /// Returns true if no restriction is configured
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
