//! Linkprism: URL platform and media classification
//!
//! This crate decides whether a string is a URL, normalizes it, identifies
//! which known web platform it belongs to, groups platforms into categories,
//! detects the media type of linked files and extracts platform-specific
//! content identifiers (video IDs, post IDs, repository names).
//!
//! Nothing here performs network I/O. Every classification function is a pure
//! function of its input and a set of static tables.
//!
//! ```
//! use linkprism::{analyze, Platform, PlatformCategory};
//!
//! let analysis = analyze("https://www.youtube.com/watch?v=dQw4w9WgXcQ");
//! assert_eq!(analysis.platform, Platform::Youtube);
//! assert_eq!(analysis.platform_category, PlatformCategory::Video);
//! assert_eq!(
//!     analysis.extracted_ids.get("youtube_video_id").map(String::as_str),
//!     Some("dQw4w9WgXcQ")
//! );
//! ```

pub mod analysis;
pub mod config;
pub mod extract;
pub mod input;
pub mod media;
pub mod output;
pub mod platform;
pub mod url;

use thiserror::Error;

/// Main error type for Linkprism operations
///
/// The classification functions never fail; this covers the configuration,
/// input and report layers around them and is what the command-line tool
/// returns.
#[derive(Debug, Error)]
pub enum LinkprismError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    Url(#[from] UrlError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No URLs given; pass them as arguments or with --input")]
    NoInput,
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unknown platform in config: {0}")]
    UnknownPlatform(String),

    #[error("Unknown platform category in config: {0}")]
    UnknownCategory(String),

    #[error("Unknown media type in config: {0}")]
    UnknownMediaType(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Missing host in URL")]
    MissingHost,
}

/// Result type alias for Linkprism operations
pub type Result<T> = std::result::Result<T, LinkprismError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use analysis::{
    analyze, filter_by_category, filter_by_media_type, filter_by_platform, filter_valid,
    group_by_category, group_by_media_type, group_by_platform, UrlAnalysis,
};
pub use config::Config;
pub use extract::{extract_ids, ExtractedIds};
pub use media::{detect_media_type, MediaType};
pub use platform::{category_for, detect_platform, Platform, PlatformCategory};
pub use crate::url::{is_valid_url, normalize, parse_url};
