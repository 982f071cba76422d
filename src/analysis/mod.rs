//! Per-URL analysis
//!
//! [`analyze`] runs every classifier over one input string and collects the
//! results into a single [`UrlAnalysis`]. The collection helpers in
//! [`collection`] apply the individual classifiers to many strings at once.

mod collection;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::extract::{extract_ids, ExtractedIds};
use crate::media::{
    media_type_for_extension, mime_type_for_extension, path_extension, type_description,
    MediaType,
};
use crate::platform::{detect_platform_in, Platform, PlatformCategory};
use crate::url::{is_valid_url, parse_components};

pub use collection::{
    filter_by_category, filter_by_media_type, filter_by_platform, filter_valid,
    group_by_category, group_by_media_type, group_by_platform,
};

/// Separator between the signals of [`UrlAnalysis::summary`]
pub const SUMMARY_DELIMITER: &str = " | ";

/// Everything Linkprism can tell about a single URL string
///
/// Invalid input only carries `original_url`; every other field stays at its
/// default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlAnalysis {
    /// The input exactly as given
    pub original_url: String,

    pub is_valid: bool,

    /// Lowercase scheme of the normalized URL
    pub scheme: Option<String>,

    /// Lowercase host, `www.` included if present
    pub host: Option<String>,

    pub path: Option<String>,

    /// Query string without the leading `?`
    pub query: Option<String>,

    /// Fragment without the leading `#`
    pub fragment: Option<String>,

    /// Explicit port, if one differs from the scheme default
    pub port: Option<u16>,

    pub is_https: bool,
    pub is_http: bool,
    pub is_file_url: bool,

    pub platform: Platform,

    /// Category of `platform`; `Unknown` when the platform is unknown
    pub platform_category: PlatformCategory,

    /// Media type of the path extension; `Unknown` without an extension
    pub media_type: MediaType,

    /// Lowercase path extension without the dot
    pub file_extension: Option<String>,

    /// Registered MIME type of `file_extension`
    pub mime_type: Option<String>,

    /// Human-readable description of `file_extension` (e.g. "MKV video file")
    pub type_description: Option<String>,

    /// Platform-specific identifiers; always empty for unknown platforms
    pub extracted_ids: ExtractedIds,
}

impl UrlAnalysis {
    fn invalid(input: &str) -> Self {
        Self {
            original_url: input.to_string(),
            ..Self::default()
        }
    }

    /// Returns a one-line description of the signals found
    ///
    /// Present signals are joined with `" | "` in this order: platform name,
    /// media type, `.ext`, `Secure` for HTTPS, and the number of extracted
    /// IDs. When none applies the summary is `"Invalid URL"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkprism::analyze;
    ///
    /// let analysis = analyze("https://youtu.be/dQw4w9WgXcQ");
    /// assert_eq!(analysis.summary(), "YouTube | Secure | 1 ID(s)");
    ///
    /// assert_eq!(analyze("not a url").summary(), "Invalid URL");
    /// ```
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();

        if self.platform.is_known() {
            parts.push(self.platform.display_name().to_string());
        }
        if self.media_type != MediaType::Unknown {
            parts.push(self.media_type.label().to_string());
        }
        if let Some(ext) = &self.file_extension {
            parts.push(format!(".{}", ext));
        }
        if self.is_https {
            parts.push("Secure".to_string());
        }
        if !self.extracted_ids.is_empty() {
            parts.push(format!("{} ID(s)", self.extracted_ids.len()));
        }

        if parts.is_empty() {
            "Invalid URL".to_string()
        } else {
            parts.join(SUMMARY_DELIMITER)
        }
    }
}

/// Analyzes a URL string
///
/// Validity is decided first by [`is_valid_url`]; invalid input returns
/// immediately with only `original_url` set. Valid input is normalized and
/// parsed, and all classifiers run over the parsed components. A parse
/// failure at that point is treated as invalid input.
///
/// # Examples
///
/// ```
/// use linkprism::{analyze, MediaType, Platform};
///
/// let analysis = analyze("github.com/apple/swift/pull/12345");
/// assert!(analysis.is_valid);
/// assert_eq!(analysis.scheme.as_deref(), Some("https"));
/// assert_eq!(analysis.platform, Platform::Github);
/// assert_eq!(analysis.extracted_ids["github_pr_number"], "12345");
///
/// let analysis = analyze("example.com/video.mkv");
/// assert_eq!(analysis.media_type, MediaType::Video);
/// assert_eq!(analysis.file_extension.as_deref(), Some("mkv"));
/// ```
pub fn analyze(input: &str) -> UrlAnalysis {
    if !is_valid_url(input) {
        debug!("Invalid URL: {:?}", input);
        return UrlAnalysis::invalid(input);
    }

    let Some(parts) = parse_components(input) else {
        debug!("Valid-looking URL failed to parse: {:?}", input);
        return UrlAnalysis::invalid(input);
    };

    let platform = parts
        .host
        .as_deref()
        .map(|h| detect_platform_in(h, &parts.path))
        .unwrap_or_default();

    let platform_category = if platform.is_known() {
        platform.category()
    } else {
        PlatformCategory::Unknown
    };

    let extracted_ids = parts
        .host
        .as_deref()
        .map(|h| extract_ids(h, &parts.path, parts.query.as_deref(), platform))
        .unwrap_or_default();

    let file_extension = path_extension(&parts.path);
    let (media_type, mime_type, description) = match &file_extension {
        Some(ext) => {
            let media_type = media_type_for_extension(ext);
            (
                media_type,
                mime_type_for_extension(ext),
                Some(type_description(ext, media_type)),
            )
        }
        None => (MediaType::Unknown, None, None),
    };

    let analysis = UrlAnalysis {
        original_url: input.to_string(),
        is_valid: true,
        is_https: parts.scheme == "https",
        is_http: parts.scheme == "http",
        is_file_url: parts.scheme == "file",
        scheme: Some(parts.scheme),
        host: parts.host,
        path: (!parts.path.is_empty()).then_some(parts.path),
        query: parts.query,
        fragment: parts.fragment,
        port: parts.port,
        platform,
        platform_category,
        media_type,
        file_extension,
        mime_type,
        type_description: description,
        extracted_ids,
    };

    debug!("Analyzed {}: {}", input, analysis.summary());
    analysis
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_youtube_watch_scenario() {
        let analysis = analyze("https://www.youtube.com/watch?v=dQw4w9WgXcQ#t=30s");

        assert!(analysis.is_valid);
        assert_eq!(analysis.host.as_deref(), Some("www.youtube.com"));
        assert_eq!(analysis.path.as_deref(), Some("/watch"));
        assert_eq!(analysis.query.as_deref(), Some("v=dQw4w9WgXcQ"));
        assert_eq!(analysis.fragment.as_deref(), Some("t=30s"));
        assert!(analysis.is_https);
        assert!(!analysis.is_http);
        assert_eq!(analysis.platform, Platform::Youtube);
        assert_eq!(analysis.platform_category, PlatformCategory::Video);
        assert_eq!(
            analysis.extracted_ids.get("youtube_video_id").map(String::as_str),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn test_invalid_input_keeps_defaults() {
        for input in ["", "   ", "not a url", "user@example.com", "http://:8080"] {
            let analysis = analyze(input);
            assert_eq!(
                analysis,
                UrlAnalysis {
                    original_url: input.to_string(),
                    ..UrlAnalysis::default()
                }
            );
        }
    }

    #[test]
    fn test_valid_but_unparseable_is_invalid() {
        let input = "tel:+1.555";
        assert!(is_valid_url(input));

        let analysis = analyze(input);
        assert_eq!(
            analysis,
            UrlAnalysis {
                original_url: input.to_string(),
                ..UrlAnalysis::default()
            }
        );
        assert_eq!(analysis.summary(), "Invalid URL");
    }

    #[test]
    fn test_scheme_flags() {
        assert!(analyze("http://example.com").is_http);
        assert!(analyze("file:///tmp/report.pdf").is_file_url);
        assert!(!analyze("ftp://files.example.com/a").is_https);
    }

    #[test]
    fn test_port_and_scheme_less_input() {
        let analysis = analyze("localhost:3000/api");
        assert!(analysis.is_valid);
        assert_eq!(analysis.scheme.as_deref(), Some("https"));
        assert_eq!(analysis.host.as_deref(), Some("localhost"));
        assert_eq!(analysis.port, Some(3000));
    }

    #[test]
    fn test_file_url_media() {
        let analysis = analyze("file:///Users/me/Movies/clip.mkv");
        assert!(analysis.is_valid);
        assert_eq!(analysis.host, None);
        assert_eq!(analysis.platform, Platform::Unknown);
        assert_eq!(analysis.media_type, MediaType::Video);
        assert_eq!(analysis.type_description.as_deref(), Some("MKV video file"));
        assert!(analysis.extracted_ids.is_empty());
    }

    #[test]
    fn test_media_fields_only_with_extension() {
        let analysis = analyze("https://example.com/about");
        assert_eq!(analysis.file_extension, None);
        assert_eq!(analysis.mime_type, None);
        assert_eq!(analysis.type_description, None);
        assert_eq!(analysis.media_type, MediaType::Unknown);

        let analysis = analyze("https://example.com/paper.pdf");
        assert_eq!(analysis.file_extension.as_deref(), Some("pdf"));
        assert_eq!(analysis.mime_type.as_deref(), Some("application/pdf"));
        assert_eq!(analysis.media_type, MediaType::Document);
    }

    #[test]
    fn test_unknown_platform_has_no_category_or_ids() {
        let analysis = analyze("https://unknownsite.xyz/status/123?v=abc");
        assert_eq!(analysis.platform, Platform::Unknown);
        assert_eq!(analysis.platform_category, PlatformCategory::Unknown);
        assert!(analysis.extracted_ids.is_empty());
    }

    #[test]
    fn test_special_subdomain_category() {
        let analysis = analyze("music.youtube.com/watch?v=x");
        assert_eq!(analysis.platform, Platform::YoutubeMusic);
        assert_eq!(analysis.platform_category, PlatformCategory::Audio);
        assert_eq!(analysis.extracted_ids["youtube_video_id"], "x");
    }

    #[test]
    fn test_summary_all_signals() {
        let analysis = analyze("https://github.com/owner/repo/blob/main/src/lib.rs");
        assert_eq!(analysis.summary(), "GitHub | Code | .rs | Secure | 2 ID(s)");
    }

    #[test]
    fn test_summary_without_signals() {
        // Valid, but nothing to report
        let analysis = analyze("http://unknownsite.xyz/page");
        assert!(analysis.is_valid);
        assert_eq!(analysis.summary(), "Invalid URL");
    }

    #[test]
    fn test_summary_secure_only() {
        assert_eq!(analyze("https://unknownsite.xyz/").summary(), "Secure");
    }

    #[test]
    fn test_serializes_identifiers() {
        let analysis = analyze("https://music.youtube.com/watch?v=x");
        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["platform"], "youtube_music");
        assert_eq!(json["platform_category"], "audio");
        assert_eq!(json["media_type"], "unknown");
        assert_eq!(json["extracted_ids"]["youtube_video_id"], "x");
    }
}
