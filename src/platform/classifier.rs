use tracing::trace;

use super::patterns::{
    is_skipped, CUSTOM_SUBDOMAIN_RULES, PLATFORM_PATTERNS, SPECIAL_SUBDOMAIN_RULES,
};
use super::Platform;
use crate::url::{clean_host, extract_host, matches_domain, matches_substring, parse_url};

const YOUTUBE_HOSTS: &[&str] = &["youtube.com", "m.youtube.com"];
const INSTAGRAM_HOSTS: &[&str] = &["instagram.com", "instagr.am"];

/// Detects the platform a URL belongs to
///
/// The input is normalized first, so scheme-less strings such as
/// `"github.com/rust-lang"` are accepted. Unparseable input, or a URL
/// without a host, yields [`Platform::Unknown`].
///
/// # Examples
///
/// ```
/// use linkprism::{detect_platform, Platform};
///
/// assert_eq!(detect_platform("https://www.youtube.com/watch?v=1"), Platform::Youtube);
/// assert_eq!(detect_platform("music.youtube.com/watch?v=x"), Platform::YoutubeMusic);
/// assert_eq!(detect_platform("https://unknownsite.xyz/"), Platform::Unknown);
/// ```
pub fn detect_platform(input: &str) -> Platform {
    let Ok(url) = parse_url(input) else {
        return Platform::Unknown;
    };

    match extract_host(&url) {
        Some(host) => detect_platform_in(&host, url.path()),
        None => Platform::Unknown,
    }
}

/// Detects the platform for an already parsed host and path
///
/// The host is expected to be lowercase; a leading `www.` is stripped here.
/// Tiers are checked in the following priority order:
/// 1. Special subdomain rules (exact clean-host match)
/// 2. Path overrides for YouTube Shorts and Instagram Reels
/// 3. Generic platform table (domain or subdomain match, skip set excluded)
/// 4. Custom subdomain rules (substring match)
/// 5. Unknown (default)
pub fn detect_platform_in(host: &str, path: &str) -> Platform {
    let host = clean_host(host);

    // Priority 1: Special subdomains
    for rule in SPECIAL_SUBDOMAIN_RULES {
        if host == rule.host {
            trace!("{} matched special rule -> {}", host, rule.platform);
            return rule.platform;
        }
    }

    // Priority 2: Path overrides
    if let Some(platform) = path_override(host, path) {
        trace!("{}{} matched path override -> {}", host, path, platform);
        return platform;
    }

    // Priority 3: Generic table
    for entry in PLATFORM_PATTERNS {
        if is_skipped(entry.platform) {
            continue;
        }
        if entry.domains.iter().any(|domain| matches_domain(host, domain)) {
            trace!("{} matched generic table -> {}", host, entry.platform);
            return entry.platform;
        }
    }

    // Priority 4: Custom subdomains
    for rule in CUSTOM_SUBDOMAIN_RULES {
        if matches_substring(host, rule.pattern) {
            trace!("{} matched custom rule {} -> {}", host, rule.pattern, rule.platform);
            return rule.platform;
        }
    }

    Platform::Unknown
}

fn path_override(host: &str, path: &str) -> Option<Platform> {
    let path = path.to_lowercase();

    if YOUTUBE_HOSTS.contains(&host) && path.contains("/shorts/") {
        return Some(Platform::YoutubeShorts);
    }

    if INSTAGRAM_HOSTS.contains(&host) && path.contains("/reel/") {
        return Some(Platform::InstagramReels);
    }

    None
}
