//! Filtering and grouping over many URL strings
//!
//! Filters keep the input order. Groups are plain maps; key order is not
//! meaningful. Every element is classified independently.

use std::collections::HashMap;
use std::hash::Hash;

use crate::media::{detect_media_type, MediaType};
use crate::platform::{detect_platform, Platform, PlatformCategory};
use crate::url::is_valid_url;

fn filter_by<I, S, F>(urls: I, mut keep: F) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    F: FnMut(&str) -> bool,
{
    urls.into_iter()
        .filter(|url| keep(url.as_ref()))
        .map(|url| url.as_ref().to_string())
        .collect()
}

fn group_by<I, S, K, F>(urls: I, mut key: F) -> HashMap<K, Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    K: Eq + Hash,
    F: FnMut(&str) -> K,
{
    let mut groups: HashMap<K, Vec<String>> = HashMap::new();
    for url in urls {
        let url = url.as_ref();
        groups.entry(key(url)).or_default().push(url.to_string());
    }
    groups
}

/// Keeps the strings that are valid URLs
///
/// # Examples
///
/// ```
/// use linkprism::filter_valid;
///
/// let valid = filter_valid(["https://a.com", "nope", "b.org"]);
/// assert_eq!(valid, vec!["https://a.com", "b.org"]);
/// ```
pub fn filter_valid<I, S>(urls: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    filter_by(urls, is_valid_url)
}

/// Keeps the URLs detected as `platform`
pub fn filter_by_platform<I, S>(urls: I, platform: Platform) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    filter_by(urls, |url| detect_platform(url) == platform)
}

/// Keeps the URLs whose platform belongs to `category`
pub fn filter_by_category<I, S>(urls: I, category: PlatformCategory) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    filter_by(urls, |url| detect_platform(url).category() == category)
}

/// Keeps the URLs that point at a resource of `media_type`
pub fn filter_by_media_type<I, S>(urls: I, media_type: MediaType) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    filter_by(urls, |url| detect_media_type(url) == media_type)
}

/// Groups URLs by detected platform
///
/// URLs that match no platform, including invalid strings, land under
/// [`Platform::Unknown`].
///
/// # Examples
///
/// ```
/// use linkprism::{group_by_platform, Platform};
///
/// let groups = group_by_platform([
///     "https://youtube.com/a",
///     "https://youtube.com/b",
///     "https://unknownsite.xyz/c",
/// ]);
/// assert_eq!(groups[&Platform::Youtube].len(), 2);
/// assert_eq!(groups[&Platform::Unknown].len(), 1);
/// ```
pub fn group_by_platform<I, S>(urls: I) -> HashMap<Platform, Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    group_by(urls, detect_platform)
}

/// Groups URLs by the category of their detected platform
pub fn group_by_category<I, S>(urls: I) -> HashMap<PlatformCategory, Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    group_by(urls, |url| detect_platform(url).category())
}

/// Groups URLs by the media type of their path extension
pub fn group_by_media_type<I, S>(urls: I) -> HashMap<MediaType, Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    group_by(urls, detect_media_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    const URLS: &[&str] = &[
        "https://youtube.com/a",
        "not a url",
        "https://github.com/rust-lang/rust",
        "https://youtube.com/b",
        "https://music.youtube.com/watch?v=1",
        "https://example.com/photo.png",
        "https://unknownsite.xyz/c",
    ];

    #[test]
    fn test_filter_valid_keeps_order() {
        let valid = filter_valid(URLS);
        assert_eq!(valid.len(), 6);
        assert_eq!(valid[0], "https://youtube.com/a");
        assert_eq!(valid[1], "https://github.com/rust-lang/rust");
    }

    #[test]
    fn test_filter_by_platform() {
        let youtube = filter_by_platform(URLS, Platform::Youtube);
        assert_eq!(youtube, vec!["https://youtube.com/a", "https://youtube.com/b"]);
    }

    #[test]
    fn test_filter_by_category() {
        let audio = filter_by_category(URLS, PlatformCategory::Audio);
        assert_eq!(audio, vec!["https://music.youtube.com/watch?v=1"]);

        let developer = filter_by_category(URLS, PlatformCategory::Developer);
        assert_eq!(developer, vec!["https://github.com/rust-lang/rust"]);
    }

    #[test]
    fn test_filter_by_media_type() {
        let images = filter_by_media_type(URLS, MediaType::Image);
        assert_eq!(images, vec!["https://example.com/photo.png"]);
    }

    #[test]
    fn test_filter_accepts_owned_strings() {
        let owned: Vec<String> = URLS.iter().map(|s| s.to_string()).collect();
        assert_eq!(filter_valid(&owned).len(), 6);
        assert_eq!(filter_valid(owned).len(), 6);
    }

    #[test]
    fn test_group_by_platform() {
        let groups = group_by_platform([
            "https://youtube.com/a",
            "https://youtube.com/b",
            "https://unknownsite.xyz/c",
        ]);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[&Platform::Youtube].len(), 2);
        assert_eq!(groups[&Platform::Unknown].len(), 1);
    }

    #[test]
    fn test_group_invalid_into_unknown() {
        let groups = group_by_platform(["not a url", ""]);
        assert_eq!(groups[&Platform::Unknown], vec!["not a url", ""]);
    }

    #[test]
    fn test_group_by_category() {
        let groups = group_by_category(URLS);
        assert_eq!(groups[&PlatformCategory::Video].len(), 2);
        assert_eq!(groups[&PlatformCategory::Audio].len(), 1);
        assert_eq!(groups[&PlatformCategory::Unknown].len(), 3);
    }

    #[test]
    fn test_group_by_media_type() {
        let groups = group_by_media_type(URLS);
        assert_eq!(groups[&MediaType::Image].len(), 1);
        assert_eq!(groups[&MediaType::Unknown].len(), 6);
    }

    #[test]
    fn test_empty_input() {
        let empty: [&str; 0] = [];
        assert!(filter_valid(empty).is_empty());
        assert!(group_by_platform(empty).is_empty());
    }
}
