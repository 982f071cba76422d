//! Platform-specific content identifier extraction
//!
//! Each extractor is a pure function over the components of an already
//! parsed URL. Identifiers that cannot be found are simply absent from the
//! result; nothing here fails.

mod developer;
mod social;
mod streaming;

use std::collections::BTreeMap;

use tracing::debug;

use crate::platform::{detect_platform_in, Platform};
use crate::url::{clean_host, extract_host, parse_url};
use crate::{UrlError, UrlResult};

/// Extracted identifiers keyed by name (e.g. "youtube_video_id")
pub type ExtractedIds = BTreeMap<String, String>;

/// The URL components an extractor works on
pub(crate) struct Target<'a> {
    /// Clean host (lowercase, without a leading `www.`)
    pub host: &'a str,
    pub path: &'a str,
    pub query: Option<&'a str>,
    /// Non-empty path segments
    pub segments: Vec<&'a str>,
}

impl<'a> Target<'a> {
    fn new(host: &'a str, path: &'a str, query: Option<&'a str>) -> Self {
        Self {
            host: clean_host(host),
            path,
            query,
            segments: path.split('/').filter(|s| !s.is_empty()).collect(),
        }
    }

    /// Returns the segment right after the first segment equal to `keyword`
    pub fn segment_after(&self, keyword: &str) -> Option<&'a str> {
        self.segments
            .iter()
            .position(|segment| *segment == keyword)
            .and_then(|index| self.segments.get(index + 1))
            .copied()
    }

    /// Returns the first value of a query parameter
    ///
    /// Only percent-escapes are decoded; a `+` stays a literal `+`.
    pub fn query_param(&self, name: &str) -> Option<String> {
        self.query?
            .split('&')
            .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
            .find(|(key, _)| percent_decode(key) == name)
            .map(|(_, value)| percent_decode(value))
    }

    /// Returns the path without its leading slash, if anything remains
    pub fn path_without_slash(&self) -> Option<&'a str> {
        let rest = self.path.strip_prefix('/').unwrap_or(self.path);
        (!rest.is_empty()).then_some(rest)
    }
}

/// Decodes `%XX` escapes, keeping the raw text when they are not UTF-8
fn percent_decode(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

/// Inserts an identifier unless it is empty
pub(crate) fn insert(ids: &mut ExtractedIds, key: &str, value: impl Into<String>) {
    let value = value.into();
    if !value.is_empty() {
        ids.insert(key.to_string(), value);
    }
}

/// Extracts platform-specific identifiers from URL components
///
/// # Arguments
///
/// * `host` - The lowercase host (a leading `www.` is ignored)
/// * `path` - The URL path
/// * `query` - The query string without the leading `?`
/// * `platform` - The platform the URL was classified as
///
/// # Returns
///
/// A map of identifier names to values. Platforms without an extractor,
/// including [`Platform::Unknown`], produce an empty map.
///
/// # Examples
///
/// ```
/// use linkprism::{extract_ids, Platform};
///
/// let ids = extract_ids("github.com", "/apple/swift/pull/12345", None, Platform::Github);
/// assert_eq!(ids["github_owner"], "apple");
/// assert_eq!(ids["github_repo"], "swift");
/// assert_eq!(ids["github_pr_number"], "12345");
/// ```
pub fn extract_ids(
    host: &str,
    path: &str,
    query: Option<&str>,
    platform: Platform,
) -> ExtractedIds {
    let target = Target::new(host, path, query);
    let mut ids = ExtractedIds::new();

    match platform {
        Platform::Youtube | Platform::YoutubeShorts | Platform::YoutubeMusic => {
            streaming::youtube(&target, &mut ids)
        }
        Platform::Tiktok => streaming::tiktok(&target, &mut ids),
        Platform::Spotify => streaming::spotify(&target, &mut ids),
        Platform::Vimeo => streaming::vimeo(&target, &mut ids),
        Platform::Twitch => streaming::twitch(&target, &mut ids),
        Platform::Soundcloud => streaming::soundcloud(&target, &mut ids),
        Platform::Dailymotion => streaming::dailymotion(&target, &mut ids),

        Platform::Twitter => social::twitter(&target, &mut ids),
        Platform::Instagram | Platform::InstagramReels => social::instagram(&target, &mut ids),
        Platform::Reddit => social::reddit(&target, &mut ids),
        Platform::Linkedin => social::linkedin(&target, &mut ids),
        Platform::Facebook => social::facebook(&target, &mut ids),
        Platform::Medium => social::medium(&target, &mut ids),
        Platform::Bluesky => social::bluesky(&target, &mut ids),
        Platform::Threads => social::threads(&target, &mut ids),
        Platform::Pinterest => social::pinterest(&target, &mut ids),

        Platform::Github => developer::github(&target, &mut ids),
        Platform::Gitlab => developer::gitlab(&target, &mut ids),
        Platform::StackOverflow => developer::stackoverflow(&target, &mut ids),
        Platform::Npm => developer::npm(&target, &mut ids),
        Platform::CratesIo => developer::crates_io(&target, &mut ids),
        Platform::Pypi => developer::pypi(&target, &mut ids),

        _ => {}
    }

    if !ids.is_empty() {
        debug!("Extracted {} ID(s) for {} from {}{}", ids.len(), platform, host, path);
    }

    ids
}

/// Parses a URL string, detects its platform and extracts its identifiers
///
/// # Returns
///
/// * `Ok(ExtractedIds)` - The identifiers (possibly none)
/// * `Err(UrlError)` - The string does not parse, or has no host
pub fn extract_ids_from_url(input: &str) -> UrlResult<ExtractedIds> {
    let url = parse_url(input)?;
    let host = extract_host(&url).ok_or(UrlError::MissingHost)?;
    let platform = detect_platform_in(&host, url.path());

    Ok(extract_ids(&host, url.path(), url.query(), platform))
}
