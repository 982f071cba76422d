use serde::Serialize;
use url::Url;

use super::normalize::parse_url;

/// The generic components of a parsed URL
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UrlComponents {
    /// Lowercase scheme (e.g. "https")
    pub scheme: String,

    /// Lowercase host, if the URL has one
    pub host: Option<String>,

    /// Path, always starting with `/` for hierarchical URLs
    pub path: String,

    /// Query string without the leading `?`
    pub query: Option<String>,

    /// Fragment without the leading `#`
    pub fragment: Option<String>,

    /// Explicit port, if one differs from the scheme default
    pub port: Option<u16>,
}

impl UrlComponents {
    /// Builds the components of an already parsed URL
    pub fn from_url(url: &Url) -> Self {
        Self {
            scheme: url.scheme().to_string(),
            host: extract_host(url),
            path: url.path().to_string(),
            query: url.query().map(str::to_string),
            fragment: url.fragment().map(str::to_string),
            port: url.port(),
        }
    }
}

/// Extracts the host from a URL
///
/// This function retrieves the host portion of a URL and converts it to lowercase.
/// URLs without a host (e.g. `mailto:` or most `file:` URLs) return None, as do
/// URLs with an empty host.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use linkprism::url::extract_host;
///
/// let url = Url::parse("https://EXAMPLE.COM/path").unwrap();
/// assert_eq!(extract_host(&url), Some("example.com".to_string()));
///
/// let url = Url::parse("mailto:user@example.com").unwrap();
/// assert_eq!(extract_host(&url), None);
/// ```
pub fn extract_host(url: &Url) -> Option<String> {
    url.host_str()
        .filter(|h| !h.is_empty())
        .map(|h| h.to_lowercase())
}

/// Strips a single leading `www.` from a host
///
/// The prefix is matched case-insensitively; the rest of the host is returned
/// as-is.
///
/// # Examples
///
/// ```
/// use linkprism::url::clean_host;
///
/// assert_eq!(clean_host("www.youtube.com"), "youtube.com");
/// assert_eq!(clean_host("WWW.example.com"), "example.com");
/// assert_eq!(clean_host("www2.example.com"), "www2.example.com");
/// ```
pub fn clean_host(host: &str) -> &str {
    match host.get(..4) {
        Some(prefix) if prefix.eq_ignore_ascii_case("www.") => &host[4..],
        _ => host,
    }
}

/// Normalizes, parses and decomposes a URL string
///
/// Returns None when the normalized string does not parse.
pub fn parse_components(input: &str) -> Option<UrlComponents> {
    parse_url(input).ok().map(|url| UrlComponents::from_url(&url))
}
