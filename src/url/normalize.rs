use crate::UrlError;
use url::Url;

/// Scheme prepended to scheme-less, URL-like input
const DEFAULT_SCHEME_PREFIX: &str = "https://";

/// Normalizes a URL string according to Linkprism's normalization rules
///
/// # Normalization Steps
///
/// 1. Empty input is returned unchanged
/// 2. Surrounding whitespace is trimmed
/// 3. Input that already contains `://` is returned as-is (scheme case preserved)
/// 4. Input without spaces that contains a `.` or `localhost` gets `https://` prepended
/// 5. Anything else is returned trimmed but otherwise untouched
///
/// The function only normalizes; it does not validate. It is idempotent:
/// `normalize(&normalize(s)) == normalize(s)` for every `s`.
///
/// # Examples
///
/// ```
/// use linkprism::url::normalize;
///
/// assert_eq!(normalize("example.com/page"), "https://example.com/page");
/// assert_eq!(normalize("  HTTP://Example.com  "), "HTTP://Example.com");
/// assert_eq!(normalize("localhost:3000"), "https://localhost:3000");
/// assert_eq!(normalize("not a url"), "not a url");
/// ```
pub fn normalize(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let trimmed = input.trim();

    if trimmed.contains("://") {
        return trimmed.to_string();
    }

    if !trimmed.contains(' ') && (trimmed.contains('.') || trimmed.contains("localhost")) {
        return format!("{}{}", DEFAULT_SCHEME_PREFIX, trimmed);
    }

    trimmed.to_string()
}

/// Normalizes and parses a URL string
///
/// # Arguments
///
/// * `input` - The raw URL string, with or without a scheme
///
/// # Returns
///
/// * `Ok(Url)` - The parsed, normalized URL
/// * `Err(UrlError)` - The normalized string could not be parsed
///
/// # Examples
///
/// ```
/// use linkprism::url::parse_url;
///
/// let url = parse_url("GitHub.com/rust-lang").unwrap();
/// assert_eq!(url.as_str(), "https://github.com/rust-lang");
/// ```
pub fn parse_url(input: &str) -> Result<Url, UrlError> {
    let normalized = normalize(input);
    Url::parse(&normalized).map_err(|e| UrlError::Parse(e.to_string()))
}
