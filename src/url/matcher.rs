/// Checks if a host matches a platform domain
///
/// A host matches when it is exactly the domain, or when it is a subdomain of
/// it (ends with `.` followed by the domain):
///
/// - `"youtube.com"` matches `"youtube.com"`
/// - `"m.youtube.com"` matches `"youtube.com"`
/// - `"notyoutube.com"` does not match `"youtube.com"`
///
/// Both arguments are expected to be lowercase already.
///
/// # Examples
///
/// ```
/// use linkprism::url::matches_domain;
///
/// assert!(matches_domain("youtube.com", "youtube.com"));
/// assert!(matches_domain("m.youtube.com", "youtube.com"));
/// assert!(!matches_domain("notyoutube.com", "youtube.com"));
/// ```
pub fn matches_domain(host: &str, domain: &str) -> bool {
    if host == domain {
        return true;
    }

    host.len() > domain.len()
        && host.ends_with(domain)
        && host.as_bytes()[host.len() - domain.len() - 1] == b'.'
}

/// Checks if a host contains a custom-subdomain pattern
///
/// Custom subdomain patterns such as `.myshopify.com` are matched by plain
/// containment, not by suffix, so a pattern may also match in the middle of a
/// host.
///
/// # Examples
///
/// ```
/// use linkprism::url::matches_substring;
///
/// assert!(matches_substring("store.myshopify.com", ".myshopify.com"));
/// assert!(matches_substring("a.myshopify.com.evil.net", ".myshopify.com"));
/// assert!(!matches_substring("myshopify.com", ".myshopify.com"));
/// ```
pub fn matches_substring(host: &str, pattern: &str) -> bool {
    !pattern.is_empty() && host.contains(pattern)
}
