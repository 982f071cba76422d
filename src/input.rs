//! Reading URL lists
//!
//! A URL list holds one entry per line. Blank lines and lines starting with
//! `#` are skipped; surrounding whitespace is trimmed.

use std::io::{self, Read};
use std::path::Path;

/// Parses URL list text into entries
///
/// # Examples
///
/// ```
/// use linkprism::input::parse_url_list;
///
/// let urls = parse_url_list("# links\nhttps://a.com\n\n  b.org  \n");
/// assert_eq!(urls, vec!["https://a.com", "b.org"]);
/// ```
pub fn parse_url_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Reads a URL list from any reader
pub fn read_url_list_from<R: Read>(mut reader: R) -> io::Result<Vec<String>> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    Ok(parse_url_list(&content))
}

/// Reads a URL list from a file, or from stdin when the path is `-`
pub fn read_url_list(path: &Path) -> io::Result<Vec<String>> {
    if path == Path::new("-") {
        return read_url_list_from(io::stdin().lock());
    }
    read_url_list_from(std::fs::File::open(path)?)
}
