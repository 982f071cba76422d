use std::collections::HashSet;
use std::hash::Hash;
use std::str::FromStr;

use crate::config::types::{Config, FilterConfig, OutputConfig, UrlFilter};
use crate::media::MediaType;
use crate::platform::{Platform, PlatformCategory};
use crate::{ConfigError, ConfigResult};

/// Validates the entire configuration
pub fn validate(config: &Config) -> ConfigResult<()> {
    validate_output_config(&config.output)?;
    resolve_filter(&config.filter)?;
    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> ConfigResult<()> {
    if let Some(path) = &config.markdown_path {
        if path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "markdown-path cannot be empty".to_string(),
            ));
        }
    }

    Ok(())
}

/// Parses a list of identifiers, reporting the first unknown one
///
/// Identifiers are matched case-insensitively and surrounding whitespace is
/// ignored.
fn parse_identifiers<T, F>(names: &[String], unknown: F) -> ConfigResult<HashSet<T>>
where
    T: FromStr + Eq + Hash,
    F: Fn(String) -> ConfigError,
{
    names
        .iter()
        .map(|name| {
            name.trim()
                .to_lowercase()
                .parse::<T>()
                .map_err(|_| unknown(name.clone()))
        })
        .collect()
}

/// Resolves the identifier lists of a filter into their enums
///
/// # Arguments
///
/// * `filter` - The filter section as read from the file
///
/// # Returns
///
/// * `Ok(UrlFilter)` - Every identifier is known
/// * `Err(ConfigError)` - An identifier does not name a platform, category or media type
pub fn resolve_filter(filter: &FilterConfig) -> ConfigResult<UrlFilter> {
    Ok(UrlFilter {
        valid_only: filter.valid_only,
        platforms: parse_identifiers::<Platform, _>(
            &filter.platforms,
            ConfigError::UnknownPlatform,
        )?,
        categories: parse_identifiers::<PlatformCategory, _>(
            &filter.categories,
            ConfigError::UnknownCategory,
        )?,
        media_types: parse_identifiers::<MediaType, _>(
            &filter.media_types,
            ConfigError::UnknownMediaType,
        )?,
    })
}
