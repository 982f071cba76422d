use crate::config::types::Config;
use crate::config::validation::validate;
use crate::{ConfigError, ConfigResult};
use sha2::{Digest, Sha256};
use std::path::Path;
use tracing::debug;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use linkprism::config::load_config;
///
/// let config = load_config(Path::new("linkprism.toml")).unwrap();
/// println!("Output format: {:?}", config.output.format);
/// ```
pub fn load_config(path: &Path) -> ConfigResult<Config> {
    let content = std::fs::read_to_string(path)?;
    let config = parse_config(&content)?;
    debug!("Loaded configuration from {}", path.display());
    Ok(config)
}

/// Parses and validates configuration text
pub fn parse_config(content: &str) -> ConfigResult<Config> {
    let config: Config = toml::from_str(content)?;
    validate(&config)?;
    Ok(config)
}

/// Computes a SHA-256 hash of the configuration file content
///
/// The hash identifies the configuration a report was produced with.
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(String)` - Hex-encoded SHA-256 hash of the file content
/// * `Err(ConfigError)` - Failed to read the file
pub fn compute_config_hash(path: &Path) -> ConfigResult<String> {
    let content = std::fs::read(path)?;
    let mut hasher = Sha256::new();
    hasher.update(&content);
    Ok(hex::encode(hasher.finalize()))
}

/// Loads a configuration and returns both the config and its hash
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok((Config, String))` - Successfully loaded configuration and its hash
/// * `Err(ConfigError)` - Failed to load or parse the configuration
pub fn load_config_with_hash(path: &Path) -> ConfigResult<(Config, String)> {
    let config = load_config(path)?;
    let hash = compute_config_hash(path)?;
    Ok((config, hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GroupKey, OutputFormat};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_full_config() {
        let config_content = r#"
[output]
format = "json"
show-summary = false
markdown-path = "./report.md"

[filter]
valid-only = true
platforms = ["youtube", "github"]
categories = ["video"]
media-types = ["image"]

[group]
by = "media-type"
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.show_summary);
        assert_eq!(config.output.markdown_path.as_deref(), Some("./report.md"));
        assert!(config.filter.valid_only);
        assert_eq!(config.filter.platforms, vec!["youtube", "github"]);
        assert_eq!(config.group.by, Some(GroupKey::MediaType));
    }

    #[test]
    fn test_load_empty_config_uses_defaults() {
        let file = create_temp_config("");
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.output.show_summary);
        assert_eq!(config.output.markdown_path, None);
        assert!(!config.filter.valid_only);
        assert_eq!(config.group.by, None);
    }

    #[test]
    fn test_load_partial_section() {
        let file = create_temp_config("[output]\nformat = \"json\"\n");
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.show_summary);
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/linkprism.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let file = create_temp_config("this is not valid TOML {{{");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_with_unknown_format() {
        let file = create_temp_config("[output]\nformat = \"xml\"\n");
        assert!(matches!(load_config(file.path()), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_with_unknown_platform() {
        let file = create_temp_config("[filter]\nplatforms = [\"geocities\"]\n");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::UnknownPlatform(_))));
    }

    #[test]
    fn test_compute_config_hash() {
        let file = create_temp_config("test content");

        let hash1 = compute_config_hash(file.path()).unwrap();
        let hash2 = compute_config_hash(file.path()).unwrap();

        // Same content should produce same hash
        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64); // SHA-256 produces 64 hex characters
    }

    #[test]
    fn test_different_content_different_hash() {
        let file1 = create_temp_config("content 1");
        let file2 = create_temp_config("content 2");

        let hash1 = compute_config_hash(file1.path()).unwrap();
        let hash2 = compute_config_hash(file2.path()).unwrap();

        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_load_config_with_hash() {
        let file = create_temp_config("[group]\nby = \"platform\"\n");
        let (config, hash) = load_config_with_hash(file.path()).unwrap();

        assert_eq!(config.group.by, Some(GroupKey::Platform));
        assert_eq!(hash, compute_config_hash(file.path()).unwrap());
    }
}
