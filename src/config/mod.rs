//! Configuration module for Linkprism
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file.
//!
//! # Example
//!
//! ```no_run
//! use linkprism::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("linkprism.toml")).unwrap();
//! println!("Markdown report: {:?}", config.output.markdown_path);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, FilterConfig, GroupConfig, GroupKey, OutputConfig, OutputFormat, UrlFilter,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::resolve_filter;
