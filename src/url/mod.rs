//! URL handling module for Linkprism
//!
//! This module provides the thin layer the classifiers sit on: validity
//! heuristics for strings with or without a scheme, normalization, component
//! extraction, and the host matching primitives used by the platform tables.

mod domain;
mod matcher;
mod normalize;
mod validity;

// Re-export main functions
pub use domain::{clean_host, extract_host, parse_components, UrlComponents};
pub use matcher::{matches_domain, matches_substring};
pub use normalize::{normalize, parse_url};
pub use validity::is_valid_url;
