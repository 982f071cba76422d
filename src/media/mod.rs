//! Media type detection for Linkprism
//!
//! The media type of a link is derived from the extension of its path only;
//! nothing is fetched. Lookup runs through three layers:
//!
//! 1. Manual audio and video overrides for formats that registries get wrong
//! 2. The bundled category table, checked in a fixed category order
//! 3. The registered MIME type (via `mime_guess`), by its top-level type

mod extensions;

use std::path::Path;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};
use tracing::trace;

use crate::url::parse_url;
use extensions::{AUDIO_OVERRIDES, EXTENSION_TABLE, VIDEO_OVERRIDES};

/// Coarse content kind of a linked resource
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MediaType {
    Image,
    Video,
    Audio,
    Document,
    Archive,
    Code,
    Data,
    Executable,
    Font,
    #[serde(rename = "model3d")]
    #[strum(serialize = "model3d")]
    Model3d,
    #[default]
    Unknown,
}

impl MediaType {
    /// Returns the stable identifier (e.g. "model3d")
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Returns a human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Image => "Image",
            Self::Video => "Video",
            Self::Audio => "Audio",
            Self::Document => "Document",
            Self::Archive => "Archive",
            Self::Code => "Code",
            Self::Data => "Data",
            Self::Executable => "Executable",
            Self::Font => "Font",
            Self::Model3d => "3D Model",
            Self::Unknown => "Unknown",
        }
    }

    fn noun(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Document => "document",
            Self::Archive => "archive",
            Self::Code => "source code",
            Self::Data => "data",
            Self::Executable => "executable",
            Self::Font => "font",
            Self::Model3d => "3D model",
            Self::Unknown => "",
        }
    }
}

/// Detects the media type of the resource a URL points at
///
/// # Examples
///
/// ```
/// use linkprism::{detect_media_type, MediaType};
///
/// assert_eq!(detect_media_type("example.com/video.mkv"), MediaType::Video);
/// assert_eq!(detect_media_type("https://example.com/paper.PDF"), MediaType::Document);
/// assert_eq!(detect_media_type("https://example.com/about"), MediaType::Unknown);
/// ```
pub fn detect_media_type(input: &str) -> MediaType {
    let Ok(url) = parse_url(input) else {
        return MediaType::Unknown;
    };

    match path_extension(url.path()) {
        Some(ext) => media_type_for_extension(&ext),
        None => MediaType::Unknown,
    }
}

/// Returns the lowercase extension of a URL path, if it has a non-empty one
///
/// # Examples
///
/// ```
/// use linkprism::media::path_extension;
///
/// assert_eq!(path_extension("/clips/intro.MKV"), Some("mkv".to_string()));
/// assert_eq!(path_extension("/watch"), None);
/// assert_eq!(path_extension("/"), None);
/// ```
pub fn path_extension(path: &str) -> Option<String> {
    Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .map(|ext| ext.to_lowercase())
}

/// Classifies a bare extension (lowercase, without the dot)
pub fn media_type_for_extension(ext: &str) -> MediaType {
    if AUDIO_OVERRIDES.contains(&ext) {
        trace!("{} matched audio override", ext);
        return MediaType::Audio;
    }

    if VIDEO_OVERRIDES.contains(&ext) {
        trace!("{} matched video override", ext);
        return MediaType::Video;
    }

    if let Some(media_type) = EXTENSION_TABLE.get(ext) {
        return *media_type;
    }

    registered_media_type(ext)
}

/// Falls back to the registered MIME type's top-level type
fn registered_media_type(ext: &str) -> MediaType {
    let Some(mime) = mime_guess::from_ext(ext).first_raw() else {
        return MediaType::Unknown;
    };

    let media_type = match mime.split('/').next() {
        Some("image") => MediaType::Image,
        Some("video") => MediaType::Video,
        Some("audio") => MediaType::Audio,
        Some("font") => MediaType::Font,
        Some("model") => MediaType::Model3d,
        _ => MediaType::Unknown,
    };

    trace!("{} resolved through MIME type {} -> {}", ext, mime, media_type);
    media_type
}

/// Returns the registered MIME type of an extension
///
/// # Examples
///
/// ```
/// use linkprism::media::mime_type_for_extension;
///
/// assert_eq!(mime_type_for_extension("png").as_deref(), Some("image/png"));
/// assert_eq!(mime_type_for_extension("notarealext"), None);
/// ```
pub fn mime_type_for_extension(ext: &str) -> Option<String> {
    mime_guess::from_ext(ext).first_raw().map(str::to_string)
}

/// Describes an extension for display (e.g. "MKV video file")
pub fn type_description(ext: &str, media_type: MediaType) -> String {
    let ext = ext.to_uppercase();
    match media_type {
        MediaType::Unknown => format!("{} file", ext),
        other => format!("{} {} file", ext, other.noun()),
    }
}
