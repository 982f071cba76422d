//! Bundled extension tables
//!
//! The category lists are consulted in declaration order when the lookup map
//! is built, so an extension listed in two categories resolves to the earlier
//! one.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::MediaType;

/// Audio formats that general-purpose registries misclassify or omit
pub(crate) const AUDIO_OVERRIDES: &[&str] = &[
    "ogg", "oga", "opus", "ape", "wv", "tta", "dts", "ac3", "eac3", "f4a",
];

/// Video formats that general-purpose registries misclassify or omit
pub(crate) const VIDEO_OVERRIDES: &[&str] = &[
    "mkv", "webm", "flv", "vob", "ogv", "m2ts", "mts", "f4v", "f4p",
];

const IMAGE: &[&str] = &[
    "jpg", "jpeg", "jfif", "png", "gif", "bmp", "tif", "tiff", "webp", "svg", "ico", "heic",
    "heif", "avif", "raw", "cr2", "nef", "arw", "dng", "psd",
];

const VIDEO: &[&str] = &[
    "mp4", "m4v", "mov", "avi", "wmv", "mpg", "mpeg", "m2v", "3gp", "3g2", "asf", "rm", "rmvb",
];

const AUDIO: &[&str] = &[
    "mp3", "wav", "flac", "aac", "m4a", "wma", "aif", "aiff", "alac", "mid", "midi", "amr", "au",
];

const DOCUMENT: &[&str] = &[
    "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx", "odt", "ods", "odp", "rtf", "txt", "md",
    "markdown", "tex", "epub", "pages", "numbers", "key",
];

const ARCHIVE: &[&str] = &[
    "zip", "rar", "7z", "tar", "gz", "tgz", "bz2", "xz", "zst", "lz", "lzma", "cab", "iso", "dmg",
];

// "ts" is TypeScript here; MPEG transport streams use the m2ts/mts overrides
const CODE: &[&str] = &[
    "rs", "py", "js", "mjs", "cjs", "ts", "tsx", "jsx", "java", "kt", "kts", "swift", "c", "h",
    "cpp", "cc", "hpp", "cs", "go", "rb", "php", "pl", "lua", "sh", "bash", "zsh", "ps1", "scala",
    "hs", "erl", "ex", "exs", "clj", "dart", "r", "m", "sql", "html", "htm", "css", "scss",
    "sass", "less", "vue", "svelte",
];

const DATA: &[&str] = &[
    "json", "ndjson", "xml", "yaml", "yml", "toml", "ini", "csv", "tsv", "plist", "db", "sqlite",
    "sqlite3", "parquet", "avro",
];

const EXECUTABLE: &[&str] = &[
    "exe", "msi", "app", "apk", "ipa", "deb", "rpm", "bin", "dll", "so", "dylib", "bat", "com",
    "jar", "appimage",
];

const FONT: &[&str] = &["ttf", "otf", "woff", "woff2", "eot", "fnt"];

const MODEL_3D: &[&str] = &[
    "obj", "fbx", "stl", "gltf", "glb", "dae", "3ds", "blend", "usdz", "ply",
];

/// Category lists in lookup priority order
pub(crate) const CATEGORY_ORDER: &[(MediaType, &[&str])] = &[
    (MediaType::Image, IMAGE),
    (MediaType::Video, VIDEO),
    (MediaType::Audio, AUDIO),
    (MediaType::Document, DOCUMENT),
    (MediaType::Archive, ARCHIVE),
    (MediaType::Code, CODE),
    (MediaType::Data, DATA),
    (MediaType::Executable, EXECUTABLE),
    (MediaType::Font, FONT),
    (MediaType::Model3d, MODEL_3D),
];

/// Extension (lowercase, no dot) to media type, built once on first access
pub(crate) static EXTENSION_TABLE: LazyLock<HashMap<&'static str, MediaType>> =
    LazyLock::new(|| {
        let mut table = HashMap::new();
        for (media_type, extensions) in CATEGORY_ORDER {
            for ext in *extensions {
                table.entry(*ext).or_insert(*media_type);
            }
        }
        table
    });
