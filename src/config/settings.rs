//! Runtime settings for a page build.
//!
//! CLI flags and `STEPCARDS_CONTENT_DIR` are resolved by `clap`; the values
//! here are the built-in defaults.

use std::path::PathBuf;

/// Default directory that relative data paths fall back to.
pub const DEFAULT_CONTENT_DIR: &str = "contents";

/// Environment variable overriding the content directory.
pub const CONTENT_DIR_ENV: &str = "STEPCARDS_CONTENT_DIR";

/// Settings shared by every shortcode invocation in a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory prepended to relative data paths that miss on the first try.
    pub content_dir: PathBuf,

    /// Whether the behavior/style block is appended at all.
    pub inject_assets: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from(DEFAULT_CONTENT_DIR),
            inject_assets: true,
        }
    }
}

impl Settings {
    /// Settings with an explicit content directory.
    #[must_use]
    pub fn with_content_dir(content_dir: impl Into<PathBuf>) -> Self {
        Self {
            content_dir: content_dir.into(),
            inject_assets: true,
        }
    }
}
