//! Configuration for a gallery run.
//!
//! [`GalleryConfig`] is a plain struct with no CLI framework dependency, so
//! library users can build it directly:
//!
//! ```rust
//! use slack_gallery::config::GalleryConfig;
//!
//! let config = GalleryConfig::new()
//!     .with_input_dir("exports/design-channel")
//!     .with_output_dir("site/gallery")
//!     .with_users_path("exports/users.json");
//!
//! assert!(config.output_file().ends_with("gallery_data.json"));
//! assert!(config.media_dir().ends_with("media"));
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default directory holding the `YYYY-MM-DD.json` day files.
pub const DEFAULT_INPUT_DIR: &str = "slack_export";

/// Default directory receiving the gallery document and media.
pub const DEFAULT_OUTPUT_DIR: &str = "gallery_output";

/// Default user directory file, relative to the working directory.
pub const DEFAULT_USERS_FILE: &str = "users.json";

/// File name of the gallery document inside the output directory.
pub const GALLERY_FILE_NAME: &str = "gallery_data.json";

/// Name of the media subdirectory inside the output directory. Also the
/// prefix of every Media Item `location`.
pub const MEDIA_DIR_NAME: &str = "media";

/// Paths for one gallery run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryConfig {
    /// Directory containing the day files.
    pub input_dir: PathBuf,

    /// Directory receiving `gallery_data.json` and `media/`.
    pub output_dir: PathBuf,

    /// User id to name mapping file. Independent of `input_dir`.
    pub users_path: PathBuf,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            users_path: PathBuf::from(DEFAULT_USERS_FILE),
        }
    }
}

impl GalleryConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the input directory.
    #[must_use]
    pub fn with_input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.input_dir = dir.into();
        self
    }

    /// Sets the output directory.
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Sets the user directory file.
    #[must_use]
    pub fn with_users_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.users_path = path.into();
        self
    }

    /// Directory downloaded assets are written to.
    pub fn media_dir(&self) -> PathBuf {
        self.output_dir.join(MEDIA_DIR_NAME)
    }

    /// Full path of the gallery document.
    pub fn output_file(&self) -> PathBuf {
        self.output_dir.join(GALLERY_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_defaults_match_reference_layout() {
        let config = GalleryConfig::default();
        assert_eq!(config.input_dir, PathBuf::from("slack_export"));
        assert_eq!(config.output_dir, PathBuf::from("gallery_output"));
        assert_eq!(config.users_path, PathBuf::from("users.json"));
    }

    #[test]
    fn test_builder_chain() {
        let config = GalleryConfig::new()
            .with_input_dir("in")
            .with_output_dir("out")
            .with_users_path("people.json");

        assert_eq!(config.input_dir, PathBuf::from("in"));
        assert_eq!(config.media_dir(), Path::new("out").join("media"));
        assert_eq!(
            config.output_file(),
            Path::new("out").join("gallery_data.json")
        );
        assert_eq!(config.users_path, PathBuf::from("people.json"));
    }

    #[test]
    fn test_users_path_is_independent_of_input_dir() {
        let config = GalleryConfig::new().with_input_dir("elsewhere");
        assert_eq!(config.users_path, PathBuf::from(DEFAULT_USERS_FILE));
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = GalleryConfig::new().with_output_dir("site");
        let json = serde_json::to_string(&config).unwrap();
        let parsed: GalleryConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }
}
