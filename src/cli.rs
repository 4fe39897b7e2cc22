//! Command-line interface definition using clap.
//!
//! [`Args`] converts into a [`GalleryConfig`], so the binary and library
//! callers share one configuration type:
//!
//! ```rust
//! use clap::Parser;
//! use slack_gallery::cli::Args;
//! use slack_gallery::config::GalleryConfig;
//!
//! let args = Args::parse_from(["slack-gallery", "exports/design", "site"]);
//! let config: GalleryConfig = args.into();
//! assert_eq!(config.output_file(), std::path::Path::new("site/gallery_data.json"));
//! ```

use std::path::PathBuf;

use clap::Parser;

use crate::config::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR, DEFAULT_USERS_FILE, GalleryConfig};

/// Consolidate a Slack channel export into a single gallery feed
/// and download every attached file.
#[derive(Parser, Debug, Clone)]
#[command(name = "slack-gallery")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    slack-gallery
    slack-gallery slack_export gallery_output
    slack-gallery exports/design site/gallery --users exports/users.json

Set RUST_LOG=debug for per-file diagnostics.")]
pub struct Args {
    /// Directory containing YYYY-MM-DD.json day files
    #[arg(default_value = DEFAULT_INPUT_DIR)]
    pub input: PathBuf,

    /// Directory for gallery_data.json and media/
    #[arg(default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// User directory file mapping user ids to names
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_USERS_FILE)]
    pub users: PathBuf,
}

impl From<Args> for GalleryConfig {
    fn from(args: Args) -> Self {
        GalleryConfig::new()
            .with_input_dir(args.input)
            .with_output_dir(args.output)
            .with_users_path(args.users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["slack-gallery"]);
        let config: GalleryConfig = args.into();
        assert_eq!(config, GalleryConfig::default());
    }

    #[test]
    fn test_positional_and_users_flag() {
        let args = Args::parse_from(["slack-gallery", "in", "out", "--users", "people.json"]);
        assert_eq!(args.input, PathBuf::from("in"));
        assert_eq!(args.output, PathBuf::from("out"));
        assert_eq!(args.users, PathBuf::from("people.json"));
    }

    #[test]
    fn test_short_users_flag() {
        let args = Args::parse_from(["slack-gallery", "-u", "u.json"]);
        assert_eq!(args.users, PathBuf::from("u.json"));
        assert_eq!(args.input, PathBuf::from(DEFAULT_INPUT_DIR));
    }

    #[test]
    fn test_rejects_extra_positional() {
        assert!(Args::try_parse_from(["slack-gallery", "a", "b", "c"]).is_err());
    }
}
