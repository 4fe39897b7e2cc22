//! # slack-gallery
//!
//! Turns a Slack channel export into a single gallery feed.
//!
//! ## Overview
//!
//! A channel export is a directory of `YYYY-MM-DD.json` files, one per day.
//! slack-gallery reads them in chronological order, keeps only the messages
//! that start their own thread (no replies, no join/leave notices), and
//! writes:
//!
//! - `gallery_data.json` — every top-level post with its author, local
//!   timestamp, month and attachments
//! - `media/` — each attachment downloaded as `<file id>.<type>`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use slack_gallery::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let config = GalleryConfig::new()
//!         .with_input_dir("slack_export")
//!         .with_output_dir("gallery_output")
//!         .with_users_path("slack_export/users.json");
//!
//!     let stats = process_export(config)?;
//!     println!("{} posts, {} files", stats.posts, stats.media_downloaded);
//!     Ok(())
//! }
//! ```
//!
//! ## Custom downloads
//!
//! Anything implementing [`Fetcher`](media::Fetcher), including a plain
//! closure, can replace the HTTP client:
//!
//! ```rust,no_run
//! use slack_gallery::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let offline = |_url: &str| -> Result<Vec<u8>> { Ok(Vec::new()) };
//! let mut processor = GalleryProcessor::new(GalleryConfig::new(), offline)?;
//! let document = processor.build_document()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Structure
//!
//! - [`loader`] — day file discovery and parsing
//! - [`slack`] — raw export records, the top-level post rule, timestamps
//! - [`users`] — user id to display name lookup
//! - [`media`] — attachment download and Media Items
//! - [`core`] — gallery models, the processing pipeline, the writer
//! - [`config`] — run configuration
//! - [`cli`] — command-line arguments (requires the `cli` feature)
//! - [`error`] — [`GalleryError`] and [`Result`]

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod loader;
pub mod media;
pub mod slack;
pub mod users;

// Re-export the main types at the crate root for convenience
pub use crate::core::{GalleryDocument, GalleryPost, MediaItem};
pub use error::{GalleryError, Result};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use slack_gallery::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{GalleryError, Result};

    pub use crate::config::GalleryConfig;

    pub use crate::core::models::{GalleryDocument, GalleryPost, MediaItem, PostContent};
    pub use crate::core::output::{to_gallery_json, write_gallery};
    pub use crate::core::processor::{GalleryProcessor, ProcessingStats};

    #[cfg(feature = "http")]
    pub use crate::core::processor::process_export;

    pub use crate::loader::{DayFile, list_day_files, load_day_file, load_day_files};
    pub use crate::media::{Fetcher, MediaFetcher, media_location};

    #[cfg(feature = "http")]
    pub use crate::media::HttpFetcher;

    pub use crate::slack::{PostTime, SlackFile, SlackMessage, is_top_level_post};
    pub use crate::users::UserDirectory;
}
