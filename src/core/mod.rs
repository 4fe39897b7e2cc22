//! Core processing logic for slack-gallery.
//!
//! This module contains:
//! - [`models`] - Gallery document, post and media item structures
//! - [`processor`] - The day-file to gallery pipeline and run statistics
//! - [`output`] - Gallery document writer
//!
//! # Quick Start
//!
//! ```rust
//! use slack_gallery::core::{GalleryDocument, to_gallery_json};
//!
//! let json = to_gallery_json(&GalleryDocument::new()).unwrap();
//! assert_eq!(json, "{\n  \"posts\": []\n}");
//! ```

pub mod models;
pub mod output;
pub mod processor;

// Re-export main types for convenience
pub use models::{GalleryDocument, GalleryPost, MediaItem, PostContent};
pub use output::{to_gallery_json, write_gallery};
pub use processor::{GalleryProcessor, ProcessingStats};

#[cfg(feature = "http")]
pub use processor::process_export;
