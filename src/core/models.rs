//! Gallery document data models.
//!
//! These are the output shapes consumed by the gallery front end:
//!
//! ```json
//! {
//!   "posts": [
//!     {
//!       "id": "1710500000.000100",
//!       "timestamp": "2024-03-15T10:53:20.000100",
//!       "month": "2024-03",
//!       "creator": "Alice",
//!       "content": {
//!         "text": "new poster draft",
//!         "media": [
//!           {
//!             "url": "https://files.slack.com/...",
//!             "location": "media/F1.png",
//!             "type": "png",
//!             "name": "poster.PNG",
//!             "mime_type": "image/png",
//!             "thumbnail_url": "https://files.slack.com/..._360.png"
//!           }
//!         ]
//!       }
//!     }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The consolidated output document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GalleryDocument {
    /// Posts in day-file order, then in-file order.
    pub posts: Vec<GalleryPost>,
}

impl GalleryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, post: GalleryPost) {
        self.posts.push(post);
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Number of media items across all posts.
    pub fn media_count(&self) -> usize {
        self.posts.iter().map(|p| p.content.media.len()).sum()
    }
}

/// One top-level post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryPost {
    /// The message `ts`, unchanged.
    pub id: String,
    /// ISO-8601 local wall-clock time.
    pub timestamp: String,
    /// `YYYY-MM`, used by the front end for month grouping.
    pub month: String,
    /// Resolved display name, or the raw user id.
    pub creator: String,
    pub content: PostContent,
}

/// Body of a post.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostContent {
    pub text: String,
    pub media: Vec<MediaItem>,
}

/// A downloaded attachment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Source download URL.
    pub url: String,
    /// Path relative to the output directory, `media/<id>.<type>`.
    pub location: String,
    /// Lower-cased file type.
    #[serde(rename = "type")]
    pub file_type: String,
    pub name: String,
    pub mime_type: String,
    /// Copied verbatim from `thumb_360` when the file has that key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<Value>,
}
