//! Unified error types for slack-gallery.
//!
//! Every fallible operation in the crate returns [`GalleryError`]. Errors are
//! fatal for the run: there is no per-file isolation, so the first failure
//! aborts processing and no gallery document is written.
//!
//! Not everything unusual is an error:
//! - a user id missing from the user directory falls back to the raw id
//! - a file attachment without a download URL is skipped
//! - a non-2xx download response is stored as if it were the asset

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for slack-gallery operations.
///
/// # Example
///
/// ```rust
/// use slack_gallery::error::Result;
/// use slack_gallery::GalleryDocument;
///
/// fn build() -> Result<GalleryDocument> {
///     Ok(GalleryDocument::default())
/// }
/// ```
pub type Result<T> = std::result::Result<T, GalleryError>;

/// The error type for all slack-gallery operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GalleryError {
    /// An I/O error tied to a specific path (reading a day file, creating
    /// the media directory, writing a downloaded asset).
    #[error("IO error on {}: {source}", path.display())]
    IoAt {
        /// The path being read or written
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A day file is not valid JSON or not a JSON array.
    #[error("Failed to parse day file {}: {source}", path.display())]
    DayFile {
        /// The offending day file
        path: PathBuf,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// The user directory file could not be parsed.
    #[error("Failed to parse user directory {}: {source}", path.display())]
    UserDirectory {
        /// The user directory file
        path: PathBuf,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// An accepted top-level post is missing a required field or has one of
    /// the wrong shape.
    #[error("Invalid message{}: {source}", ts.as_ref().map(|ts| format!(" (ts: {ts})")).unwrap_or_default())]
    InvalidMessage {
        /// The message `ts`, if it could be read
        ts: Option<String>,
        /// The underlying deserialization error
        #[source]
        source: serde_json::Error,
    },

    /// A downloadable file attachment lacks a field needed to build its
    /// Media Item.
    #[error("File {file_id} is missing required field '{field}'")]
    MissingFileField {
        /// The Slack file id
        file_id: String,
        /// The missing field name
        field: &'static str,
    },

    /// A message `ts` is not a valid epoch-seconds value.
    #[error("Invalid timestamp '{input}': expected epoch seconds like \"1710500000.000100\"")]
    InvalidTimestamp {
        /// The raw `ts` string
        input: String,
    },

    /// A media download failed at the request level.
    #[cfg(feature = "http")]
    #[error("Failed to download {url}: {source}")]
    Download {
        /// The download URL
        url: String,
        /// The underlying HTTP client error
        #[source]
        source: reqwest::Error,
    },

    /// The HTTP client could not be constructed.
    #[cfg(feature = "http")]
    #[error("HTTP client setup failed: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// A media download failed in a non-HTTP fetcher.
    #[error("Failed to fetch {url}: {message}")]
    Fetch {
        /// The download URL
        url: String,
        /// Description of what went wrong
        message: String,
    },

    /// JSON serialization error while writing the gallery document.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GalleryError {
    /// Creates an I/O error carrying the path it happened on.
    pub fn io_at(path: impl Into<PathBuf>, source: io::Error) -> Self {
        GalleryError::IoAt {
            path: path.into(),
            source,
        }
    }

    /// Creates a fetch error for custom [`Fetcher`](crate::media::Fetcher)
    /// implementations.
    pub fn fetch(url: impl Into<String>, message: impl Into<String>) -> Self {
        GalleryError::Fetch {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Returns `true` if this error came from reading input (day files,
    /// user directory, message fields).
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            GalleryError::DayFile { .. }
                | GalleryError::UserDirectory { .. }
                | GalleryError::InvalidMessage { .. }
                | GalleryError::MissingFileField { .. }
                | GalleryError::InvalidTimestamp { .. }
        )
    }

    /// Returns `true` if this error came from downloading media.
    pub fn is_download_error(&self) -> bool {
        match self {
            #[cfg(feature = "http")]
            GalleryError::Download { .. } | GalleryError::HttpClient(_) => true,
            GalleryError::Fetch { .. } => true,
            _ => false,
        }
    }
}
