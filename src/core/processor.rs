//! The consolidation pipeline.
//!
//! [`GalleryProcessor`] walks the day files in chronological order, keeps the
//! messages that start their own thread, normalizes each into a
//! [`GalleryPost`] and downloads its attachments. The document is written
//! once, after every day file has been processed.
//!
//! # Example
//!
//! ```rust,no_run
//! use slack_gallery::config::GalleryConfig;
//! use slack_gallery::core::GalleryProcessor;
//! use slack_gallery::media::HttpFetcher;
//!
//! # fn main() -> slack_gallery::Result<()> {
//! let config = GalleryConfig::new()
//!     .with_input_dir("slack_export")
//!     .with_output_dir("gallery_output");
//!
//! let mut processor = GalleryProcessor::new(config, HttpFetcher::new()?)?;
//! let stats = processor.process_files()?;
//! println!("{} posts", stats.posts);
//! # Ok(())
//! # }
//! ```

use std::fs;

use serde_json::Value;

use crate::config::GalleryConfig;
use crate::core::models::{GalleryDocument, GalleryPost, PostContent};
use crate::core::output::write_gallery;
use crate::error::{GalleryError, Result};
use crate::loader::{DayFile, list_day_files, load_day_file};
use crate::media::{Fetcher, MediaFetcher};
use crate::slack::{PostTime, is_top_level_post, parse_message};
use crate::users::UserDirectory;

/// Counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessingStats {
    pub day_files: usize,
    pub messages: usize,
    pub posts: usize,
    pub media_downloaded: usize,
    /// Attachments dropped because they had no download URL.
    pub media_skipped: usize,
}

impl ProcessingStats {
    /// Messages that were not top-level posts.
    pub fn rejected_messages(&self) -> usize {
        self.messages - self.posts
    }
}

/// Builds the gallery document for one export.
///
/// The user directory is read on the first author lookup and kept for the
/// processor's lifetime, unless one was supplied with
/// [`with_users`](Self::with_users).
pub struct GalleryProcessor<F> {
    config: GalleryConfig,
    media: MediaFetcher<F>,
    users: Option<UserDirectory>,
    stats: ProcessingStats,
}

impl<F: Fetcher> GalleryProcessor<F> {
    /// Creates the processor and its output and media directories.
    pub fn new(config: GalleryConfig, fetcher: F) -> Result<Self> {
        let media_dir = config.media_dir();
        fs::create_dir_all(&media_dir).map_err(|e| GalleryError::io_at(&media_dir, e))?;

        Ok(Self {
            media: MediaFetcher::new(fetcher, media_dir),
            config,
            users: None,
            stats: ProcessingStats::default(),
        })
    }

    /// Uses `users` instead of reading `config.users_path`.
    #[must_use]
    pub fn with_users(mut self, users: UserDirectory) -> Self {
        self.users = Some(users);
        self
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    /// Counters from the most recent [`build_document`](Self::build_document).
    pub fn stats(&self) -> ProcessingStats {
        self.stats
    }

    fn users(&mut self) -> Result<&UserDirectory> {
        let users = match self.users.take() {
            Some(users) => users,
            None => UserDirectory::load(&self.config.users_path)?,
        };
        Ok(self.users.insert(users))
    }

    /// Normalizes one accepted message, downloading its attachments.
    ///
    /// The caller is responsible for checking [`is_top_level_post`] first.
    pub fn process_post(&mut self, msg: &Value) -> Result<GalleryPost> {
        let message = parse_message(msg)?;
        let time = PostTime::from_ts(&message.ts)?;
        let creator = self.users()?.resolve(&message.user).to_string();

        let mut media = Vec::new();
        for file in message.files.iter().flatten() {
            match self.media.process(file)? {
                Some(item) => {
                    self.stats.media_downloaded += 1;
                    media.push(item);
                }
                None => self.stats.media_skipped += 1,
            }
        }

        Ok(GalleryPost {
            id: message.ts,
            timestamp: time.timestamp,
            month: time.month,
            creator,
            content: PostContent {
                text: message.text.unwrap_or_default(),
                media,
            },
        })
    }

    /// Appends the top-level posts of one day file to `document`.
    pub fn process_day(&mut self, day: &DayFile, document: &mut GalleryDocument) -> Result<()> {
        let before = document.len();
        for msg in &day.messages {
            self.stats.messages += 1;
            if is_top_level_post(msg) {
                document.push(self.process_post(msg)?);
                self.stats.posts += 1;
            }
        }
        self.stats.day_files += 1;

        tracing::debug!(
            date = %day.date,
            messages = day.messages.len(),
            posts = document.len() - before,
            "processed day file"
        );
        Ok(())
    }

    /// Processes every day file in the input directory without writing the
    /// document.
    pub fn build_document(&mut self) -> Result<GalleryDocument> {
        self.stats = ProcessingStats::default();
        let mut document = GalleryDocument::new();

        for path in list_day_files(&self.config.input_dir)? {
            let day = load_day_file(&path)?;
            self.process_day(&day, &mut document)?;
        }

        Ok(document)
    }

    /// Builds the document and writes it to `config.output_file()`.
    pub fn process_files(&mut self) -> Result<ProcessingStats> {
        let document = self.build_document()?;
        let output_file = self.config.output_file();
        write_gallery(&document, &output_file)?;

        tracing::info!(
            output = %output_file.display(),
            day_files = self.stats.day_files,
            posts = self.stats.posts,
            media = self.stats.media_downloaded,
            "gallery written"
        );
        Ok(self.stats)
    }
}

/// Runs the whole pipeline for `config`, downloading over HTTP.
#[cfg(feature = "http")]
pub fn process_export(config: GalleryConfig) -> Result<ProcessingStats> {
    let fetcher = crate::media::HttpFetcher::new()?;
    GalleryProcessor::new(config, fetcher)?.process_files()
}
