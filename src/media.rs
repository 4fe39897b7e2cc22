//! Media download and Media Item construction.
//!
//! Every attachment with a download URL is stored flat in the media
//! directory as `<file id>.<lower-cased filetype>`. The name depends only on
//! the file's own id and type, so two attachments sharing both overwrite each
//! other on disk.
//!
//! Downloads go through the [`Fetcher`] trait. [`HttpFetcher`] issues a plain
//! GET with no authentication, retries or timeout, and never checks the
//! status code: whatever body comes back is written as the asset.
//!
//! ```rust
//! use slack_gallery::media::media_location;
//!
//! assert_eq!(media_location("F0123", "PNG"), "media/F0123.png");
//! ```

use std::fs;
use std::path::PathBuf;

use crate::config::MEDIA_DIR_NAME;
use crate::core::models::MediaItem;
use crate::error::{GalleryError, Result};
use crate::slack::SlackFile;

/// Retrieves the bytes behind a download URL.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

impl<F> Fetcher for F
where
    F: Fn(&str) -> Result<Vec<u8>>,
{
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        self(url)
    }
}

/// Blocking HTTP(S) fetcher.
#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

#[cfg(feature = "http")]
impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(None::<std::time::Duration>)
            .build()
            .map_err(GalleryError::HttpClient)?;
        Ok(Self { client })
    }

    /// Uses a preconfigured client (proxy settings, default headers).
    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

#[cfg(feature = "http")]
impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let download_error = |source: reqwest::Error| GalleryError::Download {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().map_err(download_error)?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, %status, "non-success response, storing body as-is");
        }

        let body = response.bytes().map_err(download_error)?;
        Ok(body.to_vec())
    }
}

/// `<id>.<lower-cased filetype>`
pub fn media_file_name(id: &str, filetype: &str) -> String {
    format!("{}.{}", id, filetype.to_lowercase())
}

/// `media/<id>.<lower-cased filetype>`, relative to the output directory.
pub fn media_location(id: &str, filetype: &str) -> String {
    format!("{}/{}", MEDIA_DIR_NAME, media_file_name(id, filetype))
}

/// Turns file attachments into Media Items, downloading each one.
#[derive(Debug)]
pub struct MediaFetcher<F> {
    fetcher: F,
    media_dir: PathBuf,
}

impl<F: Fetcher> MediaFetcher<F> {
    /// `media_dir` must already exist.
    pub fn new(fetcher: F, media_dir: impl Into<PathBuf>) -> Self {
        Self {
            fetcher,
            media_dir: media_dir.into(),
        }
    }

    /// Downloads `file` and describes it.
    ///
    /// Returns `Ok(None)` without touching the network when the file has no
    /// download URL.
    pub fn process(&self, file: &SlackFile) -> Result<Option<MediaItem>> {
        let Some(url) = file.download_url() else {
            tracing::debug!(file_id = %file.id, "no download URL, skipping");
            return Ok(None);
        };

        let required = |value: &Option<String>, field: &'static str| {
            value.clone().ok_or_else(|| GalleryError::MissingFileField {
                file_id: file.id.clone(),
                field,
            })
        };

        let file_type = required(&file.filetype, "filetype")?.to_lowercase();
        let item = MediaItem {
            url: url.to_string(),
            location: media_location(&file.id, &file_type),
            file_type,
            name: required(&file.name, "name")?,
            mime_type: required(&file.mimetype, "mimetype")?,
            thumbnail_url: file.thumb_360.clone(),
        };

        let path = self
            .media_dir
            .join(media_file_name(&file.id, &item.file_type));
        let bytes = self.fetcher.fetch(url)?;
        fs::write(&path, &bytes).map_err(|e| GalleryError::io_at(&path, e))?;

        tracing::debug!(file_id = %file.id, path = %path.display(), bytes = bytes.len(), "downloaded media");
        Ok(Some(item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use std::cell::RefCell;
    use tempfile::tempdir;

    fn empty_body(_: &str) -> Result<Vec<u8>> {
        Ok(Vec::new())
    }

    fn file(id: &str, url: Option<&str>) -> SlackFile {
        SlackFile {
            id: id.into(),
            url_private_download: url.map(Into::into),
            filetype: Some("JPG".into()),
            name: Some("Holiday.JPG".into()),
            mimetype: Some("image/jpeg".into()),
            thumb_360: None,
        }
    }

    #[test]
    fn test_media_location_lowercases_type() {
        assert_eq!(media_location("F1", "JPG"), "media/F1.jpg");
        assert_eq!(media_file_name("F1", "Mp4"), "F1.mp4");
    }

    #[test]
    fn test_process_downloads_and_describes() {
        let dir = tempdir().unwrap();
        let calls = RefCell::new(Vec::new());
        let fetcher = |url: &str| -> Result<Vec<u8>> {
            calls.borrow_mut().push(url.to_string());
            Ok(b"jpeg bytes".to_vec())
        };
        let media = MediaFetcher::new(fetcher, dir.path());

        let item = media
            .process(&file("F1", Some("https://files.example/F1")))
            .unwrap()
            .unwrap();

        assert_eq!(item.url, "https://files.example/F1");
        assert_eq!(item.location, "media/F1.jpg");
        assert_eq!(item.file_type, "jpg");
        assert_eq!(item.name, "Holiday.JPG");
        assert_eq!(item.mime_type, "image/jpeg");
        assert!(item.thumbnail_url.is_none());
        assert_eq!(fs::read(dir.path().join("F1.jpg")).unwrap(), b"jpeg bytes");
        assert_eq!(calls.borrow().as_slice(), ["https://files.example/F1"]);
    }

    #[test]
    fn test_process_without_url_skips_download() {
        let dir = tempdir().unwrap();
        let fetcher = |_: &str| -> Result<Vec<u8>> { panic!("must not fetch") };
        let media = MediaFetcher::new(fetcher, dir.path());

        assert!(media.process(&file("F1", None)).unwrap().is_none());
        assert!(media.process(&file("F2", Some(""))).unwrap().is_none());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_process_stub_file_without_type_is_skipped() {
        let dir = tempdir().unwrap();
        let media = MediaFetcher::new(empty_body, dir.path());
        let stub: SlackFile = serde_json::from_value(json!({"id": "F9", "mode": "hidden_by_limit"})).unwrap();

        assert!(media.process(&stub).unwrap().is_none());
    }

    #[test]
    fn test_process_copies_thumbnail_verbatim() {
        let dir = tempdir().unwrap();
        let media = MediaFetcher::new(empty_body, dir.path());

        let mut with_thumb = file("F1", Some("https://files.example/F1"));
        with_thumb.thumb_360 = Some(json!("https://files.example/F1_360.jpg"));
        let item = media.process(&with_thumb).unwrap().unwrap();
        assert_eq!(item.thumbnail_url, Some(json!("https://files.example/F1_360.jpg")));

        let mut null_thumb = file("F2", Some("https://files.example/F2"));
        null_thumb.thumb_360 = Some(Value::Null);
        let item = media.process(&null_thumb).unwrap().unwrap();
        assert_eq!(item.thumbnail_url, Some(Value::Null));
    }

    #[test]
    fn test_process_missing_filetype_with_url_fails() {
        let dir = tempdir().unwrap();
        let media = MediaFetcher::new(empty_body, dir.path());
        let mut broken = file("F1", Some("https://files.example/F1"));
        broken.filetype = None;

        let err = media.process(&broken).unwrap_err();
        assert!(matches!(
            err,
            GalleryError::MissingFileField { field: "filetype", .. }
        ));
    }

    #[test]
    fn test_process_fetch_error_propagates() {
        let dir = tempdir().unwrap();
        let media = MediaFetcher::new(
            |url: &str| -> Result<Vec<u8>> { Err(GalleryError::fetch(url, "connection refused")) },
            dir.path(),
        );

        let err = media
            .process(&file("F1", Some("https://files.example/F1")))
            .unwrap_err();
        assert!(err.is_download_error());
        assert!(!dir.path().join("F1.jpg").exists());
    }

    #[test]
    fn test_same_id_and_type_overwrite() {
        let dir = tempdir().unwrap();
        let counter = RefCell::new(0u8);
        let media = MediaFetcher::new(
            |_: &str| -> Result<Vec<u8>> {
                *counter.borrow_mut() += 1;
                Ok(vec![*counter.borrow()])
            },
            dir.path(),
        );

        media.process(&file("F1", Some("https://a"))).unwrap();
        media.process(&file("F1", Some("https://b"))).unwrap();

        assert_eq!(fs::read(dir.path().join("F1.jpg")).unwrap(), vec![2]);
    }
}
