//! Day file discovery and loading.
//!
//! A Slack channel export holds one JSON array per calendar day, named
//! `YYYY-MM-DD.json`. Sorting by file name is chronological order.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::error::{GalleryError, Result};

static DAY_FILE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}\.json$").expect("valid day file regex"));

/// One parsed day file.
#[derive(Debug, Clone)]
pub struct DayFile {
    /// Location on disk.
    pub path: PathBuf,
    /// The `YYYY-MM-DD` file stem.
    pub date: String,
    /// Raw messages in file order.
    pub messages: Vec<Value>,
}

/// Returns `true` if `name` looks like `YYYY-MM-DD.json`.
pub fn is_day_file_name(name: &str) -> bool {
    DAY_FILE_NAME.is_match(name)
}

/// Lists day files in `dir`, sorted by file name.
///
/// Files with other names and subdirectories are ignored.
pub fn list_day_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| GalleryError::io_at(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| GalleryError::io_at(dir, e))?;
        let path = entry.path();
        let matches = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(is_day_file_name);
        if matches && path.is_file() {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Reads one day file as a JSON array of raw messages.
pub fn load_day_file(path: &Path) -> Result<DayFile> {
    let content = fs::read_to_string(path).map_err(|e| GalleryError::io_at(path, e))?;
    let messages: Vec<Value> =
        serde_json::from_str(&content).map_err(|source| GalleryError::DayFile {
            path: path.to_path_buf(),
            source,
        })?;

    let date = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_string();

    tracing::debug!(file = %path.display(), messages = messages.len(), "loaded day file");

    Ok(DayFile {
        path: path.to_path_buf(),
        date,
        messages,
    })
}

/// Lists and loads every day file in `dir`, in chronological order.
pub fn load_day_files(dir: &Path) -> Result<Vec<DayFile>> {
    list_day_files(dir)?
        .iter()
        .map(|path| load_day_file(path))
        .collect()
}
