//! User id to display name lookup.
//!
//! The export's `users.json` is an object keyed by user id:
//!
//! ```json
//! { "U1": { "real_name": "Alice", "name": "alice" } }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{GalleryError, Result};

/// One entry of the user directory. Only `real_name` is used.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlackUser {
    #[serde(default)]
    pub real_name: Option<String>,
}

/// Maps Slack user ids to display names.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct UserDirectory {
    users: HashMap<String, SlackUser>,
}

impl UserDirectory {
    /// Creates an empty directory; every lookup falls back to the id.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a user directory file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| GalleryError::io_at(path, e))?;
        let directory = Self::from_json(&content).map_err(|source| GalleryError::UserDirectory {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(file = %path.display(), users = directory.len(), "loaded user directory");
        Ok(directory)
    }

    /// Parses a user directory from JSON text.
    pub fn from_json(content: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Adds or replaces one user.
    pub fn insert(&mut self, id: impl Into<String>, real_name: impl Into<String>) {
        self.users.insert(
            id.into(),
            SlackUser {
                real_name: Some(real_name.into()),
            },
        );
    }

    /// Returns the display name for `user_id`, or `user_id` itself when the
    /// user is unknown or has no `real_name`.
    pub fn resolve<'a>(&'a self, user_id: &'a str) -> &'a str {
        self.users
            .get(user_id)
            .and_then(|user| user.real_name.as_deref())
            .unwrap_or(user_id)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for UserDirectory {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut directory = Self::new();
        for (id, name) in iter {
            directory.insert(id, name);
        }
        directory
    }
}
