//! Slack export record types and the top-level post rules.
//!
//! Day files are loaded as untyped [`Value`]s because the post predicate has
//! to look at arbitrary records (including non-mappings). Only messages that
//! pass [`is_top_level_post`] are deserialized into [`SlackMessage`].
//!
//! ```json
//! [
//!   {
//!     "ts": "1710500000.000100",
//!     "thread_ts": "1710500000.000100",
//!     "user": "U1",
//!     "text": "new poster draft",
//!     "files": [
//!       {
//!         "id": "F1",
//!         "url_private_download": "https://files.slack.com/.../poster.PNG?t=...",
//!         "filetype": "PNG",
//!         "name": "poster.PNG",
//!         "mimetype": "image/png",
//!         "thumb_360": "https://files.slack.com/.../poster_360.png"
//!       }
//!     ]
//!   }
//! ]
//! ```

use chrono::{DateTime, Local, TimeZone, Timelike, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{GalleryError, Result};

/// A message accepted as a top-level post.
#[derive(Debug, Clone, Deserialize)]
pub struct SlackMessage {
    /// Epoch seconds as a string, e.g. `"1710500000.000100"`
    pub ts: String,
    /// Root timestamp of the thread; equals `ts` for a thread starter
    pub thread_ts: String,
    /// Author user id
    pub user: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub files: Option<Vec<SlackFile>>,
}

/// A file attachment on a message.
///
/// Only `id` is always required. Exports contain stub entries for files that
/// are no longer downloadable, which carry neither a URL nor a type.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlackFile {
    pub id: String,
    #[serde(default)]
    pub url_private_download: Option<String>,
    #[serde(default)]
    pub filetype: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub mimetype: Option<String>,
    /// `Some` whenever the key exists, even when its value is `null`.
    #[serde(default, deserialize_with = "deserialize_present")]
    pub thumb_360: Option<Value>,
}

impl SlackFile {
    /// The download URL, treating an empty string as absent.
    pub fn download_url(&self) -> Option<&str> {
        self.url_private_download
            .as_deref()
            .filter(|url| !url.is_empty())
    }
}

fn deserialize_present<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Returns `true` if `msg` starts its own thread and is not a system message.
///
/// A message qualifies when it is a mapping, has no `subtype`, has a
/// `thread_ts` key, and its `ts` equals its `thread_ts`. A `null` value
/// compares like a missing key, so `{"thread_ts": null}` qualifies and is
/// then rejected by [`parse_message`].
pub fn is_top_level_post(msg: &Value) -> bool {
    let Some(obj) = msg.as_object() else {
        return false;
    };
    let field = |key: &str| obj.get(key).filter(|v| !v.is_null());

    !obj.contains_key("subtype")
        && obj.contains_key("thread_ts")
        && field("ts") == field("thread_ts")
}

/// Deserializes an accepted raw message.
pub fn parse_message(msg: &Value) -> Result<SlackMessage> {
    SlackMessage::deserialize(msg).map_err(|source| GalleryError::InvalidMessage {
        ts: msg.get("ts").and_then(Value::as_str).map(ToString::to_string),
        source,
    })
}

/// Parses a Slack `ts` (fractional epoch seconds) into an instant.
///
/// Precision is microseconds, rounded to nearest.
pub fn parse_epoch_seconds(ts: &str) -> Result<DateTime<Utc>> {
    let invalid = || GalleryError::InvalidTimestamp {
        input: ts.to_string(),
    };

    let value: f64 = ts.trim().parse().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }

    let whole = value.floor();
    let mut secs = whole as i64;
    let mut micros = ((value - whole) * 1_000_000.0).round() as u32;
    if micros >= 1_000_000 {
        secs += 1;
        micros -= 1_000_000;
    }

    DateTime::from_timestamp(secs, micros * 1_000).ok_or_else(invalid)
}

/// Display fields derived from one instant.
///
/// `timestamp` and `month` always come from the same wall-clock reading,
/// so `month` is the first seven characters of `timestamp`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTime {
    /// ISO-8601 local time without offset, e.g. `2024-03-15T10:53:20.000100`
    pub timestamp: String,
    /// `YYYY-MM`
    pub month: String,
}

impl PostTime {
    /// Formats `dt` in its own time zone.
    ///
    /// The fractional part is only written when the microseconds are
    /// non-zero.
    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        let local = dt.naive_local();
        let timestamp = if local.nanosecond() == 0 {
            local.format("%Y-%m-%dT%H:%M:%S").to_string()
        } else {
            local.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
        };
        let month = local.format("%Y-%m").to_string();

        Self { timestamp, month }
    }

    /// Converts a Slack `ts` into display fields in time zone `tz`.
    pub fn from_ts_in<Tz: TimeZone>(ts: &str, tz: &Tz) -> Result<Self> {
        let instant = parse_epoch_seconds(ts)?;
        Ok(Self::from_datetime(&instant.with_timezone(tz)))
    }

    /// Converts a Slack `ts` into display fields in the local time zone.
    pub fn from_ts(ts: &str) -> Result<Self> {
        Self::from_ts_in(ts, &Local)
    }
}
