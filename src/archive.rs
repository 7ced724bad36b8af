//! Channel records and the loader that reads them from disk.
//!
//! A data-package export lays out one directory per channel. Each
//! directory holds two JSON resources:
//!
//! - `channel.json` — an object with the channel metadata; only the
//!   `id` field is consumed
//! - `messages.json` — a top-level array of message objects; only the
//!   `ID` and `Timestamp` fields are consumed
//!
//! Unknown fields are ignored, so the loader keeps working when the
//! export gains new columns. Missing fields decode to their defaults
//! (empty string, zero) rather than failing.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{DumpError, Result};

/// Default file name of the channel-metadata resource.
pub const CHANNEL_FILE: &str = "channel.json";

/// Default file name of the message-list resource.
pub const MESSAGES_FILE: &str = "messages.json";

const CHANNEL_RESOURCE: &str = "channel metadata";
const MESSAGES_RESOURCE: &str = "message list";

/// Channel metadata as stored in `channel.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChannelMeta {
    /// Channel identifier. Opaque to the pipeline and possibly empty.
    #[serde(default)]
    pub id: String,
}

/// One entry of the `messages.json` array.
///
/// # Example
///
/// ```rust
/// use chatdump::archive::MessageEntry;
///
/// let entry = MessageEntry::new(794184669881831460, "2021-01-01 12:34:56");
/// assert_eq!(entry.year(), "2021");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MessageEntry {
    /// 64-bit message identifier.
    #[serde(rename = "ID", default)]
    pub id: i64,

    /// Raw timestamp string. Never parsed as a date; selection only
    /// compares its leading year segment.
    #[serde(rename = "Timestamp", default)]
    pub timestamp: String,
}

impl MessageEntry {
    /// Creates an entry from raw parts.
    pub fn new(id: i64, timestamp: impl Into<String>) -> Self {
        Self {
            id,
            timestamp: timestamp.into(),
        }
    }

    /// Returns the year segment of the timestamp: everything before the
    /// first `-`, or the whole string when it contains none.
    pub fn year(&self) -> &str {
        self.timestamp.split('-').next().unwrap_or("")
    }
}

/// Loads the two per-channel resources from a channel directory.
///
/// The resource file names are configurable so the loader can run
/// against trees that use different naming conventions.
///
/// # Example
///
/// ```rust,no_run
/// use chatdump::archive::ArchiveLoader;
///
/// let loader = ArchiveLoader::new();
/// let (channel, messages) = loader.load("messages/c794183829873885224".as_ref())?;
/// println!("{}: {} messages", channel.id, messages.len());
/// # Ok::<(), chatdump::DumpError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ArchiveLoader {
    channel_file: String,
    messages_file: String,
}

impl Default for ArchiveLoader {
    fn default() -> Self {
        Self {
            channel_file: CHANNEL_FILE.to_string(),
            messages_file: MESSAGES_FILE.to_string(),
        }
    }
}

impl ArchiveLoader {
    /// Creates a loader with the standard resource file names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the channel-metadata file name.
    #[must_use]
    pub fn with_channel_file(mut self, name: impl Into<String>) -> Self {
        self.channel_file = name.into();
        self
    }

    /// Overrides the message-list file name.
    #[must_use]
    pub fn with_messages_file(mut self, name: impl Into<String>) -> Self {
        self.messages_file = name.into();
        self
    }

    /// Loads and decodes both resources of one channel directory.
    ///
    /// Both resources must exist: a directory under the archive root
    /// that lacks either file fails the whole run. An empty message
    /// array is a valid result, not an error.
    ///
    /// # Errors
    ///
    /// [`DumpError::Read`] when a resource cannot be read and
    /// [`DumpError::Decode`] when it is not valid JSON of the expected
    /// shape.
    pub fn load(&self, dir: &Path) -> Result<(ChannelMeta, Vec<MessageEntry>)> {
        let channel_path = dir.join(&self.channel_file);
        let raw = fs::read_to_string(&channel_path)
            .map_err(|e| DumpError::read(CHANNEL_RESOURCE, &channel_path, e))?;
        let channel: ChannelMeta = serde_json::from_str(&raw)
            .map_err(|e| DumpError::decode(CHANNEL_RESOURCE, &channel_path, e))?;

        let messages_path = dir.join(&self.messages_file);
        let raw = fs::read_to_string(&messages_path)
            .map_err(|e| DumpError::read(MESSAGES_RESOURCE, &messages_path, e))?;
        let messages: Vec<MessageEntry> = serde_json::from_str(&raw)
            .map_err(|e| DumpError::decode(MESSAGES_RESOURCE, &messages_path, e))?;

        Ok((channel, messages))
    }
}

// ============================================================================
// Tests
// ============================================================================
