//! Run configuration for the dump pipeline.
//!
//! [`DumpConfig`] mirrors the CLI surface one-to-one but has no CLI
//! framework dependency, so library users can drive a run directly.
//!
//! # Example
//!
//! ```rust
//! use chatdump::config::DumpConfig;
//!
//! let config = DumpConfig::new("export/messages")
//!     .with_output("2020.txt")
//!     .with_year("2020");
//! ```

use std::collections::HashSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::archive::{ArchiveLoader, CHANNEL_FILE, MESSAGES_FILE};
use crate::dump::DUMP_FILE;
use crate::select::{Membership, SelectionPolicy};

/// Default root directory of a data-package export.
pub const MESSAGES_DIR: &str = "messages";

/// Resolved configuration for one dump run.
///
/// At most one selection mode is active per run. [`selection`] resolves
/// the mode from the raw fields, with the year filter taking precedence
/// over the channel list.
///
/// [`selection`]: Self::selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DumpConfig {
    /// Archive tree to traverse (default: `messages`)
    pub root: PathBuf,

    /// Dump file written by the run, created fresh each time
    /// (default: `messages.txt`)
    pub output: PathBuf,

    /// Year filter; a non-empty value selects year mode
    pub year: Option<String>,

    /// Comma-separated channel identifiers; a non-empty value selects
    /// channel mode
    pub channels: Option<String>,

    /// Treat the channel list as channels to drop (default: false)
    pub exclude: bool,

    /// Treat the channel list as the only channels to keep
    /// (default: false)
    pub include: bool,

    /// File name of the channel-metadata resource in each channel
    /// directory (default: `channel.json`)
    pub channel_file: String,

    /// File name of the message-list resource in each channel
    /// directory (default: `messages.json`)
    pub messages_file: String,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(MESSAGES_DIR),
            output: PathBuf::from(DUMP_FILE),
            year: None,
            channels: None,
            exclude: false,
            include: false,
            channel_file: CHANNEL_FILE.to_string(),
            messages_file: MESSAGES_FILE.to_string(),
        }
    }
}

impl DumpConfig {
    /// Creates a configuration for the given archive root with default
    /// values for everything else.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Sets the dump file path.
    #[must_use]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Sets the year filter.
    #[must_use]
    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    /// Sets the comma-separated channel list.
    #[must_use]
    pub fn with_channels(mut self, channels: impl Into<String>) -> Self {
        self.channels = Some(channels.into());
        self
    }

    /// Sets whether the channel list names channels to drop.
    #[must_use]
    pub fn with_exclude(mut self, exclude: bool) -> Self {
        self.exclude = exclude;
        self
    }

    /// Sets whether the channel list names the only channels to keep.
    #[must_use]
    pub fn with_include(mut self, include: bool) -> Self {
        self.include = include;
        self
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

    /// Builds the loader for this run's resource file names.
    pub fn loader(&self) -> ArchiveLoader {
        ArchiveLoader::new()
            .with_channel_file(self.channel_file.clone())
            .with_messages_file(self.messages_file.clone())
    }

    /// Resolves the active selection policy.
    ///
    /// A non-empty year wins over a non-empty channel list; with
    /// neither set the run dumps everything. A channel list without a
    /// membership flag has nothing to test against and also resolves
    /// to [`SelectionPolicy::All`]. When both membership flags are set,
    /// exclusion wins; the CLI rejects that combination up front.
    pub fn selection(&self) -> SelectionPolicy {
        if let Some(year) = self.year.as_deref().filter(|y| !y.is_empty()) {
            return SelectionPolicy::ByYear(year.to_string());
        }

        if let Some(list) = self.channels.as_deref().filter(|c| !c.is_empty()) {
            let membership = if self.exclude {
                Some(Membership::Exclude)
            } else if self.include {
                Some(Membership::Include)
            } else {
                None
            };
            if let Some(membership) = membership {
                return SelectionPolicy::ByChannels {
                    channels: split_channel_list(list),
                    membership,
                };
            }
        }

        SelectionPolicy::All
    }
}

/// Splits a raw channel list on commas.
///
/// Segments are taken verbatim: no trimming, and empty segments are
/// kept so a list can target channels whose metadata carries no id.
fn split_channel_list(list: &str) -> HashSet<String> {
    list.split(',').map(str::to_string).collect()
}

// ============================================================================
// Tests
// ============================================================================
