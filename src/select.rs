//! Message selection policies.
//!
//! Exactly one policy is active per dump run:
//!
//! - [`SelectionPolicy::All`] — every message of every channel
//! - [`SelectionPolicy::ByYear`] — only messages whose timestamp starts
//!   with the given year
//! - [`SelectionPolicy::ByChannels`] — every message, but only for
//!   channels passing a set-membership test
//!
//! A policy is pure: it never touches the filesystem. Given one
//! channel's identifier and messages it answers what, if anything,
//! should be emitted for that channel.

use std::collections::HashSet;
use std::fmt;

use crate::archive::MessageEntry;

/// Whether the configured channel set names channels to drop or the
/// only channels to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Membership {
    /// Channels in the set are dropped; everything else is kept.
    Exclude,
    /// Only channels in the set are kept.
    Include,
}

impl fmt::Display for Membership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Membership::Exclude => write!(f, "exclude"),
            Membership::Include => write!(f, "include"),
        }
    }
}

/// The active selection rule for a dump run.
///
/// # Example
///
/// ```rust
/// use chatdump::archive::MessageEntry;
/// use chatdump::select::SelectionPolicy;
///
/// let messages = vec![
///     MessageEntry::new(10, "2020-01-01 10:00:00"),
///     MessageEntry::new(11, "2021-05-01 10:00:00"),
/// ];
///
/// let policy = SelectionPolicy::ByYear("2020".to_string());
/// let block = policy.select("A", &messages).expect("one match");
/// assert_eq!(block.message_ids, vec![10]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// Dump every message of every channel.
    All,
    /// Dump only messages whose timestamp year segment equals the
    /// string exactly. No numeric parsing: `"02020"` never matches
    /// `"2020"`.
    ByYear(String),
    /// Dump every message of the channels passing the membership test.
    ByChannels {
        /// Channel identifiers the membership test runs against.
        channels: HashSet<String>,
        /// How membership in the set is interpreted.
        membership: Membership,
    },
}

impl SelectionPolicy {
    /// Applies the policy to one channel.
    ///
    /// Returns `None` when nothing should be emitted for the channel:
    /// a year filter that matched no message, or a channel failing the
    /// membership test. `All` and a passing `ByChannels` always return
    /// a block carrying every ID in source order.
    pub fn select(&self, channel_id: &str, messages: &[MessageEntry]) -> Option<ChannelBlock> {
        match self {
            SelectionPolicy::All => Some(ChannelBlock::new(channel_id, all_ids(messages))),
            SelectionPolicy::ByYear(year) => {
                let ids: Vec<i64> = messages
                    .iter()
                    .filter(|m| m.year() == year)
                    .map(|m| m.id)
                    .collect();
                if ids.is_empty() {
                    None
                } else {
                    Some(ChannelBlock::new(channel_id, ids))
                }
            }
            SelectionPolicy::ByChannels {
                channels,
                membership,
            } => {
                let listed = channels.contains(channel_id);
                let keep = match membership {
                    Membership::Exclude => !listed,
                    Membership::Include => listed,
                };
                if keep {
                    Some(ChannelBlock::new(channel_id, all_ids(messages)))
                } else {
                    None
                }
            }
        }
    }
}

impl fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionPolicy::All => write!(f, "all messages"),
            SelectionPolicy::ByYear(year) => write!(f, "messages from year {year}"),
            SelectionPolicy::ByChannels {
                channels,
                membership,
            } => {
                let n = channels.len();
                let plural = if n == 1 { "" } else { "s" };
                write!(f, "{membership} {n} listed channel{plural}")
            }
        }
    }
}

/// A channel identifier paired with the message IDs selected for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelBlock {
    /// Identifier of the channel the block belongs to.
    pub channel_id: String,
    /// Selected message IDs, in the order they appear in the archive.
    pub message_ids: Vec<i64>,
}

impl ChannelBlock {
    /// Creates a block from raw parts.
    pub fn new(channel_id: impl Into<String>, message_ids: Vec<i64>) -> Self {
        Self {
            channel_id: channel_id.into(),
            message_ids,
        }
    }
}

fn all_ids(messages: &[MessageEntry]) -> Vec<i64> {
    messages.iter().map(|m| m.id).collect()
}

// ============================================================================
// Tests
// ============================================================================
