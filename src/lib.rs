//! # Chatdump
//!
//! A Rust library for flattening chat data-package exports into a
//! single, filterable text dump of message IDs.
//!
//! ## Overview
//!
//! A data-package export (such as the one Discord ships in its privacy
//! download) lays out one directory per channel, each holding a
//! `channel.json` with the channel metadata and a `messages.json` with
//! the message list. Chatdump walks that tree and writes one block per
//! channel to a single dump file:
//!
//! ```text
//! 794183829873885224:
//! 794184669881831460, 794184669881831461
//!
//! ```
//!
//! Three selection policies control what reaches the dump: everything,
//! only messages from one year, or only messages from an excluded or
//! included set of channels.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatdump::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // Dump every 2020 message ID under export/messages
//!     let config = DumpConfig::new("export/messages")
//!         .with_output("2020.txt")
//!         .with_year("2020");
//!
//!     let report = walk(&config)?;
//!     println!("{} IDs from {} channels", report.ids_dumped, report.channels_dumped);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`archive`] — Channel records and the loader reading them
//!   - [`ChannelMeta`](archive::ChannelMeta), [`MessageEntry`](archive::MessageEntry), [`ArchiveLoader`](archive::ArchiveLoader)
//! - [`select`] — Selection policies
//!   - [`SelectionPolicy`](select::SelectionPolicy), [`Membership`](select::Membership), [`ChannelBlock`](select::ChannelBlock)
//! - [`dump`] — Dump-file serialization
//!   - [`DumpWriter`](dump::DumpWriter), [`format_block`](dump::format_block)
//! - [`walk`](mod@walk) — Tree traversal driving the pipeline
//!   - [`walk()`](walk()), [`DumpReport`](walk::DumpReport)
//! - [`config`] — Run configuration ([`DumpConfig`])
//! - [`cli`] — CLI argument types (behind the `cli` feature)
//! - [`error`] — Unified error types ([`DumpError`], [`Result`])
//! - [`prelude`] — Convenient re-exports

pub mod archive;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod dump;
pub mod error;
pub mod select;
pub mod walk;

// Re-export the main types at the crate root for convenience
pub use config::DumpConfig;
pub use error::{DumpError, Result};
pub use walk::{DumpReport, walk};

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatdump::prelude::*;
/// ```
pub mod prelude {
    // Error types
    pub use crate::error::{DumpError, Result};

    // Channel records and loading
    pub use crate::archive::{ArchiveLoader, ChannelMeta, MessageEntry};

    // Selection
    pub use crate::select::{ChannelBlock, Membership, SelectionPolicy};

    // Output
    pub use crate::dump::{DumpWriter, format_block};

    // Configuration and the pipeline entry point
    pub use crate::config::DumpConfig;
    pub use crate::walk::{DumpReport, walk};

    // CLI types
    #[cfg(feature = "cli")]
    pub use crate::cli::Args;
}
