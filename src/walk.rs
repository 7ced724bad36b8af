//! Archive-tree traversal driving the dump pipeline.
//!
//! [`walk`] is the one-call entry point: it creates the dump file,
//! visits every directory below the archive root in lexical order, and
//! for each one loads the channel records, applies the selection
//! policy, and appends the selected block. The first failure aborts the
//! run; the dump file is left exactly as written up to that point.

use std::path::PathBuf;

use walkdir::WalkDir;

use crate::config::DumpConfig;
use crate::dump::DumpWriter;
use crate::error::{DumpError, Result};

/// Summary of one completed dump run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpReport {
    /// Channel directories visited below the root.
    pub channels_visited: usize,
    /// Channels that contributed a block to the dump.
    pub channels_dumped: usize,
    /// Message IDs written across all blocks.
    pub ids_dumped: usize,
    /// Path of the finished dump file.
    pub output: PathBuf,
}

/// Runs the full dump pipeline for one configuration.
///
/// The dump file is created (truncating any previous dump) before the
/// first directory is visited. Directories are visited depth-first in
/// lexical order, nested subdirectories included; the root itself is
/// not treated as a channel. Every visited directory must hold both
/// channel resources. Channels whose message list is empty are skipped
/// without output.
///
/// # Errors
///
/// Any [`DumpError`]: unreadable or undecodable channel resources,
/// dump-file creation or write failures, or a traversal failure
/// (including a missing root). All of them abort the run.
///
/// # Example
///
/// ```rust,no_run
/// use chatdump::config::DumpConfig;
///
/// let config = DumpConfig::new("export/messages").with_year("2020");
/// let report = chatdump::walk(&config)?;
/// println!("{} IDs dumped to {}", report.ids_dumped, report.output.display());
/// # Ok::<(), chatdump::DumpError>(())
/// ```
pub fn walk(config: &DumpConfig) -> Result<DumpReport> {
    let loader = config.loader();
    let policy = config.selection();
    let mut writer = DumpWriter::create(&config.output)?;

    let mut channels_visited = 0;
    let mut channels_dumped = 0;
    let mut ids_dumped = 0;

    for entry in WalkDir::new(&config.root).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(DumpError::walk)?;
        if !entry.file_type().is_dir() {
            continue;
        }
        channels_visited += 1;

        let (channel, messages) = loader.load(entry.path())?;
        if messages.is_empty() {
            continue;
        }
        let Some(block) = policy.select(&channel.id, &messages) else {
            continue;
        };

        writer.write_block(&block)?;
        channels_dumped += 1;
        ids_dumped += block.message_ids.len();
    }

    let output = writer.finish()?;
    Ok(DumpReport {
        channels_visited,
        channels_dumped,
        ids_dumped,
        output,
    })
}

// ============================================================================
// Tests
// ============================================================================
