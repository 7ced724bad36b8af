//! Dump-file serialization.
//!
//! Every channel that survives selection contributes one block to the
//! dump file:
//!
//! ```text
//! <channel id>:
//! <id>, <id>, <id>
//!
//! ```
//!
//! The header line is always written first. A block with no IDs is just
//! its header; otherwise the IDs follow on one line, comma-separated,
//! closed by a blank line. Blocks are appended in traversal order, so
//! the dump is reproducible for a given tree and policy.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{DumpError, Result};
use crate::select::ChannelBlock;

/// Default file name of the dump.
pub const DUMP_FILE: &str = "messages.txt";

/// Renders one channel block to its dump representation.
///
/// # Example
///
/// ```rust
/// use chatdump::dump::format_block;
/// use chatdump::select::ChannelBlock;
///
/// let block = ChannelBlock::new("c1", vec![1, 2, 3]);
/// assert_eq!(format_block(&block), "c1:\n1, 2, 3\n\n");
/// ```
pub fn format_block(block: &ChannelBlock) -> String {
    let mut out = format!("{}:\n", block.channel_id);
    let mut ids = block.message_ids.iter();
    if let Some(first) = ids.next() {
        out.push_str(&first.to_string());
        for id in ids {
            out.push_str(", ");
            out.push_str(&id.to_string());
        }
        out.push_str("\n\n");
    }
    out
}

/// Buffered writer owning the dump file for one run.
///
/// Creating the writer truncates any previous dump of the same name, so
/// every run starts from an empty file. [`finish`](Self::finish) flushes
/// and hands the path back. Dropping the writer without finishing still
/// flushes on a best-effort basis, which is what leaves a partial dump
/// behind when a run aborts mid-tree.
#[derive(Debug)]
pub struct DumpWriter {
    sink: BufWriter<File>,
    path: PathBuf,
}

impl DumpWriter {
    /// Creates (or truncates) the dump file at `path`.
    ///
    /// # Errors
    ///
    /// [`DumpError::Create`] when the file cannot be created.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = File::create(&path).map_err(|e| DumpError::create(&path, e))?;
        Ok(Self {
            sink: BufWriter::new(file),
            path,
        })
    }

    /// Appends one channel block to the dump.
    ///
    /// # Errors
    ///
    /// [`DumpError::Write`] on any sink failure.
    pub fn write_block(&mut self, block: &ChannelBlock) -> Result<()> {
        self.sink
            .write_all(format_block(block).as_bytes())
            .map_err(|e| DumpError::write(&self.path, e))
    }

    /// Flushes buffered output and returns the dump path.
    ///
    /// # Errors
    ///
    /// [`DumpError::Write`] when the flush fails.
    pub fn finish(mut self) -> Result<PathBuf> {
        self.sink
            .flush()
            .map_err(|e| DumpError::write(&self.path, e))?;
        Ok(self.path)
    }

    /// Path of the dump file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    use tempfile::TempDir;

    // =========================================================================
    // Block formatting
    // =========================================================================

    #[test]
    fn test_format_block_layout() {
        let block = ChannelBlock::new("c1", vec![1, 2, 3]);
        assert_eq!(format_block(&block), "c1:\n1, 2, 3\n\n");
    }

    #[test]
    fn test_format_block_single_id() {
        let block = ChannelBlock::new("c1", vec![7]);
        assert_eq!(format_block(&block), "c1:\n7\n\n");
    }

    #[test]
    fn test_format_block_without_ids_is_header_only() {
        let block = ChannelBlock::new("c1", vec![]);
        assert_eq!(format_block(&block), "c1:\n");
    }

    #[test]
    fn test_format_block_negative_id() {
        let block = ChannelBlock::new("c1", vec![-5, 0]);
        assert_eq!(format_block(&block), "c1:\n-5, 0\n\n");
    }

    #[test]
    fn test_format_block_empty_channel_id() {
        let block = ChannelBlock::new("", vec![1]);
        assert_eq!(format_block(&block), ":\n1\n\n");
    }

    #[test]
    fn test_format_block_large_ids() {
        let block = ChannelBlock::new("794183829873885224", vec![i64::MAX, i64::MIN]);
        assert_eq!(
            format_block(&block),
            "794183829873885224:\n9223372036854775807, -9223372036854775808\n\n"
        );
    }

    // =========================================================================
    // Writer behavior
    // =========================================================================

    #[test]
    fn test_writer_appends_blocks_in_order() {
        let tmp = TempDir::new().expect("create temp dir");
        let path = tmp.path().join("messages.txt");

        let mut writer = DumpWriter::create(&path).expect("create dump file");
        writer
            .write_block(&ChannelBlock::new("A", vec![10]))
            .expect("write first block");
        writer
            .write_block(&ChannelBlock::new("B", vec![20, 21]))
            .expect("write second block");
        let finished = writer.finish().expect("flush");

        assert_eq!(finished, path);
        let content = fs::read_to_string(&path).expect("read dump");
        assert_eq!(content, "A:\n10\n\nB:\n20, 21\n\n");
    }

    #[test]
    fn test_writer_truncates_existing_file() {
        let tmp = TempDir::new().expect("create temp dir");
        let path = tmp.path().join("messages.txt");
        fs::write(&path, "stale content from a previous run").expect("seed file");

        let writer = DumpWriter::create(&path).expect("create dump file");
        writer.finish().expect("flush");

        let content = fs::read_to_string(&path).expect("read dump");
        assert!(content.is_empty());
    }

    #[test]
    fn test_writer_create_fails_for_missing_parent() {
        let tmp = TempDir::new().expect("create temp dir");
        let path = tmp.path().join("no_such_dir").join("messages.txt");

        let err = DumpWriter::create(&path).unwrap_err();
        assert!(err.is_create());
        assert_eq!(err.path(), Some(path.as_path()));
    }

    #[test]
    fn test_writer_exposes_path() {
        let tmp = TempDir::new().expect("create temp dir");
        let path = tmp.path().join("messages.txt");
        let writer = DumpWriter::create(&path).expect("create dump file");
        assert_eq!(writer.path(), path);
        writer.finish().expect("flush");
    }
}
