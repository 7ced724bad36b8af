//! Unified error types for chatdump.
//!
//! This module provides a single [`DumpError`] enum that covers all error
//! cases in the library. Every failure carries the path of the file or
//! directory that caused it, so the CLI can report something actionable
//! without inspecting the source chain.
//!
//! All errors are fatal: a dump run aborts on the first one and the dump
//! file is left exactly as written up to that point.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatdump operations.
///
/// # Example
///
/// ```rust
/// use chatdump::error::Result;
/// use chatdump::select::ChannelBlock;
///
/// fn my_function() -> Result<Vec<ChannelBlock>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, DumpError>;

/// The error type for all chatdump operations.
///
/// Each variant maps to one stage of the pipeline: reading a channel
/// resource, decoding it, creating the dump file, appending to it, or
/// enumerating the archive tree.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DumpError {
    /// A channel resource could not be read.
    ///
    /// This typically happens when:
    /// - A channel directory is missing one of its resource files
    /// - Permission denied
    #[error("Failed to read {resource} (file: {}): {source}", path.display())]
    Read {
        /// The resource being read (e.g., "channel metadata", "message list")
        resource: &'static str,
        /// Path of the file that could not be read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A channel resource did not decode into the expected shape.
    ///
    /// Raised for malformed JSON as well as for values of the wrong type,
    /// such as a message ID stored as a string.
    #[error("Failed to decode {resource} (file: {}): {source}", path.display())]
    Decode {
        /// The resource being decoded
        resource: &'static str,
        /// Path of the offending file
        path: PathBuf,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// The dump file could not be created.
    ///
    /// Creation truncates any existing file of the same name, so this
    /// fires before a single channel is visited.
    #[error("Failed to create dump file (file: {}): {source}", path.display())]
    Create {
        /// Path of the dump file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Appending a channel block to the dump file failed.
    #[error("Failed to write dump file (file: {}): {source}", path.display())]
    Write {
        /// Path of the dump file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Enumerating directories under the archive root failed.
    ///
    /// Also raised when the root itself does not exist or is unreadable.
    #[error("Failed to traverse archive tree: {source}")]
    Walk {
        /// The underlying traversal error
        #[source]
        source: walkdir::Error,
    },
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl DumpError {
    /// Creates a read error for a channel resource.
    pub fn read(resource: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        DumpError::Read {
            resource,
            path: path.into(),
            source,
        }
    }

    /// Creates a decode error for a channel resource.
    pub fn decode(
        resource: &'static str,
        path: impl Into<PathBuf>,
        source: serde_json::Error,
    ) -> Self {
        DumpError::Decode {
            resource,
            path: path.into(),
            source,
        }
    }

    /// Creates a dump-file creation error.
    pub fn create(path: impl Into<PathBuf>, source: io::Error) -> Self {
        DumpError::Create {
            path: path.into(),
            source,
        }
    }

    /// Creates a dump-file write error.
    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        DumpError::Write {
            path: path.into(),
            source,
        }
    }

    /// Creates a traversal error.
    pub fn walk(source: walkdir::Error) -> Self {
        DumpError::Walk { source }
    }

    /// Returns `true` if this is a resource read error.
    pub fn is_read(&self) -> bool {
        matches!(self, DumpError::Read { .. })
    }

    /// Returns `true` if this is a resource decode error.
    pub fn is_decode(&self) -> bool {
        matches!(self, DumpError::Decode { .. })
    }

    /// Returns `true` if this is a dump-file creation error.
    pub fn is_create(&self) -> bool {
        matches!(self, DumpError::Create { .. })
    }

    /// Returns `true` if this is a dump-file write error.
    pub fn is_write(&self) -> bool {
        matches!(self, DumpError::Write { .. })
    }

    /// Returns `true` if this is a traversal error.
    pub fn is_walk(&self) -> bool {
        matches!(self, DumpError::Walk { .. })
    }

    /// Returns the path of the file or directory the error refers to,
    /// when one is known.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            DumpError::Read { path, .. }
            | DumpError::Decode { path, .. }
            | DumpError::Create { path, .. }
            | DumpError::Write { path, .. } => Some(path),
            DumpError::Walk { source } => source.path(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
