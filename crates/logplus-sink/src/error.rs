//! crates/logplus-sink/src/error.rs
//! Error type surfaced by sink construction and writing.

use std::io;
use std::path::PathBuf;

/// Errors produced while opening or writing a file sink.
///
/// Each variant carries the path that failed so callers can report the
/// offending destination without re-deriving it from the configuration.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// The destination directory could not be created.
    #[error("failed to create sink directory {path:?}: {source}")]
    CreateDirectory {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The target path has no parent directory or is otherwise unusable.
    #[error("sink path {path:?} is not a writable file location")]
    InvalidPath {
        /// The rejected path.
        path: PathBuf,
    },

    /// Opening the sink file failed.
    #[error("failed to open sink file {path:?}: {source}")]
    Open {
        /// File that could not be opened.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Writing or flushing an already-open sink failed.
    #[error("failed to write to sink file {path:?}: {source}")]
    Write {
        /// File the write targeted.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

impl SinkError {
    /// Returns the path associated with this error.
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::CreateDirectory { path, .. }
            | Self::InvalidPath { path }
            | Self::Open { path, .. }
            | Self::Write { path, .. } => path,
        }
    }
}
