//! crates/logplus-sink/src/factory.rs
//! Constructs fresh append handles for caller-determined paths.

use std::fs;
use std::path::Path;

use crate::{SinkConfig, SinkError, SinkHandle};

/// Builds write-capable handles for file sinks.
///
/// Each call to [`handle_for`](Self::handle_for) opens a fresh handle bound
/// to the given path. The factory holds no state and caches nothing; callers
/// that need handle reuse must cache externally. Existing file content is
/// never truncated — sink files grow append-only across the life of the
/// process, with one reopen per emission.
#[derive(Clone, Copy, Debug, Default)]
pub struct HandleFactory;

impl HandleFactory {
    /// Opens a create+append handle for `path`.
    ///
    /// When the configuration permits it, a missing parent directory is
    /// created first. A path without a parent directory (for example `/`) is
    /// rejected as [`SinkError::InvalidPath`] rather than handed to the
    /// filesystem.
    pub fn handle_for(path: &Path, config: &SinkConfig) -> Result<SinkHandle, SinkError> {
        let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
        let Some(parent) = parent else {
            return Err(SinkError::InvalidPath {
                path: path.to_path_buf(),
            });
        };

        if config.create_directory() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|source| SinkError::CreateDirectory {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| SinkError::Open {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(SinkHandle::new(file, path.to_path_buf()))
    }
}
