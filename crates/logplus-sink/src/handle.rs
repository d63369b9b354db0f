//! crates/logplus-sink/src/handle.rs
//! Transient append handle bound to a single sink file.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::SinkError;

/// Write-capable handle bound to one sink file.
///
/// A `SinkHandle` is created by
/// [`HandleFactory::handle_for`](crate::HandleFactory::handle_for), used for
/// a single emission, and then dropped. Dropping the handle closes the
/// underlying file unconditionally, so no descriptor survives the emission
/// that opened it — including emissions that failed midway.
///
/// # Examples
///
/// ```no_run
/// use logplus_sink::{HandleFactory, SinkConfig};
///
/// let config = SinkConfig::new("/var/log/app");
/// let mut handle = HandleFactory::handle_for(&config.file_path("audit"), &config)?;
/// handle.write_line("2026-01-01 00:00:00 | INFO | value=5")?;
/// // handle drops here; the file is closed.
/// # Ok::<(), logplus_sink::SinkError>(())
/// ```
#[derive(Debug)]
pub struct SinkHandle {
    file: File,
    path: PathBuf,
}

impl SinkHandle {
    pub(crate) const fn new(file: File, path: PathBuf) -> Self {
        Self { file, path }
    }

    /// Returns the path this handle writes to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one rendered line and flushes it.
    ///
    /// The line and its terminator are assembled into a single buffer and
    /// handed to the file with one `write_all`, so a line never reaches the
    /// file partially even when other processes append to the same path.
    pub fn write_line(&mut self, line: &str) -> Result<(), SinkError> {
        let mut buf = Vec::with_capacity(line.len() + 1);
        buf.extend_from_slice(line.as_bytes());
        if !line.ends_with('\n') {
            buf.push(b'\n');
        }
        self.write_all_buf(&buf)
    }

    /// Appends raw pre-rendered bytes without adding a terminator.
    pub fn write_raw(&mut self, bytes: &[u8]) -> Result<(), SinkError> {
        self.write_all_buf(bytes)
    }

    fn write_all_buf(&mut self, buf: &[u8]) -> Result<(), SinkError> {
        self.file
            .write_all(buf)
            .and_then(|()| self.file.flush())
            .map_err(|source| SinkError::Write {
                path: self.path.clone(),
                source,
            })
    }
}
