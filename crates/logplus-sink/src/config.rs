//! crates/logplus-sink/src/config.rs
//! Destination configuration for file sinks.

use std::path::{Path, PathBuf};

/// Extension appended to every logical sink name.
const LOG_EXTENSION: &str = "log";

/// Immutable description of where file-sink output lands.
///
/// The configuration is a plain value object owned by the caller; the sink
/// layer reads it and never mutates it. The logger hands a borrowed
/// `SinkConfig` to [`HandleFactory::handle_for`](crate::HandleFactory::handle_for)
/// each time a duplication event needs a handle.
///
/// # Examples
///
/// ```
/// use logplus_sink::SinkConfig;
///
/// let config = SinkConfig::new("/var/log/app");
/// assert_eq!(
///     config.file_path("audit"),
///     std::path::PathBuf::from("/var/log/app/audit.log"),
/// );
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SinkConfig {
    directory: PathBuf,
    create_directory: bool,
}

impl SinkConfig {
    /// Creates a configuration targeting `directory`.
    ///
    /// Missing directories are created on first use. Use
    /// [`with_create_directory`](Self::with_create_directory) to require the
    /// directory to exist instead.
    #[must_use]
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            create_directory: true,
        }
    }

    /// Controls whether a missing destination directory is created on demand.
    #[must_use]
    pub fn with_create_directory(mut self, create: bool) -> Self {
        self.create_directory = create;
        self
    }

    /// Returns the destination directory.
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Returns whether a missing destination directory may be created.
    #[must_use]
    pub const fn create_directory(&self) -> bool {
        self.create_directory
    }

    /// Composes the full path for a logical sink name.
    ///
    /// The result is always `<directory>/<name>.log`; the fixed extension
    /// keeps sink output from colliding with unrelated files in the same
    /// directory. The logical name is taken verbatim, so a dotted name like
    /// `"audit.v2"` maps to its own `audit.v2.log` file rather than being
    /// truncated at the dot.
    #[must_use]
    pub fn file_path(&self, name: &str) -> PathBuf {
        self.directory.join(format!("{name}.{LOG_EXTENSION}"))
    }
}
