//! crates/logplus/src/config.rs
//! Logger configuration value object and its validation errors.

use std::path::PathBuf;

use logplus_sink::SinkConfig;

use crate::levels::Level;

/// Default call-site depth: the frame above the wrapping layer.
const DEFAULT_DEPTH: u32 = 2;

/// Configuration value describing one logical logger.
///
/// The `identifier` doubles as the configuration identity: two
/// configurations carrying the same identifier refer to the same logical
/// logger, regardless of when or where the value was built. The manager
/// keys its cache on this string, never on object identity.
///
/// # Examples
///
/// ```
/// use logplus::{Level, LoggerConfig};
///
/// let config = LoggerConfig::new("engine")
///     .with_level(Level::Debug)
///     .with_fast_depth(true);
/// assert!(config.validate().is_ok());
/// assert!(LoggerConfig::new("  ").validate().is_err());
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoggerConfig {
    identifier: String,
    level: Level,
    default_depth: u32,
    fast_depth: bool,
    file: Option<SinkConfig>,
}

impl LoggerConfig {
    /// Creates a configuration for the given identity with default policy:
    /// [`Level::Info`] threshold, default depth 2, fast depth off, no file
    /// sink.
    #[must_use]
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            level: Level::Info,
            default_depth: DEFAULT_DEPTH,
            fast_depth: false,
            file: None,
        }
    }

    /// Sets the emission threshold.
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Sets the default call-site depth used when no override is supplied.
    #[must_use]
    pub fn with_default_depth(mut self, depth: u32) -> Self {
        self.default_depth = depth;
        self
    }

    /// Enables or disables the fast-depth policy.
    ///
    /// With fast depth enabled the logger attributes records to the
    /// immediate calling frame, which is correct when no wrapping layer sits
    /// between user code and the emission call.
    #[must_use]
    pub fn with_fast_depth(mut self, fast: bool) -> Self {
        self.fast_depth = fast;
        self
    }

    /// Attaches a secondary file-sink configuration for per-event
    /// duplication.
    #[must_use]
    pub fn with_file_sink(mut self, sink: SinkConfig) -> Self {
        self.file = Some(sink);
        self
    }

    /// Returns the configuration identity.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Returns the emission threshold.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Returns the default call-site depth.
    #[must_use]
    pub const fn default_depth(&self) -> u32 {
        self.default_depth
    }

    /// Returns whether the fast-depth policy is enabled.
    #[must_use]
    pub const fn fast_depth(&self) -> bool {
        self.fast_depth
    }

    /// Returns the secondary file-sink configuration, if any.
    #[must_use]
    pub const fn file(&self) -> Option<&SinkConfig> {
        self.file.as_ref()
    }

    /// Checks that this configuration can yield a usable logger.
    ///
    /// Rejects an identity that is empty after trimming, and a file sink
    /// whose directory is absent while directory creation is disabled. The
    /// manager runs this before constructing anything, so a malformed
    /// configuration never produces a partially-initialised logger.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.identifier.trim().is_empty() {
            return Err(ConfigError::EmptyIdentifier);
        }
        if let Some(sink) = &self.file
            && !sink.create_directory()
            && !sink.directory().is_dir()
        {
            return Err(ConfigError::SinkDirectory {
                path: sink.directory().to_path_buf(),
            });
        }
        Ok(())
    }
}

/// Errors surfaced when a configuration cannot yield a valid logger.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The identifier was empty or whitespace-only.
    #[error("logger identifier must not be empty")]
    EmptyIdentifier,

    /// The configured sink directory does not exist and may not be created.
    #[error("sink directory {path:?} does not exist")]
    SinkDirectory {
        /// The missing directory.
        path: PathBuf,
    },
}
