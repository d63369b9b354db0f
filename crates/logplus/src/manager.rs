//! crates/logplus/src/manager.rs
//! Process-wide cache mapping configuration identities to loggers.

use std::sync::{Arc, OnceLock};

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::config::{ConfigError, LoggerConfig};
use crate::logger::Logger;

/// Identity-keyed cache of [`Logger`] instances.
///
/// The manager owns the mapping from configuration identity to logger and
/// is the only writer of a logger's policy after construction. Lookups and
/// insertions go through the concurrent map's entry API, so a race between
/// two first users of the same identity still produces exactly one logger.
///
/// # Examples
///
/// ```
/// use logplus::{LoggerConfig, LoggerManager};
///
/// let manager = LoggerManager::new();
/// let config = LoggerConfig::new("engine");
/// let a = manager.get(&config)?;
/// let b = manager.get(&config)?;
/// assert!(std::sync::Arc::ptr_eq(&a, &b));
/// # Ok::<(), logplus::ConfigError>(())
/// ```
#[derive(Debug, Default)]
pub struct LoggerManager {
    loggers: DashMap<String, Arc<Logger>>,
}

impl LoggerManager {
    /// Creates an empty manager.
    ///
    /// Most callers want [`global`](Self::global) instead; a dedicated
    /// instance is useful in tests and embedded setups that must not share
    /// process-wide state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            loggers: DashMap::new(),
        }
    }

    /// Returns the process-wide manager instance.
    ///
    /// The instance is created on first use and lives until process
    /// teardown. A newly started process begins with an empty cache and
    /// must re-acquire its loggers; cache state is never inherited.
    #[must_use]
    pub fn global() -> &'static Self {
        static GLOBAL: OnceLock<LoggerManager> = OnceLock::new();
        GLOBAL.get_or_init(Self::new)
    }

    /// Returns the logger for this configuration's identity, creating it on
    /// first use.
    ///
    /// Repeated calls with the same identity return the same `Arc` and
    /// never duplicate sinks or policy attachments; the configuration of a
    /// later call is ignored when the logger already exists (use
    /// [`reconfigure`](Self::reconfigure) to change policy). Validation
    /// runs before construction, so a malformed configuration surfaces a
    /// [`ConfigError`] without touching the cache.
    pub fn get(&self, config: &LoggerConfig) -> Result<Arc<Logger>, ConfigError> {
        config.validate()?;

        if let Some(existing) = self.loggers.get(config.identifier()) {
            return Ok(Arc::clone(existing.value()));
        }

        match self.loggers.entry(config.identifier().to_owned()) {
            Entry::Occupied(entry) => Ok(Arc::clone(entry.get())),
            Entry::Vacant(entry) => {
                let logger = Arc::new(Logger::from_config(config)?);
                entry.insert(Arc::clone(&logger));
                Ok(logger)
            }
        }
    }

    /// Applies updated policy to the logger for this identity, creating it
    /// first when absent.
    ///
    /// The policy swap happens in place on the existing instance: holders
    /// of previously returned `Arc`s observe the new policy on their next
    /// emission without re-acquiring the logger.
    pub fn reconfigure(&self, config: &LoggerConfig) -> Result<Arc<Logger>, ConfigError> {
        let logger = self.get(config)?;
        logger.apply_config(config);
        Ok(logger)
    }

    /// Registers an externally constructed logger under its identity.
    ///
    /// Used by embedders that build loggers with custom sinks (for example
    /// capture writers in tests). Returns the registered instance, or the
    /// already-cached one when the identity was taken first.
    pub fn insert(&self, logger: Arc<Logger>) -> Arc<Logger> {
        match self.loggers.entry(logger.identifier().to_owned()) {
            Entry::Occupied(entry) => Arc::clone(entry.get()),
            Entry::Vacant(entry) => {
                entry.insert(Arc::clone(&logger));
                logger
            }
        }
    }

    /// Returns the number of cached loggers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.loggers.len()
    }

    /// Reports whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.loggers.is_empty()
    }
}
