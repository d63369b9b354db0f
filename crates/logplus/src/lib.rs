#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logplus` is a severity-logging enhancement layer. It does not replace a
//! logging facility so much as manage the lifecycle and identity questions
//! around one: a process-wide severity table with a single opt-in custom
//! level, loggers whose call-site attribution follows a configurable policy
//! instead of a fixed frame, and per-event duplication of a rendered record
//! into an independently formatted file without disturbing primary delivery.
//!
//! # Design
//!
//! Three pieces cooperate:
//!
//! - [`Level`] and [`install_fatal`] form the severity registry. The custom
//!   `FATAL` rank is installed at most once per process behind a one-time
//!   initialisation guard; repeated or concurrent installs are no-ops.
//! - [`Logger`] owns the emission pipeline: enabled-check first, then depth
//!   resolution (explicit override beats the fast-depth flag beats the
//!   configured default), then unconditional primary delivery, then
//!   best-effort duplication through a transient
//!   [`logplus_sink::SinkHandle`].
//! - [`LoggerManager`] caches exactly one [`Logger`] per configuration
//!   identity and reconfigures instances in place, so handed-out references
//!   stay valid across policy changes.
//!
//! # Invariants
//!
//! - Severity ranks are unique and monotonic; threshold comparisons use
//!   rank order exclusively.
//! - Repeated `get` calls with one identity never duplicate sinks.
//! - Each emission reaches a sink as a whole line or not at all.
//! - A duplication handle never outlives the emission that opened it.
//!
//! # Errors
//!
//! Acquisition surfaces [`ConfigError`] for malformed configurations before
//! any logger is built. Emission never returns errors to the caller:
//! duplication failures are reported on standard error through a
//! non-recursive fallback, and the primary record has already been
//! delivered by the time duplication runs.
//!
//! # Examples
//!
//! ```
//! use logplus::{Level, LoggerConfig, LoggerManager, lp_info};
//!
//! let manager = LoggerManager::new();
//! let logger = manager.get(&LoggerConfig::new("engine").with_level(Level::Debug))?;
//! lp_info!(logger, "ready after {} ms", 42);
//! # Ok::<(), logplus::ConfigError>(())
//! ```

mod config;
mod format;
mod levels;
mod logger;
mod macros;
mod manager;
mod record;

pub use config::{ConfigError, LoggerConfig};
pub use format::{ClassicFormat, LogFormatter, PlainFormat};
pub use levels::{FATAL_NAME, FATAL_RANK, Level, install_fatal, is_fatal_installed};
pub use logger::{EmitOptions, FAST_DEPTH, Logger, StreamSink};
pub use manager::LoggerManager;
pub use record::Record;

pub use logplus_sink::{HandleFactory, SinkConfig, SinkError, SinkHandle};

/// Levels module exposed for callers that want the registry functions under
/// their own path.
pub mod severity {
    pub use crate::levels::{FATAL_NAME, FATAL_RANK, Level, install_fatal, is_fatal_installed};
}
