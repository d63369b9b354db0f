//! crates/logplus/src/macros.rs
//! Convenience macros wrapping the logger emission surface.
//!
//! The macros capture format arguments lazily and delegate to the logger's
//! `#[track_caller]` methods, so call-site attribution still points at the
//! invoking line.

/// Emit a record at an explicit level.
///
/// # Example
/// ```ignore
/// lp_log!(logger, Level::Warning, "retrying in {} ms", delay);
/// ```
#[macro_export]
macro_rules! lp_log {
    ($logger:expr, $level:expr, $($arg:tt)*) => {
        $logger.log($level, ::core::format_args!($($arg)*))
    };
}

/// Emit a trace record.
///
/// # Example
/// ```ignore
/// lp_trace!(logger, "visiting {}", node);
/// ```
#[macro_export]
macro_rules! lp_trace {
    ($logger:expr, $($arg:tt)*) => {
        $logger.trace(::core::format_args!($($arg)*))
    };
}

/// Emit a debug record.
///
/// # Example
/// ```ignore
/// lp_debug!(logger, "cache miss for {}", key);
/// ```
#[macro_export]
macro_rules! lp_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debug(::core::format_args!($($arg)*))
    };
}

/// Emit an info record.
///
/// # Example
/// ```ignore
/// lp_info!(logger, "transferred {} bytes", total);
/// ```
#[macro_export]
macro_rules! lp_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info(::core::format_args!($($arg)*))
    };
}

/// Emit a warning record.
///
/// # Example
/// ```ignore
/// lp_warning!(logger, "{} files vanished", count);
/// ```
#[macro_export]
macro_rules! lp_warning {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warning(::core::format_args!($($arg)*))
    };
}

/// Emit an error record.
///
/// # Example
/// ```ignore
/// lp_error!(logger, "transfer failed: {}", err);
/// ```
#[macro_export]
macro_rules! lp_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.error(::core::format_args!($($arg)*))
    };
}

/// Emit a critical record.
///
/// # Example
/// ```ignore
/// lp_critical!(logger, "state degraded: {}", detail);
/// ```
#[macro_export]
macro_rules! lp_critical {
    ($logger:expr, $($arg:tt)*) => {
        $logger.critical(::core::format_args!($($arg)*))
    };
}

/// Emit a record at the custom fatal severity.
///
/// # Example
/// ```ignore
/// lp_fatal!(logger, "unrecoverable: {}", err);
/// ```
#[macro_export]
macro_rules! lp_fatal {
    ($logger:expr, $($arg:tt)*) => {
        $logger.fatal(::core::format_args!($($arg)*))
    };
}
