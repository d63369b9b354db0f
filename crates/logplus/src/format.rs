//! crates/logplus/src/format.rs
//! Record formatters for stream and file sinks.

use std::fmt::{self, Write as _};

use crate::record::Record;

/// Renders a [`Record`] into a text line.
///
/// Implementations write into a caller-provided buffer so sinks can reuse
/// allocations and hand the finished line to the writer in a single call.
/// The buffer arrives without a trailing newline and should be left that
/// way; sinks own line termination.
pub trait LogFormatter: Send + Sync {
    /// Appends the rendered record to `out`.
    fn format(&self, record: &Record<'_>, out: &mut String) -> fmt::Result;
}

/// The classic column layout used by the original system:
/// `timestamp | LEVEL | [identifier] | file:line | message`.
///
/// Records without call-site attribution (synthetic duplication records)
/// render a `-` placeholder in the location column so the column count is
/// stable for downstream parsers.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClassicFormat;

impl LogFormatter for ClassicFormat {
    fn format(&self, record: &Record<'_>, out: &mut String) -> fmt::Result {
        write!(
            out,
            "{} | {:<8} | [{}] | ",
            record.timestamp.format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level.as_str(),
            record.identifier,
        )?;
        match (record.file, record.line) {
            (Some(file), Some(line)) => write!(out, "{file}:{line}")?,
            _ => out.push('-'),
        }
        write!(out, " | {}", record.message)
    }
}

/// Minimal `LEVEL: message` layout for terse destinations.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainFormat;

impl LogFormatter for PlainFormat {
    fn format(&self, record: &Record<'_>, out: &mut String) -> fmt::Result {
        write!(out, "{}: {}", record.level.as_str(), record.message)
    }
}
