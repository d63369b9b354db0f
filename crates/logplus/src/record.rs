//! crates/logplus/src/record.rs
//! The emission record handed to formatters and sinks.

use std::borrow::Cow;

use chrono::{DateTime, Utc};

use crate::levels::Level;

/// One log event, rendered-message included.
///
/// Records are built only after the owning logger's enabled-check has
/// passed, so constructing one implies the message text has already been
/// interpolated. Call-site fields are optional: the synthetic records used
/// for per-event file duplication deliberately carry neutral (empty)
/// call-site metadata, because the duplicated line is keyed by its logical
/// sink name and the primary line already carries the real location.
#[derive(Clone, Debug)]
pub struct Record<'a> {
    /// Severity of the event.
    pub level: Level,
    /// Identity of the logger that emitted the event.
    pub identifier: &'a str,
    /// Fully interpolated message text.
    pub message: Cow<'a, str>,
    /// Source file of the attributed call site.
    pub file: Option<&'static str>,
    /// Source line of the attributed call site.
    pub line: Option<u32>,
    /// When the event was recorded.
    pub timestamp: DateTime<Utc>,
}

impl<'a> Record<'a> {
    /// Creates a record with no call-site attribution.
    #[must_use]
    pub fn new(level: Level, identifier: &'a str, message: impl Into<Cow<'a, str>>) -> Self {
        Self {
            level,
            identifier,
            message: message.into(),
            file: None,
            line: None,
            timestamp: Utc::now(),
        }
    }

    /// Attributes the record to a source location.
    #[must_use]
    pub fn with_location(mut self, file: &'static str, line: u32) -> Self {
        self.file = Some(file);
        self.line = Some(line);
        self
    }

    /// Returns a copy stripped of call-site metadata, keeping level,
    /// identity, message, and timestamp.
    ///
    /// Used to build the synthetic record that feeds the secondary sink.
    #[must_use]
    pub fn without_location(&self) -> Self {
        Self {
            level: self.level,
            identifier: self.identifier,
            message: self.message.clone(),
            file: None,
            line: None,
            timestamp: self.timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_has_no_location() {
        let record = Record::new(Level::Info, "core", "ready");
        assert_eq!(record.level, Level::Info);
        assert_eq!(record.identifier, "core");
        assert_eq!(record.message, "ready");
        assert!(record.file.is_none());
        assert!(record.line.is_none());
    }

    #[test]
    fn with_location_sets_both_fields() {
        let record = Record::new(Level::Error, "core", "boom").with_location("src/a.rs", 17);
        assert_eq!(record.file, Some("src/a.rs"));
        assert_eq!(record.line, Some(17));
    }

    #[test]
    fn without_location_keeps_payload_and_timestamp() {
        let record = Record::new(Level::Warning, "core", "watch out").with_location("a.rs", 3);
        let synthetic = record.without_location();
        assert_eq!(synthetic.level, record.level);
        assert_eq!(synthetic.message, record.message);
        assert_eq!(synthetic.timestamp, record.timestamp);
        assert!(synthetic.file.is_none());
        assert!(synthetic.line.is_none());
    }
}
