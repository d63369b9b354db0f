//! crates/logplus/src/levels.rs
//! Severity levels and the process-wide custom-level registry.

use std::sync::OnceLock;

/// Rank reserved for the custom [`Level::Fatal`] severity.
pub const FATAL_RANK: u8 = 60;

/// Name reserved for the custom [`Level::Fatal`] severity.
pub const FATAL_NAME: &str = "FATAL";

/// Severity level of a log record.
///
/// Ranks are globally unique and monotonic: a record at a given level is
/// emitted by a sink whose threshold rank is less than or equal to the
/// record's rank. [`Level::Fatal`] is the single custom level beyond the
/// standard set; its *name* becomes resolvable through
/// [`Level::from_name`] only after [`install_fatal`] has run.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Level {
    /// Fine-grained tracing output.
    Trace = 5,
    /// Diagnostic output for developers.
    Debug = 10,
    /// Routine operational messages.
    Info = 20,
    /// Something unexpected that the process can absorb.
    Warning = 30,
    /// An operation failed.
    Error = 40,
    /// The process is in a degraded state.
    Critical = 50,
    /// Custom severity above [`Level::Critical`], registered process-wide
    /// via [`install_fatal`].
    Fatal = FATAL_RANK,
}

impl Level {
    /// Returns the numeric rank used for threshold comparisons.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Returns the canonical upper-case name for this level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
            Self::Fatal => FATAL_NAME,
        }
    }

    /// Maps a numeric rank back to its level, if one is defined.
    #[must_use]
    pub const fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            5 => Some(Self::Trace),
            10 => Some(Self::Debug),
            20 => Some(Self::Info),
            30 => Some(Self::Warning),
            40 => Some(Self::Error),
            50 => Some(Self::Critical),
            FATAL_RANK => Some(Self::Fatal),
            _ => None,
        }
    }

    /// Parses a level from its upper-case name.
    ///
    /// The standard names always resolve. The reserved name `"FATAL"`
    /// resolves only once [`install_fatal`] has extended the severity table,
    /// mirroring the fact that the custom level is a process-wide opt-in.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "TRACE" => Some(Self::Trace),
            "DEBUG" => Some(Self::Debug),
            "INFO" => Some(Self::Info),
            "WARNING" => Some(Self::Warning),
            "ERROR" => Some(Self::Error),
            "CRITICAL" => Some(Self::Critical),
            FATAL_NAME if is_fatal_installed() => Some(Self::Fatal),
            _ => None,
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One-shot guard for the custom-level registration.
static FATAL_INSTALLED: OnceLock<()> = OnceLock::new();

/// Installs the custom `FATAL` severity into the process-wide table.
///
/// The registration is idempotent: any number of calls, from any number of
/// threads, produce exactly one observable effect and never fail. There is
/// no reverse operation — once installed, the name stays resolvable until
/// process teardown. A freshly started process must call this again before
/// `"FATAL"` parses; registry state is never inherited across processes.
pub fn install_fatal() {
    FATAL_INSTALLED.get_or_init(|| ());
}

/// Reports whether [`install_fatal`] has run in this process.
#[must_use]
pub fn is_fatal_installed() -> bool {
    FATAL_INSTALLED.get().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_are_monotonic_with_declaration_order() {
        assert!(Level::Trace < Level::Debug);
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warning);
        assert!(Level::Warning < Level::Error);
        assert!(Level::Error < Level::Critical);
        assert!(Level::Critical < Level::Fatal);
    }

    #[test]
    fn rank_round_trips_through_from_rank() {
        for level in [
            Level::Trace,
            Level::Debug,
            Level::Info,
            Level::Warning,
            Level::Error,
            Level::Critical,
            Level::Fatal,
        ] {
            assert_eq!(Level::from_rank(level.rank()), Some(level));
        }
        assert_eq!(Level::from_rank(7), None);
    }

    #[test]
    fn standard_names_always_parse() {
        assert_eq!(Level::from_name("TRACE"), Some(Level::Trace));
        assert_eq!(Level::from_name("DEBUG"), Some(Level::Debug));
        assert_eq!(Level::from_name("INFO"), Some(Level::Info));
        assert_eq!(Level::from_name("WARNING"), Some(Level::Warning));
        assert_eq!(Level::from_name("ERROR"), Some(Level::Error));
        assert_eq!(Level::from_name("CRITICAL"), Some(Level::Critical));
        assert_eq!(Level::from_name("unknown"), None);
    }

    #[test]
    fn display_matches_canonical_name() {
        assert_eq!(Level::Warning.to_string(), "WARNING");
        assert_eq!(Level::Fatal.to_string(), "FATAL");
    }

    // The install-once behaviour itself is exercised in the dedicated
    // integration test binary so it observes a process that has not yet
    // installed the custom level.
}
