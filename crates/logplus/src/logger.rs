//! crates/logplus/src/logger.rs
//! The enhanced logger and its record-emission pipeline.

use std::borrow::Cow;
use std::fmt;
use std::io::{self, Write};
use std::panic::Location;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use logplus_sink::{HandleFactory, SinkConfig, SinkError};

use crate::config::{ConfigError, LoggerConfig};
use crate::format::{ClassicFormat, LogFormatter};
use crate::levels::Level;
use crate::record::Record;

/// Depth reported when the fast-depth policy is active: the immediate
/// calling frame.
pub const FAST_DEPTH: u32 = 1;

/// Per-call emission options.
///
/// Everything here is optional; `EmitOptions::default()` reproduces a plain
/// emission. Wrapping layers (timing/IO/catch helpers) use
/// [`depth`](Self::depth) and [`call_site`](Self::call_site) so that the
/// attributed location points at user code rather than at the wrapper.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmitOptions<'a> {
    depth: Option<u32>,
    duplicate_to: Option<&'a str>,
    call_site: Option<&'static Location<'static>>,
}

impl<'a> EmitOptions<'a> {
    /// Creates empty options.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            depth: None,
            duplicate_to: None,
            call_site: None,
        }
    }

    /// Overrides the call-site depth for this emission. Explicit caller
    /// intent always wins over the logger's fast/default policy.
    #[must_use]
    pub const fn depth(mut self, depth: u32) -> Self {
        self.depth = Some(depth);
        self
    }

    /// Requests duplication of this event into `<sink_dir>/<name>.log`.
    ///
    /// The directive is best-effort: when the logger has no secondary sink
    /// configuration or no secondary formatter attached, it is silently
    /// ignored.
    #[must_use]
    pub const fn duplicate_to(mut self, name: &'a str) -> Self {
        self.duplicate_to = Some(name);
        self
    }

    /// Supplies the call site a wrapping layer captured on behalf of the
    /// user's code.
    #[must_use]
    pub const fn call_site(mut self, location: &'static Location<'static>) -> Self {
        self.call_site = Some(location);
        self
    }
}

/// Mutable policy block of a [`Logger`].
///
/// The whole block lives behind one `RwLock` so a reconfigure swaps every
/// field together: readers observe either the old or the new policy, never
/// a formatter paired with a sink configuration from a different epoch.
struct LoggerPolicy {
    level: Level,
    default_depth: u32,
    fast_depth: bool,
    file: Option<SinkConfig>,
    file_formatter: Option<Arc<dyn LogFormatter>>,
}

impl LoggerPolicy {
    fn from_config(config: &LoggerConfig) -> Self {
        Self {
            level: config.level(),
            default_depth: config.default_depth(),
            fast_depth: config.fast_depth(),
            file: config.file().cloned(),
            file_formatter: config
                .file()
                .map(|_| Arc::new(ClassicFormat) as Arc<dyn LogFormatter>),
        }
    }
}

/// Primary delivery target: a threshold-free stream writer plus formatter.
///
/// Each emission renders the record into a buffer and hands the finished
/// line (terminator included) to the writer with a single `write_all` under
/// the mutex, so concurrent emissions never interleave partial lines.
pub struct StreamSink {
    writer: Mutex<Box<dyn Write + Send>>,
    formatter: Box<dyn LogFormatter>,
}

impl StreamSink {
    /// Creates a sink from an arbitrary writer and formatter.
    #[must_use]
    pub fn new(writer: Box<dyn Write + Send>, formatter: Box<dyn LogFormatter>) -> Self {
        Self {
            writer: Mutex::new(writer),
            formatter,
        }
    }

    /// Creates the default sink: classic-formatted lines on standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(Box::new(io::stderr()), Box::new(ClassicFormat))
    }

    fn emit(&self, record: &Record<'_>) -> io::Result<()> {
        let mut line = String::new();
        if self.formatter.format(record, &mut line).is_err() {
            line.clear();
            line.push_str(&record.message);
        }
        line.push('\n');

        let mut writer = self
            .writer
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        writer.write_all(line.as_bytes())?;
        writer.flush()
    }
}

impl fmt::Debug for StreamSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamSink").finish_non_exhaustive()
    }
}

/// Severity logger with policy-driven call-site attribution and per-event
/// file duplication.
///
/// A `Logger` is built once per configuration identity by the
/// [`LoggerManager`](crate::LoggerManager) and shared behind an `Arc`. Its
/// policy block (threshold, depth policy, secondary sink and formatter) can
/// be swapped in place by a reconfigure; existing holders observe the new
/// policy on their next emission.
///
/// # Examples
///
/// ```
/// use logplus::{Level, Logger, LoggerConfig};
///
/// let logger = Logger::from_config(&LoggerConfig::new("engine"))?;
/// logger.info(format_args!("ready after {} ms", 42));
/// assert!(logger.is_enabled(Level::Error));
/// assert!(!logger.is_enabled(Level::Trace));
/// # Ok::<(), logplus::ConfigError>(())
/// ```
pub struct Logger {
    identifier: String,
    primary: StreamSink,
    policy: RwLock<LoggerPolicy>,
}

impl Logger {
    /// Builds a logger from a validated configuration, delivering primary
    /// output to standard error.
    pub fn from_config(config: &LoggerConfig) -> Result<Self, ConfigError> {
        Self::with_sink(config, StreamSink::stderr())
    }

    /// Builds a logger whose primary output goes to the supplied writer.
    pub fn with_writer(
        config: &LoggerConfig,
        writer: Box<dyn Write + Send>,
    ) -> Result<Self, ConfigError> {
        Self::with_sink(config, StreamSink::new(writer, Box::new(ClassicFormat)))
    }

    /// Builds a logger around an explicit primary sink.
    ///
    /// Construction is single-phase: validation runs first and the policy
    /// block is fully derived from `config` before the value exists, so no
    /// caller ever observes a logger with default or partial policy.
    pub fn with_sink(config: &LoggerConfig, primary: StreamSink) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            identifier: config.identifier().to_owned(),
            primary,
            policy: RwLock::new(LoggerPolicy::from_config(config)),
        })
    }

    /// Returns this logger's configuration identity.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Returns the current emission threshold.
    #[must_use]
    pub fn level(&self) -> Level {
        self.policy_read().level
    }

    /// Reports whether a record at `level` would be emitted.
    #[must_use]
    pub fn is_enabled(&self, level: Level) -> bool {
        level >= self.policy_read().level
    }

    /// Replaces the whole policy block from a new configuration.
    ///
    /// Threads mid-emission keep the policy they already read; subsequent
    /// emissions observe the new block. The identity is not part of the
    /// policy and never changes.
    pub fn apply_config(&self, config: &LoggerConfig) {
        *self.policy_write() = LoggerPolicy::from_config(config);
    }

    /// Attaches a custom formatter for the secondary (duplication) sink.
    ///
    /// Has no visible effect until a sink configuration is also present;
    /// duplication requires both.
    pub fn set_secondary_formatter(&self, formatter: Arc<dyn LogFormatter>) {
        self.policy_write().file_formatter = Some(formatter);
    }

    /// Resolves the call-site depth for an emission.
    ///
    /// Precedence: an explicit override wins; otherwise the fast-depth flag
    /// forces [`FAST_DEPTH`]; otherwise the configured default applies.
    /// Wrapping layers use this to decide which captured location to
    /// forward.
    #[must_use]
    pub fn resolved_depth(&self, explicit: Option<u32>) -> u32 {
        let policy = self.policy_read();
        explicit.unwrap_or(if policy.fast_depth {
            FAST_DEPTH
        } else {
            policy.default_depth
        })
    }

    /// Emits a record with default options.
    #[track_caller]
    pub fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        self.emit(level, args, EmitOptions::default(), Location::caller());
    }

    /// Emits a record with explicit per-call options.
    ///
    /// The pipeline runs in order: enabled-check, depth resolution,
    /// directive extraction, unconditional primary emission, best-effort
    /// duplication. Duplication failures are reported on standard error
    /// through a non-recursive fallback and never reach the caller.
    #[track_caller]
    pub fn log_with(&self, level: Level, args: fmt::Arguments<'_>, options: EmitOptions<'_>) {
        self.emit(level, args, options, Location::caller());
    }

    /// Emits at [`Level::Trace`].
    #[track_caller]
    pub fn trace(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Trace, args, EmitOptions::default(), Location::caller());
    }

    /// Emits at [`Level::Debug`].
    #[track_caller]
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Debug, args, EmitOptions::default(), Location::caller());
    }

    /// Emits at [`Level::Info`].
    #[track_caller]
    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Info, args, EmitOptions::default(), Location::caller());
    }

    /// Emits at [`Level::Warning`].
    #[track_caller]
    pub fn warning(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Warning, args, EmitOptions::default(), Location::caller());
    }

    /// Emits at [`Level::Error`].
    #[track_caller]
    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Error, args, EmitOptions::default(), Location::caller());
    }

    /// Emits at [`Level::Critical`].
    #[track_caller]
    pub fn critical(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Critical, args, EmitOptions::default(), Location::caller());
    }

    /// Emits at the custom [`Level::Fatal`] severity.
    ///
    /// The enabled-check runs before any formatting work, so a disabled
    /// fatal rank costs no interpolation. Call
    /// [`install_fatal`](crate::install_fatal) once per process if
    /// configuration needs to *parse* the `"FATAL"` name; emission itself
    /// does not require it.
    #[track_caller]
    pub fn fatal(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Fatal, args, EmitOptions::default(), Location::caller());
    }

    fn emit(
        &self,
        level: Level,
        args: fmt::Arguments<'_>,
        options: EmitOptions<'_>,
        caller: &'static Location<'static>,
    ) {
        let policy = self.policy_read();
        if level < policy.level {
            return;
        }

        let depth = options.depth.unwrap_or(if policy.fast_depth {
            FAST_DEPTH
        } else {
            policy.default_depth
        });
        // Depth 1 always means the immediate caller. Deeper attributions rely
        // on the wrapping layer forwarding the location it captured.
        let location = if depth <= FAST_DEPTH {
            caller
        } else {
            options.call_site.unwrap_or(caller)
        };

        let message: Cow<'_, str> = args
            .as_str()
            .map_or_else(|| Cow::Owned(args.to_string()), Cow::Borrowed);
        let record = Record::new(level, &self.identifier, message)
            .with_location(location.file(), location.line());

        // Primary delivery happens regardless of any duplication directive.
        if let Err(err) = self.primary.emit(&record) {
            fallback_report(&self.identifier, "primary emission failed", &err);
        }

        if let Some(name) = options.duplicate_to
            && let (Some(sink), Some(formatter)) = (&policy.file, &policy.file_formatter)
            && let Err(err) = duplicate(&record, sink, formatter.as_ref(), name)
        {
            fallback_report(&self.identifier, "duplication failed", &err);
        }
    }

    fn policy_read(&self) -> std::sync::RwLockReadGuard<'_, LoggerPolicy> {
        self.policy.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn policy_write(&self) -> std::sync::RwLockWriteGuard<'_, LoggerPolicy> {
        self.policy.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("identifier", &self.identifier)
            .finish_non_exhaustive()
    }
}

/// Writes one synthetic record through a fresh transient handle.
///
/// The handle is dropped on every exit path, so the descriptor never
/// outlives the emission even when the write fails.
fn duplicate(
    record: &Record<'_>,
    sink: &SinkConfig,
    formatter: &dyn LogFormatter,
    name: &str,
) -> Result<(), SinkError> {
    let path = sink.file_path(name);
    let mut handle = HandleFactory::handle_for(&path, sink)?;

    let synthetic = record.without_location();
    let mut line = String::new();
    if formatter.format(&synthetic, &mut line).is_err() {
        line.clear();
        line.push_str(&synthetic.message);
    }
    handle.write_line(&line)
}

/// Reports a pipeline failure without recursing into the logging layer.
fn fallback_report(identifier: &str, context: &str, err: &dyn fmt::Display) {
    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr, "logplus[{identifier}]: {context}: {err}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    /// Cloneable writer that collects emitted bytes for assertions.
    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().expect("buffer lock").clone()).expect("utf-8")
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().expect("buffer lock").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture_logger(config: &LoggerConfig) -> (Arc<Logger>, SharedBuf) {
        let buf = SharedBuf::default();
        let logger =
            Logger::with_writer(config, Box::new(buf.clone())).expect("valid configuration");
        (Arc::new(logger), buf)
    }

    #[test]
    fn below_threshold_emits_nothing() {
        let (logger, buf) = capture_logger(&LoggerConfig::new("core").with_level(Level::Warning));
        logger.info(format_args!("quiet"));
        assert!(buf.contents().is_empty());
    }

    #[test]
    fn emitted_line_carries_identity_and_message() {
        let (logger, buf) = capture_logger(&LoggerConfig::new("core"));
        logger.info(format_args!("value={}", 5));

        let output = buf.contents();
        assert!(output.contains("[core]"), "identity column: {output}");
        assert!(output.contains("value=5"), "message: {output}");
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn call_site_points_at_this_file() {
        let (logger, buf) = capture_logger(&LoggerConfig::new("core").with_fast_depth(true));
        logger.error(format_args!("here"));
        assert!(
            buf.contents().contains("logger.rs"),
            "attribution: {}",
            buf.contents()
        );
    }

    #[test]
    fn explicit_depth_wins_over_fast_and_default() {
        let (logger, _buf) = capture_logger(
            &LoggerConfig::new("core")
                .with_fast_depth(true)
                .with_default_depth(4),
        );
        assert_eq!(logger.resolved_depth(Some(7)), 7);
    }

    #[test]
    fn fast_depth_forces_immediate_frame() {
        let (logger, _buf) = capture_logger(
            &LoggerConfig::new("core")
                .with_fast_depth(true)
                .with_default_depth(4),
        );
        assert_eq!(logger.resolved_depth(None), FAST_DEPTH);
    }

    #[test]
    fn default_depth_applies_when_not_fast() {
        let (logger, _buf) = capture_logger(&LoggerConfig::new("core").with_default_depth(4));
        assert_eq!(logger.resolved_depth(None), 4);
    }

    #[test]
    fn duplication_directive_without_sink_is_silent() {
        let (logger, buf) = capture_logger(&LoggerConfig::new("core"));
        logger.log_with(
            Level::Info,
            format_args!("no sink attached"),
            EmitOptions::new().duplicate_to("audit"),
        );
        // Primary delivery still happened; the directive itself was dropped.
        assert!(buf.contents().contains("no sink attached"));
    }

    #[test]
    fn apply_config_updates_threshold_in_place() {
        let (logger, buf) = capture_logger(&LoggerConfig::new("core"));
        logger.debug(format_args!("hidden"));
        assert!(buf.contents().is_empty());

        logger.apply_config(&LoggerConfig::new("core").with_level(Level::Trace));
        logger.debug(format_args!("visible"));
        assert!(buf.contents().contains("visible"));
    }

    #[test]
    fn concurrent_emissions_keep_lines_whole() {
        let (logger, buf) = capture_logger(&LoggerConfig::new("core"));

        let workers: Vec<_> = (0..8)
            .map(|worker| {
                let logger = Arc::clone(&logger);
                std::thread::spawn(move || {
                    for n in 0..50 {
                        logger.info(format_args!("worker={worker} n={n} tail"));
                    }
                })
            })
            .collect();
        for worker in workers {
            worker.join().expect("worker completes");
        }

        let output = buf.contents();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 8 * 50);
        for line in lines {
            assert!(line.ends_with("tail"), "torn line: {line}");
        }
    }
}
