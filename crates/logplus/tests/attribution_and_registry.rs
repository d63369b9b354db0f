//! Call-site attribution through wrapping layers and global registry use.

use std::io::{self, Write};
use std::panic::Location;
use std::sync::{Arc, Mutex};

use logplus::{EmitOptions, Level, Logger, LoggerConfig, LoggerManager};

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
    let logger = Logger::with_writer(config, Box::new(buf.clone())).expect("valid configuration");
    (Arc::new(logger), buf)
}

/// A decorator-style layer: captures the user's call site and forwards it
/// with an explicit depth override so attribution skips this frame.
#[track_caller]
fn forwarding_wrapper(logger: &Logger) {
    let user_site = Location::caller();
    let options = EmitOptions::new().depth(2).call_site(user_site);
    logger.log_with(Level::Info, format_args!("wrapped"), options);
}

/// A layer that forwards nothing; with fast depth the record is attributed
/// to the frame inside this function.
fn opaque_wrapper(logger: &Logger) -> u32 {
    let emit_line = line!() + 1;
    logger.log_with(Level::Info, format_args!("opaque"), EmitOptions::new());
    emit_line
}

#[test]
fn forwarded_call_site_attributes_user_code() {
    let (logger, buf) = capture_logger(&LoggerConfig::new("wrapped"));

    let call_line = line!() + 1;
    forwarding_wrapper(&logger);

    let expected = format!("attribution_and_registry.rs:{call_line}");
    assert!(
        buf.contents().contains(&expected),
        "expected {expected} in {}",
        buf.contents()
    );
}

#[test]
fn fast_depth_attributes_the_immediate_frame() {
    let (logger, buf) = capture_logger(&LoggerConfig::new("fast").with_fast_depth(true));

    let emit_line = opaque_wrapper(&logger);

    let expected = format!("attribution_and_registry.rs:{emit_line}");
    assert!(
        buf.contents().contains(&expected),
        "expected {expected} in {}",
        buf.contents()
    );
}

#[test]
fn explicit_depth_beats_fast_depth_policy() {
    let (logger, _buf) = capture_logger(
        &LoggerConfig::new("precedence")
            .with_fast_depth(true)
            .with_default_depth(5),
    );

    assert_eq!(logger.resolved_depth(Some(3)), 3);
    assert_eq!(logger.resolved_depth(None), logplus::FAST_DEPTH);
}

#[test]
fn global_manager_is_identity_stable_across_call_sites() {
    let config = LoggerConfig::new("global-registry-test");
    let a = LoggerManager::global().get(&config).expect("valid config");
    let b = LoggerManager::global().get(&config).expect("valid config");
    assert!(Arc::ptr_eq(&a, &b));
}

#[test]
fn global_manager_reconfigure_reaches_existing_holders() {
    let id = "global-reconfigure-test";
    let held = LoggerManager::global()
        .get(&LoggerConfig::new(id).with_level(Level::Warning))
        .expect("valid config");
    assert!(!held.is_enabled(Level::Debug));

    LoggerManager::global()
        .reconfigure(&LoggerConfig::new(id).with_level(Level::Trace))
        .expect("valid config");

    assert!(held.is_enabled(Level::Debug));
}
