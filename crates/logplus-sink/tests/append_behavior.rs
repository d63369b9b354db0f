//! Integration tests for handle lifetimes and append semantics.

use std::fs;
use std::path::PathBuf;
use std::thread;

use logplus_sink::{HandleFactory, SinkConfig, SinkError};

fn read_lines(path: &PathBuf) -> Vec<String> {
    fs::read_to_string(path)
        .expect("sink file readable")
        .lines()
        .map(str::to_owned)
        .collect()
}

#[test]
fn one_handle_per_event_grows_file_append_only() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = SinkConfig::new(dir.path());
    let path = config.file_path("events");

    for n in 0..5 {
        let mut handle = HandleFactory::handle_for(&path, &config).expect("handle opens");
        handle
            .write_line(&format!("event={n}"))
            .expect("write succeeds");
        // handle drops at the end of each iteration, closing the file
    }

    let lines = read_lines(&path);
    assert_eq!(lines.len(), 5);
    for (n, line) in lines.iter().enumerate() {
        assert_eq!(line, &format!("event={n}"));
    }
}

#[test]
fn concurrent_handles_never_tear_lines() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = SinkConfig::new(dir.path());
    let path = config.file_path("threads");

    let workers: Vec<_> = (0..8)
        .map(|worker| {
            let config = config.clone();
            let path = path.clone();
            thread::spawn(move || {
                for n in 0..25 {
                    let mut handle =
                        HandleFactory::handle_for(&path, &config).expect("handle opens");
                    handle
                        .write_line(&format!("worker={worker} n={n}"))
                        .expect("write succeeds");
                }
            })
        })
        .collect();

    for worker in workers {
        worker.join().expect("worker thread completes");
    }

    let lines = read_lines(&path);
    assert_eq!(lines.len(), 8 * 25);
    // Every line must be a whole record; append-mode single writes may not
    // interleave partial content.
    for line in lines {
        assert!(line.starts_with("worker="), "torn line: {line}");
        assert!(line.contains(" n="), "torn line: {line}");
    }
}

#[test]
fn unwritable_directory_surfaces_create_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    // A file standing where the directory should be makes create_dir_all fail.
    let blocker = dir.path().join("blocked");
    fs::write(&blocker, b"not a directory").expect("write blocker");

    let config = SinkConfig::new(blocker.join("deeper"));
    let path = config.file_path("audit");

    let err = HandleFactory::handle_for(&path, &config).expect_err("creation must fail");
    assert!(matches!(
        err,
        SinkError::CreateDirectory { .. } | SinkError::Open { .. }
    ));
}
