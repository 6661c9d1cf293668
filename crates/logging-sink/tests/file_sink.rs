//! Integration tests for file-backed shared sinks.
//!
//! These tests mirror the way callers use a log file: the caller opens the
//! file, hands a clone of the sink to whoever writes lines, then rewinds the
//! same handle and reads back what was written.

use logging_sink::{LineSink, SharedSink};
use std::io::{BufRead, BufReader, Seek, SeekFrom};

// ============================================================================
// Read-Back Tests
// ============================================================================

/// Verifies lines written through one clone are readable through another.
#[test]
fn lines_are_visible_after_rewind() {
    let file = tempfile::tempfile().expect("temp file");
    let sink = SharedSink::new(file);
    let writer = sink.clone();

    writer.write_line(b"0 (main) ERROR: first\n").expect("write");
    writer.write_line(b"0 (main) WARN: second\n").expect("write");

    let mut guard = sink.lock();
    guard.seek(SeekFrom::Start(0)).expect("rewind");
    let lines: Vec<String> = BufReader::new(&mut *guard)
        .lines()
        .collect::<Result<_, _>>()
        .expect("read lines");

    assert_eq!(lines, ["0 (main) ERROR: first", "0 (main) WARN: second"]);
}

/// Verifies dropping the writer's clone leaves the caller's file usable.
#[test]
fn releasing_a_clone_keeps_file_open() {
    let file = tempfile::tempfile().expect("temp file");
    let sink = SharedSink::new(file);
    {
        let writer = sink.clone();
        writer.write_line(b"kept\n").expect("write");
    }

    assert_eq!(sink.handle_count(), 1);
    sink.write_line(b"still writable\n").expect("write after release");

    let mut guard = sink.lock();
    guard.seek(SeekFrom::Start(0)).expect("rewind");
    let count = BufReader::new(&mut *guard).lines().count();
    assert_eq!(count, 2);
}

/// Verifies an empty file reads back as immediate EOF.
#[test]
fn untouched_file_is_empty() {
    let file = tempfile::tempfile().expect("temp file");
    let sink = SharedSink::new(file);

    let mut guard = sink.lock();
    guard.seek(SeekFrom::Start(0)).expect("rewind");
    let mut line = String::new();
    let read = BufReader::new(&mut *guard)
        .read_line(&mut line)
        .expect("read");
    assert_eq!(read, 0);
}
