#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` provides the destinations a ctrlkit logger writes its
//! rendered lines into. The caller opens the destination (a file, an in-memory
//! buffer, standard error) and hands the logger a handle to it; the logger
//! never opens or reopens anything itself.
//!
//! # Design
//!
//! The crate exposes the [`LineSink`] trait, which accepts one complete,
//! newline-terminated line per call. [`SharedSink`] wraps any
//! [`std::io::Write`] implementor in a clonable, mutex-guarded handle so the
//! caller can keep one clone (for example to rewind and re-read a file) while
//! the logger holds another. [`StderrSink`] routes lines to the process
//! standard error stream.
//!
//! # Invariants
//!
//! - A line is written inside a single critical section, so lines submitted
//!   from different threads never interleave.
//! - Every line is flushed before [`LineSink::write_line`] returns.
//! - A poisoned mutex is recovered rather than propagated; a panic in one
//!   writer never disables the sink for other threads.
//!
//! # Errors
//!
//! All operations surface [`std::io::Error`] values originating from the
//! underlying writer. Deciding what to do with them is the caller's business.
//!
//! # Examples
//!
//! ```
//! use logging_sink::{LineSink, SharedSink};
//!
//! let sink = SharedSink::new(Vec::new());
//! let handle = sink.clone();
//!
//! handle.write_line(b"0 (main) INFO: ready\n")?;
//!
//! assert_eq!(sink.lock().as_slice(), b"0 (main) INFO: ready\n");
//! # Ok::<(), std::io::Error>(())
//! ```

mod line_sink;
mod sink;
mod stderr;

pub use line_sink::LineSink;
pub use sink::{SharedSink, SinkGuard};
pub use stderr::StderrSink;
