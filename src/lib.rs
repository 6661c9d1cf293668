#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `ctrlkit` bundles the pieces robot control code uses to report what it is
//! doing and to drive its motors:
//!
//! - [`logging`]: the leveled [`Logger`](logging::Logger) with lazy messages,
//!   an injectable clock and thread-tagged lines.
//! - [`sink`]: the line destinations a logger writes into.
//! - [`device`]: motors and their normalized voltage outputs.
//!
//! # Examples
//!
//! ```
//! use ctrlkit::logging::{ConstantClock, FixedThreadName, LogLevel, Logger};
//! use ctrlkit::sink::SharedSink;
//!
//! let sink = SharedSink::new(Vec::new());
//! let logger = Logger::with_thread_identity(
//!     ConstantClock::from_millis(0),
//!     FixedThreadName::new("T"),
//!     sink.clone(),
//!     LogLevel::Error,
//! );
//! logger.error("MSG");
//! logger.close();
//! logger.close();
//!
//! assert_eq!(sink.lock().as_slice(), b"0 (T) ERROR: MSG\n");
//! ```

pub use device;
pub use logging;
pub use logging_sink as sink;
