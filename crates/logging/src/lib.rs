#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging/src/lib.rs
//!
//! # Overview
//!
//! `logging` is the leveled logger used by ctrlkit control loops. A
//! [`Logger`] filters messages against a fixed threshold, stamps each emitted
//! line with an elapsed time from an injectable [`Clock`] and the name of the
//! calling thread, and writes it as one line into a
//! [`LineSink`](logging_sink::LineSink).
//!
//! # Design
//!
//! - [`LogLevel`] orders `Off < Error < Warn < Info < Debug`; a threshold
//!   accepts its own level and everything less verbose.
//! - Messages are any [`MessageSource`]: literal text, [`format_args!`]
//!   output, or a closure evaluated only when the line is actually emitted.
//!   The [`log_error!`], [`log_warn!`], [`log_info!`] and [`log_debug!`]
//!   macros build such closures from format arguments.
//! - Time and thread naming are pluggable through [`Clock`] and
//!   [`ThreadIdentity`]; [`ConstantClock`] and [`FixedThreadName`] give
//!   reproducible output.
//! - [`LoggerConfig`] builds loggers from a `-v` count or the
//!   [`DEFAULT_ENV_VAR`] environment variable.
//! - [`default_logger`] and [`set_default_logger`] manage a process-wide
//!   logger for code that is not handed one.
//! - With the `tracing` feature, [`LoggerLayer`] forwards `tracing` events
//!   into a logger.
//!
//! # Invariants
//!
//! - Every emitted message is exactly one line:
//!   `"<elapsed> (<thread>) <LEVEL>: <message>\n"`, with `<elapsed>` in whole
//!   milliseconds.
//! - A filtered message reads neither the clock nor the thread name and never
//!   evaluates a deferred message.
//! - Lines written concurrently never interleave.
//! - After [`Logger::close`] every log call is a no-op; closing twice is
//!   harmless.
//!
//! # Errors
//!
//! Logging itself never returns errors. Sink failures drop the affected line,
//! are counted by [`Logger::dropped_lines`] and are reported through `tracing`
//! under [`DIAGNOSTIC_TARGET`]. Configuration parsing returns
//! [`ParseLogLevelError`] or [`ConfigError`].
//!
//! # Examples
//!
//! ```
//! use logging::{ConstantClock, FixedThreadName, LogLevel, Logger, log_info};
//! use logging_sink::SharedSink;
//!
//! let sink = SharedSink::new(Vec::new());
//! let logger = Logger::with_thread_identity(
//!     ConstantClock::from_millis(20),
//!     FixedThreadName::new("drive"),
//!     sink.clone(),
//!     LogLevel::Info,
//! );
//!
//! log_info!(logger, "setpoint {:.1}", 0.5);
//! logger.debug("hidden");
//!
//! assert_eq!(sink.lock().as_slice(), b"20 (drive) INFO: setpoint 0.5\n");
//! ```

mod clock;
mod config;
mod default_logger;
mod error;
mod level;
mod line;
mod logger;
mod macros;
mod message;
mod thread_name;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use clock::{Clock, ConstantClock, MonotonicClock};
pub use config::{DEFAULT_ENV_VAR, LoggerConfig};
pub use default_logger::{default_logger, set_default_logger};
pub use error::{ConfigError, ParseLogLevelError};
pub use level::LogLevel;
pub use logger::{DIAGNOSTIC_TARGET, Logger};
pub use message::MessageSource;
pub use thread_name::{CurrentThread, FixedThreadName, ThreadIdentity};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{LoggerLayer, init_tracing};
