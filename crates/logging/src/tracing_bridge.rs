//! crates/logging/src/tracing_bridge.rs
//! Bridge from the `tracing` crate into a ctrlkit [`Logger`].
//!
//! [`LoggerLayer`] is a `tracing-subscriber` layer that turns each tracing
//! event into one logger line, so libraries instrumented with `tracing` share
//! the logger's sink, threshold and line format.
//!
//! # Level mapping
//!
//! | tracing | logger |
//! |---------|--------|
//! | `ERROR` | [`LogLevel::Error`] |
//! | `WARN`  | [`LogLevel::Warn`] |
//! | `INFO`  | [`LogLevel::Info`] |
//! | `DEBUG`, `TRACE` | [`LogLevel::Debug`] |
//!
//! Events under [`DIAGNOSTIC_TARGET`] are the logger's reports about itself
//! and are never forwarded back into it.
//!
//! Filtering happens in `on_event` only. The layer never vetoes a callsite,
//! so other layers in the same subscriber still see every event, including
//! the logger's own diagnostics.
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use logging::{ConstantClock, FixedThreadName, LogLevel, Logger, LoggerLayer};
//! use logging_sink::SharedSink;
//! use tracing_subscriber::layer::SubscriberExt;
//!
//! let sink = SharedSink::new(Vec::new());
//! let logger = Arc::new(Logger::with_thread_identity(
//!     ConstantClock::from_millis(0),
//!     FixedThreadName::new("T"),
//!     sink.clone(),
//!     LogLevel::Info,
//! ));
//! let subscriber = tracing_subscriber::registry().with(LoggerLayer::new(logger));
//!
//! tracing::subscriber::with_default(subscriber, || {
//!     tracing::info!("ready");
//!     tracing::debug!("filtered");
//! });
//!
//! assert_eq!(sink.lock().as_slice(), b"0 (T) INFO: ready\n");
//! ```

use std::fmt::{self, Write as _};
use std::sync::Arc;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Metadata, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::TryInitError;

use crate::level::LogLevel;
use crate::logger::{DIAGNOSTIC_TARGET, Logger};

/// A tracing layer that writes events through a [`Logger`].
#[derive(Clone, Debug)]
pub struct LoggerLayer {
    logger: Arc<Logger>,
}

impl LoggerLayer {
    /// Creates a layer forwarding into `logger`.
    #[must_use]
    pub const fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }

    /// Returns the logger events are forwarded to.
    #[must_use]
    pub const fn logger(&self) -> &Arc<Logger> {
        &self.logger
    }

    /// Maps a tracing level onto a logger level.
    #[must_use]
    pub const fn map_level(level: &Level) -> LogLevel {
        match *level {
            Level::ERROR => LogLevel::Error,
            Level::WARN => LogLevel::Warn,
            Level::INFO => LogLevel::Info,
            Level::DEBUG | Level::TRACE => LogLevel::Debug,
        }
    }

    fn accepts(&self, metadata: &Metadata<'_>) -> bool {
        metadata.target() != DIAGNOSTIC_TARGET
            && self.logger.is_enabled(Self::map_level(metadata.level()))
    }
}

impl<S> Layer<S> for LoggerLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !self.accepts(metadata) {
            return;
        }

        let level = Self::map_level(metadata.level());
        self.logger.log(level, || {
            let mut visitor = MessageVisitor::default();
            event.record(&mut visitor);
            visitor.finish()
        });
    }
}

/// Collects an event's `message` field followed by its other fields as
/// `name=value` pairs.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn finish(mut self) -> String {
        if self.message.is_empty() {
            return self.fields;
        }
        if !self.fields.is_empty() {
            self.message.push(' ');
            self.message.push_str(&self.fields);
        }
        self.message
    }

    fn push_field(&mut self, field: &Field, value: fmt::Arguments<'_>) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{}={}", field.name(), value);
    }
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        } else {
            self.push_field(field, format_args!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            self.push_field(field, format_args!("{value}"));
        }
    }
}

/// Installs a global subscriber that forwards every tracing event into
/// `logger`.
///
/// # Errors
///
/// Returns [`TryInitError`] when a global subscriber is already installed.
pub fn init_tracing(logger: Arc<Logger>) -> Result<(), TryInitError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(LoggerLayer::new(logger))
        .try_init()
}
