//! crates/logging/src/logger.rs
//! The leveled logger: threshold gate, line rendering and sink lifecycle.

use std::cell::RefCell;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

use logging_sink::{LineSink, StderrSink};

use crate::clock::{Clock, MonotonicClock};
use crate::level::LogLevel;
use crate::line::render_line;
use crate::message::MessageSource;
use crate::thread_name::{CurrentThread, ThreadIdentity};

/// `tracing` target used for the logger's own diagnostics.
pub const DIAGNOSTIC_TARGET: &str = "ctrlkit::logging";

/// Capacity a thread's line buffer keeps between calls.
const LINE_BUFFER_RETAIN: usize = 1024;

thread_local! {
    static LINE_BUFFER: RefCell<String> = const { RefCell::new(String::new()) };
}

/// Leveled logger writing timestamped, thread-tagged lines into a sink.
///
/// Each entry point ([`error`](Self::error), [`warn`](Self::warn),
/// [`info`](Self::info), [`debug`](Self::debug)) compares its level against
/// the threshold before doing anything else. A filtered call reads neither
/// the clock nor the thread identity and never invokes a deferred message.
/// An emitted call renders `"<elapsed> (<thread>) <LEVEL>: <message>\n"` and
/// hands it to the sink as one line.
///
/// # Lifecycle
///
/// A logger starts open and moves to closed on the first
/// [`close`](Self::close) (or on drop). Closing flushes and releases the
/// logger's sink handle; the destination itself belongs to the caller and
/// stays open. Once closed, every log call is a silent no-op. Closing again is
/// harmless.
///
/// # Errors
///
/// Logging never fails from the caller's point of view. A sink write error
/// drops that one line, increments [`dropped_lines`](Self::dropped_lines) and
/// is reported through `tracing` under [`DIAGNOSTIC_TARGET`].
///
/// # Examples
///
/// ```
/// use logging::{ConstantClock, FixedThreadName, LogLevel, Logger};
/// use logging_sink::SharedSink;
///
/// let sink = SharedSink::new(Vec::new());
/// let logger = Logger::with_thread_identity(
///     ConstantClock::from_millis(0),
///     FixedThreadName::new("T"),
///     sink.clone(),
///     LogLevel::Warn,
/// );
///
/// logger.error("MSG");
/// logger.info(|| -> String { unreachable!("filtered messages are never built") });
/// logger.close();
/// logger.warn("after close");
///
/// assert_eq!(sink.lock().as_slice(), b"0 (T) ERROR: MSG\n");
/// ```
pub struct Logger {
    threshold: LogLevel,
    clock: Box<dyn Clock>,
    thread: Box<dyn ThreadIdentity>,
    sink: Mutex<Option<Box<dyn LineSink>>>,
    closed: AtomicBool,
    dropped: AtomicU64,
}

impl Logger {
    /// Creates a logger naming threads with [`CurrentThread`].
    ///
    /// `sink` must already be writable; it is not validated.
    pub fn new<C, S>(clock: C, sink: S, threshold: LogLevel) -> Self
    where
        C: Clock + 'static,
        S: LineSink + 'static,
    {
        Self::with_thread_identity(clock, CurrentThread, sink, threshold)
    }

    /// Creates a logger with an explicit thread identity provider.
    pub fn with_thread_identity<C, T, S>(clock: C, thread: T, sink: S, threshold: LogLevel) -> Self
    where
        C: Clock + 'static,
        T: ThreadIdentity + 'static,
        S: LineSink + 'static,
    {
        Self::from_parts(
            Box::new(clock),
            Box::new(thread),
            Some(Box::new(sink)),
            threshold,
        )
    }

    /// Creates a logger writing to standard error, timed from now.
    pub fn stderr(threshold: LogLevel) -> Self {
        Self::new(MonotonicClock::new(), StderrSink, threshold)
    }

    /// Creates a logger that discards everything.
    ///
    /// Its threshold is [`LogLevel::Off`] and it holds no sink.
    pub fn disabled() -> Self {
        Self::from_parts(
            Box::new(MonotonicClock::new()),
            Box::new(CurrentThread),
            None,
            LogLevel::Off,
        )
    }

    fn from_parts(
        clock: Box<dyn Clock>,
        thread: Box<dyn ThreadIdentity>,
        sink: Option<Box<dyn LineSink>>,
        threshold: LogLevel,
    ) -> Self {
        Self {
            threshold,
            clock,
            thread,
            sink: Mutex::new(sink),
            closed: AtomicBool::new(false),
            dropped: AtomicU64::new(0),
        }
    }

    /// Returns the threshold fixed at construction.
    #[must_use]
    pub const fn threshold(&self) -> LogLevel {
        self.threshold
    }

    /// Reports whether a message at `level` would currently be written.
    #[must_use]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        self.threshold.allows(level) && !self.is_closed()
    }

    /// Reports whether error messages would be written.
    #[must_use]
    pub fn is_error_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Error)
    }

    /// Reports whether warning messages would be written.
    #[must_use]
    pub fn is_warn_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Warn)
    }

    /// Reports whether info messages would be written.
    #[must_use]
    pub fn is_info_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Info)
    }

    /// Reports whether debug messages would be written.
    #[must_use]
    pub fn is_debug_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Debug)
    }

    /// Reports whether [`close`](Self::close) has been called.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Returns how many lines were lost to sink write failures.
    #[must_use]
    pub fn dropped_lines(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Logs `message` at error level.
    pub fn error<M: MessageSource>(&self, message: M) {
        self.log(LogLevel::Error, message);
    }

    /// Logs `message` at warning level.
    pub fn warn<M: MessageSource>(&self, message: M) {
        self.log(LogLevel::Warn, message);
    }

    /// Logs `message` at info level.
    pub fn info<M: MessageSource>(&self, message: M) {
        self.log(LogLevel::Info, message);
    }

    /// Logs `message` at debug level.
    pub fn debug<M: MessageSource>(&self, message: M) {
        self.log(LogLevel::Debug, message);
    }

    /// Logs `message` at `level`.
    ///
    /// Logging at [`LogLevel::Off`] never writes anything.
    pub fn log<M: MessageSource>(&self, level: LogLevel, message: M) {
        if !self.is_enabled(level) {
            return;
        }

        let elapsed = self.clock.elapsed();
        let thread = self.thread.current_name();

        LINE_BUFFER.with(|cell| match cell.try_borrow_mut() {
            Ok(mut buffer) => {
                render_line(&mut buffer, elapsed, &thread, level, message);
                self.write_line(buffer.as_bytes());
                if buffer.capacity() > LINE_BUFFER_RETAIN {
                    buffer.clear();
                    buffer.shrink_to(LINE_BUFFER_RETAIN);
                }
            }
            // A deferred message that logs while being rendered lands here.
            Err(_) => {
                let mut buffer = String::new();
                render_line(&mut buffer, elapsed, &thread, level, message);
                self.write_line(buffer.as_bytes());
            }
        });
    }

    /// Closes the logger, flushing and releasing its sink handle.
    ///
    /// Only the first call does any work; later or concurrent calls return
    /// immediately. Waits for an in-flight write to finish before releasing.
    pub fn close(&self) {
        if self.closed.swap(true, Ordering::AcqRel) {
            return;
        }

        let released = self.lock_sink().take();
        if let Some(sink) = released {
            if let Err(error) = sink.flush() {
                tracing::warn!(
                    target: DIAGNOSTIC_TARGET,
                    %error,
                    "failed to flush log sink while closing"
                );
            }
            tracing::debug!(target: DIAGNOSTIC_TARGET, "logger closed");
        }
    }

    fn write_line(&self, line: &[u8]) {
        let result = {
            let slot = self.lock_sink();
            match slot.as_ref() {
                Some(sink) => sink.write_line(line),
                None => return,
            }
        };

        if let Err(error) = result {
            self.dropped.fetch_add(1, Ordering::Relaxed);
            tracing::warn!(
                target: DIAGNOSTIC_TARGET,
                %error,
                "dropping log line after sink write failure"
            );
        }
    }

    fn lock_sink(&self) -> MutexGuard<'_, Option<Box<dyn LineSink>>> {
        self.sink
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.close();
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("threshold", &self.threshold)
            .field("closed", &self.is_closed())
            .field("dropped_lines", &self.dropped_lines())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
fn line_buffer_capacity() -> usize {
    LINE_BUFFER.with(|cell| cell.borrow().capacity())
}
