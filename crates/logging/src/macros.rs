//! crates/logging/src/macros.rs
//! Formatting macros that defer message construction until a line is emitted.
//!
//! Each macro takes a [`Logger`](crate::Logger) reference followed by
//! [`format!`] arguments and wraps the formatting in a closure, so arguments
//! are never formatted for filtered messages.

/// Logs a formatted message at error level.
///
/// # Example
/// ```
/// use logging::{Logger, log_error};
///
/// let logger = Logger::disabled();
/// log_error!(logger, "motor {} stalled", 3);
/// ```
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(|| ::std::format!($($arg)+))
    };
}

/// Logs a formatted message at warning level.
///
/// # Example
/// ```
/// use logging::{Logger, log_warn};
///
/// let logger = Logger::disabled();
/// log_warn!(logger, "voltage clamped to {}", 12_000);
/// ```
#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warn(|| ::std::format!($($arg)+))
    };
}

/// Logs a formatted message at info level.
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(|| ::std::format!($($arg)+))
    };
}

/// Logs a formatted message at debug level.
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug(|| ::std::format!($($arg)+))
    };
}
