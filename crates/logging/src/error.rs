//! Errors produced while configuring a logger.

use thiserror::Error;

/// Error returned when parsing a [`LogLevel`](crate::LogLevel) from text fails.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ParseLogLevelError {
    /// The input was empty after trimming whitespace.
    #[error("log level string is empty")]
    Empty,
    /// The input did not name a known level.
    #[error("unknown log level `{0}` (expected off, error, warn, info or debug)")]
    Unknown(String),
}

/// Error returned when reading a logger configuration from the environment.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ConfigError {
    /// The variable was set but held an unparseable level.
    #[error("invalid log level in `{variable}`: {source}")]
    InvalidLevel {
        /// Name of the environment variable that was read.
        variable: String,
        /// Underlying parse failure.
        #[source]
        source: ParseLogLevelError,
    },
    /// The variable was set but was not valid unicode.
    #[error("`{variable}` is not valid unicode")]
    NotUnicode {
        /// Name of the environment variable that was read.
        variable: String,
    },
}
