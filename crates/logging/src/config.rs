//! crates/logging/src/config.rs
//! Logger configuration read from verbosity counts or the environment.

use std::env::{self, VarError};

use logging_sink::LineSink;

use crate::clock::MonotonicClock;
use crate::error::ConfigError;
use crate::level::LogLevel;
use crate::logger::Logger;

/// Environment variable consulted by [`LoggerConfig::from_env`].
pub const DEFAULT_ENV_VAR: &str = "CTRLKIT_LOG";

/// Settings used to build a [`Logger`].
///
/// The default configuration has threshold [`LogLevel::Off`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct LoggerConfig {
    /// Most verbose level that will be written.
    pub threshold: LogLevel,
}

impl LoggerConfig {
    /// Creates a configuration with the given threshold.
    #[must_use]
    pub const fn new(threshold: LogLevel) -> Self {
        Self { threshold }
    }

    /// Creates a configuration from a `-v` style repeat count.
    ///
    /// See [`LogLevel::from_verbosity`] for the mapping.
    #[must_use]
    pub const fn from_verbosity(count: u8) -> Self {
        Self::new(LogLevel::from_verbosity(count))
    }

    /// Reads the threshold from [`DEFAULT_ENV_VAR`].
    ///
    /// # Errors
    ///
    /// See [`from_env_var`](Self::from_env_var).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_var(DEFAULT_ENV_VAR)
    }

    /// Reads the threshold from the environment variable `name`.
    ///
    /// An unset variable yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLevel`] when the value does not name a
    /// level and [`ConfigError::NotUnicode`] when it is not valid unicode.
    pub fn from_env_var(name: &str) -> Result<Self, ConfigError> {
        match env::var(name) {
            Ok(value) => Self::parse_value(name, &value),
            Err(VarError::NotPresent) => Ok(Self::default()),
            Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode {
                variable: name.to_owned(),
            }),
        }
    }

    fn parse_value(variable: &str, value: &str) -> Result<Self, ConfigError> {
        value
            .parse()
            .map(Self::new)
            .map_err(|source| ConfigError::InvalidLevel {
                variable: variable.to_owned(),
                source,
            })
    }

    /// Builds a logger writing into `sink`, timed from now.
    pub fn build<S>(self, sink: S) -> Logger
    where
        S: LineSink + 'static,
    {
        tracing::debug!(
            target: crate::logger::DIAGNOSTIC_TARGET,
            threshold = %self.threshold,
            "building logger"
        );
        Logger::new(MonotonicClock::new(), sink, self.threshold)
    }
}

impl From<LogLevel> for LoggerConfig {
    fn from(threshold: LogLevel) -> Self {
        Self::new(threshold)
    }
}
