//! crates/logging/src/level.rs
//! Severity levels and the threshold ordering used to filter messages.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseLogLevelError;

/// Severity of a log message, and the threshold a [`Logger`](crate::Logger)
/// filters against.
///
/// Levels are ordered from most restrictive to most permissive:
/// `Off < Error < Warn < Info < Debug`. A message at level `L` passes a
/// threshold `T` when `T` is not [`LogLevel::Off`] and `L <= T`, so each
/// threshold accepts everything the previous one did plus one more level.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LogLevel {
    /// Suppresses every message. Only meaningful as a threshold.
    #[default]
    Off,
    /// Failures the program may still recover from.
    Error,
    /// Unexpected conditions that do not stop the program.
    Warn,
    /// Coarse progress information.
    Info,
    /// Fine-grained diagnostics.
    Debug,
}

impl LogLevel {
    /// Every level in ascending permissiveness.
    pub const ALL: [Self; 5] = [Self::Off, Self::Error, Self::Warn, Self::Info, Self::Debug];

    /// Levels a message can be logged at (everything except [`LogLevel::Off`]).
    pub const MESSAGE_LEVELS: [Self; 4] = [Self::Error, Self::Warn, Self::Info, Self::Debug];

    /// Reports whether a message logged at `level` passes `self` as a threshold.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::LogLevel;
    ///
    /// assert!(LogLevel::Warn.allows(LogLevel::Error));
    /// assert!(LogLevel::Warn.allows(LogLevel::Warn));
    /// assert!(!LogLevel::Warn.allows(LogLevel::Info));
    /// assert!(!LogLevel::Off.allows(LogLevel::Off));
    /// ```
    #[must_use]
    pub const fn allows(self, level: Self) -> bool {
        !matches!(self, Self::Off) && !matches!(level, Self::Off) && level as u8 <= self as u8
    }

    /// Returns the upper-case word written into each rendered line.
    ///
    /// [`LogLevel::Off`] never appears in output; its label exists so the
    /// mapping is total.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::Error => "ERROR",
            Self::Warn => "WARN",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
        }
    }

    /// Returns the lower-case name accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }

    /// Maps a numeric verbosity (for example a count of `-v` flags) onto a
    /// threshold. Values above 4 saturate at [`LogLevel::Debug`].
    #[must_use]
    pub const fn from_verbosity(verbosity: u8) -> Self {
        match verbosity {
            0 => Self::Off,
            1 => Self::Error,
            2 => Self::Warn,
            3 => Self::Info,
            _ => Self::Debug,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LogLevel {
    type Err = ParseLogLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseLogLevelError::Empty);
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "off" | "none" => Ok(Self::Off),
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            _ => Err(ParseLogLevelError::Unknown(trimmed.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests;
