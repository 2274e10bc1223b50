//! Log severity levels.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity of a log record, ordered from least to most severe.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Very fine-grained diagnostic detail.
    Trace,
    /// Diagnostic detail useful during development.
    Debug,
    /// Routine operational messages.
    Info,
    /// Something unexpected that does not prevent progress.
    Warn,
    /// An operation failed.
    Error,
    /// The process cannot continue.
    Fatal,
}

impl Level {
    /// The closest equivalent in the standard `log` facade.
    ///
    /// `Fatal` maps to `log::Level::Error`; the facade has no higher
    /// severity.
    pub fn to_facade(self) -> log::Level {
        match self {
            Level::Trace => log::Level::Trace,
            Level::Debug => log::Level::Debug,
            Level::Info => log::Level::Info,
            Level::Warn => log::Level::Warn,
            Level::Error | Level::Fatal => log::Level::Error,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
        };
        f.pad(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(Level::Trace < Level::Debug);
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
        assert!(Level::Error < Level::Fatal);
    }

    #[test]
    fn test_level_display() {
        assert_eq!(Level::Info.to_string(), "INFO");
        assert_eq!(Level::Fatal.to_string(), "FATAL");
    }

    #[test]
    fn test_level_to_facade() {
        assert_eq!(Level::Warn.to_facade(), log::Level::Warn);
        assert_eq!(Level::Fatal.to_facade(), log::Level::Error);
    }
}
