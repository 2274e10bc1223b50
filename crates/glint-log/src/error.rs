//! Error types for log sinks.

use thiserror::Error;

/// Errors that can occur while emitting log records.
#[derive(Error, Debug)]
pub enum LogError {
    /// I/O error writing to a sink.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A record was routed to a placeholder target that cannot log.
    /// This is a programming error at the call site, not a runtime
    /// condition to retry.
    #[error("unsupported log target: {0}")]
    UnsupportedTarget(String),

    /// Malformed logging configuration.
    #[error("invalid log config: {0}")]
    Config(#[from] toml::de::Error),
}
