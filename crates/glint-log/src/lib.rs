#![warn(missing_docs)]

//! Pluggable log targets and routing for the glint geometry kernel.
//!
//! A [`LogTarget`] is a sink for log records. Concrete sinks write to
//! the console, a file, or the standard `log` facade; the
//! [`LogRouter`] fans records out to every registered sink whose level
//! range accepts them. Non-implementation of the sink contract is a
//! compile-time error; the explicit [`UnconfiguredTarget`] placeholder
//! fails loudly at runtime instead of silently dropping records.
//!
//! # Example
//!
//! ```
//! use glint_log::{ConsoleTarget, Level, LogRouter, TargetSettings};
//!
//! let mut router = LogRouter::new();
//! router.add_target(Box::new(ConsoleTarget::new(TargetSettings::default())));
//! router.log_message(Level::Info, "kernel", "ready").unwrap();
//! ```

mod config;
mod error;
mod level;
mod router;
mod target;

pub use config::LogConfig;
pub use error::LogError;
pub use level::Level;
pub use router::LogRouter;
pub use target::{
    ConsoleTarget, FacadeTarget, FileTarget, LogTarget, TargetSettings, UnconfiguredTarget,
};
