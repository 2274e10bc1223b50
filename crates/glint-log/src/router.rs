//! Fan-out of log records to registered sinks.

use std::error::Error;
use std::time::Instant;

use crate::{Level, LogError, LogTarget};

/// Routes log records to every registered [`LogTarget`].
///
/// Records are dropped for sinks whose `[min_level, max_level]` range
/// does not contain the record's level. For sinks that request
/// timestamps, the message is prefixed with the elapsed time since the
/// router was created, e.g. `[   12.345s]`.
pub struct LogRouter {
    targets: Vec<Box<dyn LogTarget>>,
    started: Instant,
}

impl LogRouter {
    /// Create a router with no targets.
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            started: Instant::now(),
        }
    }

    /// Register a sink.
    pub fn add_target(&mut self, target: Box<dyn LogTarget>) {
        self.targets.push(target);
    }

    /// Number of registered sinks.
    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    /// Route a record to every accepting sink.
    ///
    /// All sinks are attempted even if one fails; the first error is
    /// returned.
    pub fn log_message(&mut self, level: Level, source: &str, message: &str) -> Result<(), LogError> {
        let started = self.started;
        let mut first_error = None;
        for target in &mut self.targets {
            if level < target.min_level() || level > target.max_level() {
                continue;
            }
            let line = stamp(started, target.as_ref(), message);
            if let Err(err) = target.log_message(level, source, &line) {
                first_error.get_or_insert(err);
            }
        }
        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Route a record with its causing error to every accepting sink.
    ///
    /// All sinks are attempted even if one fails; the first error is
    /// returned.
    pub fn log_error(
        &mut self,
        level: Level,
        source: &str,
        message: &str,
        error: &dyn Error,
    ) -> Result<(), LogError> {
        let started = self.started;
        let mut first_error = None;
        for target in &mut self.targets {
            if level < target.min_level() || level > target.max_level() {
                continue;
            }
            let line = stamp(started, target.as_ref(), message);
            if let Err(err) = target.log_error(level, source, &line, error) {
                first_error.get_or_insert(err);
            }
        }
        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

fn stamp(started: Instant, target: &dyn LogTarget, message: &str) -> String {
    if target.include_timestamps() {
        let elapsed = started.elapsed().as_secs_f64();
        format!("[{elapsed:9.3}s] {message}")
    } else {
        message.to_owned()
    }
}

impl Default for LogRouter {
    fn default() -> Self {
        Self::new()
    }
}
