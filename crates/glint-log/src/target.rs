//! Log sink contract and the concrete sinks shipped with the kernel.

use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::{Level, LogError};

/// Level range and formatting settings shared by the shipped sinks.
#[derive(Debug, Clone, Copy)]
pub struct TargetSettings {
    /// Minimum level of records to emit.
    pub min_level: Level,
    /// Maximum level of records to emit.
    pub max_level: Level,
    /// Whether the router should stamp records with elapsed time.
    pub include_timestamps: bool,
}

impl Default for TargetSettings {
    /// Accept every level, no timestamps.
    fn default() -> Self {
        Self {
            min_level: Level::Trace,
            max_level: Level::Fatal,
            include_timestamps: false,
        }
    }
}

/// A sink that receives log records.
///
/// Every method is required: a type that does not implement the full
/// contract does not compile, so there is no silently-broken default
/// to fall back on. Sinks that exist only as placeholders must fail
/// loudly instead (see [`UnconfiguredTarget`]).
pub trait LogTarget {
    /// Minimum level of records this sink accepts.
    fn min_level(&self) -> Level;

    /// Maximum level of records this sink accepts.
    fn max_level(&self) -> Level;

    /// Whether records routed here should carry a timestamp prefix.
    fn include_timestamps(&self) -> bool;

    /// Write a log record.
    fn log_message(&mut self, level: Level, source: &str, message: &str) -> Result<(), LogError>;

    /// Write a log record together with the error that caused it.
    fn log_error(
        &mut self,
        level: Level,
        source: &str,
        message: &str,
        error: &dyn Error,
    ) -> Result<(), LogError>;
}

/// Placeholder sink for call sites that require a target before one
/// has been configured. Every log operation fails with
/// [`LogError::UnsupportedTarget`]; records are never silently
/// swallowed.
#[derive(Debug, Default)]
pub struct UnconfiguredTarget;

impl UnconfiguredTarget {
    fn unsupported() -> LogError {
        LogError::UnsupportedTarget(
            "no concrete sink configured; register a console, file, or facade target".to_owned(),
        )
    }
}

impl LogTarget for UnconfiguredTarget {
    fn min_level(&self) -> Level {
        Level::Trace
    }

    fn max_level(&self) -> Level {
        Level::Fatal
    }

    fn include_timestamps(&self) -> bool {
        false
    }

    fn log_message(&mut self, _level: Level, _source: &str, _message: &str) -> Result<(), LogError> {
        Err(Self::unsupported())
    }

    fn log_error(
        &mut self,
        _level: Level,
        _source: &str,
        _message: &str,
        _error: &dyn Error,
    ) -> Result<(), LogError> {
        Err(Self::unsupported())
    }
}

/// Sink that writes records to standard error.
#[derive(Debug)]
pub struct ConsoleTarget {
    settings: TargetSettings,
}

impl ConsoleTarget {
    /// Create a console sink with the given settings.
    pub fn new(settings: TargetSettings) -> Self {
        Self { settings }
    }
}

impl LogTarget for ConsoleTarget {
    fn min_level(&self) -> Level {
        self.settings.min_level
    }

    fn max_level(&self) -> Level {
        self.settings.max_level
    }

    fn include_timestamps(&self) -> bool {
        self.settings.include_timestamps
    }

    fn log_message(&mut self, level: Level, source: &str, message: &str) -> Result<(), LogError> {
        eprintln!("{level:5} [{source}] {message}");
        Ok(())
    }

    fn log_error(
        &mut self,
        level: Level,
        source: &str,
        message: &str,
        error: &dyn Error,
    ) -> Result<(), LogError> {
        eprintln!("{level:5} [{source}] {message}: {error}");
        Ok(())
    }
}

/// Sink that appends records to a file through a buffered writer.
#[derive(Debug)]
pub struct FileTarget {
    settings: TargetSettings,
    writer: BufWriter<File>,
}

impl FileTarget {
    /// Create or truncate the file at `path`.
    pub fn create(path: &Path, settings: TargetSettings) -> Result<Self, LogError> {
        let file = File::create(path)?;
        Ok(Self {
            settings,
            writer: BufWriter::new(file),
        })
    }
}

impl LogTarget for FileTarget {
    fn min_level(&self) -> Level {
        self.settings.min_level
    }

    fn max_level(&self) -> Level {
        self.settings.max_level
    }

    fn include_timestamps(&self) -> bool {
        self.settings.include_timestamps
    }

    fn log_message(&mut self, level: Level, source: &str, message: &str) -> Result<(), LogError> {
        writeln!(self.writer, "{level:5} [{source}] {message}")?;
        self.writer.flush()?;
        Ok(())
    }

    fn log_error(
        &mut self,
        level: Level,
        source: &str,
        message: &str,
        error: &dyn Error,
    ) -> Result<(), LogError> {
        writeln!(self.writer, "{level:5} [{source}] {message}: {error}")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Sink that forwards records into the standard `log` facade, so glint
/// records show up in whatever logger the host application installed.
#[derive(Debug)]
pub struct FacadeTarget {
    settings: TargetSettings,
}

impl FacadeTarget {
    /// Create a facade sink with the given settings.
    pub fn new(settings: TargetSettings) -> Self {
        Self { settings }
    }
}

impl LogTarget for FacadeTarget {
    fn min_level(&self) -> Level {
        self.settings.min_level
    }

    fn max_level(&self) -> Level {
        self.settings.max_level
    }

    fn include_timestamps(&self) -> bool {
        // The host logger owns timestamp formatting
        false
    }

    fn log_message(&mut self, level: Level, source: &str, message: &str) -> Result<(), LogError> {
        log::log!(target: source, level.to_facade(), "{message}");
        Ok(())
    }

    fn log_error(
        &mut self,
        level: Level,
        source: &str,
        message: &str,
        error: &dyn Error,
    ) -> Result<(), LogError> {
        log::log!(target: source, level.to_facade(), "{message}: {error}");
        Ok(())
    }
}
