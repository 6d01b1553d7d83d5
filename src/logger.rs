//! Simple stderr backend for the [`log`] crate.

use colored::Colorize;
use log::{Level, LevelFilter, Metadata, Record};

/// Writes log records to stderr, colored by level.
pub struct StderrLogger {
    level: LevelFilter,
}

impl StderrLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }

    /// Installs the logger as the global `log` backend.
    ///
    /// Calling this twice is harmless; the second logger is discarded.
    pub fn install(level: LevelFilter) {
        let logger: &'static Self = Box::leak(Box::new(Self::new(level)));
        if log::set_logger(logger).is_ok() {
            log::set_max_level(level);
        }
    }
}

/// Parses a level name such as `"info"`, falling back to `Warn`.
pub fn parse_level(name: &str) -> LevelFilter {
    name.parse().unwrap_or(LevelFilter::Warn)
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let level = match record.level() {
            Level::Error => "error".red().bold(),
            Level::Warn => "warning".yellow().bold(),
            Level::Info => "info".green(),
            Level::Debug => "debug".blue(),
            Level::Trace => "trace".dimmed(),
        };
        eprintln!(
            "{} {} {}",
            level,
            format!("{}:", record.target()).dimmed(),
            record.args()
        );
    }

    fn flush(&self) {}
}
