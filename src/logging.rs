//! Logging backend for the `log` crate with colored level labels.
//!
//! The library itself only emits records through the `log` facade. Install
//! a [`ColorLogger`] (or any other `log` backend) to see them.

use std::io::{self, Write};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use time::{OffsetDateTime, format_description::OwnedFormatItem};

use crate::colorizer::Colorizer;

/// Logger for the `log` crate that writes to stderr, with the level label
/// of each record colorized.
///
/// | Level | Color |
/// |-------|-------|
/// | ERROR | bold red |
/// | WARN | yellow |
/// | INFO | green |
/// | DEBUG | blue |
/// | TRACE | white |
pub struct ColorLogger {
    colorizer: Colorizer,
    level: LevelFilter,
    show_time: bool,
    show_target: bool,
    time_format: OwnedFormatItem,
}

impl Default for ColorLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorLogger {
    /// Create a new `ColorLogger` with default settings.
    #[must_use]
    pub fn new() -> Self {
        let time_format = time::format_description::parse_owned::<2>("[hour]:[minute]:[second]")
            .unwrap_or_else(|_| OwnedFormatItem::Literal(Vec::<u8>::new().into_boxed_slice()));
        Self {
            colorizer: Colorizer::new(),
            level: LevelFilter::Info,
            show_time: true,
            show_target: false,
            time_format,
        }
    }

    /// Set the minimum log level.
    #[must_use]
    pub fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Enable or disable timestamps.
    #[must_use]
    pub fn show_time(mut self, show: bool) -> Self {
        self.show_time = show;
        self
    }

    /// Enable or disable the record target (module path).
    #[must_use]
    pub fn show_target(mut self, show: bool) -> Self {
        self.show_target = show;
        self
    }

    /// Override time format. Invalid formats keep the current one.
    #[must_use]
    pub fn time_format(mut self, format: &str) -> Self {
        if let Ok(parsed) = time::format_description::parse_owned::<2>(format) {
            self.time_format = parsed;
        }
        self
    }

    /// Install as the global logger.
    ///
    /// # Errors
    ///
    /// Fails if a global logger is already installed.
    pub fn init(self) -> Result<(), SetLoggerError> {
        log::set_max_level(self.level);
        log::set_boxed_logger(Box::new(self))
    }

    fn format_time(&self) -> String {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        now.format(&self.time_format)
            .unwrap_or_else(|_| now.to_string())
    }

    fn level_label(&self, level: Level) -> String {
        let (color, bold) = match level {
            Level::Error => ("red", true),
            Level::Warn => ("yellow", false),
            Level::Info => ("green", false),
            Level::Debug => ("blue", false),
            Level::Trace => ("white", false),
        };
        let padded = format!("{:<5}", level.as_str());
        self.colorizer
            .colorize(&padded, color, bold)
            .unwrap_or(padded)
    }

    fn format_record(&self, record: &Record<'_>) -> String {
        let mut line = String::new();

        if self.show_time {
            line.push_str(&self.format_time());
            line.push(' ');
        }

        line.push_str(&self.level_label(record.level()));
        line.push(' ');

        if self.show_target {
            line.push_str(record.target());
            line.push_str(": ");
        }

        line.push_str(&record.args().to_string());
        line
    }
}

impl Log for ColorLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = self.format_record(record);
        let stderr = io::stderr();
        let mut lock = stderr.lock();
        let _ = writeln!(lock, "{line}");
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}
