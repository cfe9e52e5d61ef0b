//! Logging configuration
//!
//! This module provides the stderr logger installed by the `wslconv`
//! binary. Library code only talks to the `log` facade.

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Writes `[LEVEL] [target] message` lines to stderr
#[derive(Debug, Default)]
pub struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", format_record(record.level(), record.target(), &record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

/// Format a single log line
pub fn format_record(level: Level, target: &str, message: &str) -> String {
    format!("[{}] [{}] {}", level.as_str(), target, message)
}

/// Install the stderr logger at `level`
///
/// Returns `false` if a logger was already installed. A second call is a
/// no-op and leaves the max level untouched.
pub fn init(level: LevelFilter) -> bool {
    log::set_logger(&LOGGER)
        .map(|()| log::set_max_level(level))
        .is_ok()
}

/// Apply `-v` / `-q` on top of the configured level
pub fn adjust_level(base: LevelFilter, verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }

    let mut level = base;
    for _ in 0..verbose {
        level = match level {
            LevelFilter::Off => LevelFilter::Error,
            LevelFilter::Error => LevelFilter::Warn,
            LevelFilter::Warn => LevelFilter::Info,
            LevelFilter::Info => LevelFilter::Debug,
            LevelFilter::Debug | LevelFilter::Trace => LevelFilter::Trace,
        };
    }
    level
}
