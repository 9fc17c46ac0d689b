//! Stderr logger for the `log` facade.
//!
//! Stdout carries protocol responses, so every log record goes to stderr as
//! `[LEVEL] message`.

use std::io::Write;
use std::sync::OnceLock;

pub use log::LevelFilter;
use log::{Log, Metadata, Record, SetLoggerError};

static LOGGER: OnceLock<StderrLogger> = OnceLock::new();

pub struct StderrLogger;

impl StderrLogger {
    fn format(record: &Record) -> String {
        format!("[{}] {}", record.level(), record.args())
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let stderr = std::io::stderr();
            let mut handle = stderr.lock();
            let _ = writeln!(handle, "{}", Self::format(record));
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Installs the stderr logger with the given maximum level.
///
/// Fails if a logger has already been installed for this process.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| StderrLogger);
    log::set_logger(logger).map(|()| log::set_max_level(level))
}
