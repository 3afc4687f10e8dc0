//! Rolling Logger
//!
//! A `log` backend that keeps the most recent records in memory and
//! forwards each one to the browser console (stderr off the web).

mod buffer;

pub use buffer::{LogEntry, RollingBuffer};

use std::sync::{Mutex, OnceLock};

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Logger settings
#[derive(Debug, Clone, Copy)]
pub struct LoggerConfig {
    /// Number of records retained in memory
    pub capacity: usize,
    pub level: LevelFilter,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self { capacity: 500, level: LevelFilter::Debug }
    }
}

pub struct RollingLogger {
    buffer: Mutex<RollingBuffer>,
    level: LevelFilter,
}

impl RollingLogger {
    pub fn new(config: LoggerConfig) -> Self {
        Self {
            buffer: Mutex::new(RollingBuffer::new(config.capacity)),
            level: config.level,
        }
    }

    pub fn recent(&self) -> Vec<LogEntry> {
        self.buffer.lock().map(|b| b.snapshot()).unwrap_or_default()
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let entry = LogEntry {
            timestamp: Local::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        emit(&entry);
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(entry);
        }
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(entry: &LogEntry) {
    let line = wasm_bindgen::JsValue::from_str(&entry.to_string());
    match entry.level {
        Level::Error => web_sys::console::error_1(&line),
        Level::Warn => web_sys::console::warn_1(&line),
        Level::Info => web_sys::console::info_1(&line),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(entry: &LogEntry) {
    if entry.level <= Level::Warn {
        eprintln!("{}", entry);
    }
}

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// Install the global logger. Later calls keep the first configuration.
pub fn init(config: LoggerConfig) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RollingLogger::new(config));
    log::set_logger(logger)?;
    log::set_max_level(config.level);
    Ok(())
}

/// Snapshot of retained records, oldest first
pub fn recent() -> Vec<LogEntry> {
    LOGGER.get().map(RollingLogger::recent).unwrap_or_default()
}
