//! Console Logger
//!
//! A `log` backend that forwards records to the browser console and keeps
//! the most recent lines in a circular buffer so the UI can show them.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Default number of lines kept in memory
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("a logger is already installed")]
    AlreadyInstalled,
    #[error("failed to set global logger: {0}")]
    SetLogger(#[from] log::SetLoggerError),
}

/// Fixed-size buffer of formatted log lines, oldest first.
#[derive(Debug)]
pub struct RingBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl RingBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, line: String) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Logger writing to the console and the ring buffer
pub struct ConsoleLogger {
    app_name: String,
    level: LevelFilter,
    buffer: Mutex<RingBuffer>,
}

impl ConsoleLogger {
    pub fn new(app_name: impl Into<String>, level: LevelFilter, capacity: usize) -> Self {
        Self {
            app_name: app_name.into(),
            level,
            buffer: Mutex::new(RingBuffer::new(capacity)),
        }
    }

    /// Format a record as `HH:MM:SS.mmm LEVEL [app] target: message`
    pub fn format(&self, record: &Record) -> String {
        format!(
            "{} {:<5} [{}] {}: {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            record.level(),
            self.app_name,
            record.target(),
            record.args()
        )
    }

    pub fn recent(&self) -> Vec<String> {
        match self.buffer.lock() {
            Ok(buf) => buf.snapshot(),
            Err(poisoned) => poisoned.into_inner().snapshot(),
        }
    }

    fn remember(&self, line: String) {
        match self.buffer.lock() {
            Ok(mut buf) => buf.push(line),
            Err(poisoned) => poisoned.into_inner().push(line),
        }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = self.format(record);
        emit(record.level(), &line);
        self.remember(line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the global logger. Call once at startup.
pub fn init_logger(app_name: &str, level: LevelFilter) -> Result<(), LoggerError> {
    if LOGGER.set(ConsoleLogger::new(app_name, level, DEFAULT_CAPACITY)).is_err() {
        return Err(LoggerError::AlreadyInstalled);
    }
    let logger = LOGGER.get().ok_or(LoggerError::AlreadyInstalled)?;
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Lines captured since startup, empty when no logger was installed
pub fn recent_lines() -> Vec<String> {
    LOGGER.get().map(ConsoleLogger::recent).unwrap_or_default()
}

/// Parse a level name like `"debug"`, falling back to `Info`
pub fn parse_level(name: &str) -> LevelFilter {
    name.parse().unwrap_or(LevelFilter::Info)
}
