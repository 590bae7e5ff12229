//! Destinations for finished log entries.
//!
//! A sink only ever sees entries the logger has already sanitized. Sinks
//! swallow their own write failures: a broken stdout must not turn a log call
//! into an application fault.

use std::io::{self, Write};

use colored::Colorize;
use parking_lot::Mutex;

use crate::config::LogFormat;
use crate::entry::{LogEntry, LogLevel};

/// Write capability for sanitized log entries.
pub trait LogSink: Send + Sync {
    fn write(&self, entry: &LogEntry);
}

/// Render an entry as `"[LEVEL] message {data}"`.
pub fn render_text(entry: &LogEntry) -> String {
    match &entry.data {
        Some(data) => format!("{} {} {}", entry.tag(), entry.message, data),
        None => format!("{} {}", entry.tag(), entry.message),
    }
}

fn render_json(entry: &LogEntry) -> String {
    // LogEntry only holds strings and JSON values; fall back to text regardless.
    serde_json::to_string(entry).unwrap_or_else(|_| render_text(entry))
}

/// Console-equivalent sink: debug and info go to stdout, warn and error to stderr.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleSink {
    format: LogFormat,
    color: bool,
}

impl ConsoleSink {
    pub fn new(format: LogFormat, color: bool) -> Self {
        Self { format, color }
    }

    pub fn text() -> Self {
        Self::new(LogFormat::Text, false)
    }

    pub fn json() -> Self {
        Self::new(LogFormat::Json, false)
    }

    fn render(&self, entry: &LogEntry) -> String {
        match self.format {
            LogFormat::Json => render_json(entry),
            LogFormat::Text if self.color => {
                let tag = match entry.level {
                    LogLevel::Debug => entry.tag().bright_blue(),
                    LogLevel::Info => entry.tag().bright_green(),
                    LogLevel::Warn => entry.tag().bright_yellow(),
                    LogLevel::Error => entry.tag().bright_red(),
                };
                match &entry.data {
                    Some(data) => format!("{} {} {}", tag, entry.message, data.to_string().bright_black()),
                    None => format!("{} {}", tag, entry.message),
                }
            }
            LogFormat::Text => render_text(entry),
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::text()
    }
}

impl LogSink for ConsoleSink {
    fn write(&self, entry: &LogEntry) {
        let line = self.render(entry);
        // Failures are the stream's problem, not the caller's.
        let _ = match entry.level {
            LogLevel::Debug | LogLevel::Info => writeln!(io::stdout().lock(), "{}", line),
            LogLevel::Warn | LogLevel::Error => writeln!(io::stderr().lock(), "{}", line),
        };
    }
}

/// Forwards entries as `tracing` events so they join the host subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn write(&self, entry: &LogEntry) {
        let data = entry.data.as_ref().map(|data| data.to_string());
        let data = data.as_deref().unwrap_or("");
        match entry.level {
            LogLevel::Debug => tracing::debug!(target: "redacted", data = %data, "{}", entry.message),
            LogLevel::Info => tracing::info!(target: "redacted", data = %data, "{}", entry.message),
            LogLevel::Warn => tracing::warn!(target: "redacted", data = %data, "{}", entry.message),
            LogLevel::Error => tracing::error!(target: "redacted", data = %data, "{}", entry.message),
        }
    }
}

/// Keeps every entry in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<LogEntry>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().clone()
    }

    /// Rendered text lines, in write order.
    pub fn lines(&self) -> Vec<String> {
        self.entries.lock().iter().map(render_text).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl LogSink for MemorySink {
    fn write(&self, entry: &LogEntry) {
        self.entries.lock().push(entry.clone());
    }
}
