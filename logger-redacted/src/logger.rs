use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::config::LoggerConfig;
use crate::entry::{LogEntry, LogLevel};
use crate::error::Result;
use crate::payload::PayloadSanitizer;
use crate::redactor::PiiRedactor;
use crate::sink::{ConsoleSink, LogSink};

/// Structured logger that redacts PII before anything reaches its sink.
///
/// The development flag is fixed at construction. Outside development,
/// `debug` calls are dropped before any work is done; every other level is
/// always written. Clones share the same sink and pattern set.
///
/// ```rust
/// use std::sync::Arc;
/// use logger_redacted::{MemorySink, RedactedLogger};
/// use serde_json::json;
///
/// let sink = Arc::new(MemorySink::new());
/// let logger = RedactedLogger::new(false, sink.clone());
///
/// logger.debug("lookup for 123-45-6789", None);
/// logger.info("patient contacted", Some(json!({ "email": "jane@example.com" })));
///
/// assert_eq!(sink.lines(), vec![r#"[INFO] patient contacted {"email":"[REDACTED]"}"#]);
/// ```
#[derive(Clone)]
pub struct RedactedLogger {
    is_development: bool,
    sanitizer: Arc<PayloadSanitizer>,
    sink: Arc<dyn LogSink>,
}

impl RedactedLogger {
    /// Logger with the built-in patterns and default traversal limits.
    pub fn new(is_development: bool, sink: Arc<dyn LogSink>) -> Self {
        Self::with_sanitizer(is_development, PayloadSanitizer::default(), sink)
    }

    pub fn with_sanitizer(
        is_development: bool,
        sanitizer: PayloadSanitizer,
        sink: Arc<dyn LogSink>,
    ) -> Self {
        Self {
            is_development,
            sanitizer: Arc::new(sanitizer),
            sink,
        }
    }

    /// Build a logger from configuration, compiling any custom patterns.
    pub fn from_config(config: &LoggerConfig, sink: Arc<dyn LogSink>) -> Result<Self> {
        config.validate()?;
        let redactor = PiiRedactor::new().with_patterns(config.custom_patterns.iter().cloned())?;
        Ok(Self::with_sanitizer(
            config.is_development(),
            PayloadSanitizer::new(redactor, config.limits()),
            sink,
        ))
    }

    /// Logger writing to the console in the configured format.
    pub fn console(config: &LoggerConfig) -> Result<Self> {
        let sink = ConsoleSink::new(config.format, config.color);
        Self::from_config(config, Arc::new(sink))
    }

    pub fn is_development(&self) -> bool {
        self.is_development
    }

    /// Whether a call at `level` reaches the sink.
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level != LogLevel::Debug || self.is_development
    }

    pub fn sanitizer(&self) -> &PayloadSanitizer {
        &self.sanitizer
    }

    pub fn log(&self, level: LogLevel, message: &str, data: Option<Value>) {
        if !self.is_enabled(level) {
            return;
        }

        let message = self.sanitizer.redactor().redact(message).into_owned();
        let data = data.as_ref().map(|value| self.sanitizer.sanitize(value));
        let entry = LogEntry::new(level, message, data);

        self.sink.write(&entry);
    }

    pub fn debug(&self, message: &str, data: Option<Value>) {
        self.log(LogLevel::Debug, message, data);
    }

    pub fn info(&self, message: &str, data: Option<Value>) {
        self.log(LogLevel::Info, message, data);
    }

    pub fn warn(&self, message: &str, data: Option<Value>) {
        self.log(LogLevel::Warn, message, data);
    }

    pub fn error(&self, message: &str, data: Option<Value>) {
        self.log(LogLevel::Error, message, data);
    }
}

impl fmt::Debug for RedactedLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedactedLogger")
            .field("is_development", &self.is_development)
            .field("limits", &self.sanitizer.limits())
            .field("patterns", &self.sanitizer.redactor().pattern_names())
            .finish()
    }
}
