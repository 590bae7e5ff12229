use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::LoggerError;

/// Log severity.
///
/// The ordering is informational only: the logger suppresses `Debug` outside
/// development and never filters the other levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub const ALL: [LogLevel; 4] = [LogLevel::Debug, LogLevel::Info, LogLevel::Warn, LogLevel::Error];

    /// Fixed prefix written in front of every line at this level.
    pub fn tag(self) -> &'static str {
        match self {
            LogLevel::Debug => "[DEBUG]",
            LogLevel::Info => "[INFO]",
            LogLevel::Warn => "[WARN]",
            LogLevel::Error => "[ERROR]",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(LoggerError::Configuration(format!(
                "Unknown log level: {}. Valid options: debug, info, warn, error",
                s
            ))),
        }
    }
}

/// A sanitized log record, built for a single write and then dropped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl LogEntry {
    /// Callers must pass already-sanitized content.
    pub(crate) fn new(level: LogLevel, message: String, data: Option<Value>) -> Self {
        Self {
            level,
            message,
            timestamp: Utc::now(),
            data,
        }
    }

    pub fn tag(&self) -> &'static str {
        self.level.tag()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_level_tags() {
        let tags: Vec<_> = LogLevel::ALL.iter().map(|level| level.tag()).collect();
        assert_eq!(tags, vec!["[DEBUG]", "[INFO]", "[WARN]", "[ERROR]"]);
    }

    #[test]
    fn test_level_parsing() {
        assert_eq!("DEBUG".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!(" warning ".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_entry_serializes_without_absent_data() {
        let entry = LogEntry::new(LogLevel::Info, "ready".to_string(), None);
        let value = serde_json::to_value(&entry).unwrap();

        assert_eq!(value["level"], json!("info"));
        assert_eq!(value["message"], json!("ready"));
        assert!(value.get("data").is_none());
        assert!(value["timestamp"].is_string());
    }
}
