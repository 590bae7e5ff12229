// Logger configuration
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LoggerError, Result};
use crate::payload::{SanitizeLimits, DEFAULT_MAX_DEPTH, DEFAULT_MAX_NODES, MAX_DEPTH_LIMIT};
use crate::redactor::RedactionPattern;

/// Runtime environment the process was started in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Test,
    #[default]
    Production,
}

impl Environment {
    /// Development and test runs get debug output.
    pub fn is_development(self) -> bool {
        matches!(self, Environment::Development | Environment::Test)
    }
}

impl FromStr for Environment {
    type Err = LoggerError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" | "local" => Ok(Environment::Development),
            "test" | "testing" => Ok(Environment::Test),
            "production" | "prod" | "staging" => Ok(Environment::Production),
            _ => Err(LoggerError::Configuration(format!(
                "Unknown environment: {}. Valid options: development, test, production",
                s
            ))),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Production => "production",
        })
    }
}

/// Line format used by console output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggerError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "plain" | "pretty" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(LoggerError::Configuration(format!(
                "Unknown log format: {}. Valid options: text, json",
                s
            ))),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogFormat::Text => "text",
            LogFormat::Json => "json",
        })
    }
}

/// Logger configuration.
///
/// Redaction cannot be switched off here; configuration only adds patterns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub environment: Environment,
    pub format: LogFormat,
    /// ANSI colors on text output.
    pub color: bool,
    pub max_depth: usize,
    pub max_nodes: usize,
    pub custom_patterns: Vec<RedactionPattern>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            format: LogFormat::default(),
            color: false,
            max_depth: DEFAULT_MAX_DEPTH,
            max_nodes: DEFAULT_MAX_NODES,
            custom_patterns: Vec::new(),
        }
    }
}

impl LoggerConfig {
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            ..Self::default()
        }
    }

    /// Load configuration from the process environment.
    ///
    /// Reads `RUSTCARE_ENV`, `RUSTCARE_LOG_FORMAT`, `RUSTCARE_LOG_COLOR`,
    /// `NO_COLOR`, `RUSTCARE_LOG_MAX_DEPTH` and `RUSTCARE_LOG_MAX_NODES`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`LoggerConfig::from_env`] over an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(environment) = lookup("RUSTCARE_ENV") {
            config.environment = environment.parse()?;
        }

        if let Some(format) = lookup("RUSTCARE_LOG_FORMAT") {
            config.format = format.parse()?;
        }

        config.color = lookup("RUSTCARE_LOG_COLOR")
            .map(|value| parse_flag("RUSTCARE_LOG_COLOR", &value))
            .transpose()?
            .unwrap_or(config.environment == Environment::Development);
        if lookup("NO_COLOR").is_some() {
            config.color = false;
        }

        if let Some(depth) = lookup("RUSTCARE_LOG_MAX_DEPTH") {
            config.max_depth = parse_limit("RUSTCARE_LOG_MAX_DEPTH", &depth)?;
        }

        if let Some(nodes) = lookup("RUSTCARE_LOG_MAX_NODES") {
            config.max_nodes = parse_limit("RUSTCARE_LOG_MAX_NODES", &nodes)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse a YAML document; missing keys keep their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 || self.max_depth > MAX_DEPTH_LIMIT {
            return Err(LoggerError::Configuration(format!(
                "max_depth must be between 1 and {}, got {}",
                MAX_DEPTH_LIMIT, self.max_depth
            )));
        }
        if self.max_nodes == 0 {
            return Err(LoggerError::Configuration(
                "max_nodes must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn is_development(&self) -> bool {
        self.environment.is_development()
    }

    pub fn limits(&self) -> SanitizeLimits {
        SanitizeLimits {
            max_depth: self.max_depth,
            max_nodes: self.max_nodes,
        }
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(LoggerError::Configuration(format!(
            "{} must be a boolean, got '{}'",
            key, value
        ))),
    }
}

fn parse_limit(key: &str, value: &str) -> Result<usize> {
    match value.trim().parse::<usize>() {
        Ok(limit) if limit > 0 => Ok(limit),
        _ => Err(LoggerError::Configuration(format!(
            "{} must be a positive integer, got '{}'",
            key, value
        ))),
    }
}
