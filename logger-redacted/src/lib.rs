//! HIPAA-compliant structured logging with automatic PII redaction
//!
//! Every message and every string inside a log payload is scanned for
//! personally identifiable information before it can reach a sink. Nothing
//! about redaction is optional: configuration can add patterns, never remove
//! the built-in ones.
//!
//! # Key Features
//!
//! - **Pattern-based Redaction**: SSNs, e-mail addresses, phone numbers and
//!   16-digit card-like numbers are replaced with `[REDACTED]`
//! - **Structural Sanitization**: nested JSON payloads keep their shape, only
//!   string leaves change
//! - **Bounded Traversal**: depth and node limits cap the cost of hostile payloads
//! - **Environment Gating**: `debug` output exists only in development runs
//! - **Pluggable Sinks**: console (text or JSON lines), `tracing`, in-memory
//! - **Total Logging Calls**: logging never fails and never panics
//!
//! # Detected Data Types
//!
//! - **SSN**: 123-45-6789 → [REDACTED]
//! - **Email Addresses**: jane.doe@example.com → [REDACTED]
//! - **Phone Numbers**: 555-123-4567, 555.123.4567, +15551234567 → [REDACTED]
//! - **Card-like Numbers**: 4111-1111-1111-1111, 4111 1111 1111 1111 → [REDACTED]
//! - **Custom Patterns**: organization-specific identifiers (e.g. MRNs)
//!
//! # Example
//!
//! ```rust
//! use logger_redacted::{LoggerConfig, RedactedLogger, RedactionPattern};
//! use serde_json::json;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = LoggerConfig::from_env()?;
//!     config.custom_patterns.push(RedactionPattern::new("mrn", r"\bMRN\d+\b"));
//!
//!     let logger = RedactedLogger::console(&config)?;
//!
//!     logger.info(
//!         "User john.doe@example.com logged in",
//!         Some(json!({ "patient_mrn": "MRN123456", "attempt": 1 })),
//!     );
//!     // [INFO] User [REDACTED] logged in {"attempt":1,"patient_mrn":"[REDACTED]"}
//!
//!     Ok(())
//! }
//! ```
//!
//! # Configuration
//!
//! ```yaml
//! environment: production   # development | test | production
//! format: json              # text | json
//! color: false
//! max_depth: 64
//! max_nodes: 10000
//! custom_patterns:
//!   - name: mrn
//!     pattern: "\\bMRN\\d+\\b"
//!     replacement: "MRN[REDACTED]"
//! ```

pub mod config;
pub mod entry;
pub mod error;
pub mod http;
pub mod logger;
pub mod macros;
pub mod payload;
pub mod redactor;
pub mod sink;
pub mod subscriber;

pub use config::*;
pub use entry::*;
pub use error::*;
pub use http::*;
pub use logger::*;
pub use payload::*;
pub use redactor::*;
pub use sink::*;
pub use subscriber::*;
