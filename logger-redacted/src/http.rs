//! Logging hooks for the outbound HTTP client.
//!
//! URLs routinely carry e-mail addresses or phone numbers in query strings,
//! so every hook routes through the redacting logger like any other call.

use std::fmt::Display;

use serde_json::json;

use crate::logger::RedactedLogger;

#[derive(Debug, Clone)]
pub struct HttpLogger {
    logger: RedactedLogger,
}

impl HttpLogger {
    pub fn new(logger: RedactedLogger) -> Self {
        Self { logger }
    }

    /// Before a request is sent (debug).
    pub fn request(&self, method: &str, url: &str) {
        self.logger.debug(
            &format!("HTTP {} {}", method, url),
            Some(json!({ "method": method, "url": url })),
        );
    }

    /// After a response arrived (debug).
    pub fn response(&self, url: &str, status: u16) {
        self.logger.debug(
            &format!("HTTP response {} from {}", status, url),
            Some(json!({ "url": url, "status": status })),
        );
    }

    /// A request failed outright (error).
    pub fn failure(&self, url: &str, error: &dyn Display) {
        let detail = error.to_string();
        self.logger.error(
            &format!("HTTP request to {} failed", url),
            Some(json!({ "url": url, "error": detail })),
        );
    }
}
