/// Behavioural tests for the redacting logger
///
/// Tests cover:
/// - Redaction of every built-in PII shape in messages and payloads
/// - Debug gating by environment
/// - Sink output (text, JSON, tracing)
/// - Configuration-driven construction

#[cfg(test)]
mod tests {
    use logger_redacted::{
        render_text, sanitize_text, sanitize_value, to_payload, Environment, HttpLogger, LogLevel,
        LogSink, LoggerConfig, MemorySink, RedactedLogger, TracingSink, REDACTED,
    };
    use serde::Serialize;
    use serde_json::json;
    use std::sync::Arc;

    fn memory_logger(is_development: bool) -> (RedactedLogger, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        (RedactedLogger::new(is_development, sink.clone()), sink)
    }

// =============================================================================
// REDACTION EXAMPLES
// =============================================================================

#[test]
fn test_documented_examples() {
    assert_eq!(sanitize_text("SSN: 123-45-6789 on file"), "SSN: [REDACTED] on file");
    assert_eq!(sanitize_text("contact jane.doe@example.com"), "contact [REDACTED]");
    assert_eq!(sanitize_text("call 555-123-4567"), "call [REDACTED]");
    assert_eq!(sanitize_text("card 4111-1111-1111-1111"), "card [REDACTED]");
}

#[test]
fn test_mixed_message_redacts_everything() {
    let message = "Patient jane@example.com (SSN 123-45-6789, tel 555.123.4567) paid with 4111 1111 1111 1111";
    let redacted = sanitize_text(message);

    assert_eq!(
        redacted,
        "Patient [REDACTED] (SSN [REDACTED], tel [REDACTED]) paid with [REDACTED]"
    );
    assert_eq!(redacted.matches(REDACTED).count(), 4);
}

#[test]
fn test_non_pii_numbers_survive() {
    // Too short for any shape.
    assert_eq!(sanitize_text("room 1204, order 55-12"), "room 1204, order 55-12");
    assert_eq!(sanitize_text("build 2024.10.19"), "build 2024.10.19");
}

// =============================================================================
// PAYLOAD SANITIZATION
// =============================================================================

#[test]
fn test_nested_payload_shape_preserved() {
    let payload = json!({
        "appointments": [
            { "patient": "jane@example.com", "slot": 9, "confirmed": true },
            { "patient": null, "slot": 10, "confirmed": false }
        ],
        "contact": { "phone": "555-123-4567", "notes": ["call after 5", "ssn 123-45-6789"] }
    });

    let sanitized = sanitize_value(&payload);

    assert_eq!(
        sanitized,
        json!({
            "appointments": [
                { "patient": "[REDACTED]", "slot": 9, "confirmed": true },
                { "patient": null, "slot": 10, "confirmed": false }
            ],
            "contact": { "phone": "[REDACTED]", "notes": ["call after 5", "ssn [REDACTED]"] }
        })
    );
}

#[test]
fn test_serializable_struct_payload() {
    #[derive(Serialize)]
    struct Claim {
        member_email: String,
        amount_cents: u64,
        codes: Vec<&'static str>,
    }

    let claim = Claim {
        member_email: "member@insurer.example".to_string(),
        amount_cents: 12_500,
        codes: vec!["Z00.00", "4111111111111111"],
    };

    let (logger, sink) = memory_logger(false);
    logger.warn("claim flagged", Some(to_payload(&claim)));

    assert_eq!(
        sink.entries()[0].data,
        Some(json!({
            "member_email": "[REDACTED]",
            "amount_cents": 12500,
            "codes": ["Z00.00", "[REDACTED]"]
        }))
    );
}

// =============================================================================
// GATING
// =============================================================================

#[test]
fn test_debug_gating_production() {
    let (logger, sink) = memory_logger(false);
    logger.debug("x contains 123-45-6789", None);
    logger.debug("", Some(json!({ "email": "a@b.io" })));
    assert_eq!(sink.len(), 0);
}

#[test]
fn test_debug_gating_development() {
    let (logger, sink) = memory_logger(true);
    logger.debug("x contains 123-45-6789", None);

    let entries = sink.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].level, LogLevel::Debug);
    assert_eq!(entries[0].message, "x contains [REDACTED]");
    assert_eq!(entries[0].data, None);
}

#[test]
fn test_non_debug_levels_always_emit() {
    for is_development in [false, true] {
        let (logger, sink) = memory_logger(is_development);
        for level in [LogLevel::Info, LogLevel::Warn, LogLevel::Error] {
            logger.log(level, "event", None);
        }
        let levels: Vec<LogLevel> = sink.entries().iter().map(|e| e.level).collect();
        assert_eq!(levels, vec![LogLevel::Info, LogLevel::Warn, LogLevel::Error]);
    }
}

#[test]
fn test_degenerate_inputs_pass_through() {
    let (logger, sink) = memory_logger(true);
    logger.info("", None);
    logger.info("", Some(json!(null)));
    logger.error("", Some(json!("")));
    logger.warn("", Some(json!([])));
    logger.debug("", Some(json!({})));

    assert_eq!(
        sink.lines(),
        vec!["[INFO] ", "[INFO]  null", r#"[ERROR]  """#, "[WARN]  []", "[DEBUG]  {}"]
    );
}

// =============================================================================
// SINKS
// =============================================================================

#[test]
fn test_render_text_uses_level_tags() {
    let (logger, sink) = memory_logger(true);
    for level in LogLevel::ALL {
        logger.log(level, "m", None);
    }
    let lines: Vec<String> = sink.entries().iter().map(render_text).collect();
    assert_eq!(lines, vec!["[DEBUG] m", "[INFO] m", "[WARN] m", "[ERROR] m"]);
}

#[test]
fn test_tracing_sink_without_subscriber_is_silent() {
    let sink: Arc<dyn LogSink> = Arc::new(TracingSink);
    let logger = RedactedLogger::new(true, sink);
    logger.debug("no subscriber installed", Some(json!({ "ssn": "123-45-6789" })));
    logger.error("still fine", None);
}

#[test]
fn test_http_hooks_share_redaction() {
    let (logger, sink) = memory_logger(true);
    let http = HttpLogger::new(logger);

    http.request("POST", "https://api.example.com/users/jane@example.com");
    http.response("https://api.example.com/users/jane@example.com", 201);
    http.failure("https://api.example.com/users", &"timeout calling 555-123-4567");

    let lines = sink.lines();
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|line| !line.contains("jane@example.com")));
    assert!(lines.iter().all(|line| !line.contains("555-123-4567")));
    assert!(lines[2].starts_with("[ERROR] "));
}

// =============================================================================
// CONFIGURATION
// =============================================================================

#[test]
fn test_logger_from_yaml_config() {
    let config = LoggerConfig::from_yaml_str(
        r#"
environment: development
max_depth: 1
custom_patterns:
  - name: member_id
    pattern: '\bMID-\d{6}\b'
"#,
    )
    .unwrap();
    assert_eq!(config.environment, Environment::Development);

    let sink = Arc::new(MemorySink::new());
    let logger = RedactedLogger::from_config(&config, sink.clone()).unwrap();
    assert!(logger.is_development());

    logger.debug(
        "member MID-123456",
        Some(json!({ "outer": { "inner": "MID-654321" }, "id": "MID-000001" })),
    );

    let entries = sink.entries();
    assert_eq!(entries[0].message, "member [REDACTED]");
    assert_eq!(
        entries[0].data,
        Some(json!({ "outer": "[TRUNCATED]", "id": "[REDACTED]" }))
    );
}

#[test]
fn test_invalid_custom_pattern_fails_construction() {
    let config = LoggerConfig::from_yaml_str(
        r#"
custom_patterns:
  - name: broken
    pattern: '[unclosed'
"#,
    )
    .unwrap();

    let sink = Arc::new(MemorySink::new());
    assert!(RedactedLogger::from_config(&config, sink).is_err());
}
}
