//! Structural sanitization of log payloads.
//!
//! Payloads are `serde_json::Value` trees: strings are redacted, containers are
//! rebuilt with the same shape, every other scalar passes through untouched.
//! Traversal is bounded by a depth limit and a node budget so a hostile
//! payload cannot make a log call arbitrarily expensive.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::redactor::PiiRedactor;

/// Replaces any subtree the sanitizer refused to walk.
pub const TRUNCATED: &str = "[TRUNCATED]";

/// Stands in for data that could not be turned into a payload at all.
pub const UNSERIALIZABLE: &str = "[UNSERIALIZABLE]";

pub const DEFAULT_MAX_DEPTH: usize = 64;
pub const DEFAULT_MAX_NODES: usize = 10_000;

/// Hard ceiling on `max_depth`; the walk recurses once per nesting level.
pub const MAX_DEPTH_LIMIT: usize = 512;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SanitizeLimits {
    /// Deepest container nesting that is still walked; the root sits at depth 0.
    pub max_depth: usize,
    /// Total number of values visited before the rest is truncated.
    pub max_nodes: usize,
}

impl Default for SanitizeLimits {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_nodes: DEFAULT_MAX_NODES,
        }
    }
}

/// Redacts every string leaf of a payload while preserving its shape.
#[derive(Debug, Clone, Default)]
pub struct PayloadSanitizer {
    redactor: PiiRedactor,
    limits: SanitizeLimits,
}

impl PayloadSanitizer {
    /// `limits.max_depth` is clamped to [`MAX_DEPTH_LIMIT`].
    pub fn new(redactor: PiiRedactor, limits: SanitizeLimits) -> Self {
        let limits = SanitizeLimits {
            max_depth: limits.max_depth.min(MAX_DEPTH_LIMIT),
            ..limits
        };
        Self { redactor, limits }
    }

    pub fn redactor(&self) -> &PiiRedactor {
        &self.redactor
    }

    pub fn limits(&self) -> SanitizeLimits {
        self.limits
    }

    pub fn sanitize(&self, value: &Value) -> Value {
        let mut visited = 0usize;
        self.walk(value, 0, &mut visited)
    }

    fn walk(&self, value: &Value, depth: usize, visited: &mut usize) -> Value {
        if *visited >= self.limits.max_nodes {
            return Value::String(TRUNCATED.to_string());
        }
        *visited += 1;

        match value {
            Value::String(text) => Value::String(self.redactor.redact(text).into_owned()),
            Value::Array(items) => {
                if depth >= self.limits.max_depth {
                    return Value::String(TRUNCATED.to_string());
                }
                Value::Array(
                    items
                        .iter()
                        .map(|item| self.walk(item, depth + 1, visited))
                        .collect(),
                )
            }
            Value::Object(fields) => {
                if depth >= self.limits.max_depth {
                    return Value::String(TRUNCATED.to_string());
                }
                let mut sanitized = Map::with_capacity(fields.len());
                for (key, field) in fields {
                    sanitized.insert(key.clone(), self.walk(field, depth + 1, visited));
                }
                Value::Object(sanitized)
            }
            Value::Null | Value::Bool(_) | Value::Number(_) => value.clone(),
        }
    }
}

/// Sanitize a payload with the built-in patterns and default limits.
pub fn sanitize_value(input: &Value) -> Value {
    PayloadSanitizer::default().sanitize(input)
}

/// Convert any serializable value into a payload without failing.
///
/// Values serde cannot represent as JSON (for instance maps keyed by
/// structs) become the `[UNSERIALIZABLE]` marker.
pub fn to_payload<T: Serialize + ?Sized>(data: &T) -> Value {
    serde_json::to_value(data).unwrap_or_else(|_| Value::String(UNSERIALIZABLE.to_string()))
}
