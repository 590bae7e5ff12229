use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{LoggerError, Result};

/// Sentinel substituted for every recognized PII shape.
pub const REDACTED: &str = "[REDACTED]";

lazy_static! {
    static ref BUILTIN_PATTERNS: Vec<CompiledPattern> = compile_builtins();
    static ref DEFAULT_REDACTOR: PiiRedactor = PiiRedactor::new();
}

/// A redaction rule expressed as data: a name, a regex and its replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionPattern {
    pub name: String,
    pub pattern: String,
    #[serde(default = "default_replacement")]
    pub replacement: String,
}

fn default_replacement() -> String {
    REDACTED.to_string()
}

impl RedactionPattern {
    /// Pattern replaced by the standard `[REDACTED]` sentinel.
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            replacement: default_replacement(),
        }
    }

    pub fn with_replacement(mut self, replacement: impl Into<String>) -> Self {
        self.replacement = replacement.into();
        self
    }

    fn compile(&self) -> Result<CompiledPattern> {
        let regex = Regex::new(&self.pattern).map_err(|source| LoggerError::InvalidPattern {
            name: self.name.clone(),
            source,
        })?;
        Ok(CompiledPattern {
            name: self.name.clone(),
            regex,
            replacement: self.replacement.clone(),
        })
    }
}

#[derive(Debug, Clone)]
struct CompiledPattern {
    name: String,
    regex: Regex,
    replacement: String,
}

/// The built-in PII shapes, in the order they are applied.
///
/// Matching is purely textual and unanchored: a shape is found even when it
/// touches letters, digits or punctuation (`+15551234567`, `id_123-45-6789`).
/// The numeric shapes swallow the whole digit run around them, so a match
/// never leaves stray digits of the same number behind. `card` runs before
/// `phone` so a bare sixteen-digit run is not split by a ten-digit match.
///
/// The `card` shape deliberately over-redacts: any sixteen digits in four
/// groups of four are removed whether or not they form a payment card number
/// (no Luhn check). Narrowing it would trade recall for precision, which a
/// log sink cannot afford.
pub fn builtin_patterns() -> Vec<RedactionPattern> {
    vec![
        // ddd-dd-dddd
        RedactionPattern::new("ssn", r"\d*\d{3}-\d{2}-\d{4}\d*"),
        RedactionPattern::new(
            "email",
            r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}",
        ),
        // four groups of four digits, optionally separated by ' ' or '-'
        RedactionPattern::new("card", r"\d*\d{4}[ -]?\d{4}[ -]?\d{4}[ -]?\d{4}\d*"),
        // ten digits, optionally grouped 3-3-4 with '-' or '.', with an
        // optional international prefix such as "+1 "
        RedactionPattern::new(
            "phone",
            r"(?:\+\d{1,3}[-. ]?)?\d*\d{3}[-.]?\d{3}[-.]?\d{4}\d*",
        ),
    ]
}

#[allow(clippy::expect_used)]
fn compile_builtins() -> Vec<CompiledPattern> {
    builtin_patterns()
        .iter()
        .map(|pattern| pattern.compile().expect("built-in PII pattern must compile"))
        .collect()
}

/// Number of matches a single pattern removed from one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionCount {
    pub pattern: String,
    pub count: usize,
}

/// Pattern-based PII redactor.
///
/// Every active pattern is applied in order to the whole input, replacing all
/// non-overlapping matches left to right. The built-in set is always active;
/// custom patterns can only be appended after it.
#[derive(Debug, Clone)]
pub struct PiiRedactor {
    patterns: Vec<CompiledPattern>,
}

impl PiiRedactor {
    pub fn new() -> Self {
        Self {
            patterns: BUILTIN_PATTERNS.clone(),
        }
    }

    /// Append a custom pattern after the built-in set.
    pub fn with_pattern(mut self, pattern: RedactionPattern) -> Result<Self> {
        self.patterns.push(pattern.compile()?);
        Ok(self)
    }

    pub fn with_patterns<I>(self, patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = RedactionPattern>,
    {
        patterns
            .into_iter()
            .try_fold(self, |redactor, pattern| redactor.with_pattern(pattern))
    }

    pub fn pattern_names(&self) -> Vec<&str> {
        self.patterns.iter().map(|p| p.name.as_str()).collect()
    }

    /// Redact every PII-shaped substring of `text`.
    ///
    /// Returns the input borrowed when nothing matched.
    pub fn redact<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let mut result = Cow::Borrowed(text);
        for pattern in &self.patterns {
            let replaced = pattern
                .regex
                .replace_all(&result, pattern.replacement.as_str());
            if let Cow::Owned(redacted) = replaced {
                result = Cow::Owned(redacted);
            }
        }
        result
    }

    /// Redact `text` and report how many matches each pattern removed.
    ///
    /// Patterns without matches are left out of the report.
    pub fn redact_with_report(&self, text: &str) -> (String, Vec<RedactionCount>) {
        let mut result = text.to_string();
        let mut report = Vec::new();

        for pattern in &self.patterns {
            let count = pattern.regex.find_iter(&result).count();
            if count == 0 {
                continue;
            }
            result = pattern
                .regex
                .replace_all(&result, pattern.replacement.as_str())
                .into_owned();
            report.push(RedactionCount {
                pattern: pattern.name.clone(),
                count,
            });
        }

        (result, report)
    }
}

impl Default for PiiRedactor {
    fn default() -> Self {
        Self::new()
    }
}

/// Redact `input` with the built-in pattern set.
pub fn sanitize_text(input: &str) -> String {
    DEFAULT_REDACTOR.redact(input).into_owned()
}
