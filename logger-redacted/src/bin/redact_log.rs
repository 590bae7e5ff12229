//! Log Redaction Tool
//!
//! Strips PII from existing log output before it is shared or archived.
//!
//! Usage:
//!   redact-log [--json] [--report] [--patterns extra.yaml] [FILE...]
//!
//! Reads each FILE (or stdin when none are given) line by line and writes the
//! redacted lines to stdout. With `--json`, lines that parse as JSON are
//! sanitized structurally so keys and non-string values survive untouched.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

use logger_redacted::{
    init_tracing, LoggerConfig, PayloadSanitizer, PiiRedactor, RedactionCount, RedactionPattern,
};

#[derive(Parser, Debug)]
#[command(name = "redact-log")]
#[command(about = "Redact PII (SSN, e-mail, phone, card numbers) from log files")]
struct Args {
    /// Input files; stdin when omitted
    files: Vec<PathBuf>,

    /// Treat each line as a JSON document and sanitize its values
    #[arg(long)]
    json: bool,

    /// Print per-pattern match counts to stderr when done
    #[arg(long)]
    report: bool,

    /// YAML file with extra redaction patterns (a list of name/pattern/replacement)
    #[arg(long, env = "RUSTCARE_LOG_PATTERNS")]
    patterns: Option<PathBuf>,

    /// Maximum payload nesting walked in --json mode
    #[arg(long)]
    max_depth: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = LoggerConfig::from_env()?;
    init_tracing(&config)?;

    if let Some(path) = &args.patterns {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading patterns from {}", path.display()))?;
        let extra: Vec<RedactionPattern> = serde_yaml::from_str(&raw)
            .with_context(|| format!("parsing patterns in {}", path.display()))?;
        info!(count = extra.len(), "Loaded custom redaction patterns");
        config.custom_patterns.extend(extra);
    }
    if let Some(depth) = args.max_depth {
        config.max_depth = depth;
    }
    config.validate()?;

    let redactor = PiiRedactor::new().with_patterns(config.custom_patterns.iter().cloned())?;
    let sanitizer = PayloadSanitizer::new(redactor, config.limits());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut totals: BTreeMap<String, usize> = BTreeMap::new();

    if args.files.is_empty() {
        let stdin = io::stdin();
        process(stdin.lock(), &args, &sanitizer, &mut out, &mut totals)?;
    } else {
        for path in &args.files {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            debug!(file = %path.display(), "Redacting file");
            process(BufReader::new(file), &args, &sanitizer, &mut out, &mut totals)?;
        }
    }
    out.flush()?;

    if args.report {
        let mut err = io::stderr().lock();
        for (pattern, count) in &totals {
            writeln!(err, "{:<12} {}", pattern, count)?;
        }
    }

    Ok(())
}

fn process<R: BufRead, W: Write>(
    reader: R,
    args: &Args,
    sanitizer: &PayloadSanitizer,
    out: &mut W,
    totals: &mut BTreeMap<String, usize>,
) -> anyhow::Result<()> {
    for line in reader.lines() {
        let line = line?;

        if args.json {
            if let Ok(value) = serde_json::from_str::<serde_json::Value>(&line) {
                if args.report {
                    // Counted over the raw line, so matches inside keys are included.
                    let (_, report) = sanitizer.redactor().redact_with_report(&line);
                    record(report, totals);
                }
                writeln!(out, "{}", sanitizer.sanitize(&value))?;
                continue;
            }
        }

        let (redacted, report) = sanitizer.redactor().redact_with_report(&line);
        record(report, totals);
        writeln!(out, "{}", redacted)?;
    }
    Ok(())
}

fn record(report: Vec<RedactionCount>, totals: &mut BTreeMap<String, usize>) {
    for entry in report {
        *totals.entry(entry.pattern).or_default() += entry.count;
    }
}
