//! Structured JSONL logging for conformance and benchmark runs.
//!
//! Provides:
//! - [`LogEntry`]: one JSONL record with required and optional fields.
//! - [`LogEmitter`]: writes records to a file or an in-memory buffer.
//! - [`validate_log_line`] / [`validate_log_file`]: schema checks for emitted logs.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Log entry
// ---------------------------------------------------------------------------

/// Severity level for log entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

/// Verification outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Pass,
    Fail,
    Skip,
    Error,
}

/// Workflow that produced the entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamKind {
    Unit,
    Conformance,
    Perf,
}

const LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
const OUTCOMES: &[&str] = &["pass", "fail", "skip", "error"];
const STREAMS: &[&str] = &["unit", "conformance", "perf"];
const MODES: &[&str] = &["strict", "hardened"];

/// Canonical structured log entry.
///
/// Required fields: `timestamp`, `trace_id`, `level`, `event`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub trace_id: String,
    pub level: LogLevel,
    pub event: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream: Option<StreamKind>,
    /// Domain policy in force (`strict` or `hardened`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    /// Function under test.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency_ns: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl LogEntry {
    /// Create a new log entry with required fields only.
    #[must_use]
    pub fn new(trace_id: impl Into<String>, level: LogLevel, event: impl Into<String>) -> Self {
        Self {
            timestamp: now_utc(),
            trace_id: trace_id.into(),
            level,
            event: event.into(),
            stream: None,
            mode: None,
            symbol: None,
            outcome: None,
            latency_ns: None,
            details: None,
        }
    }

    #[must_use]
    pub fn with_stream(mut self, stream: StreamKind) -> Self {
        self.stream = Some(stream);
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    #[must_use]
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    #[must_use]
    pub fn with_outcome(mut self, outcome: Outcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    #[must_use]
    pub fn with_latency_ns(mut self, ns: u64) -> Self {
        self.latency_ns = Some(ns);
        self
    }

    /// Set free-form details.
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Serialize to a single JSONL line (no trailing newline).
    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

// ---------------------------------------------------------------------------
// Log emitter
// ---------------------------------------------------------------------------

enum Sink {
    File(BufWriter<File>),
    Buffer(Vec<u8>),
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self {
            Self::File(w) => w.write(buf),
            Self::Buffer(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            Self::File(w) => w.flush(),
            Self::Buffer(_) => Ok(()),
        }
    }
}

/// Writes structured JSONL log entries with sequential trace ids.
///
/// Trace ids follow `<campaign>::<run_id>::<seq>`.
pub struct LogEmitter {
    sink: Sink,
    seq: u64,
    campaign: String,
    run_id: String,
}

impl LogEmitter {
    /// Create an emitter that writes to a file.
    pub fn to_file(path: &Path, campaign: &str, run_id: &str) -> std::io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self::with_sink(Sink::File(BufWriter::new(file)), campaign, run_id))
    }

    /// Create an emitter that keeps its output in memory.
    #[must_use]
    pub fn to_buffer(campaign: &str, run_id: &str) -> Self {
        Self::with_sink(Sink::Buffer(Vec::new()), campaign, run_id)
    }

    fn with_sink(sink: Sink, campaign: &str, run_id: &str) -> Self {
        Self {
            sink,
            seq: 0,
            campaign: campaign.to_string(),
            run_id: run_id.to_string(),
        }
    }

    /// Buffered output, for emitters created with [`LogEmitter::to_buffer`].
    #[must_use]
    pub fn buffer(&self) -> Option<&str> {
        match &self.sink {
            Sink::Buffer(bytes) => std::str::from_utf8(bytes).ok(),
            Sink::File(_) => None,
        }
    }

    fn next_trace_id(&mut self) -> String {
        self.seq += 1;
        format!("{}::{}::{:03}", self.campaign, self.run_id, self.seq)
    }

    /// Emit an entry with only the required fields.
    pub fn emit(&mut self, level: LogLevel, event: &str) -> std::io::Result<LogEntry> {
        let trace_id = self.next_trace_id();
        let entry = LogEntry::new(trace_id, level, event);
        self.write_line(&entry)?;
        Ok(entry)
    }

    /// Emit a fully-populated entry; an empty trace id is filled in.
    pub fn emit_entry(&mut self, mut entry: LogEntry) -> std::io::Result<()> {
        if entry.trace_id.is_empty() {
            entry.trace_id = self.next_trace_id();
        }
        self.write_line(&entry)
    }

    fn write_line(&mut self, entry: &LogEntry) -> std::io::Result<()> {
        let line = entry.to_jsonl().map_err(std::io::Error::other)?;
        writeln!(self.sink, "{line}")
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> std::io::Result<()> {
        self.sink.flush()
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validation error for a log line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line_number}: field '{field}': {message}")]
pub struct LogValidationError {
    pub line_number: usize,
    pub field: String,
    pub message: String,
}

impl LogValidationError {
    fn new(line_number: usize, field: &str, message: impl Into<String>) -> Self {
        Self {
            line_number,
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Validate a single JSONL line against the schema.
pub fn validate_log_line(
    line: &str,
    line_number: usize,
) -> Result<LogEntry, Vec<LogValidationError>> {
    let value: serde_json::Value = serde_json::from_str(line).map_err(|e| {
        vec![LogValidationError::new(line_number, "<json>", format!("invalid JSON: {e}"))]
    })?;
    let Some(obj) = value.as_object() else {
        return Err(vec![LogValidationError::new(
            line_number,
            "<root>",
            "expected JSON object",
        )]);
    };

    let mut errors = Vec::new();
    for field in ["timestamp", "trace_id", "level", "event"] {
        if !obj.contains_key(field) {
            errors.push(LogValidationError::new(line_number, field, "required field missing"));
        }
    }

    for (field, allowed) in [
        ("level", LEVELS),
        ("mode", MODES),
        ("outcome", OUTCOMES),
        ("stream", STREAMS),
    ] {
        if let Some(v) = obj.get(field).and_then(|v| v.as_str())
            && !allowed.contains(&v)
        {
            errors.push(LogValidationError::new(
                line_number,
                field,
                format!("invalid {field}: '{v}'"),
            ));
        }
    }

    if let Some(trace_id) = obj.get("trace_id").and_then(|v| v.as_str())
        && trace_id.split("::").count() != 3
    {
        errors.push(LogValidationError::new(
            line_number,
            "trace_id",
            format!("trace_id should follow <campaign>::<run_id>::<seq>, got: '{trace_id}'"),
        ));
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    serde_json::from_value::<LogEntry>(value).map_err(|e| {
        vec![LogValidationError::new(
            line_number,
            "<deserialization>",
            format!("failed to deserialize: {e}"),
        )]
    })
}

/// Validate an entire JSONL file.
///
/// Returns the non-empty line count and any validation errors found.
pub fn validate_log_file(path: &Path) -> std::io::Result<(usize, Vec<LogValidationError>)> {
    let content = std::fs::read_to_string(path)?;
    let mut all_errors = Vec::new();
    let mut line_count = 0;

    for (i, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        line_count += 1;
        if let Err(errs) = validate_log_line(line, i + 1) {
            all_errors.extend(errs);
        }
    }

    Ok((line_count, all_errors))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Current time as an RFC 3339 UTC timestamp with millisecond precision.
#[must_use]
pub fn now_utc() -> String {
    let duration = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    format_utc(duration.as_secs(), duration.subsec_millis())
}

fn format_utc(secs: u64, millis: u32) -> String {
    let (year, month, day) = civil_from_days((secs / 86_400) as i64);
    format!(
        "{year:04}-{month:02}-{day:02}T{:02}:{:02}:{:02}.{millis:03}Z",
        (secs % 86_400) / 3600,
        (secs % 3600) / 60,
        secs % 60,
    )
}

/// Days since 1970-01-01 to a proleptic Gregorian (year, month, day).
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = if mp < 10 { mp + 3 } else { mp - 9 } as u32;
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_entry_serializes_required_fields() {
        let entry = LogEntry::new("conformance::run-1::001", LogLevel::Info, "case_start");
        let json = entry.to_jsonl().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(parsed["timestamp"].is_string());
        assert_eq!(parsed["trace_id"], "conformance::run-1::001");
        assert_eq!(parsed["level"], "info");
        assert_eq!(parsed["event"], "case_start");
        assert!(parsed.get("stream").is_none());
        assert!(parsed.get("mode").is_none());
    }

    #[test]
    fn log_entry_with_optional_fields() {
        let entry = LogEntry::new("conformance::run-1::002", LogLevel::Error, "case_result")
            .with_stream(StreamKind::Conformance)
            .with_mode("hardened")
            .with_symbol("log")
            .with_outcome(Outcome::Fail)
            .with_latency_ns(150)
            .with_details(serde_json::json!({"expected": "error:pole -> -3.4028235e38"}));

        let parsed: serde_json::Value = serde_json::from_str(&entry.to_jsonl().unwrap()).unwrap();
        assert_eq!(parsed["stream"], "conformance");
        assert_eq!(parsed["mode"], "hardened");
        assert_eq!(parsed["symbol"], "log");
        assert_eq!(parsed["outcome"], "fail");
        assert_eq!(parsed["latency_ns"], 150);
    }

    #[test]
    fn validate_valid_line() {
        let line = LogEntry::new("c::r::001", LogLevel::Info, "ok")
            .with_mode("strict")
            .to_jsonl()
            .unwrap();
        let entry = validate_log_line(&line, 1).unwrap();
        assert_eq!(entry.event, "ok");
    }

    #[test]
    fn validate_missing_required_field() {
        let errs = validate_log_line(r#"{"trace_id":"c::r::1","level":"info"}"#, 3).unwrap_err();
        let fields: Vec<_> = errs.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["timestamp", "event"]);
        assert_eq!(errs[0].line_number, 3);
    }

    #[test]
    fn validate_rejects_bad_enums() {
        let line = r#"{"timestamp":"t","trace_id":"c::r::1","level":"loud","event":"e","mode":"lenient"}"#;
        let errs = validate_log_line(line, 1).unwrap_err();
        assert_eq!(errs.len(), 2);
        assert!(errs[0].to_string().contains("invalid level: 'loud'"));
        assert!(errs[1].to_string().contains("invalid mode: 'lenient'"));
    }

    #[test]
    fn validate_invalid_json_and_trace_id() {
        let errs = validate_log_line("not json", 1).unwrap_err();
        assert_eq!(errs[0].field, "<json>");

        let line = r#"{"timestamp":"t","trace_id":"flat","level":"info","event":"e"}"#;
        let errs = validate_log_line(line, 1).unwrap_err();
        assert_eq!(errs[0].field, "trace_id");
    }

    #[test]
    fn emitter_generates_sequential_trace_ids() {
        let mut emitter = LogEmitter::to_buffer("conformance", "run-7");
        let a = emitter.emit(LogLevel::Info, "first").unwrap();
        let b = emitter.emit(LogLevel::Info, "second").unwrap();
        assert_eq!(a.trace_id, "conformance::run-7::001");
        assert_eq!(b.trace_id, "conformance::run-7::002");

        let out = emitter.buffer().unwrap();
        assert_eq!(out.lines().count(), 2);
        for (i, line) in out.lines().enumerate() {
            validate_log_line(line, i + 1).unwrap();
        }
    }

    #[test]
    fn timestamps_use_civil_dates() {
        assert_eq!(format_utc(0, 0), "1970-01-01T00:00:00.000Z");
        assert_eq!(format_utc(951_782_400, 5), "2000-02-29T00:00:00.005Z");
        assert_eq!(format_utc(1_792_368_000 + 3_723, 250), "2026-10-19T01:02:03.250Z");
    }
}
