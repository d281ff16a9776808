//! Audit record of the arguments an export ran with.
//!
//! `app::emit` takes the sink as a parameter so callers decide where the record
//! goes: the tracing stream, a JSON-lines file, or both.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::domain::EmitterConfig;
use crate::error::{AppError, EXIT_IO};

/// Sink for the start-of-run argument record.
pub trait AuditLog {
    fn log_args(&mut self, config: &EmitterConfig) -> Result<(), AppError>;
}

/// Emits the record as one structured `tracing` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAudit;

impl AuditLog for TracingAudit {
    fn log_args(&mut self, config: &EmitterConfig) -> Result<(), AppError> {
        tracing::info!(
            trtis_model_name = %config.model_name,
            trtis_model_version = config.model_version,
            amp_run = config.use_reduced_precision,
            "arguments"
        );
        Ok(())
    }
}

/// One line of a JSON-lines audit file.
#[derive(Debug, Serialize)]
struct AuditEntry<'a> {
    timestamp: DateTime<Local>,
    #[serde(rename = "type")]
    kind: &'static str,
    data: &'a EmitterConfig,
}

/// Appends one JSON object per record to a file, creating it when missing.
#[derive(Debug, Clone)]
pub struct JsonLinesAudit {
    path: PathBuf,
}

impl JsonLinesAudit {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl AuditLog for JsonLinesAudit {
    fn log_args(&mut self, config: &EmitterConfig) -> Result<(), AppError> {
        let entry = AuditEntry {
            timestamp: Local::now(),
            kind: "args",
            data: config,
        };
        let mut line = serde_json::to_string(&entry)
            .map_err(|e| AppError::new(EXIT_IO, format!("Failed to encode audit record: {e}")))?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| AppError::io("open audit log", &self.path, e))?;
        file.write_all(line.as_bytes())
            .map_err(|e| AppError::io("write audit log", &self.path, e))?;
        Ok(())
    }
}

/// Forwards each record to two sinks, stopping at the first failure.
#[derive(Debug, Clone)]
pub struct Tee<A, B> {
    pub first: A,
    pub second: B,
}

impl<A: AuditLog, B: AuditLog> AuditLog for Tee<A, B> {
    fn log_args(&mut self, config: &EmitterConfig) -> Result<(), AppError> {
        self.first.log_args(config)?;
        self.second.log_args(config)
    }
}

/// Keeps every record in memory.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingAudit {
    pub records: Vec<EmitterConfig>,
}

#[cfg(test)]
impl AuditLog for RecordingAudit {
    fn log_args(&mut self, config: &EmitterConfig) -> Result<(), AppError> {
        self.records.push(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_lines_appends_one_object_per_call() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("args.json");
        let mut audit = JsonLinesAudit::new(&path);

        let config = EmitterConfig {
            model_name: "foo".to_string(),
            model_version: 3,
            use_reduced_precision: true,
        };
        audit.log_args(&config).unwrap();
        audit.log_args(&EmitterConfig::default()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["type"], "args");
        assert!(first["timestamp"].is_string());
        let data: EmitterConfig = serde_json::from_value(first["data"].clone()).unwrap();
        assert_eq!(data, config);
    }

    #[test]
    fn tee_reaches_both_sinks() {
        let mut tee = Tee {
            first: RecordingAudit::default(),
            second: RecordingAudit::default(),
        };
        tee.log_args(&EmitterConfig::default()).unwrap();
        assert_eq!(tee.first.records.len(), 1);
        assert_eq!(tee.second.records, tee.first.records);
    }

    #[test]
    fn unwritable_log_path_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let mut audit = JsonLinesAudit::new(tmp.path().join("missing").join("args.json"));
        let err = audit.log_args(&EmitterConfig::default()).unwrap_err();
        assert!(err.message().starts_with("Failed to open audit log"));
    }
}
