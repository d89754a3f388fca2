//! Test capture mode for deterministic logging assertions
//!
//! Two in-memory collaborators:
//! - [`RecordingSink`] stands in for a real sink and keeps every record it is
//!   handed, so tests can inspect severities, messages and fields.
//! - [`MemoryWriter`] is a `MakeWriter` that buffers rendered output from a
//!   [`TracingSink`](crate::TracingSink).

use std::io;
use std::sync::{Arc, Mutex, PoisonError};

use fieldlog_core_types::{Fields, OutputFormat, Severity};
use tracing_subscriber::fmt::MakeWriter;

use crate::sink::Sink;

/// A record as received by [`RecordingSink`]
#[derive(Clone, Debug, PartialEq)]
pub struct CapturedRecord {
    pub severity: Severity,
    pub message: String,
    pub fields: Fields,
}

impl CapturedRecord {
    /// The `file` field rendered by the facade, if any
    pub fn file(&self) -> Option<&str> {
        self.fields
            .get(fieldlog_core_types::schema::FIELD_FILE)
            .and_then(|v| v.as_str())
    }
}

#[derive(Debug, Default)]
struct RecordingState {
    records: Vec<CapturedRecord>,
    format: OutputFormat,
    minimum: Option<Severity>,
}

/// Sink that records instead of rendering.
///
/// Clones share the same buffer. Fatal records are kept like any other; the
/// process is not terminated.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    state: Arc<Mutex<RecordingState>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured records
    pub fn records(&self) -> Vec<CapturedRecord> {
        self.lock().records.clone()
    }

    /// Number of records received so far
    pub fn len(&self) -> usize {
        self.lock().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Last format requested through [`Sink::set_output_format`]
    pub fn output_format(&self) -> OutputFormat {
        self.lock().format
    }

    /// Last minimum requested through [`Sink::set_minimum_severity`]
    pub fn minimum_severity(&self) -> Option<Severity> {
        self.lock().minimum
    }

    /// Count records matching a predicate
    pub fn count_records<F>(&self, predicate: F) -> usize
    where
        F: Fn(&CapturedRecord) -> bool,
    {
        self.lock().records.iter().filter(|r| predicate(r)).count()
    }

    /// Assert that a record with the given severity and message exists
    ///
    /// # Panics
    ///
    /// Panics if no such record was captured
    pub fn assert_record_exists(&self, severity: Severity, message: &str) {
        let records = self.records();
        let found = records
            .iter()
            .any(|r| r.severity == severity && r.message == message);
        assert!(
            found,
            "Expected record severity={} message={:?} not found in {} captured records",
            severity,
            message,
            records.len()
        );
    }

    /// Clear all captured records
    pub fn clear(&self) {
        self.lock().records.clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, RecordingState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Sink for RecordingSink {
    fn emit(&self, severity: Severity, message: &str, fields: Fields) {
        self.lock().records.push(CapturedRecord {
            severity,
            message: message.to_string(),
            fields,
        });
    }

    fn set_output_format(&self, format: OutputFormat) {
        self.lock().format = format;
    }

    fn set_minimum_severity(&self, severity: Severity) {
        self.lock().minimum = Some(severity);
    }
}

/// Shared in-memory buffer usable as a `tracing_subscriber` writer
#[derive(Clone, Debug, Default)]
pub struct MemoryWriter {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded
    pub fn contents(&self) -> String {
        let buf = self.buf.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Non-empty output lines
    pub fn lines(&self) -> Vec<String> {
        self.contents()
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl io::Write for MemoryWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for MemoryWriter {
    type Writer = MemoryWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
