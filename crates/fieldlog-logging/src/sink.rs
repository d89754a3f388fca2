//! Record sinks
//!
//! A [`Sink`] is the engine that renders records. The facade hands it a
//! severity, a finished message and an owned copy of the merged fields; it
//! never sees the facade's live context map.
//!
//! - [`TracingSink`]: production sink rendering through `tracing-subscriber`
//! - [`RecordingSink`](crate::test_capture::RecordingSink): in-memory sink for tests

use fieldlog_core_types::{Fields, OutputFormat, Severity};

pub mod json_format;
pub mod tracing_sink;

pub use json_format::FlatJson;
pub use tracing_sink::TracingSink;

/// Severity-leveled, field-annotated record emitter.
///
/// Implementations must tolerate concurrent calls from any number of facades.
/// Emitting at [`Severity::Fatal`] is expected to end the process once the
/// record has been written; test sinks may skip that part.
pub trait Sink: Send + Sync {
    /// Render one record
    fn emit(&self, severity: Severity, message: &str, fields: Fields);

    /// Switch between structured and text rendering
    fn set_output_format(&self, format: OutputFormat);

    /// Drop records below `severity`
    fn set_minimum_severity(&self, severity: Severity);
}
