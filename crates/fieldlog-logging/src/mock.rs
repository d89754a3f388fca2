//! Recording test double for the [`Log`] capability

use std::fmt::{self, Arguments};
use std::sync::{Mutex, MutexGuard, PoisonError};

use fieldlog_core_types::{fields, Fields, OutputFormat, Severity};

use crate::call_site::CallSite;
use crate::capability::Log;

/// A call received by [`RecordingLogger`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoggedMessage {
    pub severity: Severity,
    pub message: String,
    /// Rendered call site, e.g. `[src/worker.rs - 40]`
    pub file: String,
}

#[derive(Debug, Default)]
struct MockState {
    messages: Vec<LoggedMessage>,
    context: Fields,
    format: OutputFormat,
}

/// Logger that records invocations instead of rendering them.
///
/// Every severity is recorded; there is no minimum and `fatal` does not end
/// the process.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    state: Mutex<MockState>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<LoggedMessage> {
        self.lock().messages.clone()
    }

    /// Messages only, in call order
    pub fn texts(&self) -> Vec<String> {
        self.lock()
            .messages
            .iter()
            .map(|m| m.message.clone())
            .collect()
    }

    pub fn context(&self) -> Fields {
        self.lock().context.clone()
    }

    pub fn output_format(&self) -> OutputFormat {
        self.lock().format
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Log for RecordingLogger {
    fn add_fields(&self, incoming: Fields) {
        fields::merge(&mut self.lock().context, incoming);
    }

    fn set_output_format(&self, format: OutputFormat) {
        self.lock().format = format;
    }

    #[track_caller]
    fn log(&self, severity: Severity, args: Arguments<'_>) {
        let file = CallSite::caller().to_string();
        let message = fmt::format(args);
        self.lock().messages.push(LoggedMessage {
            severity,
            message,
            file,
        });
    }
}
