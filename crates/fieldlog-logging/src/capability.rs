//! Logger capability trait
//!
//! Code that only needs to log can accept `&impl Log` (or a generic
//! `L: Log`) and be handed either the real [`Logger`] or a
//! [`RecordingLogger`](crate::mock::RecordingLogger) in tests.

use std::fmt::Arguments;

use fieldlog_core_types::{Fields, OutputFormat, Severity};

use crate::facade::Logger;

/// Logging capabilities shared by the facade and its test double.
///
/// Every emit method is `#[track_caller]`, in the declaration, so
/// implementations report the location of the code calling them.
pub trait Log: Send + Sync {
    /// Merge fields into the persistent context
    fn add_fields(&self, fields: Fields);

    /// Switch between structured and text rendering
    fn set_output_format(&self, format: OutputFormat);

    /// Emit at `severity`
    #[track_caller]
    fn log(&self, severity: Severity, args: Arguments<'_>);

    #[track_caller]
    fn fatal(&self, args: Arguments<'_>) {
        self.log(Severity::Fatal, args);
    }

    #[track_caller]
    fn error(&self, args: Arguments<'_>) {
        self.log(Severity::Error, args);
    }

    #[track_caller]
    fn warning(&self, args: Arguments<'_>) {
        self.log(Severity::Warning, args);
    }

    #[track_caller]
    fn info(&self, args: Arguments<'_>) {
        self.log(Severity::Info, args);
    }

    #[track_caller]
    fn debug(&self, args: Arguments<'_>) {
        self.log(Severity::Debug, args);
    }
}

impl Log for Logger {
    fn add_fields(&self, fields: Fields) {
        Logger::add_fields(self, fields);
    }

    fn set_output_format(&self, format: OutputFormat) {
        Logger::set_output_format(self, format);
    }

    #[track_caller]
    fn log(&self, severity: Severity, args: Arguments<'_>) {
        Logger::log(self, severity, args);
    }
}
