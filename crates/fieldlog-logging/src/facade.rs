//! The logging facade
//!
//! [`Logger`] enriches every record with the caller's location and a
//! persistent set of context fields before handing it to a [`Sink`].
//!
//! A `Logger` is `Send + Sync` and meant to be shared (`&Logger` or
//! `Arc<Logger>`). All mutation of the context goes through
//! [`Logger::add_fields`] under an exclusive lock. Emit methods never work
//! on the live map: they take a copy under a shared lock and hand that copy,
//! by value, to the sink. A sink can keep or read the map whenever it likes
//! without racing a concurrent `add_fields`.
//!
//! Emitting costs a lock, a map clone and message formatting, so every emit
//! method checks the minimum severity first and returns before doing any of
//! that work for records that would be discarded.

use std::fmt::{self, Arguments};
use std::sync::{Arc, PoisonError, RwLock};

use fieldlog_core_types::schema::FIELD_FILE;
use fieldlog_core_types::{fields, Fields, OutputFormat, Severity, Value};

use crate::call_site::CallSite;
use crate::sink::{Sink, TracingSink};

/// Leveled logger with call-site enrichment and shared context fields
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use fieldlog_core_types::{fields, Severity};
/// use fieldlog_logging::{log_info, test_capture::RecordingSink, Logger};
///
/// let sink = RecordingSink::new();
/// let logger = Logger::with_sink(
///     Severity::Info,
///     fields! { "service" => "api" },
///     Arc::new(sink.clone()),
/// );
///
/// log_info!(logger, "listening on port {}", 8080);
///
/// let record = &sink.records()[0];
/// assert_eq!(record.message, "listening on port 8080");
/// assert_eq!(record.fields["service"], "api");
/// assert!(record.file().is_some());
/// ```
pub struct Logger {
    level: Severity,
    sink: Arc<dyn Sink>,
    context: RwLock<Fields>,
}

impl Logger {
    /// Logger with an empty context rendering JSON to stderr.
    ///
    /// `level` is one of `debug`, `info`, `warning`, `error`; anything else
    /// selects `info`.
    pub fn new(level: &str) -> Self {
        Self::with_fields(level, Fields::new())
    }

    /// Like [`Logger::new`], starting from a copy of `fields`
    pub fn with_fields(level: &str, fields: Fields) -> Self {
        let level = Severity::from_level_str(level);
        let sink = TracingSink::new();
        sink.set_minimum_severity(level);
        Self::with_sink(level, fields, Arc::new(sink))
    }

    /// Logger on a caller-supplied sink.
    ///
    /// The sink may be shared between facades, so its own configuration is
    /// left as the caller set it up.
    pub fn with_sink(level: Severity, fields: Fields, sink: Arc<dyn Sink>) -> Self {
        Self {
            level,
            sink,
            context: RwLock::new(fields),
        }
    }

    pub fn level(&self) -> Severity {
        self.level
    }

    /// Whether a record at `severity` would reach the sink
    pub fn is_enabled(&self, severity: Severity) -> bool {
        severity.is_enabled_at(self.level)
    }

    /// Switch the sink's renderer
    pub fn set_output_format(&self, format: OutputFormat) {
        self.sink.set_output_format(format);
    }

    /// String form of [`Logger::set_output_format`]: `"text"` selects text
    /// rendering, anything else JSON
    pub fn set_formatter(&self, format: &str) {
        self.set_output_format(OutputFormat::from_format_str(format));
    }

    /// Merge `fields` into the persistent context; existing keys are
    /// overwritten
    pub fn add_fields(&self, fields: Fields) {
        let mut context = self.context.write().unwrap_or_else(PoisonError::into_inner);
        fields::merge(&mut context, fields);
    }

    /// Copy of the current context, taken under the shared lock
    pub fn context(&self) -> Fields {
        self.context
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Emit at `severity`, reporting the caller's location
    #[track_caller]
    pub fn log(&self, severity: Severity, args: Arguments<'_>) {
        if !self.is_enabled(severity) {
            return;
        }
        self.dispatch(severity, CallSite::caller(), Fields::new(), args);
    }

    /// Emit with an explicit call site and per-record fields.
    ///
    /// For adapters that already know where a record came from. `extra`
    /// overrides context keys for this record only; `file` is always set from
    /// `site`.
    pub fn log_at(
        &self,
        severity: Severity,
        site: CallSite<'_>,
        extra: Fields,
        args: Arguments<'_>,
    ) {
        if !self.is_enabled(severity) {
            return;
        }
        self.dispatch(severity, site, extra, args);
    }

    /// Emit a fatal record; the production sink ends the process afterwards
    #[track_caller]
    pub fn fatal(&self, args: Arguments<'_>) {
        self.log(Severity::Fatal, args);
    }

    #[track_caller]
    pub fn error(&self, args: Arguments<'_>) {
        self.log(Severity::Error, args);
    }

    #[track_caller]
    pub fn warning(&self, args: Arguments<'_>) {
        self.log(Severity::Warning, args);
    }

    #[track_caller]
    pub fn info(&self, args: Arguments<'_>) {
        self.log(Severity::Info, args);
    }

    #[track_caller]
    pub fn debug(&self, args: Arguments<'_>) {
        self.log(Severity::Debug, args);
    }

    fn dispatch(
        &self,
        severity: Severity,
        site: CallSite<'_>,
        extra: Fields,
        args: Arguments<'_>,
    ) {
        let mut record_fields = self.context();
        fields::merge(&mut record_fields, extra);
        record_fields.insert(FIELD_FILE.to_string(), Value::String(site.to_string()));

        let message = fmt::format(args);
        self.sink.emit(severity, &message, record_fields);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<String> = self.context().into_keys().collect();
        keys.sort();
        f.debug_struct("Logger")
            .field("level", &self.level)
            .field("context_keys", &keys)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_capture::RecordingSink;

    fn recording(level: Severity) -> (Logger, RecordingSink) {
        let sink = RecordingSink::new();
        let logger = Logger::with_sink(level, Fields::new(), Arc::new(sink.clone()));
        (logger, sink)
    }

    #[test]
    fn test_logger_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Logger>();
    }

    #[test]
    fn test_unknown_level_defaults_to_info() {
        assert_eq!(Logger::new("verbose").level(), Severity::Info);
        assert_eq!(Logger::new("debug").level(), Severity::Debug);
        assert_eq!(Logger::new("warning").level(), Severity::Warning);
        assert_eq!(Logger::new("error").level(), Severity::Error);
        assert_eq!(Logger::new("fatal").level(), Severity::Info);
        assert_eq!(Logger::new("warn").level(), Severity::Info);
    }

    #[test]
    fn test_with_fields_copies_initial_context() {
        let logger = Logger::with_fields("info", fields! { "service" => "api" });
        assert_eq!(logger.context(), fields! { "service" => "api" });
    }

    #[test]
    fn test_add_fields_overwrites() {
        let (logger, _sink) = recording(Severity::Info);
        logger.add_fields(fields! { "a" => 1 });
        logger.add_fields(fields! { "a" => 2, "b" => "x" });

        assert_eq!(logger.context(), fields! { "a" => 2, "b" => "x" });
    }

    #[test]
    fn test_below_minimum_is_dropped() {
        let (logger, sink) = recording(Severity::Warning);
        logger.debug(format_args!("x={}", 5));
        logger.info(format_args!("ignored"));

        assert!(sink.is_empty());
    }

    #[test]
    fn test_emit_adds_file_field() {
        let (logger, sink) = recording(Severity::Warning);
        logger.warning(format_args!("y={}", 7));

        let records = sink.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].severity, Severity::Warning);
        assert_eq!(records[0].message, "y=7");
        assert!(records[0].file().unwrap().contains("facade.rs"));
    }

    #[test]
    fn test_each_severity_routes_to_itself() {
        let (logger, sink) = recording(Severity::Debug);
        logger.debug(format_args!("d"));
        logger.info(format_args!("i"));
        logger.warning(format_args!("w"));
        logger.error(format_args!("e"));
        logger.fatal(format_args!("f"));

        let severities: Vec<Severity> = sink.records().iter().map(|r| r.severity).collect();
        assert_eq!(severities, Severity::ALL.to_vec());
    }

    #[test]
    fn test_log_at_uses_given_site_and_extra_fields() {
        let (logger, sink) = recording(Severity::Info);
        logger.add_fields(fields! { "target" => "context", "service" => "api" });

        logger.log_at(
            Severity::Info,
            CallSite::new("vendor/lib/net.rs", 88),
            fields! { "target" => "net" },
            format_args!("connected"),
        );
        logger.log_at(
            Severity::Debug,
            CallSite::unknown(),
            Fields::new(),
            format_args!("dropped"),
        );

        let records = sink.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].file(), Some("[lib/net.rs - 88]"));
        assert_eq!(records[0].fields["target"], "net");
        assert_eq!(records[0].fields["service"], "api");
        assert_eq!(logger.context()["target"], "context");
    }

    #[test]
    fn test_with_sink_leaves_sink_configuration_alone() {
        let (logger, sink) = recording(Severity::Error);
        assert_eq!(sink.minimum_severity(), None);

        logger.set_formatter("TEXT");
        assert_eq!(sink.output_format(), OutputFormat::Text);
        logger.set_formatter("anything");
        assert_eq!(sink.output_format(), OutputFormat::Json);
    }

    #[test]
    fn test_debug_lists_context_keys() {
        let (logger, _sink) = recording(Severity::Info);
        logger.add_fields(fields! { "zone" => 1, "app" => 2 });

        let rendered = format!("{:?}", logger);
        assert!(rendered.contains("level: Info"));
        assert!(rendered.contains("[\"app\", \"zone\"]"));
    }
}
