//! Sink rendering records through `tracing-subscriber`
//!
//! Each sink owns its own `tracing::Dispatch`, so two facades can render in
//! different formats or at different levels without touching the process-wide
//! default subscriber.

use std::io::{self, Stderr};
use std::sync::{PoisonError, RwLock, RwLockReadGuard};

use fieldlog_core_types::schema::{FATAL_EXIT_CODE, FIELD_FILE, UNKNOWN_CALL_SITE};
use fieldlog_core_types::{Fields, OutputFormat, Severity};
use serde_json::{Map, Value};
use tracing::level_filters::LevelFilter;
use tracing::{Dispatch, Level};
use tracing_subscriber::fmt::MakeWriter;

use crate::sink::{FlatJson, Sink};

/// Production sink backed by a `tracing_subscriber::fmt` subscriber.
///
/// Records carry two fields besides the message: `file`, the resolved call
/// site, and `context`, the remaining fields. JSON output spreads the context
/// keys over the top level of each record as typed values (see [`FlatJson`]);
/// text output shows `context` as a compact JSON object.
///
/// # Example
///
/// ```
/// use fieldlog_logging::{Sink, TracingSink};
/// use fieldlog_core_types::{fields, OutputFormat, Severity};
///
/// let sink = TracingSink::new();
/// sink.set_output_format(OutputFormat::Text);
/// sink.emit(Severity::Info, "ready", fields! { "service" => "api" });
/// ```
pub struct TracingSink<W = fn() -> Stderr> {
    writer: W,
    state: RwLock<SinkState>,
}

struct SinkState {
    format: OutputFormat,
    minimum: Severity,
    dispatch: Dispatch,
}

impl TracingSink {
    /// JSON sink writing to stderr
    pub fn new() -> Self {
        Self::with_writer(io::stderr as fn() -> Stderr)
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> TracingSink<W>
where
    W: for<'w> MakeWriter<'w> + Clone + Send + Sync + 'static,
{
    /// JSON sink writing through `writer`, passing every severity until
    /// [`Sink::set_minimum_severity`] narrows it
    pub fn with_writer(writer: W) -> Self {
        let format = OutputFormat::Json;
        let minimum = Severity::Debug;
        let dispatch = build_dispatch(writer.clone(), format, minimum);
        Self {
            writer,
            state: RwLock::new(SinkState {
                format,
                minimum,
                dispatch,
            }),
        }
    }

    pub fn output_format(&self) -> OutputFormat {
        self.read_state().format
    }

    pub fn minimum_severity(&self) -> Severity {
        self.read_state().minimum
    }

    fn read_state(&self) -> RwLockReadGuard<'_, SinkState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn reconfigure(&self, update: impl FnOnce(&mut SinkState)) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        update(&mut state);
        state.dispatch = build_dispatch(self.writer.clone(), state.format, state.minimum);
    }
}

impl<W> Sink for TracingSink<W>
where
    W: for<'w> MakeWriter<'w> + Clone + Send + Sync + 'static,
{
    fn emit(&self, severity: Severity, message: &str, mut fields: Fields) {
        let file = match fields.remove(FIELD_FILE) {
            Some(Value::String(file)) => file,
            Some(other) => other.to_string(),
            None => UNKNOWN_CALL_SITE.to_string(),
        };
        let context = Value::Object(fields.into_iter().collect::<Map<String, Value>>());
        let dispatch = self.read_state().dispatch.clone();

        tracing::dispatcher::with_default(&dispatch, || match severity {
            Severity::Debug => tracing::debug!(file = %file, context = %context, "{}", message),
            Severity::Info => tracing::info!(file = %file, context = %context, "{}", message),
            Severity::Warning => tracing::warn!(file = %file, context = %context, "{}", message),
            Severity::Error => tracing::error!(file = %file, context = %context, "{}", message),
            Severity::Fatal => {
                tracing::error!(file = %file, context = %context, fatal = true, "{}", message)
            }
        });

        if severity == Severity::Fatal {
            std::process::exit(FATAL_EXIT_CODE);
        }
    }

    fn set_output_format(&self, format: OutputFormat) {
        self.reconfigure(|state| state.format = format);
    }

    fn set_minimum_severity(&self, severity: Severity) {
        self.reconfigure(|state| state.minimum = severity);
    }
}

/// Map a severity onto the closest `tracing` level; fatal renders as error
pub fn tracing_level(severity: Severity) -> Level {
    match severity {
        Severity::Debug => Level::DEBUG,
        Severity::Info => Level::INFO,
        Severity::Warning => Level::WARN,
        Severity::Error | Severity::Fatal => Level::ERROR,
    }
}

fn build_dispatch<W>(writer: W, format: OutputFormat, minimum: Severity) -> Dispatch
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let builder = tracing_subscriber::fmt()
        .with_writer(writer)
        .with_max_level(LevelFilter::from_level(tracing_level(minimum)))
        .with_ansi(false)
        .with_target(false);

    match format {
        OutputFormat::Json => Dispatch::new(builder.event_format(FlatJson).finish()),
        OutputFormat::Text => Dispatch::new(builder.finish()),
    }
}
