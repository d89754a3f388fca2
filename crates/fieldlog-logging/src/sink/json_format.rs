//! Flat JSON rendering for [`TracingSink`](super::TracingSink)
//!
//! `tracing` only knows static field names, so the sink ships the dynamic
//! context as one serialized `context` field. This formatter unpacks it again
//! and writes every context key at the top level of the record with its
//! original JSON type:
//!
//! ```text
//! {"file":"[src/main.rs - 12]","level":"INFO","message":"ready","port":8080,"service":"api","timestamp":"..."}
//! ```
//!
//! A context key that clashes with one of the record's own keys is written
//! as `fields.<key>`.

use std::fmt;

use fieldlog_core_types::schema::{FIELD_CONTEXT, FIELD_FATAL, FIELD_FILE};
use serde_json::{Map, Value};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::{FormatTime, SystemTime};
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

const KEY_TIMESTAMP: &str = "timestamp";
const KEY_LEVEL: &str = "level";
const KEY_MESSAGE: &str = "message";

const RESERVED_KEYS: [&str; 5] = [KEY_TIMESTAMP, KEY_LEVEL, KEY_MESSAGE, FIELD_FILE, FIELD_FATAL];

/// Event formatter writing one flat JSON object per record
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatJson;

impl<S, N> FormatEvent<S, N> for FlatJson
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut visitor = RecordVisitor::default();
        event.record(&mut visitor);

        let mut timestamp = String::new();
        SystemTime.format_time(&mut Writer::new(&mut timestamp))?;

        let mut record = Map::new();
        record.insert(KEY_TIMESTAMP.to_string(), Value::String(timestamp));
        record.insert(
            KEY_LEVEL.to_string(),
            Value::String(event.metadata().level().to_string()),
        );
        record.insert(KEY_MESSAGE.to_string(), Value::String(visitor.message));
        if let Some(file) = visitor.file {
            record.insert(FIELD_FILE.to_string(), Value::String(file));
        }
        if visitor.fatal {
            record.insert(FIELD_FATAL.to_string(), Value::Bool(true));
        }
        for (key, value) in visitor.context {
            if RESERVED_KEYS.contains(&key.as_str()) {
                record.insert(format!("fields.{}", key), value);
            } else {
                record.insert(key, value);
            }
        }

        let line = serde_json::to_string(&Value::Object(record)).map_err(|_| fmt::Error)?;
        writeln!(writer, "{}", line)
    }
}

#[derive(Default)]
struct RecordVisitor {
    message: String,
    file: Option<String>,
    fatal: bool,
    context: Map<String, Value>,
}

impl RecordVisitor {
    fn record_text(&mut self, field: &Field, text: String) {
        match field.name() {
            KEY_MESSAGE => self.message = text,
            FIELD_FILE => self.file = Some(text),
            FIELD_CONTEXT => match serde_json::from_str::<Map<String, Value>>(&text) {
                Ok(context) => self.context.extend(context),
                Err(_) => {
                    self.context
                        .insert(FIELD_CONTEXT.to_string(), Value::String(text));
                }
            },
            other => {
                self.context.insert(other.to_string(), Value::String(text));
            }
        }
    }
}

impl Visit for RecordVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.record_text(field, format!("{:?}", value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.record_text(field, value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == FIELD_FATAL {
            self.fatal = value;
        } else {
            self.context.insert(field.name().to_string(), Value::Bool(value));
        }
    }
}
