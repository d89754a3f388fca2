#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use fieldlog_core_types::{fields, Fields, Severity, Value};
use fieldlog_logging::test_capture::RecordingSink;
use fieldlog_logging::{log_debug, log_error, log_fatal, log_info, log_warning, Logger};
use proptest::prelude::*;

fn recording_logger(level: &str, fields: Fields) -> (Logger, RecordingSink) {
    let sink = RecordingSink::new();
    let logger = Logger::with_sink(
        Severity::from_level_str(level),
        fields,
        Arc::new(sink.clone()),
    );
    (logger, sink)
}

#[test]
fn test_warning_logger_drops_debug_and_keeps_warning() {
    let (logger, sink) = recording_logger("warning", Fields::new());

    log_debug!(logger, "x={}", 5);
    assert_eq!(sink.len(), 0, "debug must not reach the sink");

    log_warning!(logger, "y={}", 7);

    let records = sink.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].severity, Severity::Warning);
    assert_eq!(records[0].message, "y=7");
    assert!(records[0].fields.contains_key("file"));
}

#[test]
fn test_initial_fields_reach_the_sink() {
    let (logger, sink) = recording_logger("info", fields! { "service" => "api" });

    log_info!(logger, "ready");

    let record = &sink.records()[0];
    assert_eq!(record.fields["service"], "api");
    assert!(record.file().unwrap().contains("facade_tests.rs"));
    assert_eq!(record.fields.len(), 2);
}

#[test]
fn test_record_contains_every_context_key_plus_file() {
    let (logger, sink) = recording_logger("debug", fields! { "a" => 1 });
    logger.add_fields(fields! { "b" => true, "c" => "three" });

    log_error!(logger, "boom");

    let record = &sink.records()[0];
    for key in ["a", "b", "c", "file"] {
        assert!(record.fields.contains_key(key), "missing key {key}");
    }
}

#[test]
fn test_add_fields_last_write_wins() {
    let (logger, sink) = recording_logger("info", Fields::new());

    logger.add_fields(fields! { "a" => 1 });
    logger.add_fields(fields! { "a" => 2 });
    log_info!(logger, "after");

    assert_eq!(logger.context()["a"], 2);
    assert_eq!(sink.records()[0].fields["a"], 2);
}

#[test]
fn test_delivered_fields_are_a_copy() {
    let (logger, sink) = recording_logger("info", fields! { "phase" => "boot" });

    log_info!(logger, "first");
    logger.add_fields(fields! { "phase" => "serve", "extra" => 1 });

    let mut delivered = sink.records()[0].fields.clone();
    assert_eq!(delivered["phase"], "boot");
    assert!(!delivered.contains_key("extra"));

    delivered.insert("phase".to_string(), Value::from("tampered"));
    assert_eq!(logger.context()["phase"], "serve");
    assert!(!logger.context().contains_key("file"));
}

#[test]
fn test_file_field_names_the_calling_line() {
    let (logger, sink) = recording_logger("debug", Fields::new());

    let line = line!() + 1;
    log_info!(logger, "located");
    let direct_line = line!() + 1;
    logger.warning(format_args!("direct"));

    let records = sink.records();
    assert_eq!(
        records[0].file(),
        Some(format!("[tests/facade_tests.rs - {}]", line).as_str())
    );
    assert_eq!(
        records[1].file(),
        Some(format!("[tests/facade_tests.rs - {}]", direct_line).as_str())
    );
}

#[track_caller]
fn component_log(logger: &Logger, message: &str) {
    log_info!(logger, "component: {}", message);
}

fn untracked_log(logger: &Logger) -> u32 {
    let line = line!() + 1;
    log_info!(logger, "untracked");
    line
}

#[test]
fn test_tracked_wrapper_reports_its_caller() {
    let (logger, sink) = recording_logger("info", Fields::new());

    let line = line!() + 1;
    component_log(&logger, "started");
    let wrapper_line = untracked_log(&logger);

    let records = sink.records();
    assert_eq!(records[0].message, "component: started");
    assert!(records[0].file().unwrap().ends_with(&format!(" - {}]", line)));
    assert!(records[1]
        .file()
        .unwrap()
        .ends_with(&format!(" - {}]", wrapper_line)));
}

#[test]
fn test_fatal_reaches_sink_with_fields() {
    let (logger, sink) = recording_logger("error", fields! { "job" => "sync" });

    log_fatal!(logger, "cannot continue: {}", "disk gone");

    let record = &sink.records()[0];
    assert_eq!(record.severity, Severity::Fatal);
    assert_eq!(record.message, "cannot continue: disk gone");
    assert_eq!(record.fields["job"], "sync");
}

#[test]
fn test_arc_logger_works_with_macros() {
    let sink = RecordingSink::new();
    let logger = Arc::new(Logger::with_sink(
        Severity::Info,
        Fields::new(),
        Arc::new(sink.clone()),
    ));

    log_info!(logger, "shared {}", 1);
    sink.assert_record_exists(Severity::Info, "shared 1");
}

#[test]
fn test_two_facades_share_one_sink_independently() {
    let sink = RecordingSink::new();
    let api = Logger::with_sink(
        Severity::Info,
        fields! { "component" => "api" },
        Arc::new(sink.clone()),
    );
    let db = Logger::with_sink(
        Severity::Error,
        fields! { "component" => "db" },
        Arc::new(sink.clone()),
    );

    api.add_fields(fields! { "request" => 7 });
    log_info!(api, "handled");
    log_info!(db, "dropped");
    log_error!(db, "lost connection");

    let records = sink.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].fields["component"], "api");
    assert_eq!(records[1].fields["component"], "db");
    assert!(!records[1].fields.contains_key("request"));
}

proptest! {
    #[test]
    fn prop_gate_controls_sink_calls(min_idx in 0usize..5, sev_idx in 0usize..5) {
        let minimum = Severity::ALL[min_idx];
        let severity = Severity::ALL[sev_idx];
        let sink = RecordingSink::new();
        let logger = Logger::with_sink(minimum, fields! { "k" => "v" }, Arc::new(sink.clone()));

        logger.log(severity, format_args!("gated"));

        let expected = usize::from(severity >= minimum);
        prop_assert_eq!(sink.len(), expected);
        prop_assert_eq!(logger.context(), fields! { "k" => "v" });
        if expected == 1 {
            let record = &sink.records()[0];
            prop_assert_eq!(record.severity, severity);
            prop_assert!(record.fields.contains_key("file"));
        }
    }
}
