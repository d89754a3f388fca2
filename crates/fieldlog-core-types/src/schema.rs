//! Canonical schema constants for structured logging
//!
//! These constants keep field names consistent between the facade, the sinks
//! and anything that reads their output.

// Field keys added by the facade
pub const FIELD_FILE: &str = "file";

/// `tracing` field carrying the serialized context map.
///
/// `tracing` macros take field names as identifiers, so the sink writes the
/// literal `context`; readers of its events match on this constant.
pub const FIELD_CONTEXT: &str = "context";

/// `tracing` field set to `true` on fatal records, written literally like
/// [`FIELD_CONTEXT`]
pub const FIELD_FATAL: &str = "fatal";

/// Field holding the `log` target of bridged records
pub const FIELD_TARGET: &str = "target";

/// Rendered call site when no file/line is available
pub const UNKNOWN_CALL_SITE: &str = "[unknown]";

/// Environment variable read by front ends to pick the minimum severity
pub const ENV_LOG_LEVEL: &str = "SIMET_LOG_LEVEL";

/// Process exit status used after a fatal record has been written
pub const FATAL_EXIT_CODE: i32 = 1;
