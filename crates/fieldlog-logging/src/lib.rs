//! Structured logging facade for fieldlog
//!
//! This crate wraps a leveled, field-annotated sink with:
//! - Call-site enrichment: every record carries a `file` field naming the
//!   code that logged it, e.g. `[worker/pool.rs - 87]`
//! - Context fields: a per-logger map merged into every record, safe to
//!   extend from any thread while other threads log
//! - Level gating before any formatting or copying happens
//!
//! # Usage
//!
//! ```rust
//! use fieldlog_core_types::fields;
//! use fieldlog_logging::{log_info, log_warning, Logger};
//!
//! let logger = Logger::with_fields("info", fields! { "service" => "api" });
//! logger.set_formatter("text");
//!
//! log_info!(logger, "ready");
//! logger.add_fields(fields! { "port" => 8080 });
//! log_warning!(logger, "slow start: {} ms", 1200);
//! ```
//!
//! # Modules
//!
//! - [`facade`]: the [`Logger`] facade
//! - [`call_site`]: caller location capture and rendering
//! - [`sink`]: the [`Sink`] trait and the `tracing`-backed [`TracingSink`]
//! - [`capability`]: the [`Log`] trait shared with the [`mock`] test double
//! - [`bridge`]: routing `log` crate records through a facade
//! - [`test_capture`]: in-memory sink and writer for assertions

pub mod bridge;
pub mod call_site;
pub mod capability;
pub mod errors;
pub mod facade;
pub mod macros;
pub mod mock;
pub mod sink;
pub mod test_capture;

pub use bridge::LogBridge;
pub use call_site::CallSite;
pub use capability::Log;
pub use errors::{LoggingError, Result};
pub use facade::Logger;
pub use mock::RecordingLogger;
pub use sink::{Sink, TracingSink};
