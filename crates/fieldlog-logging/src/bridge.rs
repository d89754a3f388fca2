//! Bridge from the `log` crate
//!
//! Libraries that log through the `log` facade can be routed into a
//! [`Logger`], picking up its context fields. The record's target becomes the
//! `target` field and its file/line become the call site.

use std::sync::Arc;

use fieldlog_core_types::schema::FIELD_TARGET;
use fieldlog_core_types::{Fields, Severity, Value};

use crate::call_site::CallSite;
use crate::errors::{LoggingError, Result};
use crate::facade::Logger;

/// `log::Log` implementation forwarding into a facade
#[derive(Debug, Clone)]
pub struct LogBridge {
    logger: Arc<Logger>,
}

impl LogBridge {
    pub fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }

    /// Register a bridge as the process-wide `log` logger.
    ///
    /// The `log` max level is derived from the facade's minimum so disabled
    /// records are filtered before they are built.
    ///
    /// # Errors
    ///
    /// Returns [`LoggingError::BridgeAlreadyInstalled`] if a global `log`
    /// logger has already been set.
    pub fn install(logger: Arc<Logger>) -> Result<()> {
        let max_level = level_filter(logger.level());
        log::set_boxed_logger(Box::new(Self::new(logger)))
            .map_err(|_| LoggingError::BridgeAlreadyInstalled)?;
        log::set_max_level(max_level);
        Ok(())
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        self.logger.is_enabled(severity_for(metadata.level()))
    }

    fn log(&self, record: &log::Record<'_>) {
        let mut extra = Fields::new();
        extra.insert(
            FIELD_TARGET.to_string(),
            Value::String(record.target().to_string()),
        );
        self.logger.log_at(
            severity_for(record.level()),
            CallSite::from_parts(record.file(), record.line()),
            extra,
            *record.args(),
        );
    }

    fn flush(&self) {}
}

/// Trace folds into debug; there is no `log` counterpart for fatal
pub fn severity_for(level: log::Level) -> Severity {
    match level {
        log::Level::Error => Severity::Error,
        log::Level::Warn => Severity::Warning,
        log::Level::Info => Severity::Info,
        log::Level::Debug | log::Level::Trace => Severity::Debug,
    }
}

fn level_filter(minimum: Severity) -> log::LevelFilter {
    match minimum {
        Severity::Debug => log::LevelFilter::Trace,
        Severity::Info => log::LevelFilter::Info,
        Severity::Warning => log::LevelFilter::Warn,
        Severity::Error => log::LevelFilter::Error,
        Severity::Fatal => log::LevelFilter::Off,
    }
}
