//! Leveled logging macros
//!
//! Each macro takes a logger (anything with the facade's emit methods, or a
//! [`Log`](crate::Log) implementor) followed by `format!`-style arguments.
//! The message is only formatted when the record passes the logger's
//! minimum severity, and the reported call site is the macro invocation.

/// Log at debug severity
///
/// # Example
///
/// ```
/// # use fieldlog_logging::{log_debug, Logger};
/// let logger = Logger::new("info");
/// log_debug!(logger, "cache hit ratio {:.2}", 0.93);
/// ```
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)+) => {{
        #[allow(unused_imports)]
        use $crate::Log as _;
        $logger.debug(::std::format_args!($($arg)+))
    }};
}

/// Log at info severity
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)+) => {{
        #[allow(unused_imports)]
        use $crate::Log as _;
        $logger.info(::std::format_args!($($arg)+))
    }};
}

/// Log at warning severity
#[macro_export]
macro_rules! log_warning {
    ($logger:expr, $($arg:tt)+) => {{
        #[allow(unused_imports)]
        use $crate::Log as _;
        $logger.warning(::std::format_args!($($arg)+))
    }};
}

/// Log at error severity
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)+) => {{
        #[allow(unused_imports)]
        use $crate::Log as _;
        $logger.error(::std::format_args!($($arg)+))
    }};
}

/// Log at fatal severity. With the production sink the process exits after
/// the record is written.
#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $($arg:tt)+) => {{
        #[allow(unused_imports)]
        use $crate::Log as _;
        $logger.fatal(::std::format_args!($($arg)+))
    }};
}
