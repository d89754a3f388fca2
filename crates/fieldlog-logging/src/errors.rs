use thiserror::Error;

/// Result type alias using LoggingError
pub type Result<T> = std::result::Result<T, LoggingError>;

/// Errors raised while wiring the facade into the process
#[derive(Debug, Error)]
pub enum LoggingError {
    /// `log::set_boxed_logger` was already called in this process
    #[error("a global `log` logger is already installed")]
    BridgeAlreadyInstalled,
}
