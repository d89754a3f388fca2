use thiserror::Error;

/// Result type alias using ParseError
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors raised when configuration strings cannot be interpreted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown severity '{value}' (expected debug, info, warning, error or fatal)")]
    UnknownSeverity { value: String },

    #[error("unknown output format '{value}' (expected json or text)")]
    UnknownFormat { value: String },
}
