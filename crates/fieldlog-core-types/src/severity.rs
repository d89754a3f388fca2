//! Ordered log severities

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ParseError;

/// Severity of a log record
///
/// Variants are ordered from least to most severe, so a record passes a
/// minimum-severity gate when `record >= minimum`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
    Fatal,
}

impl Severity {
    /// All severities, least severe first
    pub const ALL: [Severity; 5] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Fatal,
    ];

    /// Canonical lowercase name
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Fatal => "fatal",
        }
    }

    /// Lenient parse of a configured minimum severity.
    ///
    /// Only `debug`, `info`, `warning` and `error` are accepted (any case);
    /// everything else, `fatal` and aliases included, selects `Info`.
    ///
    /// ```
    /// use fieldlog_core_types::Severity;
    ///
    /// assert_eq!(Severity::from_level_str("debug"), Severity::Debug);
    /// assert_eq!(Severity::from_level_str("chatty"), Severity::Info);
    /// assert_eq!(Severity::from_level_str("fatal"), Severity::Info);
    /// ```
    pub fn from_level_str(level: &str) -> Self {
        match level.trim().to_ascii_lowercase().as_str() {
            "debug" => Severity::Debug,
            "warning" => Severity::Warning,
            "error" => Severity::Error,
            _ => Severity::Info,
        }
    }

    /// Whether a record at this severity passes a gate set to `minimum`
    pub fn is_enabled_at(self, minimum: Severity) -> bool {
        self >= minimum
    }
}

impl FromStr for Severity {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warning" | "warn" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            "fatal" => Ok(Severity::Fatal),
            _ => Err(ParseError::UnknownSeverity {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
