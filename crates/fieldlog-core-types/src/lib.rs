//! Core types shared across fieldlog crates
//!
//! This crate provides the vocabulary used by the logging facade and its
//! front ends:
//!
//! - **Severity**: ordered log levels and their string forms
//! - **Output format**: structured (JSON) or human-readable text rendering
//! - **Fields**: the key/value context attached to every record
//! - **Schema constants**: canonical field keys and placeholders

pub mod errors;
pub mod fields;
pub mod format;
pub mod schema;
pub mod severity;

pub use errors::{ParseError, Result};
pub use fields::Fields;
pub use format::OutputFormat;
pub use serde_json::Value;
pub use severity::Severity;
