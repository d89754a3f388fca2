//! Emit command
//!
//! Usage: fieldlog emit <SEVERITY> <MESSAGE> [--field <KEY=VALUE>]...

use clap::Args;
use fieldlog_core_types::{Fields, OutputFormat, Severity, Value};
use fieldlog_logging::Logger;

#[derive(Debug, Args)]
pub struct EmitArgs {
    /// Severity of the record (debug, info, warning, error, fatal)
    pub severity: Severity,

    /// Message text
    pub message: String,

    /// Context field as KEY=VALUE; values are read as JSON when they parse
    #[arg(short, long = "field", value_parser = parse_field)]
    pub fields: Vec<(String, Value)>,
}

/// Execute emit command
pub fn execute(args: EmitArgs, level: &str, format: OutputFormat) {
    let fields: Fields = args.fields.into_iter().collect();
    let logger = Logger::with_fields(level, fields);
    logger.set_output_format(format);

    logger.log(args.severity, format_args!("{}", args.message));
}

/// Parse a `KEY=VALUE` pair
fn parse_field(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", raw))?;
    if key.is_empty() {
        return Err(format!("empty key in '{}'", raw));
    }
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}
