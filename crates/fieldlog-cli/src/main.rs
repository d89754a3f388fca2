//! fieldlog CLI
//!
//! Command-line front end for the fieldlog facade

use clap::{Parser, Subcommand};
use fieldlog_core_types::schema::ENV_LOG_LEVEL;
use fieldlog_core_types::OutputFormat;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "fieldlog")]
#[command(about = "fieldlog - emit structured, call-site enriched log records", long_about = None)]
struct Cli {
    /// Minimum severity (debug, info, warning, error); unknown values select info
    #[arg(long, global = true, env = ENV_LOG_LEVEL, default_value = "info")]
    level: String,

    /// Output format (json or text)
    #[arg(long, global = true, default_value = "json")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Emit a single record to stderr
    Emit(commands::emit::EmitArgs),
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Emit(args) => commands::emit::execute(args, &cli.level, cli.format),
    }
}
