//! CLI command implementations

pub mod emit;
