//! CLI tool for building and checking tracing endpoints.
//!
//! Provides commands for:
//! - Building an endpoint from flags and printing its canonical JSON
//! - Re-canonicalizing endpoint JSON read from arguments or stdin

pub mod commands;
pub mod config;

pub use commands::{Command, CommandResult};
pub use config::CliConfig;
