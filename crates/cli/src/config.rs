//! Command-line configuration and logging setup.

use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::commands::Command;

/// Top-level CLI configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "endpoint", version, about = "Build and canonicalize tracing endpoints")]
pub struct CliConfig {
    /// Log filter used when `RUST_LOG` is unset (e.g. `debug`, `corelib=trace`).
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

impl CliConfig {
    /// Install logging, execute the command and print its output.
    pub fn run(self) -> anyhow::Result<()> {
        self.init_logging()?;

        let stdin = io::stdin();
        let result = self.command.execute(stdin.lock())?;

        let mut stdout = io::stdout().lock();
        for line in &result.lines {
            writeln!(stdout, "{line}").context("writing output")?;
        }
        Ok(())
    }

    /// Logs go to stderr so stdout carries only JSON.
    fn init_logging(&self) -> anyhow::Result<()> {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.log_level))
            .with_context(|| format!("invalid log filter {:?}", self.log_level))?;

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .try_init()
            .map_err(|err| anyhow::anyhow!(err).context("installing log subscriber"))
    }
}
