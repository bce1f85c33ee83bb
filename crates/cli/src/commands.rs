//! Subcommands and their execution.

use std::io::BufRead;
use std::net::{Ipv4Addr, Ipv6Addr};

use anyhow::Context;
use clap::Subcommand;
use corelib::Endpoint;
use tracing::{debug, info};

/// Operations exposed by the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Build an endpoint from flags and print its canonical JSON.
    Build {
        /// Logical service name; lowercased on output.
        #[arg(long)]
        service_name: String,
        #[arg(long)]
        ipv4: Option<Ipv4Addr>,
        #[arg(long)]
        ipv6: Option<Ipv6Addr>,
        /// Port; 0 means absent.
        #[arg(long, allow_negative_numbers = true)]
        port: Option<i32>,
    },
    /// Read endpoint JSON and print it in canonical form.
    ///
    /// Without an argument, one object per line is read from stdin.
    Canonicalize {
        json: Option<String>,
    },
}

/// Lines of canonical JSON produced by a command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResult {
    pub lines: Vec<String>,
}

impl Command {
    /// Run the command. `input` is only consulted by `canonicalize` when no
    /// JSON argument was given.
    pub fn execute(&self, input: impl BufRead) -> anyhow::Result<CommandResult> {
        match self {
            Command::Build {
                service_name,
                ipv4,
                ipv6,
                port,
            } => {
                let mut builder = Endpoint::builder().service_name(service_name);
                if let Some(ipv4) = ipv4 {
                    builder = builder.ipv4_addr(*ipv4);
                }
                if let Some(ipv6) = ipv6 {
                    builder = builder.ipv6_addr(*ipv6);
                }
                if let Some(port) = port {
                    builder = builder.port(*port)?;
                }
                let endpoint = builder.build().context("building endpoint")?;
                info!(service = endpoint.service_name(), "built endpoint");
                Ok(CommandResult {
                    lines: vec![endpoint.to_json()],
                })
            }
            Command::Canonicalize { json: Some(json) } => Ok(CommandResult {
                lines: vec![canonicalize(json)?],
            }),
            Command::Canonicalize { json: None } => {
                let mut lines = Vec::new();
                for (index, line) in input.lines().enumerate() {
                    let line = line.context("reading stdin")?;
                    if line.trim().is_empty() {
                        continue;
                    }
                    let canonical = canonicalize(&line)
                        .with_context(|| format!("line {}", index + 1))?;
                    lines.push(canonical);
                }
                debug!(count = lines.len(), "canonicalized endpoints");
                Ok(CommandResult { lines })
            }
        }
    }
}

fn canonicalize(json: &str) -> anyhow::Result<String> {
    let endpoint = Endpoint::from_json(json.trim())?;
    Ok(endpoint.to_json())
}
