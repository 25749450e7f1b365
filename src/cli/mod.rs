//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no business logic - that belongs in the [`crate::core`] module.

pub mod commands;
pub mod output;

use anyhow::Result;
use clap::Parser;
use tokio_util::sync::CancellationToken;

use commands::Commands;
use output::OutputConfig;

/// licache - List, view, and write SPDX licenses
///
/// License data comes from the official SPDX license list and is cached
/// locally for the configured TTL.
#[derive(Parser, Debug)]
#[command(name = "licache")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except results and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format for scripting
    #[arg(short = 'j', long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Output settings derived from the global flags
    pub fn output_config(&self) -> OutputConfig {
        OutputConfig::new(self.quiet, self.json, self.verbose)
    }

    /// Execute the CLI command
    ///
    /// Ctrl-C cancels an in-flight network request.
    pub async fn run(self) -> Result<()> {
        let output = self.output_config();

        let Some(command) = self.command else {
            use clap::CommandFactory;
            Self::command().print_help()?;
            return Ok(());
        };

        let cancel = CancellationToken::new();
        let on_interrupt = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::debug!("Interrupted, cancelling");
                on_interrupt.cancel();
            }
        });

        command.run(&output, cancel).await
    }
}
