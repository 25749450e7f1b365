//! licache CLI - List, view, and write SPDX licenses
//!
//! Entry point for the licache command-line application.

use clap::Parser;

use licache::cli::output::{display_error, init_tracing};
use licache::cli::Cli;
use licache::error::{exit_code_for, LicacheError};

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not errors
            let code = if e.use_stderr() {
                LicacheError::EXIT_USAGE
            } else {
                LicacheError::EXIT_SUCCESS
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    init_tracing(&cli.output_config());

    if let Err(e) = cli.run().await {
        display_error(&e);
        std::process::exit(exit_code_for(&e));
    }
}
