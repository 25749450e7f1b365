//! Output formatting and logging setup
//!
//! Results go to stdout, diagnostics and logs to stderr.

use std::io::Write;

use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::error::LicacheError;

/// Output settings from the global flags
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Suppress informational messages
    pub quiet: bool,
    /// Emit JSON instead of plain text
    pub json: bool,
    /// Verbosity level (0 = warn, 1 = info, 2+ = debug)
    pub verbose: u8,
}

impl OutputConfig {
    pub fn new(quiet: bool, json: bool, verbose: u8) -> Self {
        Self {
            quiet,
            json,
            verbose,
        }
    }

    /// Log level implied by the flags
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            return tracing::Level::ERROR;
        }
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        }
    }
}

/// Initialize the tracing subscriber on stderr
///
/// `RUST_LOG` directives are honored on top of the level implied by `output`.
pub fn init_tracing(output: &OutputConfig) {
    let filter = EnvFilter::from_default_env().add_directive(output.log_level().into());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Write `content` to stdout as is
pub fn write_stdout(content: &str) -> Result<(), LicacheError> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(content.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|e| LicacheError::IoOrNetwork {
            context: "failed to write output".to_string(),
            error: e.to_string(),
        })
}

/// Write `value` to stdout as a single line of JSON
pub fn print_json<T: Serialize>(value: &T) -> Result<(), LicacheError> {
    let mut json = serde_json::to_string(value).map_err(|e| LicacheError::IoOrNetwork {
        context: "failed to encode JSON".to_string(),
        error: e.to_string(),
    })?;
    json.push('\n');
    write_stdout(&json)
}

/// Print an error and its causes to stderr
pub fn display_error(error: &anyhow::Error) {
    eprintln!("{} {error:#}", status::ERROR);
}

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";
}
