//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod get;
pub mod ls;
pub mod write;

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;
use tokio_util::sync::CancellationToken;

use super::output::OutputConfig;
use crate::core::global_config::GlobalConfig;
use crate::core::list::ListOptions;
use crate::error::LicacheError;
use crate::infra::dirs::LicacheDirs;
use crate::registry::{LicenseCache, SpdxClient};

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all available SPDX licenses
    Ls {
        /// Case-insensitive filter on license ID or name
        #[arg(long)]
        filter: Option<String>,

        /// Restrict to a popular set (MIT, Apache-2.0, GPL-2.0, BSD-3-Clause, ISC)
        #[arg(long)]
        popular: bool,
    },

    /// Print license text by SPDX ID
    Get {
        /// SPDX license ID or configured alias
        id: String,
    },

    /// Write license text to a file (LICENSE by default)
    ///
    /// With no arguments, writes the configured favorite. Overwrites the file
    /// if it exists.
    Write {
        /// SPDX license ID or configured alias
        id: Option<String>,

        /// Destination file
        path: Option<PathBuf>,
    },
}

impl Commands {
    /// Execute the command
    pub async fn run(self, output: &OutputConfig, cancel: CancellationToken) -> Result<()> {
        let ctx = Context::load(cancel)?;

        match self {
            Commands::Ls { filter, popular } => {
                ls::execute(&ctx, &ListOptions { popular, filter }, output).await
            }
            Commands::Get { id } => get::execute(&ctx, &id, output).await,
            Commands::Write { id, path } => {
                write::execute(&ctx, id.as_deref(), path.as_deref(), output).await
            }
        }
    }
}

/// Configuration and cache shared by every command
pub struct Context {
    /// Loaded global configuration
    pub config: GlobalConfig,
    /// License cache backed by the SPDX client
    pub cache: LicenseCache<SpdxClient>,
    /// Fires when the user interrupts the process
    pub cancel: CancellationToken,
}

impl Context {
    /// Load configuration from the platform directories
    pub fn load(cancel: CancellationToken) -> Result<Self> {
        let dirs = LicacheDirs::new();
        let config = GlobalConfig::load(&dirs)?;
        Self::new(&dirs, config, cancel)
    }

    /// Build a context from already resolved parts
    pub fn new(
        dirs: &LicacheDirs,
        config: GlobalConfig,
        cancel: CancellationToken,
    ) -> Result<Self> {
        let client = SpdxClient::new().map_err(|e| LicacheError::IoOrNetwork {
            context: "initialize SPDX client".to_string(),
            error: e.to_string(),
        })?;
        let root = dirs.license_cache_dir();
        tracing::debug!("License cache at {}", root.display());
        Ok(Self {
            config,
            cache: LicenseCache::new(root, client),
            cancel,
        })
    }
}
