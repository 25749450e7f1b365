//! Global configuration management
//!
//! Reads and manages global settings from `config.toml` in the config directory.
//! Global settings include the favorite license, aliases, SPDX URLs and the
//! cache TTL.

use crate::config::{defaults, urls};
use crate::infra::dirs::LicacheDirs;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Global configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file '{path}': {error}")]
    ReadError { path: String, error: String },

    /// Failed to parse config file
    #[error("Failed to parse config file '{path}': {error}")]
    ParseError { path: String, error: String },
}

/// Global configuration for licache
///
/// ```toml
/// favorite = "MIT"
///
/// [aliases]
/// apache = "Apache-2.0"
///
/// [spdx]
/// list_url = "https://example.com/licenses.json"
/// details_url_template = "https://example.com/details/{id}.json"
///
/// [cache]
/// ttl = 3600
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GlobalConfig {
    /// License written by `write` when no identifier is given
    pub favorite: Option<String>,

    /// Short names mapped to SPDX identifiers
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,

    /// SPDX endpoints
    #[serde(default)]
    pub spdx: SpdxConfig,

    /// Cache settings
    #[serde(default)]
    pub cache: CacheConfig,
}

/// SPDX endpoint configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpdxConfig {
    /// Custom license list URL
    pub list_url: Option<String>,

    /// Custom details URL template containing `{id}`
    pub details_url_template: Option<String>,
}

/// Cache configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CacheConfig {
    /// Cache TTL in seconds; 0 disables reuse of cached data
    pub ttl: Option<u64>,
}

impl GlobalConfig {
    /// Load global configuration from the config directory
    ///
    /// If the config file doesn't exist, returns default configuration.
    /// If the config file exists but is invalid, returns an error.
    pub fn load(dirs: &LicacheDirs) -> Result<Self, ConfigError> {
        Self::load_from_path(&dirs.global_config_path())
    }

    /// Load global configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            error: e.to_string(),
        })
    }

    /// Get the effective license list URL
    #[must_use]
    pub fn list_url(&self) -> &str {
        self.spdx
            .list_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(urls::SPDX_LIST)
    }

    /// Get the effective details URL template
    #[must_use]
    pub fn details_url_template(&self) -> &str {
        self.spdx
            .details_url_template
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(urls::SPDX_DETAILS_TEMPLATE)
    }

    /// Get the effective cache TTL
    ///
    /// An absent setting maps to the 24 hour default; an explicit 0 is kept and
    /// means cached data is never reused.
    #[must_use]
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache.ttl.unwrap_or(defaults::CACHE_TTL))
    }

    /// Favorite license, ignoring an empty string
    #[must_use]
    pub fn favorite(&self) -> Option<&str> {
        self.favorite.as_deref().filter(|f| !f.is_empty())
    }

    /// Resolve an alias to an SPDX identifier
    ///
    /// Aliases take precedence over a literal identifier; anything that is not
    /// an alias is returned unchanged.
    #[must_use]
    pub fn resolve<'a>(&'a self, id_or_alias: &'a str) -> &'a str {
        self.aliases
            .get(id_or_alias)
            .map_or(id_or_alias, String::as_str)
    }
}
