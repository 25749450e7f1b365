//! Platform-specific directory management
//!
//! Provides platform-specific paths for the cache and config directories.
//! Follows XDG Base Directory Specification on Linux and standard locations on macOS.
//!
//! Environment variables can override default directories:
//! - `LICACHE_CACHE_DIR` - Override cache directory
//! - `LICACHE_CONFIG_DIR` - Override config directory

use std::env;
use std::path::PathBuf;

/// Environment variable names for directory overrides
pub const ENV_CACHE_DIR: &str = "LICACHE_CACHE_DIR";
pub const ENV_CONFIG_DIR: &str = "LICACHE_CONFIG_DIR";

/// Application name used in directory paths
const APP_NAME: &str = "licache";

/// Subdirectory holding cached SPDX data
const LICENSES_SUBDIR: &str = "licenses";

/// Platform-specific directory provider for licache
#[derive(Debug, Clone)]
pub struct LicacheDirs {
    cache_dir: PathBuf,
    config_dir: PathBuf,
}

impl LicacheDirs {
    /// Create a new `LicacheDirs` instance
    ///
    /// Checks environment variables first, then falls back to platform defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache_dir: Self::resolve_cache_dir(),
            config_dir: Self::resolve_config_dir(),
        }
    }

    /// Build from explicit directories, bypassing the environment
    #[must_use]
    pub fn with_dirs(cache_dir: PathBuf, config_dir: PathBuf) -> Self {
        Self {
            cache_dir,
            config_dir,
        }
    }

    /// Get the cache directory path
    ///
    /// - Linux: `$XDG_CACHE_HOME/licache` or `~/.cache/licache`
    /// - macOS: `~/Library/Caches/licache`
    #[must_use]
    pub fn cache_dir(&self) -> PathBuf {
        self.cache_dir.clone()
    }

    /// Get the config directory path
    ///
    /// - Linux: `$XDG_CONFIG_HOME/licache` or `~/.config/licache`
    /// - macOS: `~/Library/Application Support/licache`
    #[must_use]
    pub fn config_dir(&self) -> PathBuf {
        self.config_dir.clone()
    }

    /// Root of the license cache (`list.json` and `details/` live here)
    #[must_use]
    pub fn license_cache_dir(&self) -> PathBuf {
        self.cache_dir.join(LICENSES_SUBDIR)
    }

    /// Get the global config file path
    #[must_use]
    pub fn global_config_path(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    fn resolve_cache_dir() -> PathBuf {
        if let Ok(path) = env::var(ENV_CACHE_DIR) {
            return PathBuf::from(path);
        }

        dirs::cache_dir()
            .map(|p| p.join(APP_NAME))
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .map(|h| h.join(".cache").join(APP_NAME))
                    .unwrap_or_else(|| PathBuf::from(".").join(".cache").join(APP_NAME))
            })
    }

    fn resolve_config_dir() -> PathBuf {
        if let Ok(path) = env::var(ENV_CONFIG_DIR) {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .map(|p| p.join(APP_NAME))
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .map(|h| h.join(".config").join(APP_NAME))
                    .unwrap_or_else(|| PathBuf::from(".").join(".config").join(APP_NAME))
            })
    }
}

impl Default for LicacheDirs {
    fn default() -> Self {
        Self::new()
    }
}
