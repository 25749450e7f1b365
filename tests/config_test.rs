//! Integration tests for global configuration
//!
//! - Reads config.toml from the config directory
//! - Absent TTL maps to the 24 hour default, an explicit 0 is kept
//! - Custom SPDX URLs override the defaults

use std::path::PathBuf;
use std::time::Duration;

use licache::config::urls;
use licache::core::global_config::GlobalConfig;
use licache::infra::dirs::LicacheDirs;
use tempfile::TempDir;

fn dirs_in(temp: &TempDir) -> LicacheDirs {
    LicacheDirs::with_dirs(temp.path().join("cache"), temp.path().join("config"))
}

#[test]
fn test_global_config_loads_from_config_dir() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let dirs = dirs_in(&temp_dir);

    let config_content = r#"
favorite = "MIT"

[aliases]
bsd = "BSD-3-Clause"

[spdx]
list_url = "https://mirror.example.com/licenses.json"
details_url_template = "https://mirror.example.com/details/{id}.json"

[cache]
ttl = 7200
"#;
    std::fs::create_dir_all(dirs.config_dir()).unwrap();
    std::fs::write(dirs.global_config_path(), config_content).unwrap();

    let config = GlobalConfig::load(&dirs).expect("Failed to load global config");

    assert_eq!(config.favorite(), Some("MIT"));
    assert_eq!(config.resolve("bsd"), "BSD-3-Clause");
    assert_eq!(config.list_url(), "https://mirror.example.com/licenses.json");
    assert_eq!(
        config.details_url_template(),
        "https://mirror.example.com/details/{id}.json"
    );
    assert_eq!(config.cache_ttl(), Duration::from_secs(7200));
}

#[test]
fn test_global_config_returns_defaults_when_missing() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let config = GlobalConfig::load(&dirs_in(&temp_dir)).expect("Failed to load global config");

    assert!(config.favorite().is_none());
    assert_eq!(config.list_url(), urls::SPDX_LIST);
    assert_eq!(config.details_url_template(), urls::SPDX_DETAILS_TEMPLATE);
    assert_eq!(config.cache_ttl(), Duration::from_secs(86_400));
}

#[test]
fn test_zero_ttl_means_never_reuse() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, "[cache]\nttl = 0\n").unwrap();

    let config = GlobalConfig::load_from_path(&config_path).unwrap();

    assert!(config.cache_ttl().is_zero());
}

#[test]
fn test_negative_ttl_is_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, "[cache]\nttl = -5\n").unwrap();

    assert!(GlobalConfig::load_from_path(&config_path).is_err());
}

#[test]
fn test_license_cache_lives_under_cache_dir() {
    let dirs = LicacheDirs::with_dirs(PathBuf::from("/var/cache/x"), PathBuf::from("/etc/x"));
    assert_eq!(dirs.license_cache_dir(), PathBuf::from("/var/cache/x/licenses"));
}
