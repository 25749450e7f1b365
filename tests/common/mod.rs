//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::Output;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Isolated licache environment
///
/// Cache, config and working directories all live in one temporary
/// directory, wired up through the `LICACHE_*_DIR` overrides.
pub struct TestEnv {
    /// Temporary directory holding everything
    pub dir: TempDir,
}

impl TestEnv {
    /// Create a new environment in a temporary directory
    pub fn new() -> Self {
        let env = Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        };
        std::fs::create_dir_all(env.work_dir()).expect("Failed to create work directory");
        env
    }

    /// Directory passed as `LICACHE_CACHE_DIR`
    pub fn cache_dir(&self) -> PathBuf {
        self.dir.path().join("cache")
    }

    /// Directory passed as `LICACHE_CONFIG_DIR`
    pub fn config_dir(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    /// Working directory the binary runs in
    pub fn work_dir(&self) -> PathBuf {
        self.dir.path().join("work")
    }

    /// Root of the license cache inside the cache directory
    pub fn license_cache(&self) -> PathBuf {
        self.cache_dir().join("licenses")
    }

    /// Write `config.toml`
    pub fn write_config(&self, content: &str) {
        std::fs::create_dir_all(self.config_dir()).expect("Failed to create config directory");
        std::fs::write(self.config_dir().join("config.toml"), content)
            .expect("Failed to write config");
    }

    /// Point the SPDX URLs at `server`, with extra TOML appended
    pub fn use_server(&self, server: &MockServer, extra: &str) {
        let uri = server.uri();
        self.write_config(&format!(
            "{extra}\n[spdx]\nlist_url = \"{uri}/licenses.json\"\ndetails_url_template = \"{uri}/details/{{id}}.json\"\n"
        ));
    }

    /// Run the licache binary with `args`
    pub async fn run(&self, args: &[&str]) -> Output {
        tokio::process::Command::new(env!("CARGO_BIN_EXE_licache"))
            .args(args)
            .current_dir(self.work_dir())
            .env("LICACHE_CACHE_DIR", self.cache_dir())
            .env("LICACHE_CONFIG_DIR", self.config_dir())
            .env_remove("RUST_LOG")
            .output()
            .await
            .expect("Failed to execute licache")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Sample SPDX `licenses.json`
pub const SAMPLE_LIST: &str = r#"{
  "licenseListVersion": "3.24",
  "licenses": [
    {"licenseId": "0BSD", "name": "BSD Zero Clause License", "isOsiApproved": true},
    {"licenseId": "Apache-2.0", "name": "Apache License 2.0", "isOsiApproved": true},
    {"licenseId": "GPL-2.0", "name": "GNU General Public License v2.0 only", "isDeprecatedLicenseId": true},
    {"licenseId": "ISC", "name": "ISC License", "isOsiApproved": true},
    {"licenseId": "MIT", "name": "MIT License", "isOsiApproved": true},
    {"licenseId": "MIT-0", "name": "MIT No Attribution", "isOsiApproved": true}
  ]
}"#;

/// Sample MIT license text
pub const MIT_TEXT: &str = "MIT License\n\nCopyright (c) <year> <copyright holders>\n";

/// Mount the sample list, expecting `times` requests
pub async fn mount_list(server: &MockServer, times: u64) {
    Mock::given(method("GET"))
        .and(path("/licenses.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SAMPLE_LIST))
        .expect(times)
        .mount(server)
        .await;
}

/// Mount a details document for `id`, expecting `times` requests
pub async fn mount_details(server: &MockServer, id: &str, text: &str, times: u64) {
    let body = serde_json::json!({ "licenseId": id, "licenseText": text });
    Mock::given(method("GET"))
        .and(path(format!("/details/{id}.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(times)
        .mount(server)
        .await;
}

/// Stdout as a string
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr as a string
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
