//! License cache implementation
//!
//! Keeps the SPDX license list and per-license texts as JSON files under a
//! cache root:
//!
//! ```text
//! <root>/list.json            {"licenses": [{"licenseId": "...", "name": "..."}]}
//! <root>/details/<id>.json    {"licenseText": "..."}
//! ```
//!
//! Freshness is never stored. Each call passes a TTL and a record is fresh when
//! its modification time is less than TTL ago. A zero TTL always refetches.
//!
//! A fresh record that fails to parse is an error ([`CacheError::Corrupt`]),
//! while failing to write a record is ignored: the caller still gets the
//! fetched data.

use std::fs::{self, File, Metadata};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use super::{License, LicenseFetcher};
use crate::config::defaults;
use crate::error::CacheError;
use crate::infra::filesystem;

/// On-disk shape of `list.json`
#[derive(Debug, Deserialize)]
struct ListRecord {
    #[serde(default)]
    licenses: Vec<License>,
}

#[derive(Debug, Serialize)]
struct ListRecordRef<'a> {
    licenses: &'a [License],
}

/// On-disk shape of `details/<id>.json`
#[derive(Debug, Deserialize)]
struct DetailRecord {
    #[serde(rename = "licenseText", default)]
    license_text: String,
}

#[derive(Debug, Serialize)]
struct DetailRecordRef<'a> {
    #[serde(rename = "licenseText")]
    license_text: &'a str,
}

/// File-backed cache in front of a [`LicenseFetcher`]
///
/// The cache never creates or removes `root` itself beyond making sure the
/// directories a record lands in exist before writing it.
#[derive(Debug)]
pub struct LicenseCache<F> {
    /// Cache root directory
    root: PathBuf,
    /// Remote source used on a miss
    fetcher: F,
}

impl<F: LicenseFetcher> LicenseCache<F> {
    /// Create a cache rooted at `root` that fetches through `fetcher`
    pub fn new(root: impl Into<PathBuf>, fetcher: F) -> Self {
        Self {
            root: root.into(),
            fetcher,
        }
    }

    /// Get the fetcher used on a miss
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Path of the cached license list
    pub fn list_path(&self) -> PathBuf {
        self.root.join(defaults::LIST_FILE)
    }

    /// Path of the cached text for `id`, or `None` if `id` may not name a file
    pub fn details_path(&self, id: &str) -> Option<PathBuf> {
        is_cacheable_id(id).then(|| {
            self.root
                .join(defaults::DETAILS_DIR)
                .join(format!("{id}.json"))
        })
    }

    /// Fetch the license list, serving `list.json` when it is younger than `ttl`
    ///
    /// On a miss the list comes from the fetcher and is written back on a
    /// best-effort basis. Fetch errors are returned unchanged.
    pub async fn fetch_list(
        &self,
        cancel: &CancellationToken,
        ttl: Duration,
        url: &str,
    ) -> Result<Vec<License>, CacheError> {
        let path = self.list_path();

        if let Some(record) = read_fresh::<ListRecord>(&path, ttl)? {
            tracing::debug!("License list cache hit: {}", path.display());
            return Ok(record.licenses);
        }

        tracing::debug!("License list cache miss, fetching {url}");
        let licenses = self.fetcher.fetch_list(cancel, url).await?;
        persist(
            &path,
            &ListRecordRef {
                licenses: &licenses,
            },
        );
        Ok(licenses)
    }

    /// Fetch the text of license `id`, serving `details/<id>.json` when it is
    /// younger than `ttl`
    ///
    /// An `id` containing `..`, `/` or `\` never touches the cache, whatever
    /// the TTL: the fetcher is called directly and its result returned as is.
    pub async fn fetch_details(
        &self,
        cancel: &CancellationToken,
        ttl: Duration,
        template: &str,
        id: &str,
    ) -> Result<String, CacheError> {
        let Some(path) = self.details_path(id) else {
            tracing::debug!("License id '{id}' is not a safe cache key, bypassing cache");
            return Ok(self.fetcher.fetch_details(cancel, template, id).await?);
        };

        if let Some(record) = read_fresh::<DetailRecord>(&path, ttl)? {
            tracing::debug!("License '{id}' cache hit: {}", path.display());
            return Ok(record.license_text);
        }

        tracing::debug!("License '{id}' cache miss, fetching");
        let text = self.fetcher.fetch_details(cancel, template, id).await?;
        persist(
            &path,
            &DetailRecordRef {
                license_text: &text,
            },
        );
        Ok(text)
    }
}

/// Whether `id` can be used verbatim as a file name under the cache root
pub fn is_cacheable_id(id: &str) -> bool {
    !id.contains("..") && !id.contains(['/', '\\'])
}

/// Read and parse `path` if it is younger than `ttl`
///
/// Returns `Ok(None)` for a zero TTL, a file that cannot be stat'ed, or a
/// stale one. A fresh record that cannot be opened or read is
/// [`CacheError::Read`]. Age is taken from the same handle the content is
/// read from.
fn read_fresh<T: DeserializeOwned>(path: &Path, ttl: Duration) -> Result<Option<T>, CacheError> {
    if ttl.is_zero() {
        return Ok(None);
    }

    let read_error = |e: std::io::Error| CacheError::Read {
        path: path.to_path_buf(),
        error: e.to_string(),
    };

    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            return match fs::metadata(path) {
                Ok(metadata) if is_fresh(path, &metadata, ttl) => Err(read_error(e)),
                _ => Ok(None),
            };
        }
    };

    let metadata = file.metadata().map_err(read_error)?;
    if !is_fresh(path, &metadata, ttl) {
        return Ok(None);
    }

    let mut content = Vec::new();
    file.read_to_end(&mut content).map_err(read_error)?;

    serde_json::from_slice(&content)
        .map(Some)
        .map_err(|e| CacheError::Corrupt {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
}

/// Whether a record last modified as `metadata` says is younger than `ttl`
fn is_fresh(path: &Path, metadata: &Metadata, ttl: Duration) -> bool {
    let Ok(modified) = metadata.modified() else {
        return false;
    };

    // An mtime in the future counts as age zero
    let age = SystemTime::now()
        .duration_since(modified)
        .unwrap_or(Duration::ZERO);
    if age >= ttl {
        tracing::debug!(
            "Cache record {} is stale ({}s old, ttl {}s)",
            path.display(),
            age.as_secs(),
            ttl.as_secs()
        );
        return false;
    }
    true
}

/// Best-effort write of `record` to `path`
fn persist<T: Serialize>(path: &Path, record: &T) {
    let Ok(content) = serde_json::to_vec(record) else {
        return;
    };
    let _ = filesystem::write_file_atomic(path, &content);
}
