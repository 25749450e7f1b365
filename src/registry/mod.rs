//! SPDX license registry access
//!
//! [`client::SpdxClient`] talks to the SPDX license list over HTTP;
//! [`cache::LicenseCache`] sits in front of any [`LicenseFetcher`] and keeps
//! JSON copies of the responses on disk.

pub mod cache;
pub mod client;

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::error::FetchError;

pub use cache::LicenseCache;
pub use client::SpdxClient;

/// One entry of the SPDX license list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    /// SPDX identifier, e.g. `MIT`
    #[serde(rename = "licenseId")]
    pub license_id: String,
    /// Human readable name, e.g. `MIT License`
    pub name: String,
}

impl License {
    pub fn new(license_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            license_id: license_id.into(),
            name: name.into(),
        }
    }
}

/// Source of license data consumed by [`LicenseCache`]
///
/// Implementations must report a missing license as [`FetchError::NotFound`]
/// and every other failure (network, timeout, cancellation, bad payload) as one
/// of the remaining variants.
#[allow(async_fn_in_trait)]
pub trait LicenseFetcher {
    /// Fetch the full license list from `url`
    async fn fetch_list(
        &self,
        cancel: &CancellationToken,
        url: &str,
    ) -> Result<Vec<License>, FetchError>;

    /// Fetch the text of license `id`, substituting it into `template`
    async fn fetch_details(
        &self,
        cancel: &CancellationToken,
        template: &str,
        id: &str,
    ) -> Result<String, FetchError>;
}

impl<F: LicenseFetcher> LicenseFetcher for &F {
    async fn fetch_list(
        &self,
        cancel: &CancellationToken,
        url: &str,
    ) -> Result<Vec<License>, FetchError> {
        (**self).fetch_list(cancel, url).await
    }

    async fn fetch_details(
        &self,
        cancel: &CancellationToken,
        template: &str,
        id: &str,
    ) -> Result<String, FetchError> {
        (**self).fetch_details(cancel, template, id).await
    }
}
