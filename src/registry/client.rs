//! SPDX registry client implementation
//!
//! Fetches the license list and per-license details from the SPDX license
//! list data (GitHub raw URLs by default).

use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;

use super::{License, LicenseFetcher};
use crate::config::{defaults, urls};
use crate::error::FetchError;

#[derive(Debug, Deserialize)]
struct ListResponse {
    #[serde(default)]
    licenses: Vec<License>,
}

#[derive(Debug, Deserialize)]
struct DetailsResponse {
    #[serde(rename = "licenseText", default)]
    license_text: String,
}

/// HTTP client for the SPDX license list
///
/// Every request is bounded by a 30 second timeout.
#[derive(Debug, Clone)]
pub struct SpdxClient {
    /// HTTP client
    client: reqwest::Client,
}

impl SpdxClient {
    /// Create a new client with the default request and connect timeouts
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeouts(
            Duration::from_secs(defaults::REQUEST_TIMEOUT_SECS),
            Duration::from_secs(defaults::CONNECT_TIMEOUT_SECS),
        )
    }

    /// Create a new client bounding each request by `timeout`
    pub fn with_timeouts(
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Client {
                error: e.to_string(),
            })?;

        Ok(Self { client })
    }

    /// GET `url` and return its status and body, aborting if `cancel` fires
    async fn get(
        &self,
        cancel: &CancellationToken,
        url: &str,
    ) -> Result<(StatusCode, Vec<u8>), FetchError> {
        tokio::select! {
            biased;
            () = cancel.cancelled() => Err(FetchError::Cancelled {
                url: url.to_string(),
            }),
            result = self.get_once(url) => result,
        }
    }

    async fn get_once(&self, url: &str) -> Result<(StatusCode, Vec<u8>), FetchError> {
        tracing::debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| request_error(url, &e))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| request_error(url, &e))?;

        Ok((status, body.to_vec()))
    }
}

impl LicenseFetcher for SpdxClient {
    async fn fetch_list(
        &self,
        cancel: &CancellationToken,
        url: &str,
    ) -> Result<Vec<License>, FetchError> {
        let (status, body) = self.get(cancel, url).await?;

        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let list: ListResponse =
            serde_json::from_slice(&body).map_err(|e| FetchError::InvalidJson {
                url: url.to_string(),
                error: e.to_string(),
            })?;

        Ok(list.licenses)
    }

    async fn fetch_details(
        &self,
        cancel: &CancellationToken,
        template: &str,
        id: &str,
    ) -> Result<String, FetchError> {
        let url = details_url(template, id);
        let (status, body) = self.get(cancel, &url).await?;

        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound {
                id: id.to_string(),
                url,
            });
        }
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                url,
                status: status.as_u16(),
            });
        }

        let details: DetailsResponse =
            serde_json::from_slice(&body).map_err(|e| FetchError::InvalidJson {
                url: url.clone(),
                error: e.to_string(),
            })?;

        if details.license_text.is_empty() {
            return Err(FetchError::MissingLicenseText { url });
        }

        Ok(details.license_text)
    }
}

/// Substitute `id` for every `{id}` in `template`
pub fn details_url(template: &str, id: &str) -> String {
    template.replace(urls::ID_PLACEHOLDER, id)
}

fn request_error(url: &str, error: &reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else {
        FetchError::Network {
            url: url.to_string(),
            error: error.to_string(),
        }
    }
}
