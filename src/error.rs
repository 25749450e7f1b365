//! Error types for licache
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Remote fetch errors
///
/// `NotFound` is kept apart from every other failure so callers can report a
/// missing license differently from a transient network problem.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The remote resource does not exist (HTTP 404)
    #[error("License '{id}' not found at '{url}'")]
    NotFound { id: String, url: String },

    /// Network error
    #[error("Network error fetching '{url}': {error}")]
    Network { url: String, error: String },

    /// Request exceeded the client timeout
    #[error("Request to '{url}' timed out")]
    Timeout { url: String },

    /// Request was cancelled by the caller
    #[error("Request to '{url}' was cancelled")]
    Cancelled { url: String },

    /// Non-success HTTP status
    #[error("Fetch of '{url}' failed: HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// Response body was not the expected JSON
    #[error("Invalid JSON from '{url}': {error}")]
    InvalidJson { url: String, error: String },

    /// Details response carried no license text
    #[error("Response from '{url}' is missing licenseText")]
    MissingLicenseText { url: String },

    /// The HTTP client could not be configured
    #[error("Failed to build HTTP client: {error}")]
    Client { error: String },
}

impl FetchError {
    /// Whether this error means the license does not exist remotely
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// License cache errors
#[derive(Error, Debug)]
pub enum CacheError {
    /// A fresh cache record exists but cannot be deserialized
    #[error("Corrupt cache file '{path}': {error}")]
    Corrupt { path: PathBuf, error: String },

    /// A fresh cache record exists but cannot be read
    #[error("Failed to read cache file '{path}': {error}")]
    Read { path: PathBuf, error: String },

    /// The remote fetch failed
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl CacheError {
    /// Whether this error means the license does not exist remotely
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Fetch(e) if e.is_not_found())
    }
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to create directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },

    /// Failed to write file
    #[error("Failed to write file '{path}': {error}")]
    WriteFile { path: PathBuf, error: String },

    /// Failed to move a temporary file into place
    #[error("Failed to rename '{from}' to '{to}': {error}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        error: String,
    },
}

/// Top-level licache error type
///
/// Each variant corresponds to one process outcome; see [`LicacheError::exit_code`].
#[derive(Error, Debug)]
pub enum LicacheError {
    /// The requested license does not exist
    #[error("license not found: {id}")]
    NotFound { id: String },

    /// Fetching or writing license data failed
    #[error("{context}: {error}")]
    IoOrNetwork { context: String, error: String },

    /// Invalid invocation or missing configuration
    #[error("{0}")]
    Usage(String),
}

impl LicacheError {
    /// Exit code for a successful run
    pub const EXIT_SUCCESS: i32 = 0;
    /// Exit code for usage errors and anything not otherwise classified
    pub const EXIT_USAGE: i32 = 1;
    /// Exit code when a license does not exist
    pub const EXIT_NOT_FOUND: i32 = 2;
    /// Exit code for I/O or network failures
    pub const EXIT_IO: i32 = 3;

    /// Map a cache failure for license `id` into a process outcome
    pub fn from_cache(id: &str, error: &CacheError) -> Self {
        if error.is_not_found() {
            Self::NotFound { id: id.to_string() }
        } else {
            Self::IoOrNetwork {
                context: format!("fetch license {id}"),
                error: error.to_string(),
            }
        }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound { .. } => Self::EXIT_NOT_FOUND,
            Self::IoOrNetwork { .. } => Self::EXIT_IO,
            Self::Usage(_) => Self::EXIT_USAGE,
        }
    }
}

/// Exit code for an error bubbled up through `anyhow`
///
/// Walks the error chain for a [`LicacheError`]; anything else is a usage error.
pub fn exit_code_for(error: &anyhow::Error) -> i32 {
    error
        .chain()
        .find_map(|e| e.downcast_ref::<LicacheError>())
        .map_or(LicacheError::EXIT_USAGE, LicacheError::exit_code)
}
