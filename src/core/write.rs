//! Target resolution for `licache write`
//!
//! Decides which license to write and where, from the command arguments and
//! the configured favorite.

use std::path::{Path, PathBuf};

use crate::config::defaults;
use crate::core::global_config::GlobalConfig;
use crate::error::LicacheError;

/// License identifier and destination for a write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteTarget {
    /// SPDX identifier after alias resolution
    pub id: String,
    /// File the license text goes to
    pub path: PathBuf,
}

/// Resolve what to write
///
/// - no id: the configured favorite, written to `<cwd>/LICENSE`
/// - id only: that license, written to `<cwd>/LICENSE`
/// - id and path: that license, written to `path`
pub fn resolve_target(
    config: &GlobalConfig,
    id: Option<&str>,
    path: Option<&Path>,
    cwd: &Path,
) -> Result<WriteTarget, LicacheError> {
    let requested = match id {
        Some(id) => id,
        None => config.favorite().ok_or_else(|| {
            LicacheError::Usage(
                "favorite license is not set; pass a license id or set `favorite` in config.toml"
                    .to_string(),
            )
        })?,
    };

    let path = path.map_or_else(|| cwd.join(defaults::LICENSE_FILE), Path::to_path_buf);

    Ok(WriteTarget {
        id: config.resolve(requested).to_string(),
        path,
    })
}
