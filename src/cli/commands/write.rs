//! `licache write` - write a license file

use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use super::Context;
use crate::cli::output::{print_json, status, OutputConfig};
use crate::core::write::resolve_target;
use crate::error::LicacheError;
use crate::infra::filesystem;

#[derive(Serialize)]
struct WriteOutput<'a> {
    id: &'a str,
    path: &'a Path,
}

/// Execute the write command
pub async fn execute(
    ctx: &Context,
    id: Option<&str>,
    path: Option<&Path>,
    output: &OutputConfig,
) -> Result<()> {
    let cwd = std::env::current_dir()
        .map_err(|e| LicacheError::Usage(format!("get working directory: {e}")))?;
    let target = resolve_target(&ctx.config, id, path, &cwd)?;

    let text = ctx
        .cache
        .fetch_details(
            &ctx.cancel,
            ctx.config.cache_ttl(),
            ctx.config.details_url_template(),
            &target.id,
        )
        .await
        .map_err(|e| LicacheError::from_cache(&target.id, &e))?;

    filesystem::write_file(&target.path, &text).map_err(|e| LicacheError::IoOrNetwork {
        context: format!("write {}", target.path.display()),
        error: e.to_string(),
    })?;
    tracing::info!("Wrote {} to {}", target.id, target.path.display());

    if output.json {
        print_json(&WriteOutput {
            id: &target.id,
            path: &target.path,
        })?;
    } else if !output.quiet {
        println!(
            "{} Wrote {} license to {}",
            status::SUCCESS,
            target.id,
            target.path.display()
        );
    }
    Ok(())
}
