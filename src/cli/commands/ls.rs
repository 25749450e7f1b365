//! `licache ls` - list SPDX licenses

use std::fmt::Write as _;

use anyhow::Result;

use super::Context;
use crate::cli::output::{print_json, write_stdout, OutputConfig};
use crate::core::list::{self, ListOptions};
use crate::error::LicacheError;

/// Execute the ls command
pub async fn execute(ctx: &Context, options: &ListOptions, output: &OutputConfig) -> Result<()> {
    let url = ctx.config.list_url();
    tracing::info!("Fetching license list...");

    let licenses = ctx
        .cache
        .fetch_list(&ctx.cancel, ctx.config.cache_ttl(), url)
        .await
        .map_err(|e| LicacheError::IoOrNetwork {
            context: "failed to fetch license list".to_string(),
            error: e.to_string(),
        })?;

    let selected = list::select(licenses, options);
    tracing::info!("{} license(s) selected", selected.len());

    if output.json {
        print_json(&selected)?;
        return Ok(());
    }

    let mut out = String::new();
    for license in &selected {
        let _ = writeln!(out, "{}", license.license_id);
    }
    write_stdout(&out)?;
    Ok(())
}
