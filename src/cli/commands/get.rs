//! `licache get` - print a license text

use anyhow::Result;
use serde::Serialize;

use super::Context;
use crate::cli::output::{print_json, write_stdout, OutputConfig};
use crate::error::LicacheError;

#[derive(Serialize)]
struct GetOutput<'a> {
    id: &'a str,
    #[serde(rename = "licenseText")]
    license_text: &'a str,
}

/// Execute the get command
pub async fn execute(ctx: &Context, id_or_alias: &str, output: &OutputConfig) -> Result<()> {
    let id = ctx.config.resolve(id_or_alias);
    if id != id_or_alias {
        tracing::info!("Resolved alias '{id_or_alias}' to '{id}'");
    }

    let text = ctx
        .cache
        .fetch_details(
            &ctx.cancel,
            ctx.config.cache_ttl(),
            ctx.config.details_url_template(),
            id,
        )
        .await
        .map_err(|e| LicacheError::from_cache(id, &e))?;

    if output.json {
        print_json(&GetOutput {
            id,
            license_text: &text,
        })?;
    } else {
        write_stdout(&text)?;
    }
    Ok(())
}
