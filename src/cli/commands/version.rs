//! version command - Show the configured server and its version

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::inventory::Inventory;
use crate::ui::output;

/// Show the configured base URL and the remote server version.
pub fn version(ctx: &Context) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(version_async(ctx))
}

/// Async implementation of version.
async fn version_async(ctx: &Context) -> Result<()> {
    let verbosity = ctx.verbosity();
    let config = ctx.load_config()?;
    let client = ctx.client(&config)?;

    output::debug("fetching server version", verbosity);
    let info = client
        .server_version()
        .await
        .context("Failed to query server version")?;

    println!("server:  {}", client.base_url());
    println!("version: {} {}", info.server, info.version);
    Ok(())
}
