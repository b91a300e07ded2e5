//! types command - List location types and their naming configuration

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::inventory::Inventory;
use crate::ui::output;

/// List the server's location types next to the local catalog entries.
pub fn types(ctx: &Context) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(types_async(ctx))
}

/// Async implementation of types.
async fn types_async(ctx: &Context) -> Result<()> {
    let verbosity = ctx.verbosity();
    let config = ctx.load_config()?;
    let client = ctx.client(&config)?;
    let catalog = config.catalog();

    output::debug("fetching location types", verbosity);
    let remote_types = client
        .list_location_types()
        .await
        .context("Failed to list location types")?;

    if remote_types.is_empty() {
        output::print("No location types configured on the server.", verbosity);
        return Ok(());
    }

    for remote in &remote_types {
        match catalog.get(remote.id) {
            Some(entry) => println!(
                "{:>4}  {:<16} prefix {:<6} {}",
                remote.id, remote.name, entry.prefix, entry.description
            ),
            None => println!(
                "{:>4}  {:<16} (no prefix configured)",
                remote.id, remote.name
            ),
        }
    }

    // Catalog entries with no remote counterpart usually mean the server
    // catalog changed; worth surfacing when debugging naming issues.
    for (id, entry) in catalog.iter() {
        if !remote_types.iter().any(|t| t.id == id) {
            output::warn(
                format!(
                    "catalog entry {} (prefix {}) has no matching type on the server",
                    id, entry.prefix
                ),
                verbosity,
            );
        }
    }

    Ok(())
}
