//! locations command - List all stock locations

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::inventory::Inventory;
use crate::ui::output;

/// List all stock locations with their ids and path strings.
pub fn locations(ctx: &Context) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(locations_async(ctx))
}

/// Async implementation of locations.
async fn locations_async(ctx: &Context) -> Result<()> {
    let verbosity = ctx.verbosity();
    let config = ctx.load_config()?;
    let client = ctx.client(&config)?;

    output::debug("fetching location list", verbosity);
    let mut locations = client
        .list_locations()
        .await
        .context("Failed to list locations")?;

    if locations.is_empty() {
        output::print("No locations found.", verbosity);
        return Ok(());
    }

    locations.sort_by(|a, b| a.pathstring.cmp(&b.pathstring));
    for location in &locations {
        println!("{:>6}  {}", location.id, location.pathstring);
    }
    output::print(format!("{} location(s)", locations.len()), verbosity);

    Ok(())
}
