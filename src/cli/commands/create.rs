//! create command - Bulk-create sequentially numbered locations
//!
//! # Design
//!
//! The heavy lifting happens in [`crate::ops::create`]: scan the current
//! location list, allocate gap-filling names, create each one
//! independently. This handler renders the report.
//!
//! Per-item failures do not fail the command; they are printed and the
//! remaining items still run. The command fails only when the operation
//! cannot start at all (unknown parent, unknown type, listing error).
//!
//! # Example
//!
//! ```bash
//! # Preview five new gridfinity bins
//! loc create --parent 'Workshop/Cabinet A' --location-type 4 --count 5 --simulate
//!
//! # Actually create them
//! loc create --parent 'Workshop/Cabinet A' --location-type 4 --count 5
//! ```

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::ops::{self, CreateStatus};
use crate::ui::output;

/// Create `count` new locations of `location_type` under `parent`.
pub fn create(
    ctx: &Context,
    parent: &str,
    location_type: i64,
    count: usize,
    simulate: bool,
) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(create_async(ctx, parent, location_type, count, simulate))
}

/// Async implementation of create.
async fn create_async(
    ctx: &Context,
    parent: &str,
    location_type: i64,
    count: usize,
    simulate: bool,
) -> Result<()> {
    let verbosity = ctx.verbosity();
    let config = ctx.load_config()?;
    let client = ctx.client(&config)?;
    let catalog = config.catalog();

    let report = ops::create_locations(&client, &catalog, parent, location_type, count, simulate)
        .await
        .context("Failed to create locations")?;

    for warning in &report.warnings {
        output::warn(warning, verbosity);
    }
    output::debug(
        format!(
            "highest number in use: {}, {} name(s) occupied",
            report.highest,
            report.matching.len()
        ),
        verbosity,
    );

    for outcome in &report.outcomes {
        match &outcome.status {
            CreateStatus::Created { id } => {
                output::print(format!("created {} (id {})", outcome.name, id), verbosity);
            }
            CreateStatus::Simulated => {
                output::print(
                    format!(
                        "would create {} under '{}' (type {})",
                        outcome.name, report.parent.pathstring, location_type
                    ),
                    verbosity,
                );
            }
            CreateStatus::Failed { error } => {
                output::error(format!("failed to create {}: {}", outcome.name, error));
            }
        }
    }

    if simulate {
        output::print(
            format!(
                "{} location(s) would be created under '{}'",
                report.outcomes.len(),
                report.parent.pathstring
            ),
            verbosity,
        );
    } else {
        output::print(
            format!("{} created, {} failed", report.created(), report.failed()),
            verbosity,
        );
    }

    Ok(())
}
