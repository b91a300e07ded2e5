//! move command - Move sublocations under a new parent
//!
//! # Design
//!
//! [`crate::ops::relocate`] lists the source's children, plans one
//! intent per child, and applies each independently. This handler
//! renders the report. Move failures are per-item and never abort the
//! remaining moves.

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::ops::{self, MoveStatus};
use crate::ui::output;

/// Move sublocations of `source` under `target`.
pub fn move_sublocations(
    ctx: &Context,
    source: &str,
    target: &str,
    ids: Option<&[i64]>,
    simulate: bool,
) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(move_async(ctx, source, target, ids, simulate))
}

/// Async implementation of move.
async fn move_async(
    ctx: &Context,
    source: &str,
    target: &str,
    ids: Option<&[i64]>,
    simulate: bool,
) -> Result<()> {
    let verbosity = ctx.verbosity();
    let config = ctx.load_config()?;
    let client = ctx.client(&config)?;

    let report = ops::move_sublocations(&client, source, target, ids, simulate)
        .await
        .context("Failed to move sublocations")?;

    if report.outcomes.is_empty() {
        output::print(
            format!("No sublocations to move under '{}'", report.source.pathstring),
            verbosity,
        );
        return Ok(());
    }

    for outcome in &report.outcomes {
        match &outcome.status {
            MoveStatus::Moved => {
                output::print(
                    format!(
                        "moved {} (id {}) under '{}'",
                        outcome.pathstring, outcome.intent.location_id, report.target.pathstring
                    ),
                    verbosity,
                );
            }
            MoveStatus::Simulated => {
                output::print(
                    format!(
                        "would move {} (id {}) under '{}'",
                        outcome.pathstring, outcome.intent.location_id, report.target.pathstring
                    ),
                    verbosity,
                );
            }
            MoveStatus::Failed { error } => {
                output::error(format!(
                    "failed to move {} (id {}): {}",
                    outcome.pathstring, outcome.intent.location_id, error
                ));
            }
        }
    }

    if !simulate {
        output::print(
            format!("{} moved, {} failed", report.moved(), report.failed()),
            verbosity,
        );
    }

    Ok(())
}
