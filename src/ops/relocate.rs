//! ops::relocate
//!
//! Sublocation relocation: list the children of a source parent, plan
//! their reparenting, and apply each intent independently.

use thiserror::Error;

use crate::core::moveplan::plan_move;
use crate::core::types::{LocationRecord, MoveIntent};
use crate::inventory::{Inventory, InventoryError};

/// Errors that abort a move operation before any intent is applied.
#[derive(Debug, Error)]
pub enum MoveError {
    /// No location matches the source parent path.
    #[error("source location '{0}' not found")]
    SourceNotFound(String),

    /// No location matches the target parent path.
    #[error("target location '{0}' not found")]
    TargetNotFound(String),

    /// Listing locations or sublocations failed.
    #[error(transparent)]
    Inventory(#[from] InventoryError),
}

/// What happened to one move intent.
#[derive(Debug)]
pub enum MoveStatus {
    /// The location was reparented remotely.
    Moved,
    /// Simulation mode: nothing was sent.
    Simulated,
    /// The remote call failed; later intents were still attempted.
    Failed {
        /// The error returned by the adapter.
        error: InventoryError,
    },
}

/// Outcome for one moved sublocation.
#[derive(Debug)]
pub struct MoveOutcome {
    /// The applied (or planned) intent.
    pub intent: MoveIntent,
    /// Path string of the moved location, for display.
    pub pathstring: String,
    /// What happened when the intent was applied.
    pub status: MoveStatus,
}

/// Report of a bulk move operation.
#[derive(Debug)]
pub struct MoveReport {
    /// Resolved source parent.
    pub source: LocationRecord,
    /// Resolved target parent.
    pub target: LocationRecord,
    /// One outcome per planned intent, input order preserved.
    pub outcomes: Vec<MoveOutcome>,
}

impl MoveReport {
    /// Count of successfully moved sublocations.
    pub fn moved(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, MoveStatus::Moved))
            .count()
    }

    /// Count of failed moves.
    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, MoveStatus::Failed { .. }))
            .count()
    }
}

/// Move the sublocations of `source_path` under `target_path`.
///
/// `selected_ids`, when present, restricts the move to those children
/// (unknown ids are ignored). With `simulate` set, the plan is computed
/// but nothing is sent.
///
/// # Errors
///
/// Fails only before the apply phase: listing locations, resolving the
/// source or target path, or listing sublocations. Individual move
/// failures are reported per item.
pub async fn move_sublocations(
    inventory: &dyn Inventory,
    source_path: &str,
    target_path: &str,
    selected_ids: Option<&[i64]>,
    simulate: bool,
) -> Result<MoveReport, MoveError> {
    let locations = inventory.list_locations().await?;

    let source = LocationRecord::find_by_pathstring(&locations, source_path)
        .cloned()
        .ok_or_else(|| MoveError::SourceNotFound(source_path.to_string()))?;
    let target = LocationRecord::find_by_pathstring(&locations, target_path)
        .cloned()
        .ok_or_else(|| MoveError::TargetNotFound(target_path.to_string()))?;

    let mut children = inventory.list_sublocations(source.id).await?;
    if let Some(ids) = selected_ids {
        children.retain(|child| ids.contains(&child.id));
    }

    let intents = plan_move(&children, target.id);

    let mut outcomes = Vec::with_capacity(intents.len());
    for (intent, child) in intents.into_iter().zip(children.iter()) {
        let status = if simulate {
            MoveStatus::Simulated
        } else {
            match inventory
                .set_location_parent(intent.location_id, intent.new_parent_id)
                .await
            {
                Ok(()) => MoveStatus::Moved,
                Err(error) => MoveStatus::Failed { error },
            }
        };
        outcomes.push(MoveOutcome {
            intent,
            pathstring: child.pathstring.clone(),
            status,
        });
    }

    Ok(MoveReport {
        source,
        target,
        outcomes,
    })
}
