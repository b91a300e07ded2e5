//! ops::create
//!
//! Bulk location creation: scan the current list, allocate gap-filling
//! names, and create each location independently.

use thiserror::Error;

use crate::core::allocate::allocate;
use crate::core::catalog::{CatalogError, LocationTypeCatalog};
use crate::core::scan::{scan, ScanWarning};
use crate::core::types::LocationRecord;
use crate::inventory::{Inventory, InventoryError, NewLocation};

/// Errors that abort a create operation before any item is attempted.
///
/// Per-item failures during the bulk phase are not errors; they land in
/// the report's outcomes.
#[derive(Debug, Error)]
pub enum CreateError {
    /// No location matches the requested parent path.
    #[error("parent location '{0}' not found")]
    ParentNotFound(String),

    /// The selected type has no prefix configured.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Listing the current locations failed.
    #[error(transparent)]
    Inventory(#[from] InventoryError),
}

/// What happened to one allocated name.
#[derive(Debug)]
pub enum CreateStatus {
    /// The location was created remotely.
    Created {
        /// Id assigned by the server.
        id: i64,
    },
    /// Simulation mode: nothing was sent.
    Simulated,
    /// The remote call for this name failed; later names were still
    /// attempted.
    Failed {
        /// The error returned by the adapter.
        error: InventoryError,
    },
}

/// Outcome for one allocated name.
#[derive(Debug)]
pub struct CreateOutcome {
    /// The allocated location name.
    pub name: String,
    /// What happened when it was applied.
    pub status: CreateStatus,
}

/// Report of a bulk create operation.
#[derive(Debug)]
pub struct CreateReport {
    /// Resolved parent location.
    pub parent: LocationRecord,
    /// Highest progressive number before allocation.
    pub highest: u32,
    /// Names already in use for the type, ascending.
    pub matching: Vec<String>,
    /// Scan warnings (malformed names and the like).
    pub warnings: Vec<ScanWarning>,
    /// One outcome per allocated name, in allocation order.
    pub outcomes: Vec<CreateOutcome>,
}

impl CreateReport {
    /// Count of successfully created locations.
    pub fn created(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, CreateStatus::Created { .. }))
            .count()
    }

    /// Count of failed creations.
    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, CreateStatus::Failed { .. }))
            .count()
    }
}

/// Scan, allocate, and create `count` new locations of `type_id` under
/// the parent identified by `parent_path`.
///
/// With `simulate` set, allocation runs normally but nothing is sent to
/// the server; every outcome is `Simulated`.
///
/// # Errors
///
/// Fails only before the bulk phase: listing locations, resolving the
/// parent path, or resolving the type prefix. Individual creation
/// failures are reported per item.
pub async fn create_locations(
    inventory: &dyn Inventory,
    catalog: &LocationTypeCatalog,
    parent_path: &str,
    type_id: i64,
    count: usize,
    simulate: bool,
) -> Result<CreateReport, CreateError> {
    let locations = inventory.list_locations().await?;

    let parent = LocationRecord::find_by_pathstring(&locations, parent_path)
        .cloned()
        .ok_or_else(|| CreateError::ParentNotFound(parent_path.to_string()))?;

    // A missing prefix is a hard error here: without it no name can be
    // generated. (The scanner alone degrades to empty results instead.)
    let config = catalog.resolve(type_id)?.clone();

    let scan_result = scan(&locations, catalog, type_id);
    let names = allocate(
        &scan_result.matching,
        count,
        scan_result.highest,
        &config.prefix,
    );

    let mut outcomes = Vec::with_capacity(names.len());
    for name in names {
        let status = if simulate {
            CreateStatus::Simulated
        } else {
            let request = NewLocation {
                name: name.clone(),
                description: config.description.clone(),
                parent: parent.id,
                location_type: type_id,
            };
            match inventory.create_location(&request).await {
                Ok(created) => CreateStatus::Created { id: created.id },
                Err(error) => CreateStatus::Failed { error },
            }
        };
        outcomes.push(CreateOutcome { name, status });
    }

    Ok(CreateReport {
        parent,
        highest: scan_result.highest,
        matching: scan_result.matching,
        warnings: scan_result.warnings,
        outcomes,
    })
}
