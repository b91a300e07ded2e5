//! Integration tests for the orchestration layer.
//!
//! These tests exercise the full create and move flows against the mock
//! inventory: scan → allocate → create, and list → plan → apply.

use locsmith::core::catalog::LocationTypeCatalog;
use locsmith::core::types::{LocationRecord, LocationType};
use locsmith::inventory::mock::{FailOn, MockInventory, MockOperation};
use locsmith::inventory::{Inventory, InventoryError};
use locsmith::ops::{create_locations, move_sublocations, CreateStatus, MoveStatus};

// =============================================================================
// Test Fixtures
// =============================================================================

fn record(id: i64, name: &str, pathstring: &str, parent_id: Option<i64>) -> LocationRecord {
    LocationRecord {
        id,
        name: name.to_string(),
        pathstring: pathstring.to_string(),
        parent_id,
    }
}

/// A small workshop: two cabinets, some bins with a numbering gap, and
/// one malformed name.
fn workshop() -> MockInventory {
    let inventory = MockInventory::with_locations(vec![
        record(1, "Cabinet A", "Cabinet A", None),
        record(2, "Cabinet B", "Cabinet B", None),
        record(3, "g_0001", "Cabinet A/g_0001", Some(1)),
        record(4, "g_0002", "Cabinet A/g_0002", Some(1)),
        record(5, "g_0005", "Cabinet A/g_0005", Some(1)),
        record(6, "g_old", "Cabinet A/g_old", Some(1)),
    ]);
    inventory.set_types(vec![
        LocationType {
            id: 1,
            name: "Shelf".to_string(),
        },
        LocationType {
            id: 4,
            name: "Bin".to_string(),
        },
    ]);
    inventory
}

// =============================================================================
// Create Flow
// =============================================================================

#[tokio::test]
async fn create_fills_gaps_then_extends() {
    let inventory = workshop();
    let catalog = LocationTypeCatalog::builtin();

    let report = create_locations(&inventory, &catalog, "Cabinet A", 4, 4, false)
        .await
        .unwrap();

    let names: Vec<&str> = report.outcomes.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, vec!["g_0003", "g_0004", "g_0006", "g_0007"]);
    assert_eq!(report.created(), 4);

    // The malformed name was warned about, not counted.
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.highest, 5);
}

#[tokio::test]
async fn create_sends_descriptions_from_catalog() {
    let inventory = workshop();
    let catalog = LocationTypeCatalog::builtin();

    create_locations(&inventory, &catalog, "Cabinet A", 4, 1, false)
        .await
        .unwrap();

    let creates: Vec<_> = inventory
        .operations()
        .into_iter()
        .filter_map(|op| match op {
            MockOperation::CreateLocation {
                name,
                description,
                parent,
                location_type,
            } => Some((name, description, parent, location_type)),
            _ => None,
        })
        .collect();

    assert_eq!(
        creates,
        vec![("g_0003".to_string(), "gridfinity bin".to_string(), 1, 4)]
    );
}

#[tokio::test]
async fn repeated_create_converges_to_contiguous_numbering() {
    let inventory = workshop();
    let catalog = LocationTypeCatalog::builtin();

    // First round fills the gaps, second round extends.
    create_locations(&inventory, &catalog, "Cabinet A", 4, 2, false)
        .await
        .unwrap();
    let second = create_locations(&inventory, &catalog, "Cabinet A", 4, 2, false)
        .await
        .unwrap();

    let names: Vec<&str> = second.outcomes.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, vec!["g_0006", "g_0007"]);
}

#[tokio::test]
async fn create_partial_failure_reports_and_continues() {
    let inventory = workshop();
    inventory.set_fail_on(FailOn::CreateLocationNamed {
        name: "g_0004".to_string(),
        error: InventoryError::ApiError {
            status: 400,
            message: "name already exists".to_string(),
        },
    });
    let catalog = LocationTypeCatalog::builtin();

    let report = create_locations(&inventory, &catalog, "Cabinet A", 4, 3, false)
        .await
        .unwrap();

    assert_eq!(report.created(), 2);
    assert_eq!(report.failed(), 1);
    assert!(matches!(
        report.outcomes[1].status,
        CreateStatus::Failed { .. }
    ));

    // All three creations were attempted despite the failure.
    let attempts = inventory
        .operations()
        .iter()
        .filter(|op| matches!(op, MockOperation::CreateLocation { .. }))
        .count();
    assert_eq!(attempts, 3);
}

#[tokio::test]
async fn create_list_failure_aborts_before_any_item() {
    let inventory = workshop();
    inventory.set_fail_on(FailOn::ListLocations(InventoryError::NetworkError(
        "connection refused".to_string(),
    )));
    let catalog = LocationTypeCatalog::builtin();

    let result = create_locations(&inventory, &catalog, "Cabinet A", 4, 2, false).await;
    assert!(result.is_err());

    let attempts = inventory
        .operations()
        .iter()
        .filter(|op| matches!(op, MockOperation::CreateLocation { .. }))
        .count();
    assert_eq!(attempts, 0);
}

// =============================================================================
// Move Flow
// =============================================================================

#[tokio::test]
async fn move_relocates_children_and_leaves_parents_alone() {
    let inventory = workshop();

    let report = move_sublocations(&inventory, "Cabinet A", "Cabinet B", None, false)
        .await
        .unwrap();

    assert_eq!(report.outcomes.len(), 4);
    assert_eq!(report.moved(), 4);

    let locations = inventory.locations();
    assert!(locations
        .iter()
        .filter(|loc| [3, 4, 5, 6].contains(&loc.id))
        .all(|loc| loc.parent_id == Some(2)));
    // The cabinets themselves did not move.
    assert_eq!(locations[0].parent_id, None);
    assert_eq!(locations[1].parent_id, None);
}

#[tokio::test]
async fn move_selected_ids_only() {
    let inventory = workshop();

    let report = move_sublocations(&inventory, "Cabinet A", "Cabinet B", Some(&[3, 5]), false)
        .await
        .unwrap();

    let moved_ids: Vec<i64> = report
        .outcomes
        .iter()
        .map(|o| o.intent.location_id)
        .collect();
    assert_eq!(moved_ids, vec![3, 5]);

    let locations = inventory.locations();
    let parent_of = |id: i64| {
        locations
            .iter()
            .find(|loc| loc.id == id)
            .and_then(|loc| loc.parent_id)
    };
    assert_eq!(parent_of(3), Some(2));
    assert_eq!(parent_of(4), Some(1));
    assert_eq!(parent_of(5), Some(2));
}

#[tokio::test]
async fn move_partial_failure_reports_and_continues() {
    let inventory = workshop();
    inventory.set_fail_on(FailOn::SetLocationParentFor {
        location_id: 4,
        error: InventoryError::ApiError {
            status: 400,
            message: "cannot move".to_string(),
        },
    });

    let report = move_sublocations(&inventory, "Cabinet A", "Cabinet B", None, false)
        .await
        .unwrap();

    assert_eq!(report.moved(), 3);
    assert_eq!(report.failed(), 1);
    assert!(matches!(report.outcomes[1].status, MoveStatus::Failed { .. }));
}

#[tokio::test]
async fn simulate_flows_touch_nothing() {
    let inventory = workshop();
    let catalog = LocationTypeCatalog::builtin();
    let before = inventory.locations();

    create_locations(&inventory, &catalog, "Cabinet A", 4, 3, true)
        .await
        .unwrap();
    move_sublocations(&inventory, "Cabinet A", "Cabinet B", None, true)
        .await
        .unwrap();

    assert_eq!(inventory.locations(), before);
    assert!(inventory.operations().iter().all(|op| matches!(
        op,
        MockOperation::ListLocations | MockOperation::ListSublocations { .. }
    )));
}

// =============================================================================
// Scan Neutrality
// =============================================================================

#[tokio::test]
async fn unknown_type_yields_hard_error_for_create_only() {
    let inventory = workshop();
    let catalog = LocationTypeCatalog::builtin();

    // Creation needs a prefix: unknown type is an error.
    assert!(
        create_locations(&inventory, &catalog, "Cabinet A", 99, 1, false)
            .await
            .is_err()
    );

    // The scanner itself stays neutral on the same input.
    let locations = inventory.list_locations().await.unwrap();
    let result = locsmith::core::scan::scan(&locations, &catalog, 99);
    assert_eq!(result.highest, 0);
    assert!(result.matching.is_empty());
}
