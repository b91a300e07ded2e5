//! inventory::mock
//!
//! Mock inventory implementation for deterministic testing.
//!
//! # Design
//!
//! The mock inventory provides a deterministic implementation of the
//! `Inventory` trait for use in tests. It stores locations in memory and
//! allows configuring failure scenarios, including per-item failures for
//! exercising best-effort bulk semantics.
//!
//! # Example
//!
//! ```
//! use locsmith::inventory::mock::MockInventory;
//! use locsmith::inventory::{Inventory, NewLocation};
//!
//! # tokio_test::block_on(async {
//! let inventory = MockInventory::new();
//!
//! let created = inventory.create_location(&NewLocation {
//!     name: "a_0001".to_string(),
//!     description: "shelf armadio".to_string(),
//!     parent: 0,
//!     location_type: 1,
//! }).await.unwrap();
//!
//! assert_eq!(created.id, 1);
//! assert_eq!(inventory.list_locations().await.unwrap().len(), 1);
//! # });
//! ```

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::traits::{Inventory, InventoryError, NewLocation, ServerVersion};
use crate::core::types::{LocationRecord, LocationType};

/// Mock inventory for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping.
#[derive(Debug, Clone)]
pub struct MockInventory {
    /// Internal state shared across clones.
    inner: Arc<Mutex<MockInventoryInner>>,
}

/// Internal mutable state.
#[derive(Debug)]
struct MockInventoryInner {
    /// Stored locations.
    locations: Vec<LocationRecord>,
    /// Stored location types.
    types: Vec<LocationType>,
    /// Next location id to assign.
    next_id: i64,
    /// Failure injection (for testing error paths).
    fail_on: Option<FailOn>,
    /// Recorded operations for verification.
    operations: Vec<MockOperation>,
}

/// Configuration for which operation should fail.
#[derive(Debug, Clone)]
pub enum FailOn {
    /// Fail list_locations with the given error.
    ListLocations(InventoryError),
    /// Fail list_sublocations with the given error.
    ListSublocations(InventoryError),
    /// Fail list_location_types with the given error.
    ListLocationTypes(InventoryError),
    /// Fail every create_location with the given error.
    CreateLocation(InventoryError),
    /// Fail only the create_location whose name matches.
    CreateLocationNamed {
        /// Name that should fail.
        name: String,
        /// Error to return for it.
        error: InventoryError,
    },
    /// Fail every set_location_parent with the given error.
    SetLocationParent(InventoryError),
    /// Fail only the set_location_parent for the given location id.
    SetLocationParentFor {
        /// Location id that should fail.
        location_id: i64,
        /// Error to return for it.
        error: InventoryError,
    },
    /// Fail server_version with the given error.
    ServerVersion(InventoryError),
}

/// Recorded operation for test verification.
#[derive(Debug, Clone, PartialEq)]
pub enum MockOperation {
    ListLocations,
    ListSublocations {
        parent_id: i64,
    },
    ListLocationTypes,
    CreateLocation {
        name: String,
        description: String,
        parent: i64,
        location_type: i64,
    },
    SetLocationParent {
        location_id: i64,
        parent_id: i64,
    },
    ServerVersion,
}

impl MockInventory {
    /// Create a new empty mock inventory.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(MockInventoryInner {
                locations: Vec::new(),
                types: Vec::new(),
                next_id: 1,
                fail_on: None,
                operations: Vec::new(),
            })),
        }
    }

    /// Create a mock inventory with pre-existing locations.
    ///
    /// The next assigned id is one past the highest existing id.
    pub fn with_locations(locations: Vec<LocationRecord>) -> Self {
        let next_id = locations.iter().map(|l| l.id).max().unwrap_or(0) + 1;
        Self {
            inner: Arc::new(Mutex::new(MockInventoryInner {
                locations,
                types: Vec::new(),
                next_id,
                fail_on: None,
                operations: Vec::new(),
            })),
        }
    }

    /// Set the location types returned by `list_location_types`.
    pub fn set_types(&self, types: Vec<LocationType>) {
        self.inner.lock().unwrap().types = types;
    }

    /// Configure a failure scenario.
    pub fn set_fail_on(&self, fail_on: FailOn) {
        self.inner.lock().unwrap().fail_on = Some(fail_on);
    }

    /// Get the recorded operations.
    pub fn operations(&self) -> Vec<MockOperation> {
        self.inner.lock().unwrap().operations.clone()
    }

    /// Get a snapshot of the stored locations.
    pub fn locations(&self) -> Vec<LocationRecord> {
        self.inner.lock().unwrap().locations.clone()
    }
}

impl Default for MockInventory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Inventory for MockInventory {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn list_locations(&self) -> Result<Vec<LocationRecord>, InventoryError> {
        let mut inner = self.inner.lock().unwrap();
        inner.operations.push(MockOperation::ListLocations);

        if let Some(FailOn::ListLocations(err)) = &inner.fail_on {
            return Err(err.clone());
        }

        Ok(inner.locations.clone())
    }

    async fn list_sublocations(
        &self,
        parent_id: i64,
    ) -> Result<Vec<LocationRecord>, InventoryError> {
        let mut inner = self.inner.lock().unwrap();
        inner
            .operations
            .push(MockOperation::ListSublocations { parent_id });

        if let Some(FailOn::ListSublocations(err)) = &inner.fail_on {
            return Err(err.clone());
        }

        Ok(inner
            .locations
            .iter()
            .filter(|loc| loc.parent_id == Some(parent_id))
            .cloned()
            .collect())
    }

    async fn list_location_types(&self) -> Result<Vec<LocationType>, InventoryError> {
        let mut inner = self.inner.lock().unwrap();
        inner.operations.push(MockOperation::ListLocationTypes);

        if let Some(FailOn::ListLocationTypes(err)) = &inner.fail_on {
            return Err(err.clone());
        }

        Ok(inner.types.clone())
    }

    async fn create_location(
        &self,
        request: &NewLocation,
    ) -> Result<LocationRecord, InventoryError> {
        let mut inner = self.inner.lock().unwrap();
        inner.operations.push(MockOperation::CreateLocation {
            name: request.name.clone(),
            description: request.description.clone(),
            parent: request.parent,
            location_type: request.location_type,
        });

        match &inner.fail_on {
            Some(FailOn::CreateLocation(err)) => return Err(err.clone()),
            Some(FailOn::CreateLocationNamed { name, error }) if *name == request.name => {
                return Err(error.clone());
            }
            _ => {}
        }

        let pathstring = inner
            .locations
            .iter()
            .find(|loc| loc.id == request.parent)
            .map(|parent| format!("{}/{}", parent.pathstring, request.name))
            .unwrap_or_else(|| request.name.clone());

        let id = inner.next_id;
        inner.next_id += 1;

        let record = LocationRecord {
            id,
            name: request.name.clone(),
            pathstring,
            parent_id: Some(request.parent),
        };
        inner.locations.push(record.clone());
        Ok(record)
    }

    async fn set_location_parent(
        &self,
        location_id: i64,
        parent_id: i64,
    ) -> Result<(), InventoryError> {
        let mut inner = self.inner.lock().unwrap();
        inner.operations.push(MockOperation::SetLocationParent {
            location_id,
            parent_id,
        });

        match &inner.fail_on {
            Some(FailOn::SetLocationParent(err)) => return Err(err.clone()),
            Some(FailOn::SetLocationParentFor {
                location_id: fail_id,
                error,
            }) if *fail_id == location_id => {
                return Err(error.clone());
            }
            _ => {}
        }

        let location = inner
            .locations
            .iter_mut()
            .find(|loc| loc.id == location_id)
            .ok_or_else(|| InventoryError::NotFound(format!("location {}", location_id)))?;

        location.parent_id = Some(parent_id);
        Ok(())
    }

    async fn server_version(&self) -> Result<ServerVersion, InventoryError> {
        let mut inner = self.inner.lock().unwrap();
        inner.operations.push(MockOperation::ServerVersion);

        if let Some(FailOn::ServerVersion(err)) = &inner.fail_on {
            return Err(err.clone());
        }

        Ok(ServerVersion {
            server: "InvenTree".to_string(),
            version: "0.14.0".to_string(),
        })
    }
}
