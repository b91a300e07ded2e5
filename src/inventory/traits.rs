//! inventory::traits
//!
//! Inventory trait definition for interacting with the remote InvenTree
//! service.
//!
//! # Design
//!
//! The `Inventory` trait is async because inventory operations involve
//! network I/O. All methods return `Result` to handle API errors
//! gracefully. Adapter failures never compromise local correctness: the
//! core derives naming state fresh from whatever list the adapter
//! returns, and bulk operations report per-item outcomes.
//!
//! # Example
//!
//! ```ignore
//! use locsmith::inventory::{Inventory, NewLocation};
//!
//! async fn create_bin(inventory: &dyn Inventory) -> Result<(), InventoryError> {
//!     let created = inventory.create_location(&NewLocation {
//!         name: "g_0001".to_string(),
//!         description: "gridfinity bin".to_string(),
//!         parent: 12,
//!         location_type: 4,
//!     }).await?;
//!     println!("created location {} ({})", created.name, created.id);
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use thiserror::Error;

use crate::core::types::{LocationRecord, LocationType};

/// Errors from inventory operations.
///
/// These error types map to common failure modes when talking to an
/// InvenTree server.
#[derive(Debug, Clone, Error)]
pub enum InventoryError {
    /// No API token is configured.
    #[error("authentication required")]
    AuthRequired,

    /// Authentication failed (invalid token, insufficient permissions).
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    /// The requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Rate limit exceeded.
    #[error("rate limited")]
    RateLimited,

    /// API returned an error.
    #[error("API error: {status} - {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Network or connection error.
    #[error("network error: {0}")]
    NetworkError(String),
}

/// Request to create a stock location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLocation {
    /// Location name (e.g. `a_0007`).
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Parent location id.
    pub parent: i64,
    /// Location type id.
    pub location_type: i64,
}

/// Version information reported by the server root endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerVersion {
    /// Server product name (e.g. `InvenTree`).
    pub server: String,
    /// Server version string.
    pub version: String,
}

/// The Inventory trait for interacting with the remote inventory service.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow use across async tasks.
///
/// # Error Handling
///
/// All methods return `Result<T, InventoryError>`. Callers should handle:
/// - `AuthRequired` / `AuthFailed`: point the user at config/token setup
/// - `NotFound`: resource doesn't exist
/// - `RateLimited`: back off and retry
/// - `ApiError`: display the server's message
/// - `NetworkError`: check connectivity
#[async_trait]
pub trait Inventory: Send + Sync {
    /// Get the adapter name (e.g. "inventree", "mock").
    fn name(&self) -> &'static str;

    /// List all stock locations.
    async fn list_locations(&self) -> Result<Vec<LocationRecord>, InventoryError>;

    /// List the direct sublocations of a parent location.
    async fn list_sublocations(
        &self,
        parent_id: i64,
    ) -> Result<Vec<LocationRecord>, InventoryError>;

    /// List the location types configured on the server.
    async fn list_location_types(&self) -> Result<Vec<LocationType>, InventoryError>;

    /// Create a new stock location.
    ///
    /// # Errors
    ///
    /// - `ApiError` with status 400 if validation fails (e.g. duplicate
    ///   name under the same parent)
    /// - `AuthFailed` if the token lacks permissions
    async fn create_location(
        &self,
        request: &NewLocation,
    ) -> Result<LocationRecord, InventoryError>;

    /// Reparent a single location.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the location doesn't exist
    /// - `ApiError` if the server rejects the new parent
    async fn set_location_parent(
        &self,
        location_id: i64,
        parent_id: i64,
    ) -> Result<(), InventoryError>;

    /// Get the server version information.
    async fn server_version(&self) -> Result<ServerVersion, InventoryError>;
}
