//! core::types
//!
//! Domain types for the remote location hierarchy.
//!
//! # Types
//!
//! - [`LocationRecord`] - One node of the remote storage-location tree
//! - [`LocationType`] - A remote naming category
//! - [`MoveIntent`] - Instruction to reparent a single location
//!
//! All of these are ephemeral values: they are reconstructed from the
//! remote inventory service per operation and never persisted locally.

use serde::{Deserialize, Serialize};

/// One node of the remote storage-location hierarchy.
///
/// Fetched fresh from the inventory service per operation; treated as an
/// immutable value. `pathstring` is the full slash-joined path from the
/// root, as rendered by the server (e.g. `Workshop/Cabinet A/a_0003`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRecord {
    /// Remote primary key.
    pub id: i64,
    /// Short name (the leaf segment of the path).
    pub name: String,
    /// Full path string as rendered by the server.
    pub pathstring: String,
    /// Parent location id, `None` for top-level locations.
    pub parent_id: Option<i64>,
}

/// A remote location type (naming category).
///
/// Owned by the external catalog endpoint; read-only here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationType {
    /// Remote primary key.
    pub id: i64,
    /// Type name as configured on the server (e.g. `Shelf`).
    pub name: String,
}

/// Instruction to reparent a single location.
///
/// Produced by [`crate::core::moveplan::plan_move`]; applied independently
/// per intent by the inventory adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveIntent {
    /// Location to move.
    pub location_id: i64,
    /// Its new parent.
    pub new_parent_id: i64,
}

impl LocationRecord {
    /// Find a location by its path string.
    ///
    /// Path strings are unique on the server, so the first match wins.
    pub fn find_by_pathstring<'a>(
        locations: &'a [LocationRecord],
        pathstring: &str,
    ) -> Option<&'a LocationRecord> {
        locations.iter().find(|loc| loc.pathstring == pathstring)
    }
}
