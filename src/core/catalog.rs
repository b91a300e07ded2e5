//! core::catalog
//!
//! Location type catalog: maps a location type id to its naming prefix
//! and human-readable description.
//!
//! # Design
//!
//! The catalog is immutable after load. A builtin map covers the four
//! canonical types; a config file may replace it wholesale when the live
//! server catalog differs (see [`crate::core::config`]).
//!
//! # Example
//!
//! ```
//! use locsmith::core::catalog::LocationTypeCatalog;
//!
//! let catalog = LocationTypeCatalog::builtin();
//! let shelf = catalog.resolve(1).unwrap();
//! assert_eq!(shelf.prefix, "a_");
//!
//! assert!(catalog.resolve(99).is_err());
//! ```

use std::collections::BTreeMap;

use thiserror::Error;

/// Errors from catalog resolution.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The requested type id has no entry in the catalog.
    #[error("unknown location type: {0}")]
    UnknownType(i64),
}

/// Naming configuration for one location type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeConfig {
    /// Name prefix for locations of this type (e.g. `a_`).
    pub prefix: String,
    /// Description applied to newly created locations.
    pub description: String,
}

impl TypeConfig {
    /// Build a type config from string-ish parts.
    pub fn new(prefix: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            description: description.into(),
        }
    }
}

/// Immutable map from location type id to naming configuration.
///
/// Iteration order is ascending by type id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationTypeCatalog {
    entries: BTreeMap<i64, TypeConfig>,
}

impl LocationTypeCatalog {
    /// The builtin catalog.
    ///
    /// Matches the id-keyed, 4-digit-padded scheme of the canonical
    /// server setup:
    ///
    /// | id | prefix | description        |
    /// |----|--------|--------------------|
    /// | 1  | `a_`   | shelf armadio      |
    /// | 2  | `b_`   | box contenitore    |
    /// | 3  | `s_`   | sorter organizer   |
    /// | 4  | `g_`   | gridfinity bin     |
    pub fn builtin() -> Self {
        Self::from_entries([
            (1, TypeConfig::new("a_", "shelf armadio")),
            (2, TypeConfig::new("b_", "box contenitore")),
            (3, TypeConfig::new("s_", "sorter organizer")),
            (4, TypeConfig::new("g_", "gridfinity bin")),
        ])
    }

    /// Build a catalog from explicit entries.
    ///
    /// Later entries win on duplicate ids; config validation rejects
    /// duplicates before they reach this point.
    pub fn from_entries(entries: impl IntoIterator<Item = (i64, TypeConfig)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Resolve a type id to its naming configuration.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownType` if the id has no entry.
    pub fn resolve(&self, type_id: i64) -> Result<&TypeConfig, CatalogError> {
        self.entries
            .get(&type_id)
            .ok_or(CatalogError::UnknownType(type_id))
    }

    /// Look up a type id, returning `None` when absent.
    pub fn get(&self, type_id: i64) -> Option<&TypeConfig> {
        self.entries.get(&type_id)
    }

    /// Iterate entries in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, &TypeConfig)> {
        self.entries.iter().map(|(id, config)| (*id, config))
    }

    /// Number of configured types.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for LocationTypeCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_four_types() {
        let catalog = LocationTypeCatalog::builtin();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.resolve(1).unwrap().prefix, "a_");
        assert_eq!(catalog.resolve(2).unwrap().prefix, "b_");
        assert_eq!(catalog.resolve(3).unwrap().prefix, "s_");
        assert_eq!(catalog.resolve(4).unwrap().prefix, "g_");
    }

    #[test]
    fn resolve_unknown_type_fails() {
        let catalog = LocationTypeCatalog::builtin();
        assert_eq!(catalog.resolve(99), Err(CatalogError::UnknownType(99)));
    }

    #[test]
    fn get_returns_none_for_unknown() {
        let catalog = LocationTypeCatalog::builtin();
        assert!(catalog.get(0).is_none());
        assert!(catalog.get(4).is_some());
    }

    #[test]
    fn from_entries_overrides_builtin_scheme() {
        let catalog = LocationTypeCatalog::from_entries([
            (10, TypeConfig::new("gb_", "gridfinity bin")),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.resolve(10).unwrap().prefix, "gb_");
        assert!(catalog.resolve(1).is_err());
    }

    #[test]
    fn iter_is_ascending_by_id() {
        let catalog = LocationTypeCatalog::from_entries([
            (4, TypeConfig::new("g_", "bin")),
            (1, TypeConfig::new("a_", "shelf")),
            (3, TypeConfig::new("s_", "sorter")),
        ]);
        let ids: Vec<i64> = catalog.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn catalog_error_display() {
        assert_eq!(
            format!("{}", CatalogError::UnknownType(7)),
            "unknown location type: 7"
        );
    }
}
