//! core::scan
//!
//! Sequence scanner: given the full location list and a selected type,
//! find the names that follow the type's numbering convention and the
//! highest progressive number currently in use.
//!
//! # Design
//!
//! `scan` is a pure function over its inputs. It never performs I/O and
//! never fails: an unknown type or a malformed name degrades to a neutral
//! result plus a [`ScanWarning`], which the CLI layer surfaces to the
//! user. The highest number is recomputed by a linear pass per call;
//! there is no persistent index to invalidate.
//!
//! # Example
//!
//! ```
//! use locsmith::core::catalog::LocationTypeCatalog;
//! use locsmith::core::scan::scan;
//! use locsmith::core::types::LocationRecord;
//!
//! let locations = vec![LocationRecord {
//!     id: 1,
//!     name: "a_0003".to_string(),
//!     pathstring: "Workshop/a_0003".to_string(),
//!     parent_id: None,
//! }];
//!
//! let result = scan(&locations, &LocationTypeCatalog::builtin(), 1);
//! assert_eq!(result.highest, 3);
//! assert_eq!(result.matching, vec!["a_0003".to_string()]);
//! ```

use std::fmt;

use crate::core::catalog::LocationTypeCatalog;
use crate::core::types::LocationRecord;

/// A non-fatal anomaly observed while scanning.
///
/// Warnings are data, not side effects: the scanner collects them and the
/// caller decides how to surface them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanWarning {
    /// The selected type id has no catalog entry; the scan returned
    /// neutral defaults.
    UnknownType {
        /// The unresolvable type id.
        type_id: i64,
    },
    /// A name starts with the type prefix but its remainder is not a
    /// non-negative integer. Excluded from all arithmetic.
    MalformedName {
        /// The offending location name.
        name: String,
    },
}

impl fmt::Display for ScanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanWarning::UnknownType { type_id } => {
                write!(f, "no prefix configured for location type {}", type_id)
            }
            ScanWarning::MalformedName { name } => {
                write!(f, "invalid number format in location name: {}", name)
            }
        }
    }
}

/// Result of scanning the location list for one type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    /// Highest progressive number in use, `0` if none.
    pub highest: u32,
    /// Names matching the type prefix with a valid numeric suffix,
    /// sorted ascending by that suffix (stable for duplicates).
    pub matching: Vec<String>,
    /// Non-fatal anomalies observed during the scan.
    pub warnings: Vec<ScanWarning>,
}

/// Parse the numeric suffix of `name` under `prefix`.
///
/// Returns `None` unless the remainder after the exact byte prefix is a
/// non-empty run of ASCII digits that fits in a `u32`. This is stricter
/// than `str::parse` alone, which would accept a leading `+`.
pub fn parse_suffix(prefix: &str, name: &str) -> Option<u32> {
    let rest = name.strip_prefix(prefix)?;
    if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    rest.parse().ok()
}

/// Scan `locations` for names following the numbering convention of
/// `type_id`.
///
/// Unknown types yield `ScanResult::default()` plus an `UnknownType`
/// warning. Prefix matching is exact, case-sensitive, and byte-wise.
pub fn scan(
    locations: &[LocationRecord],
    catalog: &LocationTypeCatalog,
    type_id: i64,
) -> ScanResult {
    let Ok(config) = catalog.resolve(type_id) else {
        return ScanResult {
            warnings: vec![ScanWarning::UnknownType { type_id }],
            ..ScanResult::default()
        };
    };

    let mut warnings = Vec::new();
    let mut numbered: Vec<(u32, String)> = Vec::new();

    for location in locations {
        if !location.name.starts_with(&config.prefix) {
            continue;
        }
        match parse_suffix(&config.prefix, &location.name) {
            Some(number) => numbered.push((number, location.name.clone())),
            None => warnings.push(ScanWarning::MalformedName {
                name: location.name.clone(),
            }),
        }
    }

    // Stable sort: duplicate numbers keep their original relative order.
    numbered.sort_by_key(|(number, _)| *number);

    let highest = numbered.last().map(|(number, _)| *number).unwrap_or(0);
    let matching = numbered.into_iter().map(|(_, name)| name).collect();

    ScanResult {
        highest,
        matching,
        warnings,
    }
}
