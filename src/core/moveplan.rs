//! core::moveplan
//!
//! Sublocation move planner: describe which locations should be
//! reparented, without touching the remote service.
//!
//! # Design
//!
//! `plan_move` is a pure data transformation: one intent per input child,
//! input order preserved, no filtering. Whether the target parent exists
//! is the remote API's concern; application of the intents is best-effort
//! and handled by [`crate::ops::relocate`].

use crate::core::types::{LocationRecord, MoveIntent};

/// Plan the relocation of `children` under `target_parent_id`.
pub fn plan_move(children: &[LocationRecord], target_parent_id: i64) -> Vec<MoveIntent> {
    children
        .iter()
        .map(|child| MoveIntent {
            location_id: child.id,
            new_parent_id: target_parent_id,
        })
        .collect()
}
