//! Locsmith - a CLI for managing InvenTree stock location hierarchies
//!
//! Locsmith talks to an InvenTree server to list storage locations, move
//! sublocations between parents, and bulk-create new locations whose names
//! follow a per-type progressive numbering convention (e.g. `a_0007`),
//! filling numeric gaps left by deleted or renamed locations.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to ops)
//! - [`ops`] - Orchestrates scan → allocate → create and plan → apply flows
//! - [`core`] - Pure domain logic: catalog, scanner, allocator, move planner
//! - [`inventory`] - Abstraction for the remote InvenTree API
//! - [`backup`] - Remote backup trigger over SSH
//! - [`ui`] - User interaction utilities
//!
//! # Correctness Invariants
//!
//! 1. Core functions are pure: no I/O, no shared mutable state
//! 2. Naming state is derived fresh from the remote location list per call
//! 3. Bulk operations are best-effort and report one outcome per item
//! 4. An unknown location type degrades to empty results, never a crash

pub mod backup;
pub mod cli;
pub mod core;
pub mod inventory;
pub mod ops;
pub mod ui;
