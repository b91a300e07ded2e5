//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Loads configuration and builds the inventory client
//! 2. Calls ops/core to do the work
//! 3. Formats and displays output
//!
//! Handlers never talk to the network except through the `Inventory`
//! trait.
//!
//! # Async Commands
//!
//! Commands that hit the InvenTree API are async because they involve
//! network I/O. Each handler creates a tokio runtime and blocks on its
//! async body within the sync dispatch context.

mod backup;
mod completion;
mod config_cmd;
mod create;
mod locations;
mod move_cmd;
mod types_cmd;
mod version;

// Re-export command functions for testing and direct invocation
pub use backup::backup;
pub use completion::completion;
pub use config_cmd::{get as config_get, list as config_list, set as config_set};
pub use create::create;
pub use locations::locations;
pub use move_cmd::move_sublocations;
pub use types_cmd::types;
pub use version::version;

use crate::cli::args::{Command, ConfigAction};
use crate::cli::Context;
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Locations => locations(ctx),
        Command::Types => types(ctx),
        Command::Create {
            parent,
            location_type,
            count,
            simulate,
        } => create(ctx, &parent, location_type, count, simulate),
        Command::Move {
            source,
            target,
            ids,
            simulate,
        } => move_sublocations(ctx, &source, &target, ids.as_deref(), simulate),
        Command::Backup => backup(ctx),
        Command::Version => version(ctx),
        Command::Config { action } => match action {
            ConfigAction::Get { key } => config_get(ctx, &key),
            ConfigAction::Set { key, value } => config_set(ctx, &key, &value),
            ConfigAction::List => config_list(ctx),
        },
        Command::Completion { shell } => completion(shell),
    }
}
