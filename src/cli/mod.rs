//! cli
//!
//! Command-line interface layer for Locsmith.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Load configuration and construct the inventory client
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to
//! command handlers, which call into [`crate::ops`] and [`crate::core`].
//! No command talks to the network except through the `Inventory` trait.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use std::path::PathBuf;

use anyhow::{bail, Context as _, Result};

use crate::core::config::Config;
use crate::inventory::InvenTreeClient;
use crate::ui::output::Verbosity;

/// Per-invocation context passed to every command handler.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Explicit config file path (`--config`).
    pub config_path: Option<PathBuf>,
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (minimal output).
    pub quiet: bool,
}

impl Context {
    /// Output verbosity derived from the flags.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }

    /// Load configuration, honoring `--config`.
    pub fn load_config(&self) -> Result<Config> {
        Config::load(self.config_path.as_deref()).context("Failed to load configuration")
    }

    /// Build an InvenTree client from the loaded configuration.
    ///
    /// # Errors
    ///
    /// Fails with a setup hint if the base URL or token is missing.
    pub fn client(&self, config: &Config) -> Result<InvenTreeClient> {
        let Some(base_url) = config.base_url() else {
            bail!(
                "No API base URL configured. Set api.base_url with \
                 'loc config set api.base_url <url>' or export INVENTREE_BASE_URL."
            );
        };
        let Some(token) = config.token() else {
            bail!(
                "No API token configured. Set api.token with \
                 'loc config set api.token <token>' or export INVENTREE_API_TOKEN."
            );
        };
        Ok(InvenTreeClient::new(base_url, token))
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let ctx = Context {
        config_path: cli.config.clone(),
        debug: cli.debug,
        quiet: cli.quiet,
    };

    // Dispatch to command handler
    commands::dispatch(cli.command, &ctx)
}
