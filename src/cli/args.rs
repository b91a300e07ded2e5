//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--config <path>`: Use an explicit config file
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Locsmith - a CLI for managing InvenTree stock location hierarchies
#[derive(Parser, Debug)]
#[command(name = "loc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Use this config file instead of the standard locations
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List all stock locations
    Locations,

    /// List the server's location types and their naming configuration
    Types,

    /// Create sequentially numbered locations under a parent
    ///
    /// New names fill numeric gaps left by deleted locations before
    /// extending past the highest number in use.
    #[command(after_help = "Examples:
    loc create --parent 'Workshop/Cabinet A' --location-type 4 --count 5
    loc create --parent Workshop --location-type 1 --simulate")]
    Create {
        /// Path string of the parent location
        #[arg(long, value_name = "PATH")]
        parent: String,

        /// Location type id (see `loc types`)
        #[arg(long, value_name = "ID")]
        location_type: i64,

        /// How many locations to create
        #[arg(long, default_value_t = 1)]
        count: usize,

        /// Show what would be created without calling the API
        #[arg(long)]
        simulate: bool,
    },

    /// Move sublocations of one parent under another
    #[command(after_help = "Examples:
    loc move --source 'Cabinet A' --target 'Cabinet B'
    loc move --source 'Cabinet A' --target 'Cabinet B' --ids 12,15,20")]
    Move {
        /// Path string of the current parent
        #[arg(long, value_name = "PATH")]
        source: String,

        /// Path string of the new parent
        #[arg(long, value_name = "PATH")]
        target: String,

        /// Only move these sublocation ids (comma separated)
        #[arg(long, value_delimiter = ',', value_name = "ID")]
        ids: Option<Vec<i64>>,

        /// Show the plan without calling the API
        #[arg(long)]
        simulate: bool,
    },

    /// Trigger a backup on the InvenTree host over SSH
    Backup,

    /// Show the configured server and its version
    Version,

    /// Get, set, or list configuration values
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    #[command(after_help = "Examples:
    loc completion bash > /etc/bash_completion.d/loc
    loc completion zsh > ~/.zfunc/_loc")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommand actions.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Get a configuration value
    Get {
        /// Key to read (e.g. api.base_url)
        key: String,
    },
    /// Set a configuration value
    Set {
        /// Key to set (e.g. backup.host)
        key: String,
        /// Value to set
        value: String,
    },
    /// List all configuration values
    List,
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_args_are_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn create_parses_flags() {
        let cli = Cli::try_parse_from([
            "loc",
            "create",
            "--parent",
            "Workshop",
            "--location-type",
            "4",
            "--count",
            "3",
            "--simulate",
        ])
        .unwrap();

        match cli.command {
            Command::Create {
                parent,
                location_type,
                count,
                simulate,
            } => {
                assert_eq!(parent, "Workshop");
                assert_eq!(location_type, 4);
                assert_eq!(count, 3);
                assert!(simulate);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn create_count_defaults_to_one() {
        let cli = Cli::try_parse_from([
            "loc",
            "create",
            "--parent",
            "Workshop",
            "--location-type",
            "1",
        ])
        .unwrap();

        match cli.command {
            Command::Create { count, simulate, .. } => {
                assert_eq!(count, 1);
                assert!(!simulate);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn move_ids_are_comma_separated() {
        let cli = Cli::try_parse_from([
            "loc",
            "move",
            "--source",
            "Cabinet A",
            "--target",
            "Cabinet B",
            "--ids",
            "12,15,20",
        ])
        .unwrap();

        match cli.command {
            Command::Move { ids, .. } => assert_eq!(ids, Some(vec![12, 15, 20])),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_flags_apply_after_subcommand() {
        let cli = Cli::try_parse_from(["loc", "locations", "--quiet", "--debug"]).unwrap();
        assert!(cli.quiet);
        assert!(cli.debug);
    }
}
