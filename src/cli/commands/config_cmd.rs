//! config command - Get, set, or list configuration values

use std::path::PathBuf;

use anyhow::{bail, Context as _, Result};

use crate::cli::Context;
use crate::core::config::{ApiConfig, BackupConfig, Config, FileConfig};

/// Keys accepted by `config get` / `config set`.
const KNOWN_KEYS: &[&str] = &[
    "api.base_url",
    "api.token",
    "backup.host",
    "backup.user",
    "backup.key_path",
    "backup.compose_path",
];

/// Get a configuration value.
///
/// API values reflect environment overrides, matching what commands
/// actually use.
pub fn get(ctx: &Context, key: &str) -> Result<()> {
    let config = ctx.load_config()?;

    let value = match key {
        "api.base_url" => config.base_url().map(str::to_string),
        "api.token" => config.token().map(str::to_string),
        "backup.host" => config.backup().and_then(|b| b.host.clone()),
        "backup.user" => config.backup().and_then(|b| b.user.clone()),
        "backup.key_path" => config.backup().and_then(|b| b.key_path.clone()),
        "backup.compose_path" => config.backup().and_then(|b| b.compose_path.clone()),
        _ => bail!(
            "Unknown configuration key: {} (known keys: {})",
            key,
            KNOWN_KEYS.join(", ")
        ),
    };

    match value {
        // Key exists but has no value - exit silently
        None => Ok(()),
        Some(value) => {
            println!("{}", value);
            Ok(())
        }
    }
}

/// Set a configuration value.
pub fn set(ctx: &Context, key: &str, value: &str) -> Result<()> {
    let path = config_write_path(ctx)?;

    let mut file: FileConfig = if path.exists() {
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))?
    } else {
        FileConfig::default()
    };

    match key {
        "api.base_url" => {
            file.api.get_or_insert_with(ApiConfig::default).base_url = Some(value.to_string());
        }
        "api.token" => {
            file.api.get_or_insert_with(ApiConfig::default).token = Some(value.to_string());
        }
        "backup.host" => {
            file.backup.get_or_insert_with(BackupConfig::default).host = Some(value.to_string());
        }
        "backup.user" => {
            file.backup.get_or_insert_with(BackupConfig::default).user = Some(value.to_string());
        }
        "backup.key_path" => {
            file.backup.get_or_insert_with(BackupConfig::default).key_path =
                Some(value.to_string());
        }
        "backup.compose_path" => {
            file.backup
                .get_or_insert_with(BackupConfig::default)
                .compose_path = Some(value.to_string());
        }
        _ => bail!(
            "Unknown configuration key: {} (known keys: {})",
            key,
            KNOWN_KEYS.join(", ")
        ),
    }

    Config::write(&path, &file).context("Failed to write config")?;

    if !ctx.quiet {
        println!("Set {} = {}", key, value);
    }

    Ok(())
}

/// List all configuration values.
///
/// The token is shown as `(set)` rather than in the clear.
pub fn list(ctx: &Context) -> Result<()> {
    let config = ctx.load_config()?;

    println!("# Locsmith Configuration");
    if let Some(path) = config.loaded_from() {
        println!("# loaded from {}", path.display());
    } else {
        println!("# no config file found, defaults and environment apply");
    }

    print_value("api.base_url", config.base_url());
    print_value(
        "api.token",
        config.token().map(|_| "(set)"),
    );

    let backup = config.backup();
    print_value("backup.host", backup.and_then(|b| b.host.as_deref()));
    print_value("backup.user", backup.and_then(|b| b.user.as_deref()));
    print_value("backup.key_path", backup.and_then(|b| b.key_path.as_deref()));
    print_value(
        "backup.compose_path",
        backup.and_then(|b| b.compose_path.as_deref()),
    );

    let catalog = config.catalog();
    for (id, entry) in catalog.iter() {
        println!(
            "location_types.{} = prefix '{}', description '{}'",
            id, entry.prefix, entry.description
        );
    }

    Ok(())
}

/// Where `config set` writes: the explicit `--config` path, or the
/// canonical location.
fn config_write_path(ctx: &Context) -> Result<PathBuf> {
    match &ctx.config_path {
        Some(path) => Ok(path.clone()),
        None => Config::canonical_path().context("Failed to resolve config path"),
    }
}

fn print_value(key: &str, value: Option<&str>) {
    match value {
        Some(value) => println!("{} = {}", key, value),
        None => println!("{} = (not set)", key),
    }
}
