//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Config file
//! 3. Environment variables (`INVENTREE_API_TOKEN`, `INVENTREE_BASE_URL`)
//! 4. CLI flags (not handled here)
//!
//! # Config File Locations
//!
//! Searched in order:
//! 1. `$LOCSMITH_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/locsmith/config.toml`
//! 3. `~/.locsmith/config.toml` (canonical write location)
//!
//! Missing files are not an error; defaults plus environment apply.
//!
//! # Design
//!
//! The loaded [`Config`] is an explicitly passed value - there is no
//! ambient global state. Commands receive it through the CLI context.
//!
//! # Example
//!
//! ```no_run
//! use locsmith::core::config::Config;
//!
//! let config = Config::load(None).unwrap();
//! if let Some(url) = config.base_url() {
//!     println!("API base: {}", url);
//! }
//! ```

pub mod schema;

pub use schema::{ApiConfig, BackupConfig, FileConfig, LocationTypeEntry};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::catalog::{LocationTypeCatalog, TypeConfig};

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Loaded configuration with environment overrides applied.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed file contents (defaults when no file was found).
    pub file: FileConfig,
    /// Token from `INVENTREE_API_TOKEN`, overriding the file.
    env_token: Option<String>,
    /// Base URL from `INVENTREE_BASE_URL`, overriding the file.
    env_base_url: Option<String>,
    /// Path the file was loaded from (if any).
    loaded_from: Option<PathBuf>,
}

impl Config {
    /// Load configuration.
    ///
    /// `explicit_path` (the `--config` flag) takes precedence over the
    /// standard locations; for an explicit path the file must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read or
    /// parsed, or if validation fails.
    pub fn load(explicit_path: Option<&Path>) -> Result<Config, ConfigError> {
        let (file, loaded_from) = match explicit_path {
            Some(path) => (Self::read_file(path)?, Some(path.to_path_buf())),
            None => Self::load_from_standard_locations()?,
        };

        file.validate()?;

        Ok(Config {
            file,
            env_token: env_non_empty("INVENTREE_API_TOKEN"),
            env_base_url: env_non_empty("INVENTREE_BASE_URL"),
            loaded_from,
        })
    }

    /// Search the standard locations for a config file.
    fn load_from_standard_locations() -> Result<(FileConfig, Option<PathBuf>), ConfigError> {
        // 1. Check $LOCSMITH_CONFIG
        if let Ok(path) = std::env::var("LOCSMITH_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                let config = Self::read_file(&path)?;
                return Ok((config, Some(path)));
            }
        }

        // 2. Check $XDG_CONFIG_HOME/locsmith/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("locsmith/config.toml");
            if path.exists() {
                let config = Self::read_file(&path)?;
                return Ok((config, Some(path)));
            }
        }

        // 3. Check ~/.locsmith/config.toml
        if let Some(home) = dirs::home_dir() {
            let path = home.join(".locsmith/config.toml");
            if path.exists() {
                let config = Self::read_file(&path)?;
                return Ok((config, Some(path)));
            }
        }

        // No config found, use defaults
        Ok((FileConfig::default(), None))
    }

    /// Read and parse one config file.
    fn read_file(path: &Path) -> Result<FileConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Get the canonical config file path (`~/.locsmith/config.toml`).
    pub fn canonical_path() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".locsmith/config.toml"))
    }

    /// Write a config file atomically.
    ///
    /// Creates parent directories if needed. Uses atomic write
    /// (write to temp file, then rename) to prevent corruption.
    pub fn write(path: &Path, config: &FileConfig) -> Result<(), ConfigError> {
        config.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let contents =
            toml::to_string_pretty(config).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

        let temp_path = path.with_extension("toml.tmp");
        let mut file = fs::File::create(&temp_path).map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        file.write_all(contents.as_bytes())
            .map_err(|e| ConfigError::WriteError {
                path: temp_path.clone(),
                source: e,
            })?;

        file.sync_all().map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, path).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }

    // =========================================================================
    // Accessor methods with precedence
    // =========================================================================

    /// Get the API base URL (environment overrides the file).
    pub fn base_url(&self) -> Option<&str> {
        self.env_base_url
            .as_deref()
            .or_else(|| self.file.api.as_ref().and_then(|a| a.base_url.as_deref()))
    }

    /// Get the API token (environment overrides the file).
    pub fn token(&self) -> Option<&str> {
        self.env_token
            .as_deref()
            .or_else(|| self.file.api.as_ref().and_then(|a| a.token.as_deref()))
    }

    /// Get the backup settings, if configured.
    pub fn backup(&self) -> Option<&BackupConfig> {
        self.file.backup.as_ref()
    }

    /// Build the location type catalog.
    ///
    /// `[[location_types]]` entries replace the builtin catalog wholesale;
    /// without them the builtin map applies.
    pub fn catalog(&self) -> LocationTypeCatalog {
        match &self.file.location_types {
            Some(entries) => LocationTypeCatalog::from_entries(entries.iter().map(|e| {
                (
                    e.id,
                    TypeConfig::new(e.prefix.clone(), e.description.clone()),
                )
            })),
            None => LocationTypeCatalog::builtin(),
        }
    }

    /// Get the path the config file was loaded from.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.loaded_from.as_deref()
    }
}

/// Read an environment variable, treating empty values as unset.
fn env_non_empty(key: &str) -> Option<String> {
    match std::env::var(key) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}
