//! core::config::schema
//!
//! Configuration schema types.
//!
//! # File Layout
//!
//! ```toml
//! [api]
//! base_url = "https://inventree.example.com/api/"
//! token = "inv-abc123"
//!
//! [backup]
//! host = "inventree-host"
//! user = "deploy"
//! key_path = "/home/me/.ssh/id_ed25519"
//! compose_path = "/srv/inventree"
//!
//! [[location_types]]
//! id = 1
//! prefix = "a_"
//! description = "shelf armadio"
//! ```
//!
//! # Validation
//!
//! Values are validated after parsing: the base URL must end with `/`
//! (endpoint paths are appended verbatim), prefixes must be non-empty,
//! and location type ids must be unique.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Root of the configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// InvenTree API settings.
    pub api: Option<ApiConfig>,

    /// Remote backup settings.
    pub backup: Option<BackupConfig>,

    /// Location type catalog entries. When present, these replace the
    /// builtin catalog wholesale.
    pub location_types: Option<Vec<LocationTypeEntry>>,
}

impl FileConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(api) = &self.api {
            api.validate()?;
        }

        if let Some(entries) = &self.location_types {
            let mut seen = BTreeSet::new();
            for entry in entries {
                entry.validate()?;
                if !seen.insert(entry.id) {
                    return Err(ConfigError::InvalidValue(format!(
                        "duplicate location type id {}",
                        entry.id
                    )));
                }
            }
        }

        Ok(())
    }
}

/// InvenTree API settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ApiConfig {
    /// Base URL of the InvenTree API, trailing slash required.
    pub base_url: Option<String>,

    /// API token. `INVENTREE_API_TOKEN` overrides this.
    pub token: Option<String>,
}

impl ApiConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(url) = &self.base_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::InvalidValue(format!(
                    "api.base_url must start with http:// or https://, got '{}'",
                    url
                )));
            }
            if !url.ends_with('/') {
                return Err(ConfigError::InvalidValue(format!(
                    "api.base_url must end with '/', got '{}'",
                    url
                )));
            }
        }
        Ok(())
    }
}

/// Remote backup settings (SSH target running the InvenTree compose stack).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct BackupConfig {
    /// SSH host name or address.
    pub host: Option<String>,

    /// SSH user.
    pub user: Option<String>,

    /// Path to the SSH identity file.
    pub key_path: Option<String>,

    /// Directory on the host containing docker-compose.yml.
    pub compose_path: Option<String>,
}

/// One catalog entry: a location type id with its naming convention.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LocationTypeEntry {
    /// Location type id as known to the server.
    pub id: i64,

    /// Name prefix (e.g. `a_`).
    pub prefix: String,

    /// Description applied to newly created locations.
    #[serde(default)]
    pub description: String,
}

impl LocationTypeEntry {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.prefix.is_empty() {
            return Err(ConfigError::InvalidValue(format!(
                "location type {} has an empty prefix",
                self.id
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_is_valid() {
        FileConfig::default().validate().unwrap();
    }

    #[test]
    fn base_url_requires_trailing_slash() {
        let config = FileConfig {
            api: Some(ApiConfig {
                base_url: Some("https://inventree.example.com/api".to_string()),
                token: None,
            }),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn base_url_requires_scheme() {
        let config = FileConfig {
            api: Some(ApiConfig {
                base_url: Some("inventree.example.com/api/".to_string()),
                token: None,
            }),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn duplicate_type_ids_rejected() {
        let config = FileConfig {
            location_types: Some(vec![
                LocationTypeEntry {
                    id: 1,
                    prefix: "a_".to_string(),
                    description: String::new(),
                },
                LocationTypeEntry {
                    id: 1,
                    prefix: "b_".to_string(),
                    description: String::new(),
                },
            ]),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_prefix_rejected() {
        let config = FileConfig {
            location_types: Some(vec![LocationTypeEntry {
                id: 1,
                prefix: String::new(),
                description: "shelf".to_string(),
            }]),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn toml_roundtrip() {
        let config = FileConfig {
            api: Some(ApiConfig {
                base_url: Some("https://inventree.example.com/api/".to_string()),
                token: Some("inv-abc".to_string()),
            }),
            backup: Some(BackupConfig {
                host: Some("backup-host".to_string()),
                user: Some("deploy".to_string()),
                key_path: Some("/home/me/.ssh/id_ed25519".to_string()),
                compose_path: Some("/srv/inventree".to_string()),
            }),
            location_types: Some(vec![LocationTypeEntry {
                id: 4,
                prefix: "g_".to_string(),
                description: "gridfinity bin".to_string(),
            }]),
        };

        let toml = toml::to_string_pretty(&config).unwrap();
        let parsed: FileConfig = toml::from_str(&toml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn unknown_fields_rejected() {
        let result: Result<FileConfig, _> = toml::from_str("unknown_field = true");
        assert!(result.is_err());
    }
}
