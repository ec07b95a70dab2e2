use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use toml::{value::Table, Value};
use waypoint_params::{CheckpointEntry, Network};

use crate::{apply_override, parse_override, ConfigError};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub checkpoints: CheckpointsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckpointsConfig {
    /// Selects the compiled-in trusted list.
    #[serde(default)]
    pub network: Network,

    /// External JSON checkpoint list, conflict-checked against the trusted
    /// list and then imported.
    pub file: Option<PathBuf>,

    /// Inline checkpoints, treated like the external list.
    #[serde(default)]
    pub extra: Vec<CheckpointEntry>,

    /// Treat a block failing its checkpoint as fatal rather than reporting it.
    #[serde(default = "default_enforce")]
    pub enforce: bool,
}

fn default_enforce() -> bool {
    true
}

impl Default for CheckpointsConfig {
    fn default() -> Self {
        Self {
            network: Network::default(),
            file: None,
            extra: Vec::new(),
            enforce: default_enforce(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Label appended to the service name, like prod or dev.
    pub service_label: Option<String>,

    /// Enables rolling file logs in this directory.
    pub log_dir: Option<PathBuf>,

    pub log_file_prefix: Option<String>,

    pub json_format: Option<bool>,
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads the config at `path` (defaults when absent) and applies
    /// `key.path=value` overrides before deserializing.
    pub fn load(path: Option<&Path>, overrides: &[String]) -> Result<Self, ConfigError> {
        let mut value = match path {
            Some(path) => toml::from_str::<Value>(&fs::read_to_string(path)?)?,
            None => Value::Table(Table::new()),
        };

        let table = value
            .as_table_mut()
            .ok_or_else(|| ConfigError::TraverseNonTableAt {
                key: "<root>".to_owned(),
                path: String::new(),
            })?;

        for o in overrides {
            let (path, val) = parse_override(o)?;
            apply_override(&path, val, table)?;
        }

        Ok(value.try_into::<Config>()?)
    }
}
