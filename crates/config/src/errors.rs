use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io: {0}")]
    Io(#[from] io::Error),

    #[error("unparsable config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Override string not of the form `key.path=value`.
    #[error("invalid override: '{0}'")]
    InvalidOverride(String),

    /// Tried to traverse into a primitive.
    #[error("can't traverse into non-table key '{key}' of '{path}'")]
    TraverseNonTableAt { key: String, path: String },
}
