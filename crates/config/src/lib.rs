//! Node configuration for the checkpoint subsystem.

mod config;
mod errors;
mod overrides;

pub use config::{CheckpointsConfig, Config, LoggingConfig};
pub use errors::ConfigError;
pub use overrides::{apply_override, parse_override};
