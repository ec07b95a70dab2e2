//! Error types for initialization and configuration.

use thiserror::Error;
use waypoint_checkpoint_types::CheckpointError;
use waypoint_common::logging::LoggingError;
use waypoint_config::ConfigError;
use waypoint_params::ParamsError;

#[derive(Debug, Error)]
pub(crate) enum InitError {
    #[error("config: {0}")]
    MalformedConfig(#[from] ConfigError),

    #[error("params: {0}")]
    MalformedParams(#[from] ParamsError),

    /// A loaded list disagrees with checkpoints already trusted. Startup must
    /// not continue with either version.
    #[error("checkpoint list '{source_name}' rejected: {err}")]
    RejectedCheckpoints {
        source_name: String,
        #[source]
        err: CheckpointError,
    },

    #[error("logging: {0}")]
    Logging(#[from] LoggingError),
}
