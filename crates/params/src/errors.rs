use std::io;

use thiserror::Error;
use waypoint_checkpoint_types::CheckpointError;

#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("io: {0}")]
    Io(#[from] io::Error),

    #[error("unparsable checkpoint list: {0}")]
    Json(#[from] serde_json::Error),

    #[error("checkpoint at list index {index}: {source}")]
    Checkpoint {
        index: usize,
        #[source]
        source: CheckpointError,
    },

    #[error("unknown network: {0}")]
    UnknownNetwork(String),
}
