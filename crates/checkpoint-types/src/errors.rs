use thiserror::Error;
use waypoint_primitives::{BlockHeight, ParseError};

use crate::{CheckpointHash, HashEra};

pub type CheckpointResult<T> = Result<T, CheckpointError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CheckpointError {
    /// Hash text could not be turned into a digest. Nothing was mutated.
    #[error("malformed checkpoint hash: {0}")]
    Parse(#[from] ParseError),

    /// A different hash is already bound at this height. Nothing was mutated.
    #[error("{era} checkpoint at height {height} is bound to {existing:?}, refusing {supplied:?}")]
    Conflict {
        era: HashEra,
        height: BlockHeight,
        existing: CheckpointHash,
        supplied: CheckpointHash,
    },

    /// A block disagrees with the hash pinned at its height.
    ///
    /// This is a consensus failure: the block and any chain built on it must
    /// be rejected.
    #[error("{era} checkpoint failed at height {height}: expected {expected:?}, got {actual:?}")]
    Mismatch {
        era: HashEra,
        height: BlockHeight,
        expected: CheckpointHash,
        actual: CheckpointHash,
    },
}

impl CheckpointError {
    /// Whether this error means a block itself is invalid, as opposed to bad
    /// registry input.
    pub fn is_consensus_failure(&self) -> bool {
        matches!(self, CheckpointError::Mismatch { .. })
    }
}
