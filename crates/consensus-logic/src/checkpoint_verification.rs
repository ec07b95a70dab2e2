//! Verification of individual blocks against pinned checkpoint hashes.

use tracing::*;
use waypoint_checkpoint_types::{CheckpointError, CheckpointHash, CheckpointSet, HashEra};
use waypoint_primitives::BlockHeight;

/// Outcome of checking one block against the registry.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CheckpointVerdict {
    /// False only when the height is pinned and the hash differs.
    pub passes: bool,

    /// Whether the height carries a checkpoint in the queried era.
    pub is_checkpointed: bool,
}

impl CheckpointVerdict {
    const UNPINNED: Self = Self {
        passes: true,
        is_checkpointed: false,
    };
}

/// Whether `height` lies in the consensus-pinned part of the chain, ie. at or
/// below the highest checkpoint of either era.
///
/// Always false on an empty registry.
pub fn is_in_checkpoint_zone(set: &CheckpointSet, height: BlockHeight) -> bool {
    set.max_height().is_some_and(|max| height <= max)
}

/// Checks `hash` against the checkpoint pinned at `height` in `era`.
///
/// Heights without a checkpoint trivially pass. A failing verdict is a
/// consensus failure and the block must be rejected along with any chain
/// built on it.
pub fn check_block(
    set: &CheckpointSet,
    height: BlockHeight,
    hash: &CheckpointHash,
    era: HashEra,
) -> CheckpointVerdict {
    let Some(expected) = set.get(era, height) else {
        return CheckpointVerdict::UNPINNED;
    };

    let passes = expected == hash;
    if passes {
        debug!(%era, %height, ?hash, "checkpoint passed");
    } else {
        error!(
            %era,
            %height,
            expected = ?expected,
            fetched = ?hash,
            "checkpoint failed"
        );
    }

    CheckpointVerdict {
        passes,
        is_checkpointed: true,
    }
}

/// Like [`check_block`], but turns a failing verdict into
/// [`CheckpointError::Mismatch`]. On success returns whether the height was
/// pinned.
pub fn verify_block(
    set: &CheckpointSet,
    height: BlockHeight,
    hash: &CheckpointHash,
    era: HashEra,
) -> Result<bool, CheckpointError> {
    let verdict = check_block(set, height, hash, era);
    match set.get(era, height) {
        Some(expected) if !verdict.passes => Err(CheckpointError::Mismatch {
            era,
            height,
            expected: *expected,
            actual: *hash,
        }),
        _ => Ok(verdict.is_checkpointed),
    }
}
