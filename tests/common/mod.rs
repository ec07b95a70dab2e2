//! Registry builders shared by the checkpoint test binaries.

use std::sync::Arc;

use waypoint_checkpoint_types::{CheckpointHash, CheckpointSet, HashEra};
use waypoint_consensus_logic::CheckpointPolicy;
use waypoint_primitives::BlockHeight;
use waypoint_storage::CheckpointManager;

/// Digest with every byte set to `byte`.
pub fn hash(byte: u8) -> CheckpointHash {
    CheckpointHash::from([byte; 32])
}

/// Hex text of [`hash`].
pub fn hash_hex(byte: u8) -> String {
    hash(byte).to_hex()
}

/// Builds a set from `(height, byte)` pairs per era.
pub fn registry(
    primary: &[(BlockHeight, u8)],
    secondary: &[(BlockHeight, u8)],
) -> anyhow::Result<CheckpointSet> {
    let mut set = CheckpointSet::new();
    for (era, points) in [(HashEra::Primary, primary), (HashEra::Secondary, secondary)] {
        for &(height, byte) in points {
            set.add_checkpoint(era, height, hash(byte))?;
        }
    }
    Ok(set)
}

/// Policy over a fresh manager seeded with the given checkpoints.
pub fn policy(
    primary: &[(BlockHeight, u8)],
    secondary: &[(BlockHeight, u8)],
) -> anyhow::Result<CheckpointPolicy> {
    let manager = CheckpointManager::from_set(registry(primary, secondary)?);
    Ok(CheckpointPolicy::new(Arc::new(manager)))
}
