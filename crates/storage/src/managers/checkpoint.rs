//! Checkpoint registry manager.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::*;
use waypoint_checkpoint_types::{CheckpointHash, CheckpointResult, CheckpointSet, HashEra};
use waypoint_primitives::BlockHeight;

/// Shares the checkpoint registry between validation workers.
///
/// Readers take an `Arc` snapshot and query it without holding any lock.
/// Writers are serialized by the write lock and publish their result by
/// replacing the snapshot, so a reader sees either all of an update or none
/// of it.
#[derive(Debug, Default)]
pub struct CheckpointManager {
    current: RwLock<Arc<CheckpointSet>>,
}

impl CheckpointManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a manager seeded with an already validated set.
    pub fn from_set(set: CheckpointSet) -> Self {
        Self {
            current: RwLock::new(Arc::new(set)),
        }
    }

    /// Returns the current snapshot of the registry.
    pub fn snapshot(&self) -> Arc<CheckpointSet> {
        self.current.read().clone()
    }

    /// Parses and binds a single checkpoint.
    ///
    /// On error the published snapshot is left as it was.
    pub fn add_checkpoint_hex(
        &self,
        era: HashEra,
        height: BlockHeight,
        hash_hex: &str,
    ) -> CheckpointResult<()> {
        let hash = hash_hex.parse::<CheckpointHash>()?;
        self.add_checkpoint(era, height, hash)
    }

    pub fn add_checkpoint(
        &self,
        era: HashEra,
        height: BlockHeight,
        hash: CheckpointHash,
    ) -> CheckpointResult<()> {
        let mut cur = self.current.write();

        // No copy of the snapshot for a no-op or a failing add.
        if cur.check_binding(era, height, &hash)? {
            return Ok(());
        }

        Arc::make_mut(&mut *cur).add_checkpoint(era, height, hash)
    }

    /// Validates `other` against the registry without importing anything.
    pub fn merge(&self, other: &CheckpointSet) -> CheckpointResult<()> {
        self.current.read().merge(other)
    }

    /// Conflict-checks `other` and then publishes a snapshot containing the
    /// union of both sets. Returns how many checkpoints were new.
    ///
    /// When `other` adds nothing the published snapshot is kept as is.
    pub fn import(&self, other: &CheckpointSet) -> CheckpointResult<usize> {
        let mut cur = self.current.write();
        if cur.count_missing(other)? == 0 {
            return Ok(0);
        }

        let added = Arc::make_mut(&mut *cur).insert_missing(other);
        info!(%added, total = %cur.len(), "imported checkpoints into registry");
        Ok(added)
    }

    pub fn max_height(&self) -> Option<BlockHeight> {
        self.current.read().max_height()
    }

    pub fn len(&self) -> usize {
        self.current.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.read().is_empty()
    }
}
