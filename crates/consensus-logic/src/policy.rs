use std::sync::Arc;

use waypoint_checkpoint_types::{CheckpointError, CheckpointHash, HashEra};
use waypoint_primitives::BlockHeight;
use waypoint_storage::CheckpointManager;

use crate::{
    check_block, fork_guard, is_in_checkpoint_zone, verify_block, CheckpointVerdict,
};

/// Handle validation workers hold to apply checkpoint rules against the
/// node's live registry.
///
/// Every query runs against the snapshot published at the time of the call.
#[derive(Clone, Debug)]
pub struct CheckpointPolicy {
    manager: Arc<CheckpointManager>,
}

impl CheckpointPolicy {
    pub fn new(manager: Arc<CheckpointManager>) -> Self {
        Self { manager }
    }

    pub fn manager(&self) -> &Arc<CheckpointManager> {
        &self.manager
    }

    pub fn is_in_checkpoint_zone(&self, height: BlockHeight) -> bool {
        is_in_checkpoint_zone(&self.manager.snapshot(), height)
    }

    pub fn check_block(
        &self,
        height: BlockHeight,
        hash: &CheckpointHash,
        era: HashEra,
    ) -> CheckpointVerdict {
        check_block(&self.manager.snapshot(), height, hash, era)
    }

    pub fn verify_block(
        &self,
        height: BlockHeight,
        hash: &CheckpointHash,
        era: HashEra,
    ) -> Result<bool, CheckpointError> {
        verify_block(&self.manager.snapshot(), height, hash, era)
    }

    /// Binding fork boundary at `chain_height`, if any.
    pub fn fork_boundary(&self, chain_height: BlockHeight) -> Option<BlockHeight> {
        fork_guard::fork_boundary(&self.manager.snapshot(), chain_height)
    }

    pub fn is_alternative_block_allowed(
        &self,
        chain_height: BlockHeight,
        fork_height: BlockHeight,
    ) -> bool {
        fork_guard::is_alternative_block_allowed(
            &self.manager.snapshot(),
            chain_height,
            fork_height,
        )
    }
}
