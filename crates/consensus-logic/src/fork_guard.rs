//! Limits on how deep an alternative branch may fork off the canonical chain.

use tracing::*;
use waypoint_checkpoint_types::{CheckpointSet, HashEra};
use waypoint_primitives::BlockHeight;

/// Height below or at which no fork may start, given the canonical chain is
/// at `chain_height`.
///
/// Each era contributes its greatest checkpoint at or below `chain_height`;
/// the larger of the two binds, so a fork can never rewrite history pinned by
/// either era. `None` means the chain is not yet checkpoint-protected.
pub fn fork_boundary(set: &CheckpointSet, chain_height: BlockHeight) -> Option<BlockHeight> {
    HashEra::ALL
        .into_iter()
        .filter_map(|era| set.last_at_or_below(era, chain_height))
        .max()
}

/// Whether a competing branch may fork away at `fork_height` while the
/// canonical chain stands at `chain_height`.
///
/// Height 0 is never a valid fork point. Otherwise the fork must start
/// strictly above the binding checkpoint boundary.
pub fn is_alternative_block_allowed(
    set: &CheckpointSet,
    chain_height: BlockHeight,
    fork_height: BlockHeight,
) -> bool {
    if fork_height == 0 {
        return false;
    }

    match fork_boundary(set, chain_height) {
        None => true,
        Some(boundary) => {
            let allowed = fork_height > boundary;
            if !allowed {
                debug!(
                    %chain_height,
                    %fork_height,
                    %boundary,
                    "rejecting alternative block below checkpoint"
                );
            }
            allowed
        }
    }
}
