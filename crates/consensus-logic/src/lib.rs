//! Chain admission rules derived from the trusted checkpoint registry.
//!
//! Everything here is a pure read over a [`CheckpointSet`] snapshot. The
//! block validation pipeline consults it before appending a block, and fork
//! choice consults it before extending or switching to an alternative branch.
//!
//! [`CheckpointSet`]: waypoint_checkpoint_types::CheckpointSet

pub mod checkpoint_verification;
pub mod fork_guard;
mod policy;

pub use checkpoint_verification::{
    check_block, is_in_checkpoint_zone, verify_block, CheckpointVerdict,
};
pub use fork_guard::{fork_boundary, is_alternative_block_allowed};
pub use policy::CheckpointPolicy;
