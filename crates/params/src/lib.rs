//! Trusted checkpoint parameters: the lists compiled into the node for each
//! network and the on-disk format for externally supplied lists.

mod checkpoints;
mod errors;
mod network;

pub use checkpoints::{trusted_checkpoints, CheckpointEntry, CheckpointList};
pub use errors::ParamsError;
pub use network::Network;
