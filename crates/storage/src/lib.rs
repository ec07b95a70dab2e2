//! In-memory storage for the node's trusted checkpoint registry.

mod managers;

pub use managers::checkpoint::CheckpointManager;
