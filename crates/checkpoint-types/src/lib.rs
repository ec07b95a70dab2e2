//! Checkpoint types: the era tags, pinned hashes and the height-indexed
//! registry that holds them.

mod checkpoint;
mod era;
mod errors;
mod set;

pub use checkpoint::*;
pub use era::{HashEra, UnknownHashEra};
pub use errors::{CheckpointError, CheckpointResult};
pub use set::CheckpointSet;
