use serde::{Deserialize, Serialize};
use waypoint_primitives::{impl_buf_wrapper, BlockHeight, Buf32};

use crate::HashEra;

/// Pinned block hash. Opaque beyond equality.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckpointHash(Buf32);

impl_buf_wrapper!(CheckpointHash, Buf32, 32);

impl CheckpointHash {
    pub const fn new(buf: Buf32) -> Self {
        Self(buf)
    }

    pub fn inner(&self) -> &Buf32 {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }
}

/// A single trusted `(era, height, hash)` binding.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    era: HashEra,
    height: BlockHeight,
    hash: CheckpointHash,
}

impl Checkpoint {
    pub fn new(era: HashEra, height: BlockHeight, hash: CheckpointHash) -> Self {
        Self { era, height, hash }
    }

    pub fn era(&self) -> HashEra {
        self.era
    }

    pub fn height(&self) -> BlockHeight {
        self.height
    }

    pub fn hash(&self) -> &CheckpointHash {
        &self.hash
    }
}
