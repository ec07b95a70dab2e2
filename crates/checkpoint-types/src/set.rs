//! The checkpoint registry.

use std::collections::{btree_map::Entry, BTreeMap};

use tracing::*;
use waypoint_primitives::BlockHeight;

use crate::{Checkpoint, CheckpointError, CheckpointHash, CheckpointResult, HashEra};

/// Height-indexed registry of trusted hashes, one ordered map per era.
///
/// Bindings are append-only. A height bound in an era keeps its hash for the
/// lifetime of the set; any attempt to bind a different hash is rejected
/// without touching the set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckpointSet {
    points: [BTreeMap<BlockHeight, CheckpointHash>; 2],
}

impl CheckpointSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from a list of checkpoints, failing on the first conflict.
    pub fn from_checkpoints(
        checkpoints: impl IntoIterator<Item = Checkpoint>,
    ) -> CheckpointResult<Self> {
        let mut set = Self::new();
        for ckpt in checkpoints {
            set.add_checkpoint(ckpt.era(), ckpt.height(), *ckpt.hash())?;
        }
        Ok(set)
    }

    /// Parses `hash_hex` and binds it at `height` in `era`.
    ///
    /// Parse failures are reported before the set is looked at.
    pub fn add_checkpoint_hex(
        &mut self,
        era: HashEra,
        height: BlockHeight,
        hash_hex: &str,
    ) -> CheckpointResult<()> {
        let hash = hash_hex.parse::<CheckpointHash>()?;
        self.add_checkpoint(era, height, hash)
    }

    /// Binds `hash` at `height` in `era`.
    ///
    /// Re-adding the same binding is a no-op. A different hash at an already
    /// bound height fails with [`CheckpointError::Conflict`].
    pub fn add_checkpoint(
        &mut self,
        era: HashEra,
        height: BlockHeight,
        hash: CheckpointHash,
    ) -> CheckpointResult<()> {
        if self.check_binding(era, height, &hash)? {
            return Ok(());
        }

        self.points[era.index()].insert(height, hash);
        trace!(%era, %height, %hash, "added checkpoint");
        Ok(())
    }

    /// Checks that every binding in `other` agrees with this set wherever both
    /// bind the same height in the same era.
    ///
    /// This is a compatibility check only. Bindings missing here are not
    /// copied over; use [`Self::import`] for that.
    pub fn merge(&self, other: &CheckpointSet) -> CheckpointResult<()> {
        self.count_missing(other).map(|_| ())
    }

    /// Conflict-checks `other` against this set and counts the bindings of
    /// `other` that are not bound here yet.
    pub fn count_missing(&self, other: &CheckpointSet) -> CheckpointResult<usize> {
        let mut missing = 0;
        for ckpt in other.iter() {
            if !self.check_binding(ckpt.era(), ckpt.height(), ckpt.hash())? {
                missing += 1;
            }
        }
        Ok(missing)
    }

    /// Conflict-checks `other` against this set and then copies in every
    /// binding that is missing here.
    ///
    /// Either all of `other` is applied or, on conflict, nothing is. Returns
    /// the number of newly bound checkpoints.
    pub fn import(&mut self, other: &CheckpointSet) -> CheckpointResult<usize> {
        if self.count_missing(other)? == 0 {
            return Ok(0);
        }
        Ok(self.insert_missing(other))
    }

    /// Copies in the bindings of `other` at heights still free here. Heights
    /// already bound are skipped, never overwritten.
    ///
    /// Run [`Self::count_missing`] first; a conflicting binding in `other` is
    /// otherwise dropped silently.
    pub fn insert_missing(&mut self, other: &CheckpointSet) -> usize {
        let mut added = 0;
        for ckpt in other.iter() {
            let map = &mut self.points[ckpt.era().index()];
            if let Entry::Vacant(slot) = map.entry(ckpt.height()) {
                slot.insert(*ckpt.hash());
                added += 1;
            }
        }

        debug!(%added, total = %self.len(), "imported checkpoints");
        added
    }

    /// Returns `Ok(true)` if exactly this binding already exists, `Ok(false)`
    /// if the height is free, and a conflict error otherwise.
    pub fn check_binding(
        &self,
        era: HashEra,
        height: BlockHeight,
        hash: &CheckpointHash,
    ) -> CheckpointResult<bool> {
        match self.get(era, height) {
            None => Ok(false),
            Some(existing) if existing == hash => Ok(true),
            Some(existing) => {
                warn!(
                    %era,
                    %height,
                    existing = ?existing,
                    supplied = ?hash,
                    "checkpoint at given height already exists with a different hash"
                );
                Err(CheckpointError::Conflict {
                    era,
                    height,
                    existing: *existing,
                    supplied: *hash,
                })
            }
        }
    }

    /// Ordered bindings of one era.
    pub fn points(&self, era: HashEra) -> &BTreeMap<BlockHeight, CheckpointHash> {
        &self.points[era.index()]
    }

    pub fn get(&self, era: HashEra, height: BlockHeight) -> Option<&CheckpointHash> {
        self.points(era).get(&height)
    }

    /// All checkpoints, primary era first, each era in ascending height.
    pub fn iter(&self) -> impl Iterator<Item = Checkpoint> + '_ {
        HashEra::ALL.into_iter().flat_map(move |era| {
            self.points(era)
                .iter()
                .map(move |(height, hash)| Checkpoint::new(era, *height, *hash))
        })
    }

    pub fn len(&self) -> usize {
        self.points.iter().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.points.iter().all(BTreeMap::is_empty)
    }

    /// Highest bound height in `era`, if the era has any checkpoint.
    pub fn max_height_in(&self, era: HashEra) -> Option<BlockHeight> {
        self.points(era).last_key_value().map(|(h, _)| *h)
    }

    /// Highest bound height across both eras, or `None` when the set is empty.
    pub fn max_height(&self) -> Option<BlockHeight> {
        HashEra::ALL
            .into_iter()
            .filter_map(|era| self.max_height_in(era))
            .max()
    }

    /// Greatest checkpoint height in `era` that is `<= height`.
    pub fn last_at_or_below(&self, era: HashEra, height: BlockHeight) -> Option<BlockHeight> {
        self.points(era)
            .range(..=height)
            .next_back()
            .map(|(h, _)| *h)
    }
}
