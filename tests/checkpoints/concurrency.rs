//! Readers never observe a half-applied import.

#![allow(
    unused_crate_dependencies,
    reason = "test dependencies shared across test suite"
)]

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread,
};

use integration_tests::common::*;
use waypoint_checkpoint_types::{CheckpointSet, HashEra};
use waypoint_consensus_logic::CheckpointPolicy;
use waypoint_storage::CheckpointManager;

const BATCHES: u64 = 200;
const READERS: usize = 4;

/// Every batch binds the same height in both eras, so any consistent
/// snapshot has equal per-era maxima.
fn batch(height: u64) -> CheckpointSet {
    registry(&[(height, 1)], &[(height, 2)]).unwrap()
}

#[test]
fn readers_see_whole_imports_only() {
    let manager = Arc::new(CheckpointManager::new());
    let policy = CheckpointPolicy::new(manager.clone());
    let done = Arc::new(AtomicBool::new(false));

    let readers: Vec<_> = (0..READERS)
        .map(|_| {
            let policy = policy.clone();
            let done = done.clone();
            thread::spawn(move || {
                let mut observed = 0;
                while !done.load(Ordering::Acquire) {
                    let snap = policy.manager().snapshot();
                    assert_eq!(
                        snap.max_height_in(HashEra::Primary),
                        snap.max_height_in(HashEra::Secondary)
                    );
                    assert_eq!(snap.len() % 2, 0);

                    if let Some(max) = snap.max_height() {
                        assert!(max >= observed, "max height went backwards");
                        observed = max;
                    }
                }
            })
        })
        .collect();

    for height in 1..=BATCHES {
        let set = batch(height);
        manager.merge(&set).unwrap();
        manager.import(&set).unwrap();
    }
    done.store(true, Ordering::Release);

    for reader in readers {
        reader.join().unwrap();
    }

    assert_eq!(manager.len(), 2 * BATCHES as usize);
    assert_eq!(manager.max_height(), Some(BATCHES));
    assert!(!policy.is_alternative_block_allowed(BATCHES, BATCHES));
}

#[test]
fn conflicting_writers_leave_one_binding() {
    let manager = Arc::new(CheckpointManager::new());

    let writers: Vec<_> = (1..=8u8)
        .map(|byte| {
            let manager = manager.clone();
            thread::spawn(move || manager.add_checkpoint(HashEra::Primary, 42, hash(byte)).is_ok())
        })
        .collect();

    let successes = writers
        .into_iter()
        .map(|w| w.join().unwrap())
        .filter(|ok| *ok)
        .count();

    assert_eq!(successes, 1);
    assert_eq!(manager.len(), 1);
}
