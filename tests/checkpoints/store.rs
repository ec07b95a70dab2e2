//! Checkpoint store behaviour through the shared manager.

#![allow(
    unused_crate_dependencies,
    reason = "test dependencies shared across test suite"
)]

use integration_tests::common::*;
use waypoint_checkpoint_types::{CheckpointError, HashEra};
use waypoint_primitives::ParseError;
use waypoint_storage::CheckpointManager;

#[test]
fn readding_identical_checkpoint_is_idempotent() {
    let manager = CheckpointManager::new();
    manager
        .add_checkpoint_hex(HashEra::Primary, 10, &hash_hex(1))
        .unwrap();
    let before = manager.snapshot();

    manager
        .add_checkpoint_hex(HashEra::Primary, 10, &hash_hex(1))
        .unwrap();

    assert_eq!(*manager.snapshot(), *before);
    assert_eq!(manager.len(), 1);
}

#[test]
fn conflicting_add_keeps_original_binding() {
    let policy = policy(&[(10, 1)], &[]).unwrap();
    let manager = policy.manager();

    let err = manager
        .add_checkpoint_hex(HashEra::Primary, 10, &hash_hex(2))
        .unwrap_err();
    assert!(matches!(err, CheckpointError::Conflict { height: 10, .. }));

    let verdict = policy.check_block(10, &hash(1), HashEra::Primary);
    assert!(verdict.passes);
    assert!(verdict.is_checkpointed);
    assert!(!policy.check_block(10, &hash(2), HashEra::Primary).passes);
}

#[test]
fn same_height_binds_independently_per_era() {
    let manager = CheckpointManager::new();
    manager.add_checkpoint(HashEra::Primary, 10, hash(1)).unwrap();
    manager
        .add_checkpoint(HashEra::Secondary, 10, hash(2))
        .unwrap();

    let snap = manager.snapshot();
    assert_eq!(snap.get(HashEra::Primary, 10), Some(&hash(1)));
    assert_eq!(snap.get(HashEra::Secondary, 10), Some(&hash(2)));
}

#[test]
fn malformed_hex_leaves_store_untouched() {
    let manager = CheckpointManager::from_set(registry(&[(1, 1)], &[]).unwrap());
    let before = manager.snapshot();

    let short = manager
        .add_checkpoint_hex(HashEra::Primary, 2, "abcd")
        .unwrap_err();
    assert!(matches!(
        short,
        CheckpointError::Parse(ParseError::InvalidLength {
            expected: 64,
            actual: 4
        })
    ));

    let bad_char = "g".repeat(64);
    let err = manager
        .add_checkpoint_hex(HashEra::Primary, 2, &bad_char)
        .unwrap_err();
    assert!(matches!(err, CheckpointError::Parse(ParseError::InvalidHex(_))));

    assert_eq!(*manager.snapshot(), *before);
}

#[test]
fn merge_with_one_conflict_changes_nothing() {
    let manager = CheckpointManager::from_set(registry(&[(100, 1), (200, 2)], &[(50, 3)]).unwrap());
    let local_before = manager.snapshot();

    // Only the secondary entry at 50 disagrees.
    let other = registry(&[(100, 1), (300, 4)], &[(50, 9), (60, 5)]).unwrap();
    let other_before = other.clone();

    let err = manager.merge(&other).unwrap_err();
    assert!(matches!(
        err,
        CheckpointError::Conflict {
            era: HashEra::Secondary,
            height: 50,
            ..
        }
    ));

    assert_eq!(*manager.snapshot(), *local_before);
    assert_eq!(other, other_before);
}

#[test]
fn clean_merge_does_not_insert() {
    let manager = CheckpointManager::from_set(registry(&[(100, 1)], &[]).unwrap());
    let other = registry(&[(100, 1), (500, 2)], &[(7, 3)]).unwrap();

    manager.merge(&other).unwrap();

    assert_eq!(manager.len(), 1);
    assert_eq!(manager.max_height(), Some(100));
}

#[test]
fn import_after_clean_merge_inserts_missing() {
    let manager = CheckpointManager::from_set(registry(&[(100, 1)], &[]).unwrap());
    let other = registry(&[(100, 1), (500, 2)], &[(7, 3)]).unwrap();

    manager.merge(&other).unwrap();
    assert_eq!(manager.import(&other).unwrap(), 2);
    assert_eq!(manager.len(), 3);
    assert_eq!(manager.max_height(), Some(500));
}

#[test]
fn max_height_over_eras() {
    let both = registry(&[(300, 1)], &[(150, 2)]).unwrap();
    assert_eq!(both.max_height(), Some(300));

    let secondary_only = registry(&[], &[(150, 2)]).unwrap();
    assert_eq!(secondary_only.max_height(), Some(150));

    let primary_only = registry(&[(300, 1)], &[]).unwrap();
    assert_eq!(primary_only.max_height(), Some(300));

    let empty = registry(&[], &[]).unwrap();
    assert_eq!(empty.max_height(), None);
}

#[test]
fn accessors_are_ordered() {
    let set = registry(&[(30, 3), (10, 1), (20, 2)], &[(5, 9)]).unwrap();

    let primary: Vec<_> = set.points(HashEra::Primary).keys().copied().collect();
    assert_eq!(primary, vec![10, 20, 30]);

    let all: Vec<_> = set.iter().map(|cp| (cp.era(), cp.height())).collect();
    assert_eq!(
        all,
        vec![
            (HashEra::Primary, 10),
            (HashEra::Primary, 20),
            (HashEra::Primary, 30),
            (HashEra::Secondary, 5),
        ]
    );
}
