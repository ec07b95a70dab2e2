//! Chain admission rules evaluated through the policy handle.

#![allow(
    unused_crate_dependencies,
    reason = "test dependencies shared across test suite"
)]

use integration_tests::common::*;
use proptest::prelude::*;
use waypoint_checkpoint_types::{CheckpointError, HashEra};

#[test]
fn unbound_heights_pass_unpinned() {
    let policy = policy(&[(100, 1)], &[(200, 2)]).unwrap();

    for height in [0, 1, 99, 101, 200, 10_000] {
        let verdict = policy.check_block(height, &hash(7), HashEra::Primary);
        assert!(verdict.passes, "height {height}");
        assert!(!verdict.is_checkpointed, "height {height}");
    }
}

#[test]
fn checkpoint_zone() {
    let empty = policy(&[], &[]).unwrap();
    for height in [0, 1, 1_000, u64::MAX] {
        assert!(!empty.is_in_checkpoint_zone(height));
    }

    let policy = policy(&[(100, 1)], &[(250, 2)]).unwrap();
    assert!(policy.is_in_checkpoint_zone(0));
    assert!(policy.is_in_checkpoint_zone(100));
    assert!(policy.is_in_checkpoint_zone(250));
    assert!(!policy.is_in_checkpoint_zone(251));
}

#[test]
fn fork_at_zero_is_never_allowed() {
    assert!(!policy(&[], &[]).unwrap().is_alternative_block_allowed(0, 0));
    assert!(!policy(&[], &[])
        .unwrap()
        .is_alternative_block_allowed(500, 0));
    assert!(!policy(&[(10, 1)], &[])
        .unwrap()
        .is_alternative_block_allowed(5, 0));
}

#[test]
fn primary_boundary_binds() {
    let policy = policy(&[(100, 1), (200, 2)], &[]).unwrap();

    assert!(!policy.is_alternative_block_allowed(250, 150));
    assert!(!policy.is_alternative_block_allowed(250, 200));
    assert!(policy.is_alternative_block_allowed(250, 201));

    // Below the second checkpoint only the first one binds.
    assert!(policy.is_alternative_block_allowed(150, 101));
    assert!(!policy.is_alternative_block_allowed(150, 100));
}

#[test]
fn larger_boundary_across_eras_binds() {
    let policy = policy(&[(50, 1)], &[(80, 2)]).unwrap();

    assert_eq!(policy.fork_boundary(100), Some(80));
    assert!(!policy.is_alternative_block_allowed(100, 80));
    assert!(!policy.is_alternative_block_allowed(100, 51));
    assert!(policy.is_alternative_block_allowed(100, 81));
}

#[test]
fn no_boundary_below_first_checkpoint() {
    let policy = policy(&[(50, 1)], &[(80, 2)]).unwrap();

    assert_eq!(policy.fork_boundary(49), None);
    assert!(policy.is_alternative_block_allowed(49, 1));
    assert!(policy.is_alternative_block_allowed(49, 49));
}

#[test]
fn verify_block_reports_mismatch() {
    let policy = policy(&[(100, 1)], &[]).unwrap();

    assert_eq!(policy.verify_block(100, &hash(1), HashEra::Primary), Ok(true));
    assert_eq!(policy.verify_block(101, &hash(1), HashEra::Primary), Ok(false));

    let err = policy
        .verify_block(100, &hash(2), HashEra::Primary)
        .unwrap_err();
    assert!(err.is_consensus_failure());
    assert_eq!(
        err,
        CheckpointError::Mismatch {
            era: HashEra::Primary,
            height: 100,
            expected: hash(1),
            actual: hash(2),
        }
    );
}

#[test]
fn era_is_respected_by_check_block() {
    let policy = policy(&[(100, 1)], &[(100, 2)]).unwrap();

    assert!(policy.check_block(100, &hash(1), HashEra::Primary).passes);
    assert!(!policy.check_block(100, &hash(1), HashEra::Secondary).passes);
    assert!(policy.check_block(100, &hash(2), HashEra::Secondary).passes);
}

proptest! {
    #[test]
    fn fork_admission_matches_boundary(
        primary in prop::collection::btree_set(1u64..1_000, 0..8),
        secondary in prop::collection::btree_set(1u64..1_000, 0..8),
        chain_height in 0u64..1_200,
        fork_height in 0u64..1_200,
    ) {
        let primary: Vec<_> = primary.into_iter().map(|h| (h, 1)).collect();
        let secondary: Vec<_> = secondary.into_iter().map(|h| (h, 2)).collect();
        let policy = policy(&primary, &secondary).unwrap();

        let boundary = primary
            .iter()
            .chain(secondary.iter())
            .map(|&(h, _)| h)
            .filter(|&h| h <= chain_height)
            .max();

        let expected = fork_height != 0 && boundary.is_none_or(|b| fork_height > b);
        prop_assert_eq!(
            policy.is_alternative_block_allowed(chain_height, fork_height),
            expected
        );
    }
}
