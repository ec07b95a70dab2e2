//! Loading trusted and external checkpoint lists the way a node starts up.

#![allow(
    unused_crate_dependencies,
    reason = "test dependencies shared across test suite"
)]

use std::{io::Write, sync::Arc};

use integration_tests::common::*;
use waypoint_checkpoint_types::{CheckpointError, HashEra};
use waypoint_config::Config;
use waypoint_consensus_logic::CheckpointPolicy;
use waypoint_params::{trusted_checkpoints, CheckpointList, Network};
use waypoint_storage::CheckpointManager;

const MAINNET_1000: &str = "5acfc45acffd2b2e7345caf42fa02308c5793f15ec33946e969e829f40b03876";

fn temp_file(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn config_file_drives_network_and_list() {
    let list = temp_file(&format!(
        r#"{{"hashlines":[{{"height":1000,"hash":"{MAINNET_1000}"}},{{"height":60000,"hash":"{}","era":"secondary"}}]}}"#,
        hash_hex(6)
    ));
    let config_file = temp_file(&format!(
        "[checkpoints]\nnetwork = \"mainnet\"\nfile = \"{}\"\n",
        list.path().display()
    ));

    let config = Config::load(Some(config_file.path()), &[]).unwrap();
    let path = config.checkpoints.file.clone().unwrap();

    let manager = CheckpointManager::from_set(trusted_checkpoints(config.checkpoints.network).unwrap());
    let external = CheckpointList::load_json(&path)
        .unwrap()
        .to_checkpoint_set()
        .unwrap();
    manager.merge(&external).unwrap();
    manager.import(&external).unwrap();

    let policy = CheckpointPolicy::new(Arc::new(manager));
    assert!(policy.is_in_checkpoint_zone(60000));
    assert_eq!(policy.fork_boundary(55000), Some(50000));
    assert!(!policy.is_alternative_block_allowed(60000, 55000));
    assert!(policy.is_alternative_block_allowed(60000, 60001));
}

#[test]
fn external_list_conflicting_with_trusted_is_rejected() {
    let manager = CheckpointManager::from_set(trusted_checkpoints(Network::Mainnet).unwrap());
    let before = manager.snapshot();

    let list = temp_file(&format!(
        r#"{{"hashlines":[{{"height":70000,"hash":"{}"}},{{"height":1000,"hash":"{}"}}]}}"#,
        hash_hex(1),
        hash_hex(2)
    ));
    let external = CheckpointList::load_json(list.path())
        .unwrap()
        .to_checkpoint_set()
        .unwrap();

    let err = manager.import(&external).unwrap_err();
    assert!(matches!(
        err,
        CheckpointError::Conflict {
            era: HashEra::Primary,
            height: 1000,
            ..
        }
    ));
    assert_eq!(*manager.snapshot(), *before);
    assert_eq!(manager.max_height(), Some(50000));
}

#[test]
fn overrides_switch_network() {
    let config = Config::load(None, &["checkpoints.network=testnet".to_owned()]).unwrap();
    let set = trusted_checkpoints(config.checkpoints.network).unwrap();
    assert!(set.is_empty());
}
