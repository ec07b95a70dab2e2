use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::*;
use waypoint_checkpoint_types::{CheckpointResult, CheckpointSet, HashEra};
use waypoint_primitives::BlockHeight;

use crate::{Network, ParamsError};

/// Checkpoints shipped with the node, as `(era, height, hash)`.
const MAINNET_CHECKPOINTS: &[(HashEra, BlockHeight, &str)] = &[
    (
        HashEra::Primary,
        1,
        "771fbcd656ec1464d3a02ead5e18644030007a0fc664c0a964d30922821a8148",
    ),
    (
        HashEra::Primary,
        10,
        "c0e3b387e47042f72d8ccdca88071ff96bff1ac7cde09ae113dbb7ad3fe92381",
    ),
    (
        HashEra::Primary,
        100,
        "ac3e11ca545e57c49fca2b4e8c48c03c23be047c43e471e1394528b1f9f80b2d",
    ),
    (
        HashEra::Primary,
        1000,
        "5acfc45acffd2b2e7345caf42fa02308c5793f15ec33946e969e829f40b03876",
    ),
    (
        HashEra::Primary,
        10000,
        "c758b7c81f928be3295d45e230646de8b852ec96a821eac3fea4daf3fcac0ca2",
    ),
    (
        HashEra::Primary,
        22231,
        "7cb10e29d67e1c069e6e11b17d30b809724255fee2f6868dc14cfc6ed44dfb25",
    ),
    (
        HashEra::Primary,
        29556,
        "53c484a8ed91e4da621bb2fa88106dbde426fe90d7ef07b9c1e5127fb6f3a7f6",
    ),
    (
        HashEra::Primary,
        50000,
        "0fe8758ab06a8b9cb35b7328fd4f757af530a5d37759f9d3e421023231f7b31c",
    ),
];

const TESTNET_CHECKPOINTS: &[(HashEra, BlockHeight, &str)] = &[];

/// Builds the compiled-in trusted set for `network`.
pub fn trusted_checkpoints(network: Network) -> CheckpointResult<CheckpointSet> {
    let points = match network {
        Network::Mainnet => MAINNET_CHECKPOINTS,
        Network::Testnet => TESTNET_CHECKPOINTS,
    };

    let mut set = CheckpointSet::new();
    for (era, height, hash) in points {
        set.add_checkpoint_hex(*era, *height, hash)?;
    }

    debug!(%network, count = %set.len(), "loaded trusted checkpoints");
    Ok(set)
}

/// One entry of an external checkpoint list.
///
/// The hash stays as text here so malformed entries surface as checkpoint
/// parse errors carrying their list position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckpointEntry {
    pub height: BlockHeight,
    pub hash: String,
    #[serde(default)]
    pub era: HashEra,
}

/// External checkpoint list, as found in a JSON file.
///
/// ```json
/// { "hashlines": [ { "height": 1, "hash": "…" }, { "height": 9, "hash": "…", "era": "secondary" } ] }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckpointList {
    #[serde(default)]
    pub hashlines: Vec<CheckpointEntry>,
}

impl CheckpointList {
    pub fn new(hashlines: Vec<CheckpointEntry>) -> Self {
        Self { hashlines }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ParamsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_json(path: &Path) -> Result<Self, ParamsError> {
        let json = fs::read_to_string(path)?;
        let list = Self::from_json_str(&json)?;
        info!(path = %path.display(), entries = %list.hashlines.len(), "read checkpoint list");
        Ok(list)
    }

    /// Parses every entry into a standalone set, failing on the first
    /// malformed or self-conflicting entry.
    pub fn to_checkpoint_set(&self) -> Result<CheckpointSet, ParamsError> {
        entries_to_set(&self.hashlines)
    }
}

/// Parses a slice of entries into a standalone set.
fn entries_to_set(entries: &[CheckpointEntry]) -> Result<CheckpointSet, ParamsError> {
    let mut set = CheckpointSet::new();
    for (index, entry) in entries.iter().enumerate() {
        set.add_checkpoint_hex(entry.era, entry.height, &entry.hash)
            .map_err(|source| ParamsError::Checkpoint { index, source })?;
    }
    Ok(set)
}
