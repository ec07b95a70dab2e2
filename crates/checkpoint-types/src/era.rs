use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Hash-versioning track a checkpoint belongs to.
///
/// The same conceptual block is pinned under two historically different
/// hashing schemes. Each era is an independent registry.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum HashEra {
    /// The regular block id track.
    #[default]
    Primary,

    /// The long (proof-of-work) hash track.
    Secondary,
}

impl HashEra {
    /// Every era, in a fixed order.
    pub const ALL: [HashEra; 2] = [HashEra::Primary, HashEra::Secondary];

    pub const fn as_str(&self) -> &'static str {
        match self {
            HashEra::Primary => "primary",
            HashEra::Secondary => "secondary",
        }
    }

    /// Slot of this era in per-era arrays.
    pub(crate) const fn index(self) -> usize {
        match self {
            HashEra::Primary => 0,
            HashEra::Secondary => 1,
        }
    }
}

impl fmt::Display for HashEra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown hash era: {0}")]
pub struct UnknownHashEra(pub String);

impl FromStr for HashEra {
    type Err = UnknownHashEra;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "primary" => Ok(HashEra::Primary),
            "secondary" => Ok(HashEra::Secondary),
            other => Err(UnknownHashEra(other.to_owned())),
        }
    }
}
