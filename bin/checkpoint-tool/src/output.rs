//! Output formatting for command results.

use std::{fmt, str::FromStr};

use serde::Serialize;
use waypoint_checkpoint_types::{Checkpoint, CheckpointHash, HashEra};
use waypoint_primitives::BlockHeight;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    Json,
    #[default]
    Porcelain,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Self::Json),
            "porcelain" => Ok(Self::Porcelain),
            other => Err(format!("unknown output format '{other}'")),
        }
    }
}

/// Objects that can be formatted for porcelain output.
pub(crate) trait Formattable {
    /// Format for machine-readable output (parseable, stable, human-readable)
    fn format_porcelain(&self) -> String;
}

pub(crate) fn porcelain_field(key: &str, value: impl fmt::Display) -> String {
    format!("{key}: {value}")
}

fn porcelain_optional(value: Option<BlockHeight>) -> String {
    value.map_or_else(|| "none".to_owned(), |v| v.to_string())
}

/// Renders `value` in the requested format.
pub(crate) fn render<T>(value: &T, format: OutputFormat) -> serde_json::Result<String>
where
    T: Formattable + Serialize,
{
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(value),
        OutputFormat::Porcelain => Ok(value.format_porcelain()),
    }
}

#[derive(Serialize)]
pub(crate) struct CheckpointListing {
    pub(crate) checkpoints: Vec<Checkpoint>,
}

impl Formattable for CheckpointListing {
    fn format_porcelain(&self) -> String {
        self.checkpoints
            .iter()
            .map(|cp| format!("{} {} {}", cp.era(), cp.height(), cp.hash().to_hex()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Serialize)]
pub(crate) struct MaxHeightInfo {
    pub(crate) primary: Option<BlockHeight>,
    pub(crate) secondary: Option<BlockHeight>,
    pub(crate) max_height: Option<BlockHeight>,
}

impl Formattable for MaxHeightInfo {
    fn format_porcelain(&self) -> String {
        [
            porcelain_field("primary", porcelain_optional(self.primary)),
            porcelain_field("secondary", porcelain_optional(self.secondary)),
            porcelain_field("max_height", porcelain_optional(self.max_height)),
        ]
        .join("\n")
    }
}

#[derive(Serialize)]
pub(crate) struct ZoneInfo {
    pub(crate) height: BlockHeight,
    pub(crate) in_checkpoint_zone: bool,
}

impl Formattable for ZoneInfo {
    fn format_porcelain(&self) -> String {
        [
            porcelain_field("height", self.height),
            porcelain_field("in_checkpoint_zone", self.in_checkpoint_zone),
        ]
        .join("\n")
    }
}

#[derive(Serialize)]
pub(crate) struct BlockCheckInfo {
    pub(crate) era: HashEra,
    pub(crate) height: BlockHeight,
    pub(crate) hash: CheckpointHash,
    pub(crate) passes: bool,
    pub(crate) is_checkpointed: bool,
}

impl Formattable for BlockCheckInfo {
    fn format_porcelain(&self) -> String {
        [
            porcelain_field("era", self.era),
            porcelain_field("height", self.height),
            porcelain_field("hash", self.hash.to_hex()),
            porcelain_field("passes", self.passes),
            porcelain_field("is_checkpointed", self.is_checkpointed),
        ]
        .join("\n")
    }
}

#[derive(Serialize)]
pub(crate) struct ForkInfo {
    pub(crate) chain_height: BlockHeight,
    pub(crate) fork_height: BlockHeight,
    pub(crate) boundary: Option<BlockHeight>,
    pub(crate) allowed: bool,
}

impl Formattable for ForkInfo {
    fn format_porcelain(&self) -> String {
        [
            porcelain_field("chain_height", self.chain_height),
            porcelain_field("fork_height", self.fork_height),
            porcelain_field("boundary", porcelain_optional(self.boundary)),
            porcelain_field("allowed", self.allowed),
        ]
        .join("\n")
    }
}

#[derive(Serialize)]
pub(crate) struct MergeReport {
    pub(crate) entries: usize,
    pub(crate) new_entries: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) conflict: Option<String>,
}

impl Formattable for MergeReport {
    fn format_porcelain(&self) -> String {
        let mut output = vec![
            porcelain_field("entries", self.entries),
            porcelain_field("new_entries", self.new_entries),
        ];
        if let Some(conflict) = &self.conflict {
            output.push(porcelain_field("conflict", conflict));
        }
        output.join("\n")
    }
}
