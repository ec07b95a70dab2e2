//! Subcommands and their handlers.

use std::path::PathBuf;

use anyhow::{bail, Result};
use argh::FromArgs;
use tracing::*;
use waypoint_checkpoint_types::{CheckpointHash, HashEra};
use waypoint_config::Config;
use waypoint_consensus_logic::CheckpointPolicy;
use waypoint_params::CheckpointList;
use waypoint_primitives::BlockHeight;

use crate::output::*;

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand)]
pub(crate) enum Command {
    List(ListArgs),
    MaxHeight(MaxHeightArgs),
    Zone(ZoneArgs),
    CheckBlock(CheckBlockArgs),
    ForkAllowed(ForkAllowedArgs),
    MergeCheck(MergeCheckArgs),
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand, name = "list")]
/// List checkpoints in ascending height order
pub(crate) struct ListArgs {
    /// only list this era: "primary" or "secondary"
    #[argh(option)]
    pub(crate) era: Option<HashEra>,

    /// output format: "json" or "porcelain"
    #[argh(option, short = 'f', default = "OutputFormat::Porcelain")]
    pub(crate) format: OutputFormat,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand, name = "max-height")]
/// Show the highest checkpoint per era and overall
pub(crate) struct MaxHeightArgs {
    /// output format: "json" or "porcelain"
    #[argh(option, short = 'f', default = "OutputFormat::Porcelain")]
    pub(crate) format: OutputFormat,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand, name = "zone")]
/// Check whether a height is inside the checkpoint zone
pub(crate) struct ZoneArgs {
    #[argh(positional)]
    pub(crate) height: BlockHeight,

    /// output format: "json" or "porcelain"
    #[argh(option, short = 'f', default = "OutputFormat::Porcelain")]
    pub(crate) format: OutputFormat,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand, name = "check-block")]
/// Check a block hash against the checkpoint at its height
pub(crate) struct CheckBlockArgs {
    #[argh(positional)]
    pub(crate) height: BlockHeight,

    #[argh(positional)]
    pub(crate) hash: String,

    /// hash era: "primary" (default) or "secondary"
    #[argh(option, default = "HashEra::Primary")]
    pub(crate) era: HashEra,

    /// output format: "json" or "porcelain"
    #[argh(option, short = 'f', default = "OutputFormat::Porcelain")]
    pub(crate) format: OutputFormat,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand, name = "fork-allowed")]
/// Check whether an alternative branch may fork at a height
pub(crate) struct ForkAllowedArgs {
    #[argh(positional)]
    pub(crate) chain_height: BlockHeight,

    #[argh(positional)]
    pub(crate) fork_height: BlockHeight,

    /// output format: "json" or "porcelain"
    #[argh(option, short = 'f', default = "OutputFormat::Porcelain")]
    pub(crate) format: OutputFormat,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand, name = "merge-check")]
/// Validate a JSON checkpoint list against the loaded registry
pub(crate) struct MergeCheckArgs {
    #[argh(positional)]
    pub(crate) file: PathBuf,

    /// output format: "json" or "porcelain"
    #[argh(option, short = 'f', default = "OutputFormat::Porcelain")]
    pub(crate) format: OutputFormat,
}

/// Runs `cmd` and prints its result to stdout.
pub(crate) fn run(cmd: Command, policy: &CheckpointPolicy, config: &Config) -> Result<()> {
    let out = execute(cmd, policy, config)?;
    println!("{out}");
    Ok(())
}

/// Runs `cmd`, returning the rendered output.
fn execute(cmd: Command, policy: &CheckpointPolicy, config: &Config) -> Result<String> {
    match cmd {
        Command::List(args) => list(policy, args),
        Command::MaxHeight(args) => max_height(policy, args),
        Command::Zone(args) => zone(policy, args),
        Command::CheckBlock(args) => check_block(policy, args, config.checkpoints.enforce),
        Command::ForkAllowed(args) => fork_allowed(policy, args),
        Command::MergeCheck(args) => merge_check(policy, args),
    }
}

fn list(policy: &CheckpointPolicy, args: ListArgs) -> Result<String> {
    let snap = policy.manager().snapshot();
    let checkpoints = snap
        .iter()
        .filter(|cp| args.era.is_none_or(|era| cp.era() == era))
        .collect();
    Ok(render(&CheckpointListing { checkpoints }, args.format)?)
}

fn max_height(policy: &CheckpointPolicy, args: MaxHeightArgs) -> Result<String> {
    let snap = policy.manager().snapshot();
    let info = MaxHeightInfo {
        primary: snap.max_height_in(HashEra::Primary),
        secondary: snap.max_height_in(HashEra::Secondary),
        max_height: snap.max_height(),
    };
    Ok(render(&info, args.format)?)
}

fn zone(policy: &CheckpointPolicy, args: ZoneArgs) -> Result<String> {
    let info = ZoneInfo {
        height: args.height,
        in_checkpoint_zone: policy.is_in_checkpoint_zone(args.height),
    };
    Ok(render(&info, args.format)?)
}

/// With `enforce` set a mismatching hash is returned as an error rather than
/// reported as a failing verdict.
fn check_block(policy: &CheckpointPolicy, args: CheckBlockArgs, enforce: bool) -> Result<String> {
    let hash: CheckpointHash = args.hash.parse()?;

    // A single evaluation covers both modes; only a pinned block can fail.
    let (passes, is_checkpointed) = match policy.verify_block(args.height, &hash, args.era) {
        Ok(is_checkpointed) => (true, is_checkpointed),
        Err(e) if enforce => return Err(e.into()),
        Err(_) => (false, true),
    };

    let info = BlockCheckInfo {
        era: args.era,
        height: args.height,
        hash,
        passes,
        is_checkpointed,
    };
    Ok(render(&info, args.format)?)
}

fn fork_allowed(policy: &CheckpointPolicy, args: ForkAllowedArgs) -> Result<String> {
    let info = ForkInfo {
        chain_height: args.chain_height,
        fork_height: args.fork_height,
        boundary: policy.fork_boundary(args.chain_height),
        allowed: policy.is_alternative_block_allowed(args.chain_height, args.fork_height),
    };
    Ok(render(&info, args.format)?)
}

/// Validation only: the registry is never modified here.
fn merge_check(policy: &CheckpointPolicy, args: MergeCheckArgs) -> Result<String> {
    let other = CheckpointList::load_json(&args.file)?.to_checkpoint_set()?;
    let snap = policy.manager().snapshot();

    let new_entries = other
        .iter()
        .filter(|cp| snap.get(cp.era(), cp.height()).is_none())
        .count();

    let result = snap.merge(&other);
    let report = MergeReport {
        entries: other.len(),
        new_entries,
        conflict: result.as_ref().err().map(|e| e.to_string()),
    };
    let out = render(&report, args.format)?;

    if let Err(e) = result {
        warn!(file = %args.file.display(), %e, "checkpoint list conflicts with registry");
        println!("{out}");
        bail!("merge check failed: {e}");
    }

    Ok(out)
}
