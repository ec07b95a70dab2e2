//! Configuration loading and registry construction.

use tracing::*;
use waypoint_checkpoint_types::CheckpointSet;
use waypoint_config::{CheckpointsConfig, Config};
use waypoint_params::{trusted_checkpoints, CheckpointList};
use waypoint_storage::CheckpointManager;

use crate::{args::*, errors::*};

pub(crate) fn load_config(args: &Args) -> Result<Config, InitError> {
    let env_args = EnvArgs::from_env();
    let overrides = args.all_overrides(&env_args);
    Ok(Config::load(args.config.as_deref(), &overrides)?)
}

/// Seeds the registry from the compiled-in list, then imports the external
/// file and the inline entries in that order.
///
/// Every import is conflict-checked against what is already trusted first,
/// so a disagreeing list aborts startup without touching the registry.
pub(crate) fn init_checkpoints(config: &CheckpointsConfig) -> Result<CheckpointManager, InitError> {
    let trusted = trusted_checkpoints(config.network).map_err(|err| {
        InitError::RejectedCheckpoints {
            source_name: format!("{} trusted list", config.network),
            err,
        }
    })?;
    let manager = CheckpointManager::from_set(trusted);

    if let Some(path) = &config.file {
        let set = CheckpointList::load_json(path)?.to_checkpoint_set()?;
        import_into(&manager, &set, &path.display().to_string())?;
    }

    if !config.extra.is_empty() {
        let set = CheckpointList::new(config.extra.clone()).to_checkpoint_set()?;
        import_into(&manager, &set, "config extra")?;
    }

    Ok(manager)
}

fn import_into(
    manager: &CheckpointManager,
    set: &CheckpointSet,
    source_name: &str,
) -> Result<(), InitError> {
    let added = manager
        .import(set)
        .map_err(|err| InitError::RejectedCheckpoints {
            source_name: source_name.to_owned(),
            err,
        })?;
    debug!(%source_name, %added, "imported checkpoint list");
    Ok(())
}
