//! Operator tool for the checkpoint registry.
//!
//! Builds the registry the same way a node does at startup and answers
//! queries against it.

use std::sync::Arc;

use anyhow::{anyhow, Result};
use argh::from_env;
use tracing::info;
use waypoint_common::logging;
use waypoint_config::Config;
use waypoint_consensus_logic::CheckpointPolicy;

use crate::{args::Args, errors::InitError};

mod args;
mod cmd;
mod context;
mod errors;
mod output;

/// Log file prefix used when the config doesn't set one.
const DEFAULT_LOG_PREFIX: &str = "waypoint";

fn main() -> Result<()> {
    let args: Args = from_env();

    let config = context::load_config(&args)
        .map_err(|e| anyhow!("Failed to load configuration: {e}"))?;

    init_logging(&config)?;

    let manager = context::init_checkpoints(&config.checkpoints)
        .map_err(|e| anyhow!("Failed to load checkpoints: {e}"))?;
    info!(count = %manager.len(), max_height = ?manager.max_height(), "checkpoint registry ready");

    let policy = CheckpointPolicy::new(Arc::new(manager));
    cmd::run(args.cmd, &policy, &config)
}

fn init_logging(config: &Config) -> Result<(), InitError> {
    logging::init_logging_from_config(logging::LoggingInitConfig {
        service_base_name: "waypoint-checkpoint-tool",
        service_label: config.logging.service_label.as_deref(),
        log_dir: config.logging.log_dir.as_ref(),
        log_file_prefix: config.logging.log_file_prefix.as_deref(),
        json_format: config.logging.json_format,
        default_log_prefix: DEFAULT_LOG_PREFIX,
    })?;
    Ok(())
}
