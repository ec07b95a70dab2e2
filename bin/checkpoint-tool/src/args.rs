//! CLI argument parsing and environment variable handling.

use std::{env, path::PathBuf};

use argh::FromArgs;

use crate::cmd::Command;

/// Env var naming an external checkpoint list, overriding the config.
const CHECKPOINTS_FILE_ENV: &str = "WAYPOINT_CHECKPOINTS_FILE";

/// Configs overridable by environment.
#[derive(Debug, Clone, Default)]
pub(crate) struct EnvArgs {
    checkpoints_file: Option<String>,
}

impl EnvArgs {
    pub(crate) fn from_env() -> Self {
        Self {
            checkpoints_file: env::var(CHECKPOINTS_FILE_ENV).ok(),
        }
    }

    /// Get strings of overrides gathered from env.
    pub(crate) fn get_overrides(&self) -> Vec<String> {
        let mut overrides = Vec::new();
        if let Some(file) = &self.checkpoints_file {
            // Quoted so that the value is always read as a string.
            let file = toml::Value::String(file.clone());
            overrides.push(format!("checkpoints.file={file}"));
        }
        overrides
    }
}

#[derive(Debug, FromArgs)]
#[argh(description = "Waypoint checkpoint registry tool")]
pub(crate) struct Args {
    #[argh(option, short = 'c', description = "path to configuration")]
    pub config: Option<PathBuf>,

    /// Other generic overrides to the config toml.
    /// Will be used, for example, as `-o checkpoints.network=testnet -o checkpoints.enforce=false`
    #[argh(option, short = 'o', description = "generic config overrides")]
    pub overrides: Vec<String>,

    #[argh(subcommand)]
    pub cmd: Command,
}

impl Args {
    /// Overrides from the environment come first so that explicit `-o` flags
    /// win.
    pub(crate) fn all_overrides(&self, env_args: &EnvArgs) -> Vec<String> {
        let mut overrides = env_args.get_overrides();
        overrides.extend(self.overrides.iter().cloned());
        overrides
    }
}
