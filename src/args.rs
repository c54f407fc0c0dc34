pub mod types;
pub mod validation;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;

use crate::model::RoundConfig;
pub use types::{CleanArgs, Cli, FileConfig};

pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Parses the process arguments and resolves them against the optional TOML file.
///
/// # Errors
/// Returns an error if the config file is unreadable or invalid.
pub fn args_checks() -> Result<CleanArgs> {
    resolve_args(Cli::parse())
}

/// Command-line values win over file values, which win over the defaults.
///
/// # Errors
/// Returns an error if the config file is unreadable or invalid, or the
/// resulting round settings are out of range.
pub fn resolve_args(cli: Cli) -> Result<CleanArgs> {
    let file_config = match cli.config_toml.as_ref() {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("read config toml {}", path.display()))?;
            toml::from_str::<FileConfig>(&contents)
                .with_context(|| format!("parse config toml {}", path.display()))?
        }
        None => FileConfig::default(),
    };

    let defaults = RoundConfig::default();
    let names = if cli.names.is_empty() {
        file_config.names.unwrap_or_default()
    } else {
        cli.names
    };
    let players = cli
        .players
        .or(file_config.players)
        .unwrap_or_else(|| names.len().max(defaults.player_count()));
    let holes = cli
        .holes
        .or(file_config.holes)
        .unwrap_or(defaults.hole_count());
    let draft = RoundConfig::new(players, names, holes).context("round settings")?;

    let log_level = cli
        .log_level
        .or(file_config.log_level)
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    Ok(CleanArgs {
        draft,
        script: cli.script,
        log_level,
    })
}
