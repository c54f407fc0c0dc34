use clap::Parser;
use serde::Deserialize;
use std::path::PathBuf;

use crate::model::{HoleCount, RoundConfig};

#[derive(Parser, Debug, Default)]
#[command(author, version, about = "Keep a golf scorecard for up to four players", long_about = None)]
pub struct Cli {
    /// Number of players, 1 to 4
    #[arg(
        short = 'p',
        long,
        value_name = "PLAYERS",
        value_parser = crate::args::validation::check_player_count
    )]
    pub players: Option<usize>,
    /// Player name, repeat for each player in order
    #[arg(short = 'n', long = "name", value_name = "NAME")]
    pub names: Vec<String>,
    /// Number of holes: 6, 9 or 18
    #[arg(
        long,
        value_name = "HOLES",
        value_parser = crate::args::validation::check_hole_count
    )]
    pub holes: Option<HoleCount>,
    /// TOML file with defaults for the options above.
    #[arg(long, value_name = "CONFIG_TOML", value_parser = crate::args::validation::check_readable_file)]
    pub config_toml: Option<PathBuf>,
    /// Run commands from this file instead of prompting.
    #[arg(long, value_name = "SCRIPT", value_parser = crate::args::validation::check_readable_file)]
    pub script: Option<PathBuf>,
    /// Log filter used when RUST_LOG is not set, e.g. `debug` or `golf_card=info`.
    #[arg(long, value_name = "LOG_LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub players: Option<usize>,
    pub names: Option<Vec<String>>,
    pub holes: Option<HoleCount>,
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanArgs {
    pub draft: RoundConfig,
    pub script: Option<PathBuf>,
    pub log_level: String,
}
