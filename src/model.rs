pub mod config;
pub mod round;
pub mod summary;
pub mod types;

pub use config::{RoundConfig, placeholder_name};
pub use round::RoundState;
pub use summary::{HoleRow, Summary, Totals, hole_rows, totals};
pub use types::{HoleCount, MAX_PLAYERS, MIN_PLAYERS, Par, ScoreDisplay, format_to_par};
