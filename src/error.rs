use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScorecardError {
    #[error("player count {0} is outside 1..=4")]
    PlayerCountOutOfRange(usize),
    #[error("player {player} out of range (round has {count} players)")]
    PlayerOutOfRange { player: usize, count: usize },
    #[error("hole {hole} out of range (round has {count} holes)")]
    HoleOutOfRange { hole: usize, count: usize },
    #[error("hole count must be 6, 9 or 18, got {0}")]
    InvalidHoleCount(usize),
    #[error("par must be 3, 4 or 5, got {0}")]
    InvalidPar(u32),
    #[error("stroke count must be at least 1, got {0}")]
    InvalidStrokes(u32),
    #[error("{names} player names for {players} players")]
    NameCountMismatch { names: usize, players: usize },
}
