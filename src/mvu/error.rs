use thiserror::Error;

use crate::error::ScorecardError;
use crate::mvu::round::Screen;

/// Why `update` refused a message. Never fatal; the model is left as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error(transparent)]
    Scorecard(#[from] ScorecardError),
    #[error("{action} is not available on the {screen} screen")]
    WrongScreen { action: &'static str, screen: Screen },
    #[error("hole {0} is not reachable from here")]
    HoleNotVisible(usize),
    #[error("the summary opens after the final hole")]
    NotFinalHole,
}
