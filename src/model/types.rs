use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ScorecardError;

pub const MIN_PLAYERS: usize = 1;
pub const MAX_PLAYERS: usize = 4;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(try_from = "usize", into = "usize")]
pub enum HoleCount {
    Six,
    #[default]
    Nine,
    Eighteen,
}

impl HoleCount {
    pub const ALL: [HoleCount; 3] = [HoleCount::Six, HoleCount::Nine, HoleCount::Eighteen];

    #[must_use]
    pub fn get(self) -> usize {
        match self {
            HoleCount::Six => 6,
            HoleCount::Nine => 9,
            HoleCount::Eighteen => 18,
        }
    }
}

impl TryFrom<usize> for HoleCount {
    type Error = ScorecardError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        match n {
            6 => Ok(HoleCount::Six),
            9 => Ok(HoleCount::Nine),
            18 => Ok(HoleCount::Eighteen),
            other => Err(ScorecardError::InvalidHoleCount(other)),
        }
    }
}

impl From<HoleCount> for usize {
    fn from(h: HoleCount) -> Self {
        h.get()
    }
}

impl fmt::Display for HoleCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(try_from = "u32", into = "u32")]
pub enum Par {
    #[default]
    Three,
    Four,
    Five,
}

impl Par {
    #[must_use]
    pub fn strokes(self) -> u32 {
        match self {
            Par::Three => 3,
            Par::Four => 4,
            Par::Five => 5,
        }
    }
}

impl TryFrom<u32> for Par {
    type Error = ScorecardError;

    fn try_from(n: u32) -> Result<Self, Self::Error> {
        match n {
            3 => Ok(Par::Three),
            4 => Ok(Par::Four),
            5 => Ok(Par::Five),
            other => Err(ScorecardError::InvalidPar(other)),
        }
    }
}

impl From<Par> for u32 {
    fn from(p: Par) -> Self {
        p.strokes()
    }
}

impl fmt::Display for Par {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.strokes())
    }
}

/// How a single hole score compares to par.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreDisplay {
    Condor,
    Albatross,
    Eagle,
    Birdie,
    Par,
    Bogey,
    DoubleBogey,
    TripleBogey,
    Worse,
}

impl ScoreDisplay {
    #[must_use]
    pub fn from_diff(diff: i64) -> Self {
        match diff {
            i64::MIN..=-4 => ScoreDisplay::Condor,
            -3 => ScoreDisplay::Albatross,
            -2 => ScoreDisplay::Eagle,
            -1 => ScoreDisplay::Birdie,
            0 => ScoreDisplay::Par,
            1 => ScoreDisplay::Bogey,
            2 => ScoreDisplay::DoubleBogey,
            3 => ScoreDisplay::TripleBogey,
            _ => ScoreDisplay::Worse,
        }
    }

    #[must_use]
    pub fn for_hole(strokes: u32, par: Par) -> Self {
        Self::from_diff(i64::from(strokes) - i64::from(par.strokes()))
    }

    /// Short css-friendly name.
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            ScoreDisplay::Condor => "condor",
            ScoreDisplay::Albatross => "albatross",
            ScoreDisplay::Eagle => "eagle",
            ScoreDisplay::Birdie => "birdie",
            ScoreDisplay::Par => "par",
            ScoreDisplay::Bogey => "bogey",
            ScoreDisplay::DoubleBogey => "double-bogey",
            ScoreDisplay::TripleBogey => "triple-bogey",
            ScoreDisplay::Worse => "worse",
        }
    }
}

/// Formats a relative-to-par total the way a scoreboard shows it: `E`, `+3`, `-2`.
#[must_use]
pub fn format_to_par(diff: i64) -> String {
    match diff {
        0 => "E".to_string(),
        d if d > 0 => format!("+{d}"),
        d => d.to_string(),
    }
}
