use serde::{Deserialize, Serialize};

use crate::model::round::RoundState;
use crate::model::types::{Par, ScoreDisplay};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HoleRow {
    pub hole_number: usize,
    pub par: Par,
    pub strokes: Vec<u32>,
    pub score_display: Vec<ScoreDisplay>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Totals {
    pub total_par: u32,
    pub total_strokes: Vec<u32>,
    pub to_par: Vec<i64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    pub player_names: Vec<String>,
    pub holes: Vec<HoleRow>,
    pub totals: Totals,
}

impl Summary {
    /// Snapshot of the round as it is right now. Not cached; call again after edits.
    #[must_use]
    pub fn from_round(round: &RoundState) -> Self {
        Self {
            player_names: round.config().player_names().to_vec(),
            holes: hole_rows(round),
            totals: totals(round),
        }
    }
}

#[must_use]
pub fn hole_rows(round: &RoundState) -> Vec<HoleRow> {
    round
        .pars()
        .iter()
        .enumerate()
        .map(|(hole, &par)| {
            let strokes: Vec<u32> = (0..round.player_count())
                .map(|player| round.row(player).map_or(1, |row| row[hole]))
                .collect();
            let score_display = strokes
                .iter()
                .map(|&s| ScoreDisplay::for_hole(s, par))
                .collect();
            HoleRow {
                hole_number: hole + 1,
                par,
                strokes,
                score_display,
            }
        })
        .collect()
}

#[must_use]
pub fn totals(round: &RoundState) -> Totals {
    let total_par: u32 = round.pars().iter().map(|p| p.strokes()).sum();
    let total_strokes: Vec<u32> = (0..round.player_count())
        .map(|player| round.row(player).map_or(0, |row| row.iter().sum()))
        .collect();
    let to_par = total_strokes
        .iter()
        .map(|&t| i64::from(t) - i64::from(total_par))
        .collect();
    Totals {
        total_par,
        total_strokes,
        to_par,
    }
}
