use std::collections::BTreeSet;

use crate::error::ScorecardError;
use crate::model::config::RoundConfig;
use crate::model::types::Par;

/// Live scorecard for one round.
///
/// Strokes are stored row-per-player, `strokes[player][hole]`, every cell at least 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundState {
    config: RoundConfig,
    strokes: Vec<Vec<u32>>,
    pars: Vec<Par>,
    current_hole: usize,
    visited: BTreeSet<usize>,
}

impl RoundState {
    pub(crate) fn new(config: RoundConfig) -> Result<Self, ScorecardError> {
        config.validate()?;
        let holes = config.hole_count().get();
        let players = config.player_count();
        Ok(Self {
            strokes: vec![vec![1; holes]; players],
            pars: vec![Par::default(); holes],
            current_hole: 0,
            visited: BTreeSet::new(),
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.strokes.len()
    }

    #[must_use]
    pub fn hole_count(&self) -> usize {
        self.pars.len()
    }

    #[must_use]
    pub fn current_hole(&self) -> usize {
        self.current_hole
    }

    #[must_use]
    pub fn visited(&self) -> &BTreeSet<usize> {
        &self.visited
    }

    #[must_use]
    pub fn pars(&self) -> &[Par] {
        &self.pars
    }

    fn check_hole(&self, hole: usize) -> Result<(), ScorecardError> {
        if hole < self.hole_count() {
            Ok(())
        } else {
            Err(ScorecardError::HoleOutOfRange {
                hole,
                count: self.hole_count(),
            })
        }
    }

    fn cell_mut(&mut self, player: usize, hole: usize) -> Result<&mut u32, ScorecardError> {
        self.check_hole(hole)?;
        let count = self.player_count();
        self.strokes
            .get_mut(player)
            .and_then(|row| row.get_mut(hole))
            .ok_or(ScorecardError::PlayerOutOfRange { player, count })
    }

    /// # Errors
    ///
    /// Returns `PlayerOutOfRange` if `player` is not in the round.
    pub fn row(&self, player: usize) -> Result<&[u32], ScorecardError> {
        self.strokes
            .get(player)
            .map(Vec::as_slice)
            .ok_or(ScorecardError::PlayerOutOfRange {
                player,
                count: self.player_count(),
            })
    }

    /// # Errors
    ///
    /// Returns an error if either index is out of range.
    pub fn stroke(&self, player: usize, hole: usize) -> Result<u32, ScorecardError> {
        self.check_hole(hole)?;
        Ok(self.row(player)?[hole])
    }

    /// Overwrites a cell. Used by the summary grid as well as the round screen.
    ///
    /// # Errors
    ///
    /// Returns an error for out-of-range indices or `value < 1`.
    pub fn set_stroke(&mut self, player: usize, hole: usize, value: u32) -> Result<(), ScorecardError> {
        if value < 1 {
            return Err(ScorecardError::InvalidStrokes(value));
        }
        *self.cell_mut(player, hole)? = value;
        Ok(())
    }

    /// Free-form text entry. Blank, non-numeric or sub-1 input keeps the
    /// current value; returns whether the cell changed.
    ///
    /// # Errors
    ///
    /// Returns an error only for out-of-range indices.
    pub fn set_stroke_from_text(
        &mut self,
        player: usize,
        hole: usize,
        text: &str,
    ) -> Result<bool, ScorecardError> {
        let cell = self.cell_mut(player, hole)?;
        match text.trim().parse::<u32>() {
            Ok(value) if value >= 1 => {
                let changed = *cell != value;
                *cell = value;
                Ok(changed)
            }
            _ => Ok(false),
        }
    }

    /// # Errors
    ///
    /// Returns an error if either index is out of range.
    pub fn increment_stroke(&mut self, player: usize, hole: usize) -> Result<u32, ScorecardError> {
        let cell = self.cell_mut(player, hole)?;
        *cell = cell.saturating_add(1);
        Ok(*cell)
    }

    /// No-op at 1.
    ///
    /// # Errors
    ///
    /// Returns an error if either index is out of range.
    pub fn decrement_stroke(&mut self, player: usize, hole: usize) -> Result<u32, ScorecardError> {
        let cell = self.cell_mut(player, hole)?;
        if *cell > 1 {
            *cell -= 1;
        }
        Ok(*cell)
    }

    /// Whether the minus control for this cell should be enabled.
    #[must_use]
    pub fn can_decrement(&self, player: usize, hole: usize) -> bool {
        self.stroke(player, hole).is_ok_and(|v| v > 1)
    }

    /// # Errors
    ///
    /// Returns an error if `hole` is out of range.
    pub fn par(&self, hole: usize) -> Result<Par, ScorecardError> {
        self.check_hole(hole)?;
        Ok(self.pars[hole])
    }

    /// # Errors
    ///
    /// Returns `HoleOutOfRange` or `InvalidPar`; the stored par is unchanged on error.
    pub fn set_par(&mut self, hole: usize, value: u32) -> Result<(), ScorecardError> {
        self.check_hole(hole)?;
        self.pars[hole] = Par::try_from(value)?;
        Ok(())
    }

    #[must_use]
    pub fn is_final_hole(&self) -> bool {
        self.current_hole + 1 == self.hole_count()
    }

    /// Marks the current hole visited and moves to the next one. Returns
    /// `false` without touching anything when already on the final hole.
    pub fn advance_hole(&mut self) -> bool {
        if self.is_final_hole() {
            return false;
        }
        self.visited.insert(self.current_hole);
        self.current_hole += 1;
        true
    }

    /// # Errors
    ///
    /// Returns `HoleOutOfRange` if `hole` is not in the round.
    pub fn jump_to_hole(&mut self, hole: usize) -> Result<(), ScorecardError> {
        self.check_hole(hole)?;
        self.current_hole = hole;
        Ok(())
    }

    /// Hole tabs the user may select: the previous hole if visited, the
    /// current hole, and the next hole if the current one was already played.
    #[must_use]
    pub fn visible_holes(&self) -> Vec<usize> {
        let current = self.current_hole;
        let mut holes = Vec::with_capacity(3);
        if let Some(prev) = current.checked_sub(1)
            && self.visited.contains(&prev)
        {
            holes.push(prev);
        }
        holes.push(current);
        if self.visited.contains(&current) && current + 1 < self.hole_count() {
            holes.push(current + 1);
        }
        holes
    }
}
