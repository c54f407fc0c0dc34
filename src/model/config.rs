use serde::{Deserialize, Serialize};

use crate::error::ScorecardError;
use crate::model::round::RoundState;
use crate::model::types::{HoleCount, MAX_PLAYERS, MIN_PLAYERS};

/// Placeholder for an unnamed player, `index` is 0-based.
#[must_use]
pub fn placeholder_name(index: usize) -> String {
    format!("Player {}", index + 1)
}

/// Start-screen settings. Edited freely until a round is started; the round
/// keeps its own copy, so later edits here never reach it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RoundConfig {
    player_count: usize,
    player_names: Vec<String>,
    hole_count: HoleCount,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            player_count: 1,
            player_names: vec![placeholder_name(0)],
            hole_count: HoleCount::default(),
        }
    }
}

impl RoundConfig {
    /// Builds a config, padding missing names with placeholders and dropping surplus ones.
    ///
    /// # Errors
    ///
    /// Returns `PlayerCountOutOfRange` if `player_count` is not in `1..=4`.
    pub fn new(
        player_count: usize,
        names: Vec<String>,
        hole_count: HoleCount,
    ) -> Result<Self, ScorecardError> {
        let mut config = Self {
            player_count: names.len(),
            player_names: names,
            hole_count,
        };
        config.set_player_count(player_count)?;
        Ok(config)
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    #[must_use]
    pub fn player_names(&self) -> &[String] {
        &self.player_names
    }

    #[must_use]
    pub fn hole_count(&self) -> HoleCount {
        self.hole_count
    }

    /// # Errors
    ///
    /// Returns `PlayerCountOutOfRange` if `n` is not in `1..=4`; the config is left untouched.
    pub fn set_player_count(&mut self, n: usize) -> Result<(), ScorecardError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&n) {
            return Err(ScorecardError::PlayerCountOutOfRange(n));
        }
        self.player_names.truncate(n);
        while self.player_names.len() < n {
            let next = self.player_names.len();
            self.player_names.push(placeholder_name(next));
        }
        self.player_count = n;
        Ok(())
    }

    /// Any text is accepted, blank names included.
    ///
    /// # Errors
    ///
    /// Returns `PlayerOutOfRange` if `player` is not below the player count.
    pub fn set_player_name(
        &mut self,
        player: usize,
        name: impl Into<String>,
    ) -> Result<(), ScorecardError> {
        let count = self.player_count();
        let slot = self
            .player_names
            .get_mut(player)
            .ok_or(ScorecardError::PlayerOutOfRange { player, count })?;
        *slot = name.into();
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `InvalidHoleCount` unless `n` is 6, 9 or 18.
    pub fn set_hole_count(&mut self, n: usize) -> Result<(), ScorecardError> {
        self.hole_count = HoleCount::try_from(n)?;
        Ok(())
    }

    /// Checks the invariants the setters maintain. Deserialized configs bypass
    /// the setters, so this is rechecked before every round.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), ScorecardError> {
        let count = self.player_count;
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            return Err(ScorecardError::PlayerCountOutOfRange(count));
        }
        if self.player_names.len() != count {
            return Err(ScorecardError::NameCountMismatch {
                names: self.player_names.len(),
                players: count,
            });
        }
        Ok(())
    }

    /// Snapshots this config into a fresh round.
    ///
    /// # Errors
    ///
    /// Returns an error if the config fails [`RoundConfig::validate`].
    pub fn start_round(&self) -> Result<RoundState, ScorecardError> {
        self.validate()?;
        RoundState::new(self.clone())
    }
}
