//! One game played by the standard turn rules.
//!
//! Each turn the player either cashes in, taking the value of the last
//! dealt row, or deals another row. A Misfortune is covered by the Gate Card
//! automatically the first time; if the Gate Card does not clear it, or it
//! is already spent, the game is lost. Finishing row 8 pays the jackpot when
//! the Gate Card is untouched and the last row's value otherwise.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{GameConfig, GameRng, Result, TowerError};
use crate::tower::{Position, Tower};

/// How a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The player stopped and took the last row's value.
    CashedIn { points: u32 },
    /// All rows dealt after the Gate Card was used; pays the last row.
    Cleared { points: u32 },
    /// All rows dealt without touching the Gate Card; pays the whole tower.
    Jackpot { value: u32 },
    /// A Misfortune on `row` could not be covered.
    Misfortune { row: usize },
}

impl Outcome {
    /// Points paid out.
    #[must_use]
    pub fn points(&self) -> u32 {
        match *self {
            Outcome::CashedIn { points } | Outcome::Cleared { points } => points,
            Outcome::Jackpot { value } => value,
            Outcome::Misfortune { .. } => 0,
        }
    }

    #[must_use]
    pub fn is_loss(&self) -> bool {
        matches!(self, Outcome::Misfortune { .. })
    }
}

/// Result of one [`Session::advance`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    /// `row` was dealt without incident.
    Dealt { row: usize, value: u32 },
    /// `row` tripped a Misfortune and the Gate Card cleared it at `at`.
    Rescued { row: usize, at: Position, value: u32 },
    /// The game is over.
    Ended(Outcome),
}

/// A game in progress.
#[derive(Clone, Debug)]
pub struct Session {
    tower: Tower,
    outcome: Option<Outcome>,
    rescued_at: Option<Position>,
}

impl Session {
    /// Start a game on an opened tower.
    #[must_use]
    pub fn new(tower: Tower) -> Self {
        Self {
            tower,
            outcome: None,
            rescued_at: None,
        }
    }

    /// Shuffle a deck for `config` with `rng` and start a game.
    pub fn from_config(config: &GameConfig, rng: &mut GameRng) -> Result<Self> {
        Ok(Self::new(Tower::from_config(config, rng)?))
    }

    /// Deal the next row and resolve it.
    pub fn advance(&mut self) -> Result<Step> {
        if self.outcome.is_some() {
            return Err(TowerError::GameOver);
        }

        let row = self.tower.deal_next_row()?;
        let mut rescued = None;

        if self.tower.check_misfortune() {
            let saved = self.tower.attempt_save();
            if saved.is_none() || self.tower.check_misfortune() {
                return Ok(Step::Ended(self.finish(Outcome::Misfortune { row })));
            }
            rescued = saved;
            self.rescued_at = saved;
        }

        if self.tower.is_complete() {
            let outcome = if self.tower.hit_jackpot() {
                Outcome::Jackpot {
                    value: self.tower.jackpot_value(),
                }
            } else {
                Outcome::Cleared {
                    points: self.tower.last_row_value(),
                }
            };
            return Ok(Step::Ended(self.finish(outcome)));
        }

        let value = self.tower.last_row_value();
        Ok(match rescued {
            Some(at) => Step::Rescued { row, at, value },
            None => Step::Dealt { row, value },
        })
    }

    /// Stop and take the value of the last dealt row.
    pub fn cash_in(&mut self) -> Result<Outcome> {
        if self.outcome.is_some() {
            return Err(TowerError::GameOver);
        }
        let points = self.tower.last_row_value();
        Ok(self.finish(Outcome::CashedIn { points }))
    }

    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    #[must_use]
    pub fn tower(&self) -> &Tower {
        &self.tower
    }

    /// Where the Gate Card cleared a Misfortune, if it ever did.
    #[must_use]
    pub fn rescued_at(&self) -> Option<Position> {
        self.rescued_at
    }

    fn finish(&mut self, outcome: Outcome) -> Outcome {
        debug!(?outcome, row = self.tower.last_dealt_row(), "game over");
        self.outcome = Some(outcome);
        outcome
    }
}
