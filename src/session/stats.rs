//! Batch simulation and outcome statistics.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{GameConfig, GameRng, Result};

use super::game::{Outcome, Session};
use super::policy::{play_out, CashInPolicy};

/// Tally of finished games.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayStats {
    /// Games played.
    pub games: u32,

    /// Games that paid the jackpot.
    pub jackpots: u32,

    /// Games that finished all rows after using the Gate Card.
    pub cleared: u32,

    /// Games lost to a Misfortune.
    pub misfortunes: u32,

    /// Games the policy stopped early.
    pub cashed_in: u32,

    /// Games where the Gate Card cleared a Misfortune.
    pub rescues: u32,

    /// Points paid across all games.
    pub total_points: u64,

    /// Best single payout.
    pub best: u32,
}

impl PlayStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one finished game.
    pub fn record(&mut self, outcome: &Outcome, rescued: bool) {
        self.games += 1;
        match outcome {
            Outcome::CashedIn { .. } => self.cashed_in += 1,
            Outcome::Cleared { .. } => self.cleared += 1,
            Outcome::Jackpot { .. } => self.jackpots += 1,
            Outcome::Misfortune { .. } => self.misfortunes += 1,
        }
        if rescued {
            self.rescues += 1;
        }
        let points = outcome.points();
        self.total_points += u64::from(points);
        self.best = self.best.max(points);
    }

    /// Average payout per game.
    #[must_use]
    pub fn mean_points(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_points as f64 / self.games as f64
        }
    }

    /// Fraction of games that paid the jackpot.
    #[must_use]
    pub fn jackpot_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.jackpots as f64 / self.games as f64
        }
    }
}

/// Play `games` independent games under `policy`.
///
/// Each game shuffles with its own fork of `rng`, so the same seed always
/// produces the same statistics.
pub fn simulate<P: CashInPolicy + ?Sized>(
    config: &GameConfig,
    games: u32,
    rng: &mut GameRng,
    policy: &P,
) -> Result<PlayStats> {
    config.validate()?;

    let mut stats = PlayStats::new();
    for _ in 0..games {
        let mut game_rng = rng.fork();
        let mut session = Session::from_config(config, &mut game_rng)?;
        let outcome = play_out(&mut session, policy)?;
        stats.record(&outcome, session.rescued_at().is_some());
    }

    debug!(
        games = stats.games,
        jackpots = stats.jackpots,
        misfortunes = stats.misfortunes,
        mean_points = stats.mean_points(),
        "simulation finished"
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DeckKind, TowerError};
    use crate::session::{CashInAt, NeverCashIn};

    #[test]
    fn test_stats_default() {
        let stats = PlayStats::new();
        assert_eq!(stats.games, 0);
        assert_eq!(stats.mean_points(), 0.0);
        assert_eq!(stats.jackpot_rate(), 0.0);
    }

    #[test]
    fn test_record() {
        let mut stats = PlayStats::new();
        stats.record(&Outcome::Jackpot { value: 100 }, false);
        stats.record(&Outcome::Misfortune { row: 4 }, true);
        stats.record(&Outcome::CashedIn { points: 20 }, false);
        stats.record(&Outcome::Cleared { points: 30 }, true);

        assert_eq!(stats.games, 4);
        assert_eq!(stats.jackpots, 1);
        assert_eq!(stats.misfortunes, 1);
        assert_eq!(stats.cashed_in, 1);
        assert_eq!(stats.cleared, 1);
        assert_eq!(stats.rescues, 2);
        assert_eq!(stats.total_points, 150);
        assert_eq!(stats.best, 100);
        assert!((stats.mean_points() - 37.5).abs() < 1e-9);
        assert!((stats.jackpot_rate() - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_simulate_counts_every_game() {
        let config = GameConfig::new(DeckKind::Emerald);
        let stats = simulate(&config, 200, &mut GameRng::new(42), &NeverCashIn).unwrap();

        assert_eq!(stats.games, 200);
        assert_eq!(stats.cashed_in, 0);
        assert_eq!(stats.jackpots + stats.cleared + stats.misfortunes, 200);
        assert!(stats.rescues <= stats.cleared + stats.misfortunes);
    }

    #[test]
    fn test_simulate_is_deterministic() {
        let config = GameConfig::default();
        let policy = CashInAt::new(25);

        let a = simulate(&config, 50, &mut GameRng::new(9), &policy).unwrap();
        let b = simulate(&config, 50, &mut GameRng::new(9), &policy).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_simulate_rejects_small_deck() {
        let config = GameConfig::new(DeckKind::Custom(30));
        let err = simulate(&config, 1, &mut GameRng::new(1), &NeverCashIn).unwrap_err();
        assert!(matches!(err, TowerError::InvalidConfiguration { .. }));
    }
}
