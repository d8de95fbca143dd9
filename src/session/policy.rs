//! Cash-in policies for automated play.
//!
//! A policy is asked before every deal whether to stop. Policies are
//! trait-based so simulations can plug in their own strategy.

use crate::core::Result;
use crate::tower::Tower;

use super::game::{Outcome, Session};

/// Decides when to stop dealing and take the points on the table.
pub trait CashInPolicy: Send + Sync {
    /// Called before each deal with the tower as it stands.
    fn should_cash_in(&self, tower: &Tower) -> bool;
}

/// Always deal; play for the jackpot.
#[derive(Clone, Copy, Debug, Default)]
pub struct NeverCashIn;

impl CashInPolicy for NeverCashIn {
    fn should_cash_in(&self, _tower: &Tower) -> bool {
        false
    }
}

/// Cash in as soon as the last dealt row is worth `threshold` or more.
#[derive(Clone, Copy, Debug)]
pub struct CashInAt {
    pub threshold: u32,
}

impl CashInAt {
    #[must_use]
    pub fn new(threshold: u32) -> Self {
        Self { threshold }
    }
}

impl CashInPolicy for CashInAt {
    fn should_cash_in(&self, tower: &Tower) -> bool {
        tower.last_row_value() >= self.threshold
    }
}

/// Play `session` to the end under `policy`.
///
/// Returns immediately if the session is already over.
pub fn play_out<P: CashInPolicy + ?Sized>(session: &mut Session, policy: &P) -> Result<Outcome> {
    loop {
        if let Some(outcome) = session.outcome() {
            return Ok(outcome);
        }
        if policy.should_cash_in(session.tower()) {
            return session.cash_in();
        }
        session.advance()?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardId, Deck};

    /// Gate 4, then rows 2..=8 of all 1s and all 2s alternating.
    fn quiet_session() -> Session {
        let mut cards = vec![Card::number(CardId::new(0), 4)];
        for row in 2..=8usize {
            let value = if row % 2 == 0 { 1 } else { 2 };
            for _ in 0..row {
                cards.push(Card::number(CardId::new(cards.len() as u32), value));
            }
        }
        Session::new(Tower::new(Deck::stacked(cards)).unwrap())
    }

    #[test]
    fn test_never_cash_in_plays_to_the_end() {
        let mut session = quiet_session();
        let outcome = play_out(&mut session, &NeverCashIn).unwrap();

        assert_eq!(outcome, Outcome::Jackpot { value: 54 });
        assert!(session.tower().is_complete());
    }

    #[test]
    fn test_cash_in_at_threshold() {
        let mut session = quiet_session();
        // Row values: 2, 6, 4, 10, ... so the first row worth 10 is row 5
        let outcome = play_out(&mut session, &CashInAt::new(10)).unwrap();

        assert_eq!(outcome, Outcome::CashedIn { points: 10 });
        assert_eq!(session.tower().last_dealt_row(), 5);
    }

    #[test]
    fn test_threshold_already_met() {
        let mut session = quiet_session();
        let outcome = play_out(&mut session, &CashInAt::new(0)).unwrap();

        assert_eq!(outcome, Outcome::CashedIn { points: 2 });
        assert_eq!(session.tower().last_dealt_row(), 2);
    }

    #[test]
    fn test_play_out_finished_session() {
        let mut session = quiet_session();
        session.cash_in().unwrap();

        let outcome = play_out(&mut session, &NeverCashIn).unwrap();
        assert_eq!(outcome, Outcome::CashedIn { points: 2 });
    }

    #[test]
    fn test_dyn_policy() {
        let policies: Vec<Box<dyn CashInPolicy>> = vec![Box::new(NeverCashIn), Box::new(CashInAt::new(6))];
        let points: Vec<u32> = policies
            .iter()
            .map(|p| play_out(&mut quiet_session(), p.as_ref()).unwrap().points())
            .collect();

        assert_eq!(points, vec![54, 6]);
    }
}
