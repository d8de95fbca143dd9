//! The shuffled pool the tower is dealt from.
//!
//! A built deck always holds exactly [`KNIGHTS_PER_DECK`] Knights; the rest
//! are numbered cards cycling through 1..=7. Cards are drawn from the tail.

use tracing::debug;

use super::card::{Card, CardId, MAX_VALUE};
use crate::core::{DeckKind, GameRng, Result, TowerError};

/// Knights in every built deck.
pub const KNIGHTS_PER_DECK: usize = 4;

/// An ordered pool of undrawn cards.
#[derive(Clone, Debug)]
pub struct Deck {
    /// Undrawn cards; the last element is drawn next.
    cards: Vec<Card>,
    size: usize,
}

impl Deck {
    /// Build and shuffle a deck of `num_cards` cards.
    ///
    /// ```
    /// use fortunes_tower::cards::Deck;
    /// use fortunes_tower::core::GameRng;
    ///
    /// let deck = Deck::new(56, &mut GameRng::new(7)).unwrap();
    /// assert_eq!(deck.remaining(), 56);
    /// assert_eq!(deck.knight_count(), 4);
    /// ```
    pub fn new(num_cards: usize, rng: &mut GameRng) -> Result<Self> {
        if num_cards < KNIGHTS_PER_DECK {
            return Err(TowerError::invalid(format!(
                "deck needs at least {} cards, got {}",
                KNIGHTS_PER_DECK, num_cards
            )));
        }

        let mut cards = Vec::with_capacity(num_cards);
        for i in 0..KNIGHTS_PER_DECK {
            cards.push(Card::knight(CardId::new(i as u32)));
        }
        for i in 0..num_cards - KNIGHTS_PER_DECK {
            let id = CardId::new((KNIGHTS_PER_DECK + i) as u32);
            let value = (i % MAX_VALUE as usize) as u8 + 1;
            cards.push(Card::number(id, value));
        }

        rng.shuffle(&mut cards);
        debug!(num_cards, seed = rng.seed(), "deck shuffled");

        Ok(Self {
            cards,
            size: num_cards,
        })
    }

    /// Build and shuffle a preset deck.
    pub fn from_kind(kind: DeckKind, rng: &mut GameRng) -> Result<Self> {
        Self::new(kind.size(), rng)
    }

    /// A deck with a fixed draw order: `draw_order[0]` is drawn first.
    ///
    /// Nothing is shuffled and the knight count is not enforced. Meant for
    /// replays and tests that need a specific deal.
    #[must_use]
    pub fn stacked(draw_order: Vec<Card>) -> Self {
        let size = draw_order.len();
        let mut cards = draw_order;
        cards.reverse();
        Self { cards, size }
    }

    /// Remove and return the next card.
    pub fn draw(&mut self) -> Result<Card> {
        self.cards.pop().ok_or(TowerError::DeckExhausted {
            requested: 1,
            remaining: 0,
        })
    }

    /// Remove the next `count` cards, in draw order.
    ///
    /// Takes nothing unless all `count` cards are available.
    pub fn draw_many(&mut self, count: usize) -> Result<Vec<Card>> {
        if count > self.cards.len() {
            return Err(TowerError::DeckExhausted {
                requested: count,
                remaining: self.cards.len(),
            });
        }
        let split = self.cards.len() - count;
        let mut drawn = self.cards.split_off(split);
        drawn.reverse();
        Ok(drawn)
    }

    /// Undrawn cards left.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards the deck was built with.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Knights still in the deck.
    #[must_use]
    pub fn knight_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_knight()).count()
    }

    /// Undrawn cards, next draw last.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
