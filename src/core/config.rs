//! Game configuration types.
//!
//! A game is configured by its deck. The three conventional decks come from
//! the casino versions of the game:
//! - `Diamond`: 56 cards
//! - `Ruby`: 63 cards
//! - `Emerald`: 70 cards
//!
//! Any other size works as long as it covers the 36 cards a full tower uses.

use serde::{Deserialize, Serialize};

use super::error::{Result, TowerError};
use crate::tower::TOWER_CARDS;

/// Deck size preset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeckKind {
    /// 56 cards.
    #[default]
    Diamond,
    /// 63 cards.
    Ruby,
    /// 70 cards.
    Emerald,
    /// Any other card count.
    Custom(usize),
}

impl DeckKind {
    /// Number of cards in a deck of this kind.
    #[must_use]
    pub const fn size(self) -> usize {
        match self {
            DeckKind::Diamond => 56,
            DeckKind::Ruby => 63,
            DeckKind::Emerald => 70,
            DeckKind::Custom(n) => n,
        }
    }
}

impl std::fmt::Display for DeckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeckKind::Diamond => write!(f, "Diamond"),
            DeckKind::Ruby => write!(f, "Ruby"),
            DeckKind::Emerald => write!(f, "Emerald"),
            DeckKind::Custom(n) => write!(f, "Custom({})", n),
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Deck the tower is dealt from.
    pub deck: DeckKind,
}

impl GameConfig {
    /// Create a configuration for the given deck.
    #[must_use]
    pub fn new(deck: DeckKind) -> Self {
        Self { deck }
    }

    /// Use a different deck.
    #[must_use]
    pub fn with_deck(mut self, deck: DeckKind) -> Self {
        self.deck = deck;
        self
    }

    /// Number of cards in the configured deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck.size()
    }

    /// Check that a full tower can be dealt from the configured deck.
    pub fn validate(&self) -> Result<()> {
        let size = self.deck_size();
        if size < TOWER_CARDS {
            return Err(TowerError::invalid(format!(
                "{} deck has {} cards, a full tower needs {}",
                self.deck, size, TOWER_CARDS
            )));
        }
        Ok(())
    }
}
