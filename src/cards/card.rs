//! Cards: identity, face, value, and visibility.
//!
//! A `Card` is either a numbered card (1 to 7) or a Knight. Knights score a
//! fixed [`KNIGHT_SCORE`] and protect their whole row from Misfortune; that
//! protection lives in the tower, not here.

use serde::{Deserialize, Serialize};

/// Highest value on a numbered card.
pub const MAX_VALUE: u8 = 7;

/// Score a Knight contributes to a row.
pub const KNIGHT_SCORE: u8 = 7;

/// Stable identity of a physical card within one deck.
///
/// Assigned in build order when the deck is created, before shuffling.
/// Presentation layers key their side-tables on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// What is printed on the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    Number,
    Knight,
}

/// A single card on the table or in the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    face: Face,
    value: u8,
    face_up: bool,
}

impl Card {
    /// Create a face-down numbered card.
    ///
    /// `value` is clamped into 1..=7.
    #[must_use]
    pub fn number(id: CardId, value: u8) -> Self {
        Self {
            id,
            face: Face::Number,
            value: value.clamp(1, MAX_VALUE),
            face_up: false,
        }
    }

    /// Create a face-down Knight.
    #[must_use]
    pub fn knight(id: CardId) -> Self {
        Self {
            id,
            face: Face::Knight,
            value: KNIGHT_SCORE,
            face_up: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn face(&self) -> Face {
        self.face
    }

    /// Printed value. Knights report [`KNIGHT_SCORE`].
    #[must_use]
    pub fn value(&self) -> u8 {
        self.value
    }

    #[must_use]
    pub fn is_knight(&self) -> bool {
        self.face == Face::Knight
    }

    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Turn the card over.
    pub fn flip(&mut self) {
        self.face_up = !self.face_up;
    }

    /// Turn the card face-up if it is not already.
    pub(crate) fn reveal(&mut self) {
        self.face_up = true;
    }

    /// Points this card adds to a row.
    #[must_use]
    pub fn score_value(&self) -> u32 {
        match self.face {
            Face::Knight => u32::from(KNIGHT_SCORE),
            Face::Number => u32::from(self.value),
        }
    }

    /// Misfortune equality: two numbered cards of the same value.
    ///
    /// A Knight never matches anything, including another Knight.
    #[must_use]
    pub fn matches(&self, other: &Card) -> bool {
        match (self.face, other.face) {
            (Face::Number, Face::Number) => self.value == other.value,
            _ => false,
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.face {
            Face::Knight => write!(f, "K"),
            Face::Number => write!(f, "{}", self.value),
        }
    }
}
