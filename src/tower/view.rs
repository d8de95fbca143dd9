//! Read-only snapshots handed to presentation layers.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::position::ROWS;
use crate::cards::Card;

/// Copy of one row: `row` slots, `None` where nothing has been dealt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowView {
    row: usize,
    slots: SmallVec<[Option<Card>; ROWS]>,
}

impl RowView {
    pub(crate) fn new(row: usize, slots: SmallVec<[Option<Card>; ROWS]>) -> Self {
        Self { row, slots }
    }

    /// 1-based row number.
    #[must_use]
    pub fn row(&self) -> usize {
        self.row
    }

    #[must_use]
    pub fn slots(&self) -> &[Option<Card>] {
        &self.slots
    }

    #[must_use]
    pub fn get(&self, col: usize) -> Option<&Card> {
        self.slots.get(col)?.as_ref()
    }

    /// Occupied slots, left to right.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.slots.iter().flatten()
    }

    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    #[must_use]
    pub fn contains_knight(&self) -> bool {
        self.cards().any(Card::is_knight)
    }

    /// Sum of score values of the occupied slots.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.cards().map(Card::score_value).sum()
    }
}

/// What a player can see of the Gate Card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateView {
    /// Still on the apex, face-down.
    Hidden,
    /// Still on the apex, turned over.
    Revealed(Card),
    /// Used to cover a Misfortune.
    Spent,
}

impl GateView {
    #[must_use]
    pub fn is_spent(&self) -> bool {
        matches!(self, GateView::Spent)
    }

    #[must_use]
    pub fn is_face_up(&self) -> bool {
        matches!(self, GateView::Revealed(_))
    }
}

/// Text for one slot: `*` empty, `?` face-down, otherwise the card.
pub(crate) fn slot_text(slot: Option<&Card>) -> String {
    match slot {
        None => "*".to_string(),
        Some(card) if !card.is_face_up() => "?".to_string(),
        Some(card) => card.to_string(),
    }
}
