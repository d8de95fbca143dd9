//! Side-table for presentation data attached to cards.
//!
//! The engine's cards are plain data. A UI that wants an image, sprite, or
//! sound per card keeps it here, keyed by [`CardId`], and looks it up while
//! rendering a [`RowView`](crate::tower::RowView). The engine never reads it.

use rustc_hash::FxHashMap;

use super::card::{Card, CardId};

/// Per-card data owned by a presentation layer.
///
/// ## Example
///
/// ```
/// use fortunes_tower::cards::{Card, CardAttachments, CardId};
///
/// let mut sprites = CardAttachments::new();
/// let card = Card::number(CardId::new(3), 5);
///
/// sprites.insert(card.id(), "five.png");
/// assert_eq!(sprites.for_card(&card), Some(&"five.png"));
/// ```
#[derive(Clone, Debug)]
pub struct CardAttachments<T> {
    entries: FxHashMap<CardId, T>,
}

impl<T> Default for CardAttachments<T> {
    fn default() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }
}

impl<T> CardAttachments<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a value to a card, returning the previous one.
    pub fn insert(&mut self, id: CardId, value: T) -> Option<T> {
        self.entries.insert(id, value)
    }

    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&T> {
        self.entries.get(&id)
    }

    /// Look up the value attached to a card.
    #[must_use]
    pub fn for_card(&self, card: &Card) -> Option<&T> {
        self.get(card.id())
    }

    pub fn remove(&mut self, id: CardId) -> Option<T> {
        self.entries.remove(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
