//! Card system: cards, the deck, and presentation side-tables.
//!
//! ## Key Types
//!
//! - `Card`: Face, value and visibility of one card
//! - `CardId`: Stable identity assigned at deck construction
//! - `Deck`: Shuffled pool the tower draws from
//! - `CardAttachments`: Caller-owned per-card data (images, sprites)

pub mod attachments;
pub mod card;
pub mod deck;

pub use attachments::CardAttachments;
pub use card::{Card, CardId, Face, KNIGHT_SCORE, MAX_VALUE};
pub use deck::{Deck, KNIGHTS_PER_DECK};
