//! Error taxonomy for the engine.
//!
//! Every fallible operation returns [`Result`]. A failed operation leaves the
//! deck and tower exactly as they were.

use thiserror::Error;

/// Errors raised by deck construction, dealing, and row queries.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TowerError {
    /// The requested deck or game configuration cannot be built.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// A draw was requested that the deck cannot satisfy.
    ///
    /// Unreachable with a deck of at least 36 cards.
    #[error("deck exhausted: requested {requested} card(s), {remaining} remaining")]
    DeckExhausted { requested: usize, remaining: usize },

    /// Row number outside 1..=8.
    #[error("row {0} is out of range (rows are numbered 1 to 8)")]
    RowOutOfRange(usize),

    /// Row has not been dealt yet.
    #[error("row {0} has not been dealt")]
    RowNotDealt(usize),

    /// All eight rows are already on the table.
    #[error("tower is complete, no rows left to deal")]
    TowerComplete,

    /// The session has already reached an outcome.
    #[error("game is over")]
    GameOver,
}

impl TowerError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        TowerError::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TowerError>;
