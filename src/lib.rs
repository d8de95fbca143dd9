//! # fortunes-tower
//!
//! Rules engine for Fortune's Tower, a solitaire card game.
//!
//! Cards are dealt into a triangle of 8 rows. Row 1 is a single face-down
//! card, the Gate Card; each later row `n` holds `n` face-up cards. When a
//! new row repeats a value directly below an equal card in the row above,
//! that is a Misfortune. A Knight anywhere in the new row makes it immune.
//! The Gate Card can be spent once to cover the offending card. Dealing all
//! 8 rows without spending it is a Jackpot, paying the whole tower.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Every shuffle takes an injected [`GameRng`]. The
//!    same seed deals the same game.
//!
//! 2. **One owner per game**: A [`Tower`] owns its [`Deck`]. No global
//!    state; run as many games side by side as you like.
//!
//! 3. **Presentation-free**: Rendering reads [`RowView`]/[`GateView`]
//!    snapshots and keeps its own per-card data in [`CardAttachments`].
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `cards`: Cards, the deck, presentation side-tables
//! - `tower`: Triangular layout and the dealing state machine
//! - `session`: Turn rules, cash-in policies, batch simulation
//!
//! ## Example
//!
//! ```
//! use fortunes_tower::{GameConfig, GameRng, Session, Step};
//!
//! let mut session = Session::from_config(&GameConfig::default(), &mut GameRng::new(1)).unwrap();
//!
//! let outcome = loop {
//!     match session.advance().unwrap() {
//!         Step::Ended(outcome) => break outcome,
//!         Step::Dealt { .. } | Step::Rescued { .. } => {}
//!     }
//! };
//! println!("{:?} pays {}", outcome, outcome.points());
//! ```

pub mod cards;
pub mod core;
pub mod session;
pub mod tower;

// Re-export commonly used types
pub use crate::core::{DeckKind, GameConfig, GameRng, GameRngState, Result, TowerError};

pub use crate::cards::{Card, CardAttachments, CardId, Deck, Face, KNIGHT_SCORE};

pub use crate::tower::{GateView, Phase, Position, RowView, Tower, ROWS, TOWER_CARDS};

pub use crate::session::{
    play_out, simulate, CashInAt, CashInPolicy, NeverCashIn, Outcome, PlayStats, Session, Step,
};
