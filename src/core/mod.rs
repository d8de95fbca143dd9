//! Core engine types: RNG, configuration, errors.
//!
//! Nothing in here knows about cards or the tower layout beyond the
//! minimum deck size a configuration must satisfy.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{DeckKind, GameConfig};
pub use error::{Result, TowerError};
pub use rng::{GameRng, GameRngState};
