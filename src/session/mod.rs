//! Turn rules on top of the tower: playing a game to an outcome.
//!
//! - `Session`: One game, dealing, auto-saving once, cashing in
//! - `CashInPolicy`: When an automated player stops
//! - `simulate`: Many seeded games, tallied into `PlayStats`

pub mod game;
pub mod policy;
pub mod stats;

pub use game::{Outcome, Session, Step};
pub use policy::{play_out, CashInAt, CashInPolicy, NeverCashIn};
pub use stats::{simulate, PlayStats};
