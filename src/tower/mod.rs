//! The tower: triangular layout, the dealing state machine, and snapshots.
//!
//! ## Key Types
//!
//! - `Position`: `(row, col)` slot with parent/child arithmetic
//! - `Tower`: Board state, dealing, Misfortune detection, the Gate save, scoring
//! - `RowView` / `GateView`: Read-only copies for rendering

pub mod board;
pub mod position;
pub mod view;

pub use board::{Phase, Tower};
pub use position::{Position, FIRST_OPEN_ROW, GATE_ROW, ROWS, TOWER_CARDS};
pub use view::{GateView, RowView};
