//! Triangular coordinates over a flat arena.
//!
//! The tower has 8 rows; row `n` (1-based) holds `n` slots, columns are
//! 0-based. All 36 slots live in one array in row-major order, so
//! `(row, col)` maps to `row * (row - 1) / 2 + col`.
//!
//! ```text
//! row 1            0                <- gate slot
//! row 2          1   2
//! row 3        3   4   5
//! ...
//! ```
//!
//! The slot at `(r, c)` sits above `(r + 1, c)` and `(r + 1, c + 1)`. These
//! are its left and right children; nothing stores the links.

use serde::{Deserialize, Serialize};

/// Rows in a full tower.
pub const ROWS: usize = 8;

/// Cards on a full tower, gate included.
pub const TOWER_CARDS: usize = ROWS * (ROWS + 1) / 2;

/// Row holding the Gate Card.
pub const GATE_ROW: usize = 1;

/// First row dealt face-up at construction.
pub const FIRST_OPEN_ROW: usize = 2;

/// A slot in the tower.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// 1-based row.
    pub row: usize,
    /// 0-based column, less than `row`.
    pub col: usize,
}

impl Position {
    /// The apex, where the Gate Card lives.
    pub const GATE: Position = Position { row: GATE_ROW, col: 0 };

    /// Create a position, or `None` if it is not on the tower.
    #[must_use]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if is_valid_row(row) && col < row {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Index into the flat arena.
    #[must_use]
    pub const fn index(self) -> usize {
        row_start(self.row) + self.col
    }

    /// Inverse of [`index`](Self::index).
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= TOWER_CARDS {
            return None;
        }
        let row = (1..=ROWS).find(|&r| index < row_start(r) + r)?;
        Some(Self {
            row,
            col: index - row_start(row),
        })
    }

    /// The two slots directly below: `(left, right)`.
    ///
    /// `None` on the bottom row.
    #[must_use]
    pub fn children(self) -> Option<(Position, Position)> {
        if self.row >= ROWS {
            return None;
        }
        let row = self.row + 1;
        Some((
            Position { row, col: self.col },
            Position { row, col: self.col + 1 },
        ))
    }

    /// Slots in the row above that have this slot as a child, left to right.
    #[must_use]
    pub fn parents(self) -> Vec<Position> {
        if self.row <= 1 {
            return Vec::new();
        }
        let row = self.row - 1;
        let mut parents = Vec::with_capacity(2);
        if self.col > 0 {
            parents.push(Position { row, col: self.col - 1 });
        }
        if self.col < row {
            parents.push(Position { row, col: self.col });
        }
        parents
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Whether `row` is one of the tower's rows.
#[must_use]
pub const fn is_valid_row(row: usize) -> bool {
    row >= 1 && row <= ROWS
}

/// Arena index of the first slot of `row`.
#[must_use]
pub const fn row_start(row: usize) -> usize {
    row * (row - 1) / 2
}

/// Arena indices covered by `row`.
#[must_use]
pub fn row_range(row: usize) -> std::ops::Range<usize> {
    let start = row_start(row);
    start..start + row
}
