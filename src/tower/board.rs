//! The tower state machine.
//!
//! ## Lifecycle
//!
//! 1. [`Tower::new`] deals the Gate Card face-down onto the apex and row 2
//!    face-up.
//! 2. The driver calls [`Tower::deal_next_row`] for rows 3 to 8, running
//!    [`Tower::check_misfortune`] after each.
//! 3. On a Misfortune the driver may call [`Tower::attempt_save`] once, then
//!    must re-check.
//! 4. After row 8 the tower is complete. It pays a jackpot if the Gate Card
//!    was never spent.
//!
//! ## Misfortune
//!
//! After a row is dealt, every card in the row above is compared with its two
//! children in the new row (left child first), scanning parents left to
//! right. The first pair of equal numbered cards is the Misfortune. A row
//! holding any Knight is immune. Row 2 is never compared with the apex.
//!
//! ```
//! use fortunes_tower::core::{DeckKind, GameConfig, GameRng};
//! use fortunes_tower::tower::Tower;
//!
//! let config = GameConfig::new(DeckKind::Diamond);
//! let mut tower = Tower::from_config(&config, &mut GameRng::new(11)).unwrap();
//!
//! while !tower.is_complete() {
//!     tower.deal_next_row().unwrap();
//!     if tower.check_misfortune() {
//!         tower.attempt_save();
//!         if tower.check_misfortune() {
//!             break;
//!         }
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use super::position::{row_range, Position, FIRST_OPEN_ROW, GATE_ROW, ROWS, TOWER_CARDS};
use super::view::{slot_text, GateView, RowView};
use crate::cards::{Card, Deck};
use crate::core::{GameConfig, GameRng, Result, TowerError};

/// Where the tower is in its deal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Rows up to `next_row - 1` are on the table.
    Dealing { next_row: usize },
    /// All 8 rows are on the table.
    Complete,
}

/// One game's board and the deck it is dealt from.
#[derive(Clone, Debug)]
pub struct Tower {
    /// Flat arena, see [`Position::index`]. Slot 0 is the Gate Card.
    slots: [Option<Card>; TOWER_CARDS],
    deck: Deck,
    /// Next row to deal, `ROWS + 1` once complete.
    next_row: usize,
    /// Child slot of the last detected Misfortune.
    pending: Option<Position>,
}

impl Tower {
    /// Lay out the Gate Card and row 2 from `deck`.
    ///
    /// Fails with `DeckExhausted` if the deck holds fewer than 3 cards.
    pub fn new(mut deck: Deck) -> Result<Self> {
        let opening = deck.draw_many(GATE_ROW + FIRST_OPEN_ROW)?;

        let mut slots = [None; TOWER_CARDS];
        let mut cards = opening.into_iter();
        slots[Position::GATE.index()] = cards.next();
        for (index, mut card) in row_range(FIRST_OPEN_ROW).zip(cards) {
            card.reveal();
            slots[index] = Some(card);
        }

        debug!(deck_remaining = deck.remaining(), "tower opened");

        Ok(Self {
            slots,
            deck,
            next_row: FIRST_OPEN_ROW + 1,
            pending: None,
        })
    }

    /// Validate `config`, shuffle a fresh deck with `rng`, and open a tower.
    pub fn from_config(config: &GameConfig, rng: &mut GameRng) -> Result<Self> {
        config.validate()?;
        let deck = Deck::from_kind(config.deck, rng)?;
        Self::new(deck)
    }

    // === Commands ===

    /// Deal the next row face-up, left to right.
    ///
    /// Returns the row number dealt. Clears any pending Misfortune. On error
    /// nothing is drawn.
    pub fn deal_next_row(&mut self) -> Result<usize> {
        if self.is_complete() {
            return Err(TowerError::TowerComplete);
        }

        let row = self.next_row;
        let cards = self.deck.draw_many(row).map_err(|err| {
            warn!(row, remaining = self.deck.remaining(), "deck cannot fill row");
            err
        })?;

        for (index, mut card) in row_range(row).zip(cards) {
            card.reveal();
            self.slots[index] = Some(card);
        }
        self.next_row += 1;
        self.pending = None;

        debug!(row, value = self.last_row_value(), "row dealt");
        Ok(row)
    }

    /// Check the last dealt row for a Misfortune.
    ///
    /// Returns true and remembers the offending slot (see
    /// [`pending_misfortune`](Self::pending_misfortune)) if one is found;
    /// otherwise forgets any previously remembered slot.
    pub fn check_misfortune(&mut self) -> bool {
        self.pending = self.find_misfortune();
        self.pending.is_some()
    }

    /// Spend the Gate Card on the pending Misfortune.
    ///
    /// The Gate Card is turned face-up and replaces the offending card, which
    /// leaves the game. Returns the slot it landed on, or `None` (and changes
    /// nothing) when there is no pending Misfortune or the Gate Card is
    /// already spent. A save is only an attempt: re-run
    /// [`check_misfortune`](Self::check_misfortune) afterwards.
    pub fn attempt_save(&mut self) -> Option<Position> {
        let target = self.pending?;
        let mut gate = self.slots[Position::GATE.index()].take()?;

        gate.reveal();
        let replaced = self.slots[target.index()].replace(gate);
        self.pending = None;

        debug!(
            %target,
            gate = %gate,
            replaced = ?replaced.map(|c| c.to_string()),
            "gate card spent"
        );
        Some(target)
    }

    /// Turn the Gate Card face-up without spending it.
    ///
    /// No-op once the Gate Card is spent.
    pub fn reveal_gate(&mut self) {
        if let Some(gate) = self.slots[Position::GATE.index()].as_mut() {
            gate.reveal();
        }
    }

    // === State queries ===

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.is_complete() {
            Phase::Complete
        } else {
            Phase::Dealing {
                next_row: self.next_row,
            }
        }
    }

    /// All 8 rows are on the table.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.next_row > ROWS
    }

    /// Next row to deal (9 once complete).
    #[must_use]
    pub fn next_row(&self) -> usize {
        self.next_row
    }

    /// Most recently dealt row, 2 right after construction.
    #[must_use]
    pub fn last_dealt_row(&self) -> usize {
        self.next_row - 1
    }

    /// Slot remembered by the last positive [`check_misfortune`](Self::check_misfortune).
    #[must_use]
    pub fn pending_misfortune(&self) -> Option<Position> {
        self.pending
    }

    /// The Gate Card, if it has not been spent.
    #[must_use]
    pub fn gate_card(&self) -> Option<&Card> {
        self.slots[Position::GATE.index()].as_ref()
    }

    #[must_use]
    pub fn is_gate_spent(&self) -> bool {
        self.gate_card().is_none()
    }

    #[must_use]
    pub fn gate(&self) -> GateView {
        match self.gate_card() {
            None => GateView::Spent,
            Some(card) if card.is_face_up() => GateView::Revealed(*card),
            Some(_) => GateView::Hidden,
        }
    }

    /// Card at `pos`, if one is there.
    #[must_use]
    pub fn card_at(&self, pos: Position) -> Option<&Card> {
        self.slots.get(pos.index())?.as_ref()
    }

    /// Cards currently on the table, Gate Card included.
    #[must_use]
    pub fn cards_on_board(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// The deck the tower is being dealt from.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    // === Scoring ===

    /// The tower is complete and the Gate Card was never spent.
    #[must_use]
    pub fn hit_jackpot(&self) -> bool {
        self.is_complete() && !self.is_gate_spent()
    }

    /// Sum of every card on a jackpot tower, Gate Card included; 0 otherwise.
    ///
    /// Equal to the sum of [`row_value`](Self::row_value) over rows 1 to 8.
    #[must_use]
    pub fn jackpot_value(&self) -> u32 {
        if !self.hit_jackpot() {
            return 0;
        }
        (1..=ROWS).map(|row| self.row_sum(row)).sum()
    }

    /// Sum of score values in `row`.
    ///
    /// Row 1 is the Gate Card's row and is worth 0 once the Gate is spent.
    pub fn row_value(&self, row: usize) -> Result<u32> {
        self.ensure_dealt(row)?;
        Ok(self.row_sum(row))
    }

    /// Value of the most recently dealt row.
    #[must_use]
    pub fn last_row_value(&self) -> u32 {
        self.row_sum(self.last_dealt_row())
    }

    // === Views ===

    /// Snapshot of `row`. Rows not dealt yet come back empty.
    pub fn row(&self, row: usize) -> Result<RowView> {
        if !super::position::is_valid_row(row) {
            return Err(TowerError::RowOutOfRange(row));
        }
        let slots: SmallVec<[Option<Card>; ROWS]> =
            self.slots[row_range(row)].iter().copied().collect();
        Ok(RowView::new(row, slots))
    }

    /// Snapshot of the most recently dealt row.
    #[must_use]
    pub fn last_row(&self) -> RowView {
        let row = self.last_dealt_row();
        RowView::new(row, self.slots[row_range(row)].iter().copied().collect())
    }

    /// Snapshots of all 8 rows, apex first.
    pub fn rows(&self) -> impl Iterator<Item = RowView> + '_ {
        (1..=ROWS).map(move |row| RowView::new(row, self.slots[row_range(row)].iter().copied().collect()))
    }

    // === Internals ===

    fn ensure_dealt(&self, row: usize) -> Result<()> {
        if !super::position::is_valid_row(row) {
            return Err(TowerError::RowOutOfRange(row));
        }
        if row >= self.next_row {
            return Err(TowerError::RowNotDealt(row));
        }
        Ok(())
    }

    fn row_sum(&self, row: usize) -> u32 {
        self.slots[row_range(row)]
            .iter()
            .flatten()
            .map(Card::score_value)
            .sum()
    }

    fn find_misfortune(&self) -> Option<Position> {
        let row = self.last_dealt_row();
        if row <= FIRST_OPEN_ROW {
            return None;
        }

        if self.slots[row_range(row)].iter().flatten().any(Card::is_knight) {
            trace!(row, "knight in row, immune to misfortune");
            return None;
        }

        let parent_row = row - 1;
        for col in 0..parent_row {
            let parent = Position { row: parent_row, col };
            let Some(parent_card) = self.card_at(parent) else {
                continue;
            };
            let Some((left, right)) = parent.children() else {
                continue;
            };
            for child in [left, right] {
                if self.card_at(child).is_some_and(|card| parent_card.matches(card)) {
                    trace!(%parent, %child, value = parent_card.value(), "misfortune");
                    return Some(child);
                }
            }
        }

        None
    }
}

impl std::fmt::Display for Tower {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 1..=ROWS {
            let line: Vec<String> = self.slots[row_range(row)]
                .iter()
                .map(|slot| slot_text(slot.as_ref()))
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
