//! Tower scenarios on real deck compositions.
//!
//! Decks here have the standard makeup (4 Knights, numbers cycling 1..=7)
//! but are stacked so the interesting cards come out first.

use fortunes_tower::cards::{Card, CardId, Deck};
use fortunes_tower::session::{Outcome, Session, Step};
use fortunes_tower::tower::{GateView, Position, Tower, ROWS, TOWER_CARDS};
use fortunes_tower::TowerError;

/// Knight marker in layouts.
const K: u8 = 0;

fn to_card(index: usize, value: u8) -> Card {
    let id = CardId::new(index as u32);
    if value == K {
        Card::knight(id)
    } else {
        Card::number(id, value)
    }
}

/// A standard `size`-card deck whose first draws are `prefix`.
fn stacked_deck(size: usize, prefix: &[u8]) -> Deck {
    let mut pool: Vec<u8> = vec![K; 4];
    pool.extend((0..size - 4).map(|i| (i % 7) as u8 + 1));

    let mut order = Vec::with_capacity(size);
    for &value in prefix {
        let at = pool
            .iter()
            .position(|&p| p == value)
            .expect("layout needs more of a value than the deck holds");
        order.push(pool.remove(at));
    }
    order.extend(pool);

    Deck::stacked(order.into_iter().enumerate().map(|(i, v)| to_card(i, v)).collect())
}

fn layout(gate: u8, rows: &[&[u8]]) -> Vec<u8> {
    let mut prefix = vec![gate];
    for row in rows {
        prefix.extend_from_slice(row);
    }
    prefix
}

// =============================================================================
// Misfortune detection
// =============================================================================

#[test]
fn test_scenario_misfortune_under_first_parent() {
    let deck = stacked_deck(56, &layout(3, &[&[3, 5], &[3, 1, 2]]));
    let mut tower = Tower::new(deck).unwrap();

    assert_eq!(tower.row_value(1), Ok(3));
    assert_eq!(tower.row_value(2), Ok(8));
    assert!(!tower.check_misfortune());

    assert_eq!(tower.deal_next_row(), Ok(3));
    assert!(tower.check_misfortune());
    assert_eq!(tower.pending_misfortune(), Some(Position { row: 3, col: 0 }));
}

#[test]
fn test_scenario_knight_row_is_immune() {
    // Without the Knight, col 0 and col 1 would both collide
    let deck = stacked_deck(56, &layout(1, &[&[3, 5], &[3, 5, K]]));
    let mut tower = Tower::new(deck).unwrap();

    tower.deal_next_row().unwrap();
    assert!(!tower.check_misfortune());
    assert_eq!(tower.pending_misfortune(), None);
}

#[test]
fn test_knight_anywhere_in_row_protects() {
    for knight_col in 0..4 {
        let mut row4 = [4u8, 4, 4, 4];
        row4[knight_col] = K;
        let deck = stacked_deck(56, &layout(1, &[&[2, 3], &[4, 5, 6], &row4]));
        let mut tower = Tower::new(deck).unwrap();

        tower.deal_next_row().unwrap();
        assert!(!tower.check_misfortune());
        tower.deal_next_row().unwrap();
        assert!(!tower.check_misfortune(), "knight at col {}", knight_col);
    }
}

#[test]
fn test_misfortune_deep_in_tower() {
    let deck = stacked_deck(
        63,
        &layout(
            2,
            &[&[1, 1], &[2, 2, 2], &[3, 3, 3, 3], &[4, 4, 4, 4, 4], &[5, 5, 5, 5, 5, 5], &[6, 6, 6, 6, 6, 5, 7]],
        ),
    );
    let mut tower = Tower::new(deck).unwrap();

    for _ in 3..=6 {
        tower.deal_next_row().unwrap();
        assert!(!tower.check_misfortune());
    }
    tower.deal_next_row().unwrap();

    // Parent (6, 4) is a 5 above (7, 4)=6 and (7, 5)=5
    assert!(tower.check_misfortune());
    assert_eq!(tower.pending_misfortune(), Position::new(7, 5));
}

// =============================================================================
// Jackpot
// =============================================================================

const QUIET: &[&[u8]] = &[
    &[1, 1],
    &[2, 2, 2],
    &[3, 3, 3, 3],
    &[4, 4, 4, 4, 4],
    &[5, 5, 5, 5, 5, 5],
    &[6, 6, 6, 6, 6, 6, 6],
    &[1, 2, 1, 2, 1, 2, 3, 3],
];

#[test]
fn test_scenario_jackpot() {
    let mut tower = Tower::new(stacked_deck(56, &layout(7, QUIET))).unwrap();

    while !tower.is_complete() {
        tower.deal_next_row().unwrap();
        assert!(!tower.check_misfortune());
    }

    assert!(tower.hit_jackpot());
    assert_eq!(tower.cards_on_board(), TOWER_CARDS);
    assert_eq!(tower.jackpot_value(), 7 + 2 + 6 + 12 + 20 + 30 + 42 + 15);

    let every_card: u32 = tower.rows().flat_map(|r| r.cards().map(Card::score_value).collect::<Vec<_>>()).sum();
    assert_eq!(tower.jackpot_value(), every_card);

    let by_rows: u32 = (1..=ROWS).map(|r| tower.row_value(r).unwrap()).sum();
    assert_eq!(tower.jackpot_value(), by_rows);
}

#[test]
fn test_deck_slack_is_never_dealt() {
    let mut tower = Tower::new(stacked_deck(70, &layout(7, QUIET))).unwrap();
    while !tower.is_complete() {
        tower.deal_next_row().unwrap();
    }

    assert_eq!(tower.deck().remaining(), 70 - TOWER_CARDS);
    assert_eq!(tower.deal_next_row(), Err(TowerError::TowerComplete));
    assert_eq!(tower.deck().remaining(), 70 - TOWER_CARDS);
}

// =============================================================================
// The Gate Card
// =============================================================================

#[test]
fn test_rescue_costs_the_jackpot() {
    let mut rows: Vec<Vec<u8>> = QUIET.iter().map(|r| r.to_vec()).collect();
    rows[1][1] = 1;
    let slices: Vec<&[u8]> = rows.iter().map(Vec::as_slice).collect();
    let mut tower = Tower::new(stacked_deck(56, &layout(7, &slices))).unwrap();

    tower.deal_next_row().unwrap();
    assert!(tower.check_misfortune());
    assert_eq!(tower.pending_misfortune(), Position::new(3, 1));

    assert_eq!(tower.attempt_save(), Position::new(3, 1));
    assert_eq!(tower.gate(), GateView::Spent);
    assert!(!tower.check_misfortune());

    while !tower.is_complete() {
        tower.deal_next_row().unwrap();
        assert!(!tower.check_misfortune());
    }
    assert!(!tower.hit_jackpot());
    assert_eq!(tower.jackpot_value(), 0);
}

#[test]
fn test_scenario_failed_save_ends_game() {
    let prefix = layout(3, &[&[3, 5], &[3, 1, 2]]);

    let mut tower = Tower::new(stacked_deck(56, &prefix)).unwrap();
    tower.deal_next_row().unwrap();
    assert!(tower.check_misfortune());
    assert!(tower.attempt_save().is_some());
    assert!(tower.check_misfortune());
    assert_eq!(tower.attempt_save(), None);

    let mut session = Session::new(Tower::new(stacked_deck(56, &prefix)).unwrap());
    assert_eq!(
        session.advance(),
        Ok(Step::Ended(Outcome::Misfortune { row: 3 }))
    );
    assert_eq!(session.advance(), Err(TowerError::GameOver));
}

#[test]
fn test_revealed_gate_still_pays_jackpot() {
    let mut tower = Tower::new(stacked_deck(56, &layout(7, QUIET))).unwrap();
    tower.reveal_gate();
    assert!(tower.gate().is_face_up());

    while !tower.is_complete() {
        tower.deal_next_row().unwrap();
    }
    assert!(tower.hit_jackpot());
}

#[test]
fn test_render() {
    let mut tower = Tower::new(stacked_deck(56, &layout(7, QUIET))).unwrap();
    tower.deal_next_row().unwrap();

    let expected = "?\n1 1\n2 2 2\n* * * *\n* * * * *\n* * * * * *\n* * * * * * *\n* * * * * * * *\n";
    assert_eq!(tower.to_string(), expected);
}
