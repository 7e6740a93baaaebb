//! Combo detection and validation.
//!
//! Two entry points share one spatial contract:
//!
//! - [`ComboDetector::detect_combos`] — machine-driven discovery of every
//!   combo involving the card just placed. Used by CPU strategies after
//!   placement.
//! - [`ComboDetector::check_combo`] — validation of a candidate set a player
//!   nominates manually.
//!
//! Both paths require 2-card patterns to be orthogonally adjacent and 3-card
//! patterns to be connected (a straight line of three or an L-shape), so an
//! automated player can never claim a combo a human could not submit.
//!
//! Connectivity for three cells is checked by a pairwise-adjacency signature:
//! count, for each cell, how many of the other two it is orthogonally
//! adjacent to. Sorted, the three counts must be exactly `[1, 1, 2]` — one
//! joint cell touching both others, two end cells touching only the joint.
//! Diagonal-only and disconnected placements never produce that signature.

use smallvec::SmallVec;

use crate::board::Board;
use crate::combo::{Combo, ComboType};
use crate::core::{Card, Position};

/// Pure combo-finding algorithm over board snapshots.
#[derive(Clone, Copy, Debug, Default)]
pub struct ComboDetector;

impl ComboDetector {
    /// Create a detector.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Find every combo involving the card at `last_placed`.
    ///
    /// Returns an empty vector if the cell is empty. Several combos can be
    /// reported at once, e.g. a 2-card and a 3-card pattern both using the
    /// last-placed card.
    #[must_use]
    pub fn detect_combos(&self, board: &Board, last_placed: Position) -> Vec<Combo> {
        let Some(last_card) = board.get_card(last_placed) else {
            return Vec::new();
        };

        let mut combos = Vec::new();

        // Same-colored occupied cells, excluding the placement itself.
        let others: SmallVec<[(Position, Card); 8]> = board
            .occupied_positions()
            .filter(|p| *p != last_placed)
            .filter_map(|p| board.get_card(p).map(|c| (p, c)))
            .filter(|(_, c)| c.is_same_color(last_card))
            .collect();

        // 2-card pass: the last card paired with each adjacent candidate.
        for &(pos, card) in &others {
            if !last_placed.is_adjacent_to(pos) {
                continue;
            }
            if let Some(combo_type) = pair_type(last_card, card) {
                let combo = Combo::new(
                    combo_type,
                    vec![last_card, card],
                    vec![last_placed, pos],
                )
                .expect("two cards, two positions");
                combos.push(combo);
            }
        }

        // 3-card pass: the last card combined with each unordered pair.
        for i in 0..others.len() {
            for j in (i + 1)..others.len() {
                let (pos1, card1) = others[i];
                let (pos2, card2) = others[j];

                if !is_connected_triple(last_placed, pos1, pos2) {
                    continue;
                }
                if let Some(combo_type) = triple_type(last_card, card1, card2) {
                    let combo = Combo::new(
                        combo_type,
                        vec![last_card, card1, card2],
                        vec![last_placed, pos1, pos2],
                    )
                    .expect("three cards, three positions");
                    combos.push(combo);
                }
            }
        }

        combos
    }

    /// Validate a manually nominated candidate set.
    ///
    /// Returns the matched pattern, or `None` for: mismatched lengths, empty
    /// input, mixed colors, non-adjacent pairs, disconnected or diagonal
    /// triples, or values that hit no target.
    #[must_use]
    pub fn check_combo(&self, cards: &[Card], positions: &[Position]) -> Option<ComboType> {
        if cards.len() != positions.len() || cards.is_empty() {
            return None;
        }

        let first_color = cards[0].color();
        if !cards.iter().all(|c| c.color() == first_color) {
            return None;
        }

        match cards.len() {
            2 => {
                if !positions[0].is_adjacent_to(positions[1]) {
                    return None;
                }
                pair_type(cards[0], cards[1])
            }
            3 => {
                if !is_connected_triple(positions[0], positions[1], positions[2]) {
                    return None;
                }
                triple_type(cards[0], cards[1], cards[2])
            }
            _ => None,
        }
    }
}

/// Match an unordered value pair against the two 2-card targets.
fn pair_type(a: Card, b: Card) -> Option<ComboType> {
    let mut values = [a.value().as_u8(), b.value().as_u8()];
    values.sort_unstable();
    match values {
        [1, 4] => Some(ComboType::TwoCards1_4),
        [4, 9] => Some(ComboType::TwoCards4_9),
        _ => None,
    }
}

/// Match an unordered value triple against the 3-card target and the
/// clearing pattern (three equal values).
fn triple_type(a: Card, b: Card, c: Card) -> Option<ComboType> {
    let mut values = [a.value().as_u8(), b.value().as_u8(), c.value().as_u8()];
    values.sort_unstable();
    match values {
        [1, 4, 16] => Some(ComboType::ThreeCards),
        [x, y, z] if x == y && y == z => Some(ComboType::Clearing),
        _ => None,
    }
}

/// Pairwise-adjacency signature check: sorted per-cell adjacency counts must
/// be `[1, 1, 2]`.
fn is_connected_triple(a: Position, b: Position, c: Position) -> bool {
    let ab = a.is_adjacent_to(b) as u8;
    let ac = a.is_adjacent_to(c) as u8;
    let bc = b.is_adjacent_to(c) as u8;

    let mut counts = [ab + ac, ab + bc, ac + bc];
    counts.sort_unstable();
    counts == [1, 1, 2]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CardColor, CardId, CardValue};

    fn card(id: u32, value: u8, color: CardColor) -> Card {
        Card::new(CardId::new(id), CardValue::of(value).unwrap(), color)
    }

    fn pos(row: u8, col: u8) -> Position {
        Position::of(row, col).unwrap()
    }

    #[test]
    fn test_connected_triple_line() {
        assert!(is_connected_triple(pos(0, 0), pos(0, 1), pos(0, 2)));
        assert!(is_connected_triple(pos(0, 1), pos(1, 1), pos(2, 1)));
    }

    #[test]
    fn test_connected_triple_l_shape() {
        assert!(is_connected_triple(pos(0, 0), pos(0, 1), pos(1, 1)));
        assert!(is_connected_triple(pos(2, 0), pos(1, 0), pos(1, 1)));
    }

    #[test]
    fn test_disconnected_triples() {
        // Purely diagonal
        assert!(!is_connected_triple(pos(0, 0), pos(1, 1), pos(2, 2)));
        // Two adjacent, one far away
        assert!(!is_connected_triple(pos(0, 0), pos(0, 1), pos(2, 2)));
        // All isolated
        assert!(!is_connected_triple(pos(0, 0), pos(0, 2), pos(2, 0)));
    }

    #[test]
    fn test_pair_type_targets() {
        let red1 = card(0, 1, CardColor::Red);
        let red4 = card(1, 4, CardColor::Red);
        let red9 = card(2, 9, CardColor::Red);
        let red16 = card(3, 16, CardColor::Red);

        assert_eq!(pair_type(red1, red4), Some(ComboType::TwoCards1_4));
        assert_eq!(pair_type(red4, red1), Some(ComboType::TwoCards1_4));
        assert_eq!(pair_type(red4, red9), Some(ComboType::TwoCards4_9));
        assert_eq!(pair_type(red9, red16), None);
        assert_eq!(pair_type(red1, red16), None);
    }

    #[test]
    fn test_triple_type() {
        let c1 = card(0, 1, CardColor::Blue);
        let c4 = card(1, 4, CardColor::Blue);
        let c16 = card(2, 16, CardColor::Blue);
        let c9a = card(3, 9, CardColor::Blue);
        let c9b = card(4, 9, CardColor::Blue);
        let c9c = card(5, 9, CardColor::Blue);

        assert_eq!(triple_type(c16, c1, c4), Some(ComboType::ThreeCards));
        assert_eq!(triple_type(c9a, c9b, c9c), Some(ComboType::Clearing));
        assert_eq!(triple_type(c1, c4, c9a), None);
    }
}
