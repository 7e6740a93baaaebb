//! Scoring patterns ("combos").
//!
//! Every scoring combo is a set of same-colored cards whose values sum to a
//! Fibonacci number: 1+4 = 5, 4+9 = 13, 1+4+16 = 21. The fourth pattern,
//! `Clearing`, is three cards of the same value and color; it scores nothing
//! and instead wipes the whole board.
//!
//! `Combo` construction validates only that the card and position lists have
//! equal length. Whether the cards actually form the named pattern is the
//! detector's contract ([`crate::detector::ComboDetector`]).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Card, GameError, Position};

/// The kinds of claimable patterns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComboType {
    /// Two cards valued 1 and 4 (sum 5).
    TwoCards1_4,
    /// Two cards valued 4 and 9 (sum 13).
    TwoCards4_9,
    /// Three cards valued 1, 4 and 16 (sum 21).
    ThreeCards,
    /// Three cards of the same value and color; clears the board, no stars.
    Clearing,
}

impl std::fmt::Display for ComboType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComboType::TwoCards1_4 => write!(f, "1+4"),
            ComboType::TwoCards4_9 => write!(f, "4+9"),
            ComboType::ThreeCards => write!(f, "1+4+16"),
            ComboType::Clearing => write!(f, "clearing"),
        }
    }
}

/// A validated scoring pattern: type tag, cards, and their board positions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combo {
    combo_type: ComboType,
    cards: SmallVec<[Card; 3]>,
    positions: SmallVec<[Position; 3]>,
}

impl Combo {
    /// Create a combo.
    ///
    /// Fails with [`GameError::MalformedCombo`] when the card and position
    /// lists differ in length.
    pub fn new(
        combo_type: ComboType,
        cards: impl Into<SmallVec<[Card; 3]>>,
        positions: impl Into<SmallVec<[Position; 3]>>,
    ) -> Result<Self, GameError> {
        let cards = cards.into();
        let positions = positions.into();
        if cards.len() != positions.len() {
            return Err(GameError::MalformedCombo {
                cards: cards.len(),
                positions: positions.len(),
            });
        }
        Ok(Self {
            combo_type,
            cards,
            positions,
        })
    }

    /// The pattern kind.
    #[must_use]
    pub fn combo_type(&self) -> ComboType {
        self.combo_type
    }

    /// The cards making up the pattern.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The board positions of the cards, in the same order.
    #[must_use]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Number of cards in the pattern.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Stars awarded on claim: zero for `Clearing`, otherwise the card count.
    #[must_use]
    pub fn reward_stars(&self) -> u32 {
        match self.combo_type {
            ComboType::Clearing => 0,
            _ => self.cards.len() as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CardColor, CardId, CardValue};

    fn card(id: u32, value: u8) -> Card {
        Card::new(
            CardId::new(id),
            CardValue::of(value).unwrap(),
            CardColor::Red,
        )
    }

    fn pos(row: u8, col: u8) -> Position {
        Position::of(row, col).unwrap()
    }

    #[test]
    fn test_construction_requires_length_parity() {
        let err = Combo::new(
            ComboType::TwoCards1_4,
            vec![card(0, 1), card(1, 4)],
            vec![pos(0, 0)],
        )
        .unwrap_err();

        assert_eq!(
            err,
            GameError::MalformedCombo {
                cards: 2,
                positions: 1
            }
        );
    }

    #[test]
    fn test_reward_stars() {
        let two = Combo::new(
            ComboType::TwoCards1_4,
            vec![card(0, 1), card(1, 4)],
            vec![pos(0, 0), pos(0, 1)],
        )
        .unwrap();
        assert_eq!(two.reward_stars(), 2);
        assert_eq!(two.card_count(), 2);

        let three = Combo::new(
            ComboType::ThreeCards,
            vec![card(0, 1), card(1, 4), card(2, 16)],
            vec![pos(0, 0), pos(0, 1), pos(0, 2)],
        )
        .unwrap();
        assert_eq!(three.reward_stars(), 3);

        let clearing = Combo::new(
            ComboType::Clearing,
            vec![card(0, 9), card(1, 9), card(2, 9)],
            vec![pos(0, 0), pos(0, 1), pos(0, 2)],
        )
        .unwrap();
        assert_eq!(clearing.reward_stars(), 0);
        assert_eq!(clearing.card_count(), 3);
    }
}
