//! The draw deck.
//!
//! The full game uses a single 64-card deck: 4 values × 2 colors × 8 copies,
//! each copy with its own identity. The deck is shuffled exactly once, at
//! game start, with the game's injected [`GameRng`].

use serde::{Deserialize, Serialize};

use crate::core::{Card, CardColor, CardId, CardValue, GameRng};

/// Total number of cards ever created for one game.
pub const DECK_SIZE: usize = 64;

/// Copies of each value/color combination in the initial deck.
const COPIES_PER_COMBINATION: usize = 8;

/// An ordered sequence of cards. The "top" is the end of the vector.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build the full 64-card deck in deterministic construction order.
    ///
    /// Card ids are allocated sequentially from 0, so every card in a game
    /// has a unique identity.
    #[must_use]
    pub fn create_initial_deck() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        let mut next_id = 0u32;

        for value in CardValue::all() {
            for color in CardColor::all() {
                for _ in 0..COPIES_PER_COMBINATION {
                    cards.push(Card::new(CardId::new(next_id), value, color));
                    next_id += 1;
                }
            }
        }

        Self { cards }
    }

    /// Create a deck from an explicit card sequence. The last card is the top.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffle the deck in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Remove and return the top card, or `None` if the deck is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// The top card without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Whether the deck has no cards left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards remaining.
    #[must_use]
    pub fn count(&self) -> usize {
        self.cards.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_initial_deck_composition() {
        let deck = Deck::create_initial_deck();
        assert_eq!(deck.count(), DECK_SIZE);

        let ids: HashSet<_> = deck.cards.iter().map(|c| c.id()).collect();
        assert_eq!(ids.len(), DECK_SIZE, "card ids must be unique");

        for value in CardValue::all() {
            for color in CardColor::all() {
                let copies = deck
                    .cards
                    .iter()
                    .filter(|c| c.value() == value && c.color() == color)
                    .count();
                assert_eq!(copies, 8, "{color} {value} should have 8 copies");
            }
        }
    }

    #[test]
    fn test_draw_and_peek() {
        let mut deck = Deck::create_initial_deck();
        let top = deck.peek().unwrap();
        let drawn = deck.draw().unwrap();

        assert_eq!(top, drawn);
        assert_eq!(deck.count(), DECK_SIZE - 1);
    }

    #[test]
    fn test_draw_from_empty_is_none() {
        let mut deck = Deck::from_cards(vec![]);
        assert!(deck.is_empty());
        assert_eq!(deck.draw(), None);
        assert_eq!(deck.peek(), None);
    }

    #[test]
    fn test_shuffle_is_seeded() {
        let mut deck1 = Deck::create_initial_deck();
        let mut deck2 = Deck::create_initial_deck();

        deck1.shuffle(&mut GameRng::new(7));
        deck2.shuffle(&mut GameRng::new(7));
        assert_eq!(deck1.cards, deck2.cards);

        let mut deck3 = Deck::create_initial_deck();
        deck3.shuffle(&mut GameRng::new(8));
        assert_ne!(deck1.cards, deck3.cards);
    }

    #[test]
    fn test_shuffle_preserves_cards() {
        let mut deck = Deck::create_initial_deck();
        deck.shuffle(&mut GameRng::new(42));

        assert_eq!(deck.count(), DECK_SIZE);
        let ids: HashSet<_> = deck.cards.iter().map(|c| c.id()).collect();
        assert_eq!(ids.len(), DECK_SIZE);
    }
}
