//! A player's private unplayed cards.

use serde::{Deserialize, Serialize};

use crate::core::{Card, GameError};

/// An unordered collection of cards, keyed by card identity.
///
/// Card identities are unique across a game, so the hand never needs to
/// disambiguate equal-looking cards.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove a card by identity.
    ///
    /// Fails with [`GameError::NotFound`] if the card is not in the hand.
    pub fn remove_card(&mut self, card: Card) -> Result<Card, GameError> {
        let index = self
            .cards
            .iter()
            .position(|c| *c == card)
            .ok_or(GameError::NotFound)?;
        Ok(self.cards.swap_remove(index))
    }

    /// Whether the hand holds any cards.
    #[must_use]
    pub fn has_cards(&self) -> bool {
        !self.cards.is_empty()
    }

    /// Number of cards held.
    #[must_use]
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// An independent snapshot of the hand's cards.
    ///
    /// Mutating the returned vector does not affect the hand.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        self.cards.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CardColor, CardId, CardValue};

    fn card(id: u32) -> Card {
        Card::new(CardId::new(id), CardValue::Four, CardColor::Blue)
    }

    #[test]
    fn test_add_and_remove() {
        let mut hand = Hand::new();
        hand.add_card(card(0));
        hand.add_card(card(1));
        assert_eq!(hand.count(), 2);

        let removed = hand.remove_card(card(0)).unwrap();
        assert_eq!(removed, card(0));
        assert_eq!(hand.count(), 1);
    }

    #[test]
    fn test_remove_absent_card_fails() {
        let mut hand = Hand::new();
        hand.add_card(card(0));

        assert_eq!(hand.remove_card(card(5)).unwrap_err(), GameError::NotFound);
        assert_eq!(hand.count(), 1);
    }

    #[test]
    fn test_remove_twice_fails() {
        let mut hand = Hand::new();
        hand.add_card(card(0));
        hand.remove_card(card(0)).unwrap();

        assert_eq!(hand.remove_card(card(0)).unwrap_err(), GameError::NotFound);
    }

    #[test]
    fn test_has_cards() {
        let mut hand = Hand::new();
        assert!(!hand.has_cards());
        hand.add_card(card(0));
        assert!(hand.has_cards());
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut hand = Hand::new();
        hand.add_card(card(0));

        let mut snapshot = hand.cards();
        snapshot.clear();

        assert_eq!(hand.count(), 1);
    }
}
