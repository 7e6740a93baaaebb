//! Player identity and per-player state.

use serde::{Deserialize, Serialize};

use crate::core::{Card, GameError};
use crate::hand::Hand;

/// Identifier for one of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID. Index 0 is the first player.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// A player: identity, hand, and accumulated score stars.
///
/// Stars only ever increase within a game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    hand: Hand,
    stars: u32,
}

impl Player {
    /// Create a player with an empty hand and no stars.
    #[must_use]
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            hand: Hand::new(),
            stars: 0,
        }
    }

    /// The player's id.
    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// The player's hand.
    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Accumulated score stars.
    #[must_use]
    pub fn stars(&self) -> u32 {
        self.stars
    }

    /// Remove a card from the hand by identity and return it.
    ///
    /// Fails with [`GameError::NotFound`] if the card is not held.
    pub fn play_card(&mut self, card: Card) -> Result<Card, GameError> {
        self.hand.remove_card(card)
    }

    /// Add a card to the hand.
    pub fn draw_to_hand(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// Award stars.
    pub fn add_stars(&mut self, stars: u32) {
        self.stars += stars;
    }
}
