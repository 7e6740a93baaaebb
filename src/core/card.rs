//! Card value objects and the card entity.
//!
//! A `Card` is an immutable entity: once created, its value and color never
//! change, and equality is by `CardId` alone. Two cards with the same value
//! and color are still distinct entities — the deck contains eight copies of
//! each value/color combination, and every copy has its own id.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card.
///
/// Ids are allocated sequentially by [`crate::deck::Deck::create_initial_deck`].
/// Tests that need standalone cards may pick ids outside the 0..64 range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// One of the two card colors.
///
/// Combos only ever form between cards of the same color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardColor {
    Red,
    Blue,
}

impl CardColor {
    /// Both colors, in deck-construction order.
    #[must_use]
    pub const fn all() -> [CardColor; 2] {
        [CardColor::Red, CardColor::Blue]
    }
}

impl std::fmt::Display for CardColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardColor::Red => write!(f, "Red"),
            CardColor::Blue => write!(f, "Blue"),
        }
    }
}

/// One of the four card values: 1, 4, 9 or 16.
///
/// The values are chosen so that the scoring targets are Fibonacci numbers:
/// 1+4 = 5, 4+9 = 13, 1+4+16 = 21.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CardValue {
    One,
    Four,
    Nine,
    Sixteen,
}

impl CardValue {
    /// All values, ascending.
    #[must_use]
    pub const fn all() -> [CardValue; 4] {
        [
            CardValue::One,
            CardValue::Four,
            CardValue::Nine,
            CardValue::Sixteen,
        ]
    }

    /// Construct from a raw numeric value.
    ///
    /// Returns `None` for anything other than 1, 4, 9 or 16.
    #[must_use]
    pub const fn of(value: u8) -> Option<Self> {
        match value {
            1 => Some(CardValue::One),
            4 => Some(CardValue::Four),
            9 => Some(CardValue::Nine),
            16 => Some(CardValue::Sixteen),
            _ => None,
        }
    }

    /// The numeric value of the card.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            CardValue::One => 1,
            CardValue::Four => 4,
            CardValue::Nine => 9,
            CardValue::Sixteen => 16,
        }
    }
}

impl std::fmt::Display for CardValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// An immutable card: identity, value, color.
///
/// Equality and hashing use only `id`, so a card can be tracked through
/// hand/board/discard moves regardless of how many same-valued copies exist.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    value: CardValue,
    color: CardColor,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(id: CardId, value: CardValue, color: CardColor) -> Self {
        Self { id, value, color }
    }

    /// The card's unique id.
    #[must_use]
    pub const fn id(self) -> CardId {
        self.id
    }

    /// The card's numeric value.
    #[must_use]
    pub const fn value(self) -> CardValue {
        self.value
    }

    /// The card's color.
    #[must_use]
    pub const fn color(self) -> CardColor {
        self.color
    }

    /// Whether two cards share a color.
    #[must_use]
    pub fn is_same_color(self, other: Card) -> bool {
        self.color == other.color
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Card {}

impl std::hash::Hash for Card {
    fn hash<H: std::hash::Hasher>(&self, hasher: &mut H) {
        self.id.hash(hasher);
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.color, self.value)
    }
}
