//! Error taxonomy for the game core.
//!
//! All failures are synchronous and fail-fast at the violation point. The
//! core never catches or retries; callers handle errors at the action
//! boundary. Two deliberate non-errors live outside this taxonomy:
//! discarding from an empty board cell is a no-op, and claiming a combo on a
//! finished game returns `false`.

use thiserror::Error;

use crate::cpu::Difficulty;

/// Everything that can go wrong in the game core.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// Operation attempted after the game finished.
    #[error("game is already finished")]
    InvalidState,

    /// A card placement targeted an occupied cell.
    #[error("position is not empty")]
    OccupiedPosition,

    /// A card was required but the deck was exhausted.
    #[error("no cards left to draw")]
    EmptyResource,

    /// Combo construction with mismatched card/position array lengths.
    #[error("combo has {cards} cards but {positions} positions")]
    MalformedCombo { cards: usize, positions: usize },

    /// A card was not where the operation expected it (hand removal).
    #[error("card not found in hand")]
    NotFound,

    /// Coordinates outside the 3×3 grid.
    #[error("position ({row}, {col}) is outside the 3x3 board")]
    OutOfBounds { row: u8, col: u8 },

    /// A CPU difficulty with no strategy implementation.
    #[error("no strategy implemented for {0} difficulty")]
    UnsupportedDifficulty(Difficulty),
}
