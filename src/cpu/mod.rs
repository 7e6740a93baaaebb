//! Automated-opponent turn strategies.
//!
//! A strategy drives one complete CPU turn against the [`Game`] operations:
//! free a cell if the board is full, place a card, detect combos at the
//! placement, roll for a "miss", claim or skip, and end the turn. Variants
//! differ only in selection policy and miss probability.
//!
//! Strategies are constructed with their own [`GameRng`], so a seeded
//! strategy replays identically.

mod easy;
mod normal;

pub use easy::CpuEasyStrategy;
pub use normal::CpuNormalStrategy;

use serde::{Deserialize, Serialize};

use crate::combo::{Combo, ComboType};
use crate::core::{Card, GameError, GameRng, Position};
use crate::game::Game;

/// CPU skill levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Random placement, 20% combo miss rate.
    Easy,
    /// Combo-seeking placement, 5% combo miss rate.
    Normal,
    /// Not implemented yet.
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Normal => write!(f, "Normal"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

/// Everything a CPU turn did, for the driver and narration layers.
#[derive(Clone, Debug)]
pub struct CpuTurnResult {
    /// The card the CPU placed.
    pub placed_card: Card,
    /// Where it was placed.
    pub position: Position,
    /// The cell freed before placement, when the board was full.
    pub removed_position: Option<Position>,
    /// The combo claimed this turn, if any.
    pub claimed_combo: Option<Combo>,
    /// A detected combo the CPU failed to notice, if any.
    pub missed_combo: Option<Combo>,
}

/// One automated turn against the game.
pub trait CpuStrategy: std::fmt::Debug {
    /// Execute a complete turn, including the final [`Game::end_turn`].
    fn execute_turn(&mut self, game: &mut Game) -> Result<CpuTurnResult, GameError>;
}

/// Build the strategy for a difficulty.
///
/// Fails with [`GameError::UnsupportedDifficulty`] at construction time for
/// difficulties that have no implementation, rather than surprising the
/// caller mid-game.
pub fn strategy_for(
    difficulty: Difficulty,
    rng: GameRng,
) -> Result<Box<dyn CpuStrategy>, GameError> {
    match difficulty {
        Difficulty::Easy => Ok(Box::new(CpuEasyStrategy::new(rng))),
        Difficulty::Normal => Ok(Box::new(CpuNormalStrategy::new(rng))),
        Difficulty::Hard => Err(GameError::UnsupportedDifficulty(difficulty)),
    }
}

/// Claim priority: 3-card > 4+9 > 1+4 > clearing.
pub(crate) fn combo_priority(combo_type: ComboType) -> u8 {
    match combo_type {
        ComboType::ThreeCards => 3,
        ComboType::TwoCards4_9 => 2,
        ComboType::TwoCards1_4 => 1,
        ComboType::Clearing => 0,
    }
}

/// The highest-priority combo among those detected, if any.
pub(crate) fn select_by_priority(combos: &[Combo]) -> Option<&Combo> {
    combos
        .iter()
        .max_by_key(|c| combo_priority(c.combo_type()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_difficulty_fails_at_construction() {
        let err = strategy_for(Difficulty::Hard, GameRng::new(1)).unwrap_err();
        assert_eq!(err, GameError::UnsupportedDifficulty(Difficulty::Hard));
    }

    #[test]
    fn test_supported_difficulties_construct() {
        assert!(strategy_for(Difficulty::Easy, GameRng::new(1)).is_ok());
        assert!(strategy_for(Difficulty::Normal, GameRng::new(1)).is_ok());
    }

    #[test]
    fn test_priority_ordering() {
        assert!(combo_priority(ComboType::ThreeCards) > combo_priority(ComboType::TwoCards4_9));
        assert!(combo_priority(ComboType::TwoCards4_9) > combo_priority(ComboType::TwoCards1_4));
        assert!(combo_priority(ComboType::TwoCards1_4) > combo_priority(ComboType::Clearing));
    }
}
