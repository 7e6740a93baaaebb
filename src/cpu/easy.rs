//! The Easy CPU: fully random placement, 20% combo miss rate.

use tracing::debug;

use super::{select_by_priority, CpuStrategy, CpuTurnResult};
use crate::core::{Card, GameError, GameRng, Position};
use crate::detector::ComboDetector;
use crate::game::Game;

const MISS_PROBABILITY: f64 = 0.2;

/// Uniformly random card and position choice; misses one combo in five.
#[derive(Clone, Debug)]
pub struct CpuEasyStrategy {
    detector: ComboDetector,
    rng: GameRng,
}

impl CpuEasyStrategy {
    /// Create the strategy with its own RNG.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self {
            detector: ComboDetector::new(),
            rng,
        }
    }

    fn random_occupied_position(&mut self, game: &Game) -> Option<Position> {
        let occupied: Vec<Position> = game.board().occupied_positions().collect();
        self.rng.choose(&occupied).copied()
    }

    fn random_empty_position(&mut self, game: &Game) -> Option<Position> {
        let empty: Vec<Position> = game.board().empty_positions().collect();
        self.rng.choose(&empty).copied()
    }

    fn random_hand_card(&mut self, game: &Game) -> Option<Card> {
        let cards = game.current_player().hand().cards();
        self.rng.choose(&cards).copied()
    }
}

impl CpuStrategy for CpuEasyStrategy {
    fn execute_turn(&mut self, game: &mut Game) -> Result<CpuTurnResult, GameError> {
        // Full board: free one cell at random before placing.
        let mut removed_position = None;
        if game.board().is_full() {
            if let Some(position) = self.random_occupied_position(game) {
                game.discard_from_board(position);
                removed_position = Some(position);
            }
        }

        let position = self
            .random_empty_position(game)
            .ok_or(GameError::OccupiedPosition)?;

        let placed_card = match self.random_hand_card(game) {
            Some(card) => {
                let card = game.current_player_mut().play_card(card)?;
                game.place_card(card, position)?;
                card
            }
            None => game.draw_and_place_card(position)?,
        };

        let detected = self.detector.detect_combos(game.board(), position);
        let selected = select_by_priority(&detected).cloned();

        let mut claimed_combo = None;
        let mut missed_combo = None;
        if let Some(combo) = selected {
            if self.rng.gen_bool(MISS_PROBABILITY) {
                debug!(combo = %combo.combo_type(), "easy CPU missed a combo");
                missed_combo = Some(combo);
            } else {
                game.claim_combo(&combo);
                claimed_combo = Some(combo);
            }
        }

        game.end_turn();

        Ok(CpuTurnResult {
            placed_card,
            position,
            removed_position,
            claimed_combo,
            missed_combo,
        })
    }
}
