//! The Normal CPU: combo-seeking placement, 5% combo miss rate.
//!
//! Placement policy:
//! 1. Simulate every (hand card, empty cell) pairing and prefer the one
//!    whose placement yields the highest-priority detectable combo.
//! 2. With no combo available, fall back to a fixed value priority
//!    (16 > 9 > 1 > 4) and a random empty cell.
//!
//! When the board is full, the freed cell is chosen to avoid discarding
//! cards that could still pair with the hand toward a pending combo.

use tracing::debug;

use super::{combo_priority, select_by_priority, CpuStrategy, CpuTurnResult};
use crate::core::{Card, CardValue, GameError, GameRng, Position};
use crate::detector::ComboDetector;
use crate::game::Game;

const MISS_PROBABILITY: f64 = 0.05;

/// Hand-card placement preference when no combo is reachable.
const VALUE_PRIORITY: [CardValue; 4] = [
    CardValue::Sixteen,
    CardValue::Nine,
    CardValue::One,
    CardValue::Four,
];

/// Prefers placements that complete a combo; misses one combo in twenty.
#[derive(Clone, Debug)]
pub struct CpuNormalStrategy {
    detector: ComboDetector,
    rng: GameRng,
}

impl CpuNormalStrategy {
    /// Create the strategy with its own RNG.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self {
            detector: ComboDetector::new(),
            rng,
        }
    }

    /// Pick the occupied cell whose card is least useful to the hand.
    ///
    /// A board card is still useful when some hand card of the same color
    /// could pair or triple with it toward a target. Cells holding useless
    /// cards are discarded first; if every card is useful, any cell goes.
    fn select_discard_position(&mut self, game: &Game) -> Option<Position> {
        let hand = game.current_player().hand().cards();
        let occupied: Vec<Position> = game.board().occupied_positions().collect();

        let expendable: Vec<Position> = occupied
            .iter()
            .copied()
            .filter(|&position| {
                game.board()
                    .get_card(position)
                    .map_or(true, |card| !hand.iter().any(|h| could_combine(*h, card)))
            })
            .collect();

        if expendable.is_empty() {
            self.rng.choose(&occupied).copied()
        } else {
            self.rng.choose(&expendable).copied()
        }
    }

    /// Find the (card, cell) pairing whose placement detects the best combo.
    fn best_combo_placement(&self, game: &Game) -> Option<(Card, Position)> {
        let hand = game.current_player().hand().cards();
        let empty: Vec<Position> = game.board().empty_positions().collect();

        let mut best: Option<(u8, usize, Card, Position)> = None;
        for &card in &hand {
            for &position in &empty {
                let mut board = game.board().clone();
                if board.place_card(card, position).is_err() {
                    continue;
                }
                let detected = self.detector.detect_combos(&board, position);
                let Some(combo) = select_by_priority(&detected) else {
                    continue;
                };

                let score = (combo_priority(combo.combo_type()), combo.card_count());
                if best
                    .as_ref()
                    .map_or(true, |(p, c, _, _)| score > (*p, *c))
                {
                    best = Some((score.0, score.1, card, position));
                }
            }
        }

        best.map(|(_, _, card, position)| (card, position))
    }

    /// Fallback: highest-priority value in hand, random empty cell.
    fn fallback_placement(&mut self, game: &Game) -> Option<(Card, Position)> {
        let hand = game.current_player().hand().cards();
        let empty: Vec<Position> = game.board().empty_positions().collect();
        let position = self.rng.choose(&empty).copied()?;

        for value in VALUE_PRIORITY {
            if let Some(card) = hand.iter().find(|c| c.value() == value) {
                return Some((*card, position));
            }
        }
        None
    }
}

impl CpuStrategy for CpuNormalStrategy {
    fn execute_turn(&mut self, game: &mut Game) -> Result<CpuTurnResult, GameError> {
        let mut removed_position = None;
        if game.board().is_full() {
            if let Some(position) = self.select_discard_position(game) {
                game.discard_from_board(position);
                removed_position = Some(position);
            }
        }

        let choice = self
            .best_combo_placement(game)
            .or_else(|| self.fallback_placement(game));

        let (placed_card, position) = match choice {
            Some((card, position)) => {
                let card = game.current_player_mut().play_card(card)?;
                game.place_card(card, position)?;
                (card, position)
            }
            None => {
                // Empty hand: draw straight onto a random empty cell.
                let empty: Vec<Position> = game.board().empty_positions().collect();
                let position = self
                    .rng
                    .choose(&empty)
                    .copied()
                    .ok_or(GameError::OccupiedPosition)?;
                let card = game.draw_and_place_card(position)?;
                (card, position)
            }
        };

        let detected = self.detector.detect_combos(game.board(), position);
        let selected = select_by_priority(&detected).cloned();

        let mut claimed_combo = None;
        let mut missed_combo = None;
        if let Some(combo) = selected {
            if self.rng.gen_bool(MISS_PROBABILITY) {
                debug!(combo = %combo.combo_type(), "normal CPU missed a combo");
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

/// Whether two same-colored cards could still participate in one target.
fn could_combine(a: Card, b: Card) -> bool {
    if !a.is_same_color(b) {
        return false;
    }
    let (x, y) = (a.value().as_u8(), b.value().as_u8());
    let (lo, hi) = if x <= y { (x, y) } else { (y, x) };

    // Pair targets, the 1+4+16 triple's members, or a clearing pair.
    matches!((lo, hi), (1, 4) | (4, 9) | (1, 16) | (4, 16)) || lo == hi
}
