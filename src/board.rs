//! The 3×3 placement board.

use serde::{Deserialize, Serialize};

use crate::core::{Card, GameError, Position};

/// The 3×3 board, mapping each position to at most one card.
///
/// Cells are stored row-major. The board owns its cards exclusively while
/// they sit on it; placement and removal transfer ownership.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Card>; 9],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a card on an empty cell.
    ///
    /// Fails with [`GameError::OccupiedPosition`] if the cell is taken.
    pub fn place_card(&mut self, card: Card, position: Position) -> Result<(), GameError> {
        let cell = &mut self.cells[position.index()];
        if cell.is_some() {
            return Err(GameError::OccupiedPosition);
        }
        *cell = Some(card);
        Ok(())
    }

    /// Detach and return the card at `position`.
    ///
    /// Returns `None` if the cell was already empty; that is not an error.
    pub fn remove_card(&mut self, position: Position) -> Option<Card> {
        self.cells[position.index()].take()
    }

    /// The card at `position`, if any.
    #[must_use]
    pub fn get_card(&self, position: Position) -> Option<Card> {
        self.cells[position.index()]
    }

    /// Whether the cell at `position` is empty.
    #[must_use]
    pub fn is_empty(&self, position: Position) -> bool {
        self.cells[position.index()].is_none()
    }

    /// Whether all nine cells are occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// All occupied positions in row-major order.
    pub fn occupied_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(|p| !self.is_empty(*p))
    }

    /// All empty positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(|p| self.is_empty(*p))
    }
}
