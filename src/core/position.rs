//! Grid coordinates on the 3×3 board.

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// A coordinate on the 3×3 board.
///
/// Rows and columns are both in `0..=2`. Equality is structural.
///
/// ```
/// use stargrid::core::Position;
///
/// let a = Position::of(0, 0).unwrap();
/// let b = Position::of(0, 1).unwrap();
/// assert!(a.is_adjacent_to(b));
/// assert!(Position::of(3, 0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Create a position, validating that both coordinates are in `0..=2`.
    pub fn of(row: u8, col: u8) -> Result<Self, GameError> {
        if row > 2 || col > 2 {
            return Err(GameError::OutOfBounds { row, col });
        }
        Ok(Self { row, col })
    }

    /// The row index (0..=2).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// The column index (0..=2).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// All nine board positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..3u8).flat_map(|row| (0..3u8).map(move |col| Position { row, col }))
    }

    /// Whether two positions are orthogonally adjacent: exactly one of the
    /// row/column deltas is 1 and the other is 0. Diagonals do not count.
    #[must_use]
    pub fn is_adjacent_to(self, other: Position) -> bool {
        let row_diff = self.row.abs_diff(other.row);
        let col_diff = self.col.abs_diff(other.col);
        (row_diff == 1 && col_diff == 0) || (row_diff == 0 && col_diff == 1)
    }

    /// Row-major cell index in `0..9`.
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        (self.row * 3 + self.col) as usize
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
