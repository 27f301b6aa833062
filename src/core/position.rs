//! Grid coordinates.
//!
//! The board is a fixed 4×4 grid addressed with 1-based coordinates:
//! `x` is the column, `y` is the row.
//!
//! ## Usage
//!
//! ```
//! use tres_uno_dos::core::Position;
//!
//! let corner = Position::new(1, 1).unwrap();
//! assert_eq!(corner.x(), 1);
//!
//! // Out of range coordinates are refused
//! assert!(Position::new(0, 3).is_err());
//! assert!(Position::new(2, 5).is_err());
//!
//! assert_eq!(Position::all().count(), 16);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::MoveError;

/// Side length of the board.
pub const GRID_SIZE: u8 = 4;

/// Number of cells on the board.
pub const CELL_COUNT: usize = (GRID_SIZE as usize) * (GRID_SIZE as usize);

/// A cell on the board.
///
/// Instances are always in range: the only constructors are the checked
/// [`Position::new`] and [`Position::all`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(i32, i32)", into = "(i32, i32)")]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Create a position, checking that both coordinates lie in `1..=4`.
    pub fn new(x: i32, y: i32) -> Result<Self, MoveError> {
        if Self::in_range(x) && Self::in_range(y) {
            Ok(Self {
                x: x as u8,
                y: y as u8,
            })
        } else {
            Err(MoveError::OutOfRange { x, y })
        }
    }

    /// Build from coordinates already known to be valid.
    ///
    /// Used for the static pattern tables.
    pub(crate) const fn from_static(x: u8, y: u8) -> Self {
        assert!(x >= 1 && x <= GRID_SIZE && y >= 1 && y <= GRID_SIZE);
        Self { x, y }
    }

    const fn in_range(v: i32) -> bool {
        v >= 1 && v <= GRID_SIZE as i32
    }

    /// Column, 1-based.
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Row, 1-based.
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Row-major cell index in `0..16`.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.y as usize - 1) * GRID_SIZE as usize + (self.x as usize - 1)
    }

    /// Every cell on the board in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (1..=GRID_SIZE).flat_map(|y| (1..=GRID_SIZE).map(move |x| Position { x, y }))
    }
}

impl TryFrom<(i32, i32)> for Position {
    type Error = MoveError;

    fn try_from((x, y): (i32, i32)) -> Result<Self, Self::Error> {
        Self::new(x, y)
    }
}

impl From<Position> for (i32, i32) {
    fn from(pos: Position) -> Self {
        (i32::from(pos.x), i32::from(pos.y))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{},{}]", self.x, self.y)
    }
}
