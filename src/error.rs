//! Error types for the rules engine.

use thiserror::Error;

use crate::core::Position;

/// Why a move was rejected.
///
/// Every variant is recoverable: the state is left untouched and the caller
/// may simply ask for another position.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum MoveError {
    #[error("position ({x}, {y}) is off the board (coordinates must be 1-4)")]
    OutOfRange { x: i32, y: i32 },

    #[error("cell {0} is not free")]
    CellNotFree(Position),

    #[error("cell {0} holds no piece to remove")]
    CellNotOccupied(Position),

    #[error("game already over")]
    GameOver,
}
