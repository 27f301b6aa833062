//! Coordinate input parsing.
//!
//! Accepts two integers separated by whitespace and/or a comma, optionally
//! in brackets: `2 3`, `2,3`, `[2, 3]`.

use thiserror::Error;

use crate::core::Position;

/// Why a line of input is not a board position.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid input! Please enter coordinates as two numbers (e.g., 1 2).")]
    Malformed,

    #[error("Invalid position! Coordinates must be between 1 and 4.")]
    OutOfRange { x: i32, y: i32 },
}

/// Parse one line of input into a position.
pub fn parse_coordinates(line: &str) -> Result<Position, InputError> {
    let trimmed = line
        .trim()
        .trim_start_matches(['[', '('])
        .trim_end_matches([']', ')']);

    let numbers = trimmed
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(str::parse::<i32>)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| InputError::Malformed)?;

    match numbers[..] {
        [x, y] => Position::new(x, y).map_err(|_| InputError::OutOfRange { x, y }),
        _ => Err(InputError::Malformed),
    }
}
