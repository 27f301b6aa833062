//! End-of-game detection.
//!
//! Checked after every accepted ply, in priority order:
//! 1. Uno holds a winning line
//! 2. Tres holds a winning line
//! 3. No free cell is left (Dos wins by exhaustion)
//!
//! A completed line beats exhaustion when both happen on the same ply.

use serde::{Deserialize, Serialize};

use super::lines::LineDetector;
use crate::core::{GameState, Role};

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Uno completed a line.
    UnoWins,
    /// Tres completed a line.
    TresWins,
    /// The board filled up with no line: Dos wins.
    DosWins,
}

impl Outcome {
    /// The winning role.
    #[must_use]
    pub const fn winner(self) -> Role {
        match self {
            Outcome::UnoWins => Role::Uno,
            Outcome::TresWins => Role::Tres,
            Outcome::DosWins => Role::Dos,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} wins", self.winner())
    }
}

/// Evaluate the end conditions against the current sets.
///
/// Returns `None` while the game continues. Does not read or write the
/// terminal flag, so it can be used to re-derive the result at any time.
#[must_use]
pub fn evaluate(detector: &LineDetector, state: &GameState) -> Option<Outcome> {
    if detector.has_line(state.uno()) {
        Some(Outcome::UnoWins)
    } else if detector.has_line(state.tres()) {
        Some(Outcome::TresWins)
    } else if state.free().is_empty() {
        Some(Outcome::DosWins)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Position;

    fn pos(x: i32, y: i32) -> Position {
        Position::new(x, y).unwrap()
    }

    #[test]
    fn test_outcome_winner() {
        assert_eq!(Outcome::UnoWins.winner(), Role::Uno);
        assert_eq!(Outcome::TresWins.winner(), Role::Tres);
        assert_eq!(Outcome::DosWins.winner(), Role::Dos);
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(format!("{}", Outcome::TresWins), "Tres wins");
        assert_eq!(format!("{}", Outcome::DosWins), "Dos wins");
    }

    #[test]
    fn test_fresh_game_continues() {
        assert_eq!(evaluate(&LineDetector::default(), &GameState::new()), None);
    }

    #[test]
    fn test_uno_line() {
        let mut state = GameState::new();
        for y in 1..=4 {
            state.place(Role::Uno, pos(4, y));
        }

        assert_eq!(evaluate(&LineDetector::default(), &state), Some(Outcome::UnoWins));
    }

    #[test]
    fn test_tres_line() {
        let mut state = GameState::new();
        for (x, y) in [(1, 4), (2, 3), (3, 2), (4, 1)] {
            state.place(Role::Tres, pos(x, y));
        }

        assert_eq!(evaluate(&LineDetector::default(), &state), Some(Outcome::TresWins));
    }

    #[test]
    fn test_exhaustion() {
        let mut state = GameState::new();
        // Alternate whole rows so no listed line is owned by one side
        for cell in Position::all() {
            let role = if cell.y() % 2 == 1 { Role::Uno } else { Role::Tres };
            state.place(role, cell);
        }

        assert!(state.free().is_empty());
        assert_eq!(evaluate(&LineDetector::default(), &state), Some(Outcome::DosWins));
    }

    #[test]
    fn test_line_beats_exhaustion() {
        let mut state = GameState::new();
        for cell in Position::all() {
            let role = if cell.x() == 1 { Role::Tres } else { Role::Uno };
            state.place(role, cell);
        }

        // Tres owns the left column, Uno the right column: Uno is checked first
        assert!(state.free().is_empty());
        assert_eq!(evaluate(&LineDetector::default(), &state), Some(Outcome::UnoWins));
    }
}
