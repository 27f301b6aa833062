//! Rules engine trait.
//!
//! Presenters drive a game through `RulesEngine`:
//! - Which cells the side to move may target
//! - Applying one ply (plus the end-of-game check)
//! - Win/loss conditions

use crate::core::{GameConfig, GameState, MoveRecord, Position};
use crate::error::MoveError;

use super::lines::LineDetector;
use super::outcome::{self, Outcome};

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `check_move`: Must not mutate anything; the legality oracle for
///   `legal_targets` and `is_legal`
/// - `apply_move`: Either applies the whole ply or leaves the state untouched
/// - `try_move`: `apply_move` collapsed to a bool for simple input loops
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Get the winning line detector.
    fn detector(&self) -> &LineDetector;

    /// Decide whether the side to move may target `pos`.
    fn check_move(&self, state: &GameState, pos: Position) -> Result<(), MoveError>;

    /// Validate and apply one ply, advance the phase and run the
    /// end-of-game check.
    fn apply_move(&self, state: &mut GameState, pos: Position) -> Result<MoveRecord, MoveError>;

    // === Convenience Methods ===

    /// Apply a move, reporting only whether it was accepted.
    ///
    /// On `false` the state is unchanged and the caller may ask again.
    fn try_move(&self, state: &mut GameState, pos: Position) -> bool {
        self.apply_move(state, pos).is_ok()
    }

    /// Like `try_move`, for raw coordinates that may be off the board.
    fn try_move_xy(&self, state: &mut GameState, x: i32, y: i32) -> bool {
        match Position::new(x, y) {
            Ok(pos) => self.try_move(state, pos),
            Err(_) => false,
        }
    }

    /// Check if the side to move may target `pos`.
    fn is_legal(&self, state: &GameState, pos: Position) -> bool {
        self.check_move(state, pos).is_ok()
    }

    /// Every cell the side to move may target, row by row.
    ///
    /// Free cells in a placement phase, occupied cells in the removal phase,
    /// nothing once the game is over.
    fn legal_targets(&self, state: &GameState) -> Vec<Position> {
        Position::all().filter(|&pos| self.is_legal(state, pos)).collect()
    }

    /// Re-derive the result from the stored cell sets.
    ///
    /// Returns `None` if the game continues.
    fn outcome(&self, state: &GameState) -> Option<Outcome> {
        outcome::evaluate(self.detector(), state)
    }
}
