//! Game state.
//!
//! ## GameState
//!
//! The single mutable aggregate of a game:
//! - Uno's pieces, Tres's pieces and the free cells
//! - The current phase
//! - Terminal flag and, once set, the outcome
//! - Ply counter and move history
//!
//! The three cell sets always partition the 16 cells of the board. Only the
//! rules engine mutates a `GameState`; presenters get read access.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::phase::Phase;
use super::position::{Position, CELL_COUNT};
use super::record::MoveRecord;
use super::role::Role;
use super::set::PositionSet;
use crate::rules::Outcome;

/// Full state of one game.
///
/// Cloning is cheap: the cell sets are inline and the history is a persistent
/// vector.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    uno: PositionSet,
    tres: PositionSet,
    free: PositionSet,
    phase: Phase,
    terminal: bool,
    outcome: Option<Outcome>,
    ply: u32,
    history: Vector<MoveRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Create the starting position.
    ///
    /// ## Defaults
    ///
    /// - every cell free
    /// - `phase`: `SecondPlaces` (Tres moves first)
    /// - not terminal
    #[must_use]
    pub fn new() -> Self {
        Self {
            uno: PositionSet::new(),
            tres: PositionSet::new(),
            free: PositionSet::full_board(),
            phase: Phase::default(),
            terminal: false,
            outcome: None,
            ply: 0,
            history: Vector::new(),
        }
    }

    // === Cell Sets ===

    /// Uno's pieces.
    #[must_use]
    pub fn uno(&self) -> &PositionSet {
        &self.uno
    }

    /// Tres's pieces.
    #[must_use]
    pub fn tres(&self) -> &PositionSet {
        &self.tres
    }

    /// Unoccupied cells.
    #[must_use]
    pub fn free(&self) -> &PositionSet {
        &self.free
    }

    /// The pieces of a placing role. `None` for Dos, who owns no pieces.
    #[must_use]
    pub fn pieces(&self, role: Role) -> Option<&PositionSet> {
        match role {
            Role::Uno => Some(&self.uno),
            Role::Tres => Some(&self.tres),
            Role::Dos => None,
        }
    }

    /// Check if a cell is unoccupied.
    #[must_use]
    pub fn is_free(&self, pos: Position) -> bool {
        self.free.contains(pos)
    }

    /// The role whose piece sits on `pos`, if any.
    #[must_use]
    pub fn owner_of(&self, pos: Position) -> Option<Role> {
        Role::ALL
            .into_iter()
            .find(|&role| self.pieces(role).is_some_and(|pieces| pieces.contains(pos)))
    }

    /// Every cell holding a piece of either side.
    #[must_use]
    pub fn occupied(&self) -> PositionSet {
        let mut cells = self.uno.clone();
        cells.extend(self.tres.iter());
        cells
    }

    /// Check that the three cell sets split the board exactly.
    #[must_use]
    pub fn partition_holds(&self) -> bool {
        self.uno.len() + self.tres.len() + self.free.len() == CELL_COUNT
            && self.uno.is_disjoint(&self.tres)
            && self.uno.is_disjoint(&self.free)
            && self.tres.is_disjoint(&self.free)
    }

    // === Turn ===

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The role entitled to move next.
    #[must_use]
    pub fn to_move(&self) -> Role {
        self.phase.actor()
    }

    /// Check if the game has ended.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// How the game ended. `None` while it continues.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    // === History ===

    /// Number of accepted plies so far.
    #[must_use]
    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// Every accepted ply, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    // === Mutation (rules engine only) ===

    fn pieces_mut(&mut self, role: Role) -> Option<&mut PositionSet> {
        match role {
            Role::Uno => Some(&mut self.uno),
            Role::Tres => Some(&mut self.tres),
            Role::Dos => None,
        }
    }

    /// Move `pos` from the free cells onto `role`'s pieces.
    ///
    /// Caller has checked that `pos` is free. Does nothing for Dos.
    pub(crate) fn place(&mut self, role: Role, pos: Position) {
        debug_assert!(self.is_free(pos), "{pos} is occupied");
        if let Some(pieces) = self.pieces_mut(role) {
            pieces.insert(pos);
            self.free.remove(pos);
        }
    }

    /// Return the piece on `pos` to the free cells.
    ///
    /// Returns the previous owner, or `None` (and changes nothing) if the
    /// cell was empty.
    pub(crate) fn take_back(&mut self, pos: Position) -> Option<Role> {
        let owner = self.owner_of(pos)?;
        if let Some(pieces) = self.pieces_mut(owner) {
            pieces.remove(pos);
        }
        self.free.insert(pos);
        Some(owner)
    }

    /// Move on to the next phase.
    pub(crate) fn advance_phase(&mut self) {
        self.phase = self.phase.next();
    }

    /// Get the next ply number and increment.
    pub(crate) fn next_ply(&mut self) -> u32 {
        self.ply += 1;
        self.ply
    }

    /// Record an accepted ply in history.
    pub(crate) fn record_move(&mut self, record: MoveRecord) {
        self.history.push_back(record);
    }

    /// Mark the game as over.
    pub(crate) fn finish(&mut self, outcome: Outcome) {
        self.terminal = true;
        self.outcome = Some(outcome);
    }
}
