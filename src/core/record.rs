//! Move records for game history.
//!
//! Every accepted ply produces a `MoveRecord`. Placements name the placer;
//! removals also name whose piece was taken off.

use serde::{Deserialize, Serialize};

use super::position::Position;
use super::role::Role;

/// What a ply did to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// A piece went onto a free cell.
    Place,
    /// The piece owned by the given role was returned to the free cells.
    Remove { owner: Role },
}

/// A single accepted ply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Ply number, starting at 1.
    pub ply: u32,

    /// The role that moved.
    pub role: Role,

    /// Target cell.
    pub position: Position,

    /// Placement or removal.
    pub kind: MoveKind,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(ply: u32, role: Role, position: Position, kind: MoveKind) -> Self {
        Self {
            ply,
            role,
            position,
            kind,
        }
    }
}

impl std::fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            MoveKind::Place => write!(f, "{}. {} places {}", self.ply, self.role, self.position),
            MoveKind::Remove { owner } => write!(
                f,
                "{}. {} removes {}'s piece at {}",
                self.ply, self.role, owner, self.position
            ),
        }
    }
}
