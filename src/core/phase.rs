//! Turn phases.
//!
//! Play cycles through three phases in a fixed order:
//!
//! | Phase          | Actor | Action                          |
//! |----------------|-------|---------------------------------|
//! | `SecondPlaces` | Tres  | place on a free cell            |
//! | `FirstPlaces`  | Uno   | place on a free cell            |
//! | `ThirdRemoves` | Dos   | take any placed piece back off  |
//!
//! A new game starts in `SecondPlaces`.

use serde::{Deserialize, Serialize};

use super::role::Role;

/// Which role is entitled to move next.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Tres places a piece.
    #[default]
    SecondPlaces,
    /// Uno places a piece.
    FirstPlaces,
    /// Dos removes a piece.
    ThirdRemoves,
}

impl Phase {
    /// The role that moves in this phase.
    #[must_use]
    pub const fn actor(self) -> Role {
        match self {
            Phase::SecondPlaces => Role::Tres,
            Phase::FirstPlaces => Role::Uno,
            Phase::ThirdRemoves => Role::Dos,
        }
    }

    /// The phase that follows an accepted move.
    #[must_use]
    pub const fn next(self) -> Phase {
        match self {
            Phase::SecondPlaces => Phase::FirstPlaces,
            Phase::FirstPlaces => Phase::ThirdRemoves,
            Phase::ThirdRemoves => Phase::SecondPlaces,
        }
    }

    /// Check if the move in this phase puts a piece on the board.
    #[must_use]
    pub const fn is_placement(self) -> bool {
        !matches!(self, Phase::ThirdRemoves)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_placement() {
            write!(f, "{}'s turn (place a piece)", self.actor())
        } else {
            write!(f, "{}' turn (remove a U or T piece)", self.actor())
        }
    }
}
