//! Core types: positions, cell sets, roles, phases, configuration, state.
//!
//! These are the building blocks the rules operate on. None of them knows
//! the move rules; `rules` and `game` supply those.

pub mod position;
pub mod set;
pub mod role;
pub mod phase;
pub mod config;
pub mod record;
pub mod state;

pub use position::{Position, CELL_COUNT, GRID_SIZE};
pub use set::PositionSet;
pub use role::Role;
pub use phase::Phase;
pub use config::{GameConfig, PatternSet, WinPattern, LINE_LENGTH};
pub use record::{MoveKind, MoveRecord};
pub use state::GameState;
