//! # tres-uno-dos
//!
//! Rules engine for Tres, Uno, Dos: a three-role game on a fixed 4×4 grid
//! where two roles place pieces and the third removes them.
//!
//! ## Rules
//!
//! 1. **Turn order**: Tres places, Uno places, Dos removes, repeat.
//!
//! 2. **Placing**: Tres and Uno put a piece on any free cell.
//!
//! 3. **Removing**: Dos returns any placed piece (either side's) to the free
//!    cells.
//!
//! 4. **Winning**: a placer owning every cell of a winning line wins
//!    (Uno is checked before Tres). If the board fills up with no line,
//!    Dos wins.
//!
//! ## Architecture
//!
//! - **Explicit state**: every game is a `GameState` value passed by
//!   reference; there is no global game.
//!
//! - **Typed rejections**: `apply_move` reports why a move was refused;
//!   `try_move` collapses that to a bool. A refused move never changes the
//!   state.
//!
//! - **Configurable lines**: the winning line list is part of `GameConfig`,
//!   with presets for both rule variants in circulation.
//!
//! ## Modules
//!
//! - `core`: Positions, cell sets, roles, phases, configuration, state
//! - `rules`: Winning lines, end-of-game evaluation, `RulesEngine` trait
//! - `game`: The move processor implementing `RulesEngine`
//! - `console`: Terminal rendering and coordinate input
//!
//! ## Example
//!
//! ```
//! use tres_uno_dos::{new_game, Phase, Position, RulesEngine};
//!
//! let (game, mut state) = new_game();
//!
//! assert!(game.try_move(&mut state, Position::new(2, 2).unwrap()));
//! assert_eq!(state.phase(), Phase::FirstPlaces);
//!
//! // (2,2) is taken now
//! assert!(!game.try_move(&mut state, Position::new(2, 2).unwrap()));
//! ```

pub mod core;
pub mod error;
pub mod rules;
pub mod game;
pub mod console;

// Re-export commonly used types
pub use crate::core::{
    Position, PositionSet, GRID_SIZE, CELL_COUNT,
    Role, Phase,
    GameConfig, PatternSet, WinPattern,
    MoveKind, MoveRecord,
    GameState,
};

pub use crate::error::MoveError;

pub use crate::rules::{LineDetector, Outcome, RulesEngine};

pub use crate::game::{new_game, Game, GameBuilder};
