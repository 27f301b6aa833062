//! Tres, Uno, Dos.
//!
//! A three-role game on the fixed 4×4 grid:
//! - Tres and Uno take turns placing pieces on free cells
//! - After every Uno placement, Dos takes one placed piece back off
//! - A placer who owns a complete winning line wins
//! - Dos wins if the board fills up with no line
//!
//! Turn order is Tres, Uno, Dos, Tres, ...

mod processor;

pub use processor::{new_game, Game, GameBuilder};
