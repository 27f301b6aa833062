//! Rules: line detection, end-of-game evaluation and the engine trait.
//!
//! `game::Game` implements `RulesEngine` with the move rules; presenters
//! only ever talk to the trait.

pub mod engine;
pub mod lines;
pub mod outcome;

pub use engine::RulesEngine;
pub use lines::LineDetector;
pub use outcome::{evaluate, Outcome};
