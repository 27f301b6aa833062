//! Move processing for Tres, Uno, Dos.

use tracing::{debug, info, instrument, trace};

use crate::core::{
    GameConfig, GameState, MoveKind, MoveRecord, PatternSet, Phase, Position, WinPattern,
};
use crate::error::MoveError;
use crate::rules::{LineDetector, RulesEngine};

/// The rules of one game variant.
///
/// Holds only configuration; every game's mutable data lives in its own
/// `GameState`, so one `Game` can drive any number of states.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    detector: LineDetector,
}

/// Builder for creating a Game.
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: GameConfig,
}

impl GameBuilder {
    /// Start from the canonical lines.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use one of the built-in line lists.
    #[must_use]
    pub fn preset(mut self, preset: PatternSet) -> Self {
        self.config = GameConfig::from_preset(preset);
        self
    }

    /// Use an explicit line list.
    #[must_use]
    pub fn patterns(mut self, patterns: Vec<WinPattern>) -> Self {
        self.config = self.config.with_patterns(patterns);
        self
    }

    /// Build the rules and a fresh starting state.
    #[must_use]
    pub fn build(self) -> (Game, GameState) {
        (Game::new(self.config), GameState::new())
    }
}

/// Start a game with the canonical lines.
#[must_use]
pub fn new_game() -> (Game, GameState) {
    GameBuilder::new().build()
}

impl Game {
    /// Create the rules for a configuration.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let detector = LineDetector::from_config(&config);
        Self { config, detector }
    }

    /// Start building a game.
    #[must_use]
    pub fn builder() -> GameBuilder {
        GameBuilder::new()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl RulesEngine for Game {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn detector(&self) -> &LineDetector {
        &self.detector
    }

    fn check_move(&self, state: &GameState, pos: Position) -> Result<(), MoveError> {
        if state.is_terminal() {
            return Err(MoveError::GameOver);
        }

        match state.phase() {
            Phase::SecondPlaces | Phase::FirstPlaces => {
                if state.is_free(pos) {
                    Ok(())
                } else {
                    Err(MoveError::CellNotFree(pos))
                }
            }
            Phase::ThirdRemoves => {
                if state.owner_of(pos).is_some() {
                    Ok(())
                } else {
                    Err(MoveError::CellNotOccupied(pos))
                }
            }
        }
    }

    /// Targets come straight from the cell sets, row-major.
    fn legal_targets(&self, state: &GameState) -> Vec<Position> {
        if state.is_terminal() {
            return Vec::new();
        }
        match state.phase() {
            Phase::SecondPlaces | Phase::FirstPlaces => state.free().sorted(),
            Phase::ThirdRemoves => state.occupied().sorted(),
        }
    }

    #[instrument(level = "debug", skip(self, state), fields(phase = ?state.phase()))]
    fn apply_move(&self, state: &mut GameState, pos: Position) -> Result<MoveRecord, MoveError> {
        if let Err(err) = self.check_move(state, pos) {
            trace!(%pos, %err, "Move rejected");
            return Err(err);
        }

        let role = state.to_move();
        let kind = match state.phase() {
            Phase::SecondPlaces | Phase::FirstPlaces => {
                state.place(role, pos);
                MoveKind::Place
            }
            Phase::ThirdRemoves => match state.take_back(pos) {
                Some(owner) => MoveKind::Remove { owner },
                None => return Err(MoveError::CellNotOccupied(pos)),
            },
        };

        let ply = state.next_ply();
        let record = MoveRecord::new(ply, role, pos, kind);
        state.record_move(record);
        state.advance_phase();
        debug_assert!(state.partition_holds(), "cell sets no longer partition the board");

        debug!(%record, next = %state.to_move(), "Move applied");

        if let Some(outcome) = self.outcome(state) {
            let line = state
                .pieces(outcome.winner())
                .and_then(|pieces| self.detector.completed_line(pieces));
            info!(%outcome, ply, line = ?line.map(|l| l.name.as_str()), "Game over");
            state.finish(outcome);
        }

        Ok(record)
    }
}
