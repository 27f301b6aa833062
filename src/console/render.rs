//! Board and status rendering.
//!
//! Output layout:
//!
//! ```text
//!       GAME GRID
//!
//!     1   2   3   4
//! 1  [T] [ ] [ ] [ ]
//!
//! 2  [ ] [U] [ ] [ ]
//! ...
//!
//! Game Status: Dos' turn (remove a U or T piece)
//!
//! Removable positions: [1,1] [2,2]
//! ```
//!
//! Columns are `x`, rows are `y`.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};

use crate::core::{GameState, Position, Role, GRID_SIZE};
use crate::rules::RulesEngine;

/// Free cells listed per line in placement phases.
const TARGETS_PER_LINE: usize = 8;

/// Writes the board, status line and legal targets.
#[derive(Clone, Copy, Debug)]
pub struct Renderer {
    color: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self { color: true }
    }
}

impl Renderer {
    /// Create a renderer. With `color` off the output is plain text.
    #[must_use]
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Render the whole view.
    pub fn render<W: Write>(
        &self,
        out: &mut W,
        game: &impl RulesEngine,
        state: &GameState,
    ) -> io::Result<()> {
        self.render_grid(out, state)?;
        self.render_status(out, state)?;
        if !state.is_terminal() {
            self.render_targets(out, game, state)?;
        }
        Ok(())
    }

    fn render_grid<W: Write>(&self, out: &mut W, state: &GameState) -> io::Result<()> {
        writeln!(out, "      GAME GRID")?;
        writeln!(out)?;

        write!(out, "    ")?;
        for x in 1..=GRID_SIZE {
            write!(out, "{}   ", x)?;
        }
        writeln!(out)?;

        let cells: Vec<Position> = Position::all().collect();
        for (row, cells) in cells.chunks(GRID_SIZE as usize).enumerate() {
            write!(out, "{}  ", row + 1)?;
            for &pos in cells {
                let cell = match state.owner_of(pos) {
                    Some(owner) => self.paint(&format!("[{}]", owner.marker().unwrap_or('?')), owner),
                    None => "[ ]".to_string(),
                };
                write!(out, "{} ", cell)?;
            }
            writeln!(out)?;
            writeln!(out)?;
        }
        Ok(())
    }

    fn render_status<W: Write>(&self, out: &mut W, state: &GameState) -> io::Result<()> {
        write!(out, "\nGame Status: ")?;
        match state.outcome() {
            Some(outcome) => writeln!(out, "Game Over - {} Wins!", outcome.winner()),
            None => {
                let phase = state.phase();
                writeln!(out, "{}", self.paint(&phase.to_string(), phase.actor()))
            }
        }
    }

    fn render_targets<W: Write>(
        &self,
        out: &mut W,
        game: &impl RulesEngine,
        state: &GameState,
    ) -> io::Result<()> {
        let targets = game.legal_targets(state);

        if state.phase().is_placement() {
            writeln!(out, "\nAvailable positions: ")?;
            for chunk in targets.chunks(TARGETS_PER_LINE) {
                let line: Vec<_> = chunk.iter().map(ToString::to_string).collect();
                writeln!(out, "{}", line.join(" "))?;
            }
            writeln!(out)
        } else {
            write!(out, "\nRemovable positions: ")?;
            if targets.is_empty() {
                write!(out, "None")?;
            } else {
                let line: Vec<_> = targets.iter().map(ToString::to_string).collect();
                write!(out, "{}", line.join(" "))?;
            }
            writeln!(out)
        }
    }

    fn paint(&self, text: &str, role: Role) -> String {
        if !self.color {
            return text.to_string();
        }
        match role {
            Role::Uno => text.magenta().bold().to_string(),
            Role::Tres => text.blue().bold().to_string(),
            Role::Dos => text.red().bold().to_string(),
        }
    }
}

/// Clear the terminal and home the cursor.
pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))
}
