//! Terminal front end.
//!
//! A thin shell around `RulesEngine`: it renders the state, reads one
//! coordinate pair per line and feeds it to the engine. It holds no rules of
//! its own.

pub mod input;
pub mod render;

pub use input::{parse_coordinates, InputError};
pub use render::{clear_screen, Renderer};

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::core::GameState;
use crate::rules::{Outcome, RulesEngine};

/// Console behaviour switches.
#[derive(Clone, Copy, Debug)]
pub struct ConsoleOptions {
    /// Clear the terminal before each redraw, pausing after error messages
    /// so they can be read.
    pub clear_screen: bool,

    /// Colour the pieces and status line.
    pub color: bool,
}

impl Default for ConsoleOptions {
    fn default() -> Self {
        Self {
            clear_screen: true,
            color: true,
        }
    }
}

/// Play one game on the given streams.
///
/// Returns the outcome once the game ends, or `None` if input runs out first.
pub fn run<R, W>(
    game: &impl RulesEngine,
    state: &mut GameState,
    input: &mut R,
    out: &mut W,
    options: ConsoleOptions,
) -> io::Result<Option<Outcome>>
where
    R: BufRead,
    W: Write,
{
    let renderer = Renderer::new(options.color);
    let mut line = String::new();

    while !state.is_terminal() {
        if options.clear_screen {
            clear_screen(out)?;
        }
        renderer.render(out, game, state)?;

        write!(out, "Enter coordinates (x y): ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("Input closed before the game ended");
            return Ok(None);
        }

        let message = match parse_coordinates(&line) {
            Ok(pos) => match game.apply_move(state, pos) {
                Ok(_) => continue,
                Err(err) => {
                    debug!(%err, "Move refused");
                    "Invalid move! Try again.".to_string()
                }
            },
            Err(err) => {
                warn!(input = line.trim(), "Unparseable coordinates");
                err.to_string()
            }
        };

        writeln!(out, "\n{}", message)?;
        if options.clear_screen && !pause(input, out)? {
            return Ok(None);
        }
    }

    if options.clear_screen {
        clear_screen(out)?;
    }
    renderer.render(out, game, state)?;
    Ok(state.outcome())
}

/// Closing message once the session ends.
///
/// Prints nothing if the game was abandoned. With screen clearing on, waits
/// for Enter so the final board stays visible.
pub fn farewell<R, W>(
    input: &mut R,
    out: &mut W,
    outcome: Option<Outcome>,
    options: ConsoleOptions,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    if outcome.is_none() {
        return Ok(());
    }

    if options.clear_screen {
        write!(out, "\nGame Over! Press Enter to exit...")?;
        out.flush()?;
        let mut discard = String::new();
        input.read_line(&mut discard)?;
    } else {
        writeln!(out, "\nGame Over! Thanks for playing.")?;
    }
    Ok(())
}

/// Wait for Enter. Returns false if input is closed.
fn pause<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<bool> {
    write!(out, "Press Enter to continue...")?;
    out.flush()?;
    let mut discard = String::new();
    Ok(input.read_line(&mut discard)? > 0)
}
