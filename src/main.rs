//! Tres, Uno, Dos - terminal game.
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`
//! (e.g. `RUST_LOG=tres_uno_dos=debug`).

mod cli;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use tres_uno_dos::console::{self, ConsoleOptions};
use tres_uno_dos::{Game, RulesEngine};

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let options = ConsoleOptions {
        clear_screen: !cli.no_clear,
        color: !cli.no_color,
    };

    let (game, mut state) = Game::builder().preset(cli.lines.into()).build();
    info!(
        lines = game.config().patterns.len(),
        clear_screen = options.clear_screen,
        "Starting game"
    );

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    show_title(&mut input, &mut out, options).context("failed to show title screen")?;

    let outcome = console::run(&game, &mut state, &mut input, &mut out, options)
        .context("console session failed")?;

    match outcome {
        Some(outcome) => info!(%outcome, plies = state.ply(), "Game finished"),
        None => info!(plies = state.ply(), "Input closed, game abandoned"),
    }

    console::farewell(&mut input, &mut out, outcome, options)
        .context("failed to close session")?;
    Ok(())
}

fn show_title<R: io::BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    options: ConsoleOptions,
) -> io::Result<()> {
    if !options.clear_screen {
        writeln!(out, "Tres, Uno, Dos\n")?;
        return Ok(());
    }

    console::clear_screen(out)?;
    writeln!(out, "\n\n\n\n\n")?;
    writeln!(out, "                  Tres, Uno, Dos")?;
    writeln!(out)?;
    write!(out, "              Press Enter to Continue")?;
    out.flush()?;

    let mut discard = String::new();
    input.read_line(&mut discard)?;
    Ok(())
}
