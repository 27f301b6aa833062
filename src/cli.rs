//! Command-line interface for tres-uno-dos.

use clap::{Parser, ValueEnum};

use tres_uno_dos::PatternSet;

/// Tres, Uno, Dos - a three-role placement game on a 4x4 grid
#[derive(Parser, Debug)]
#[command(name = "tres-uno-dos")]
#[command(about = "Play Tres, Uno, Dos in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Which winning lines to use
    #[arg(long, value_enum, default_value_t = Lines::Canonical)]
    pub lines: Lines,

    /// Do not clear the screen between turns
    #[arg(long)]
    pub no_clear: bool,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,
}

/// Winning line presets selectable from the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Lines {
    /// Left column, both diagonals, right column
    Canonical,
    /// As canonical, without the main diagonal
    WithoutMainDiagonal,
}

impl From<Lines> for PatternSet {
    fn from(lines: Lines) -> Self {
        match lines {
            Lines::Canonical => PatternSet::Canonical,
            Lines::WithoutMainDiagonal => PatternSet::WithoutMainDiagonal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["tres-uno-dos"]);
        assert_eq!(cli.lines, Lines::Canonical);
        assert!(!cli.no_clear);
        assert!(!cli.no_color);
    }

    #[test]
    fn test_cli_lines_flag() {
        let cli = Cli::parse_from(["tres-uno-dos", "--lines", "without-main-diagonal", "--no-clear"]);
        assert_eq!(PatternSet::from(cli.lines), PatternSet::WithoutMainDiagonal);
        assert!(cli.no_clear);
    }
}
