//! Game configuration types.
//!
//! The only configurable rule is which 4-cell lines win the game. Two rule
//! variants are in circulation:
//!
//! - `PatternSet::Canonical`: left column, main diagonal, anti-diagonal and
//!   right column (4 lines).
//! - `PatternSet::WithoutMainDiagonal`: the same minus the main diagonal
//!   (3 lines).
//!
//! Arbitrary line lists can be supplied with [`GameConfig::with_patterns`].

use serde::{Deserialize, Serialize};

use super::position::Position;

/// Number of cells in a winning line.
pub const LINE_LENGTH: usize = 4;

/// A named set of cells that wins the game when one placer owns all of them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinPattern {
    /// Human-readable name (for display/logging).
    pub name: String,

    /// The cells of the line.
    pub cells: [Position; LINE_LENGTH],
}

impl WinPattern {
    /// Create a pattern.
    pub fn new(name: impl Into<String>, cells: [Position; LINE_LENGTH]) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }

    /// `(1,1) (1,2) (1,3) (1,4)`
    ///
    /// With `x` as the column this is the leftmost column of the printed grid.
    #[must_use]
    pub fn left_column() -> Self {
        Self::from_coords("left column", [(1, 1), (1, 2), (1, 3), (1, 4)])
    }

    /// `(1,1) (2,2) (3,3) (4,4)`
    #[must_use]
    pub fn main_diagonal() -> Self {
        Self::from_coords("main diagonal", [(1, 1), (2, 2), (3, 3), (4, 4)])
    }

    /// `(1,4) (2,3) (3,2) (4,1)`
    #[must_use]
    pub fn anti_diagonal() -> Self {
        Self::from_coords("anti-diagonal", [(1, 4), (2, 3), (3, 2), (4, 1)])
    }

    /// `(4,1) (4,2) (4,3) (4,4)`
    #[must_use]
    pub fn right_column() -> Self {
        Self::from_coords("right column", [(4, 1), (4, 2), (4, 3), (4, 4)])
    }

    fn from_coords(name: &str, coords: [(u8, u8); LINE_LENGTH]) -> Self {
        Self::new(name, coords.map(|(x, y)| Position::from_static(x, y)))
    }
}

impl std::fmt::Display for WinPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Built-in winning line lists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatternSet {
    /// Left column, main diagonal, anti-diagonal, right column.
    #[default]
    Canonical,
    /// Left column, anti-diagonal, right column.
    WithoutMainDiagonal,
}

impl PatternSet {
    /// The lines of this preset.
    #[must_use]
    pub fn patterns(self) -> Vec<WinPattern> {
        match self {
            PatternSet::Canonical => vec![
                WinPattern::left_column(),
                WinPattern::main_diagonal(),
                WinPattern::anti_diagonal(),
                WinPattern::right_column(),
            ],
            PatternSet::WithoutMainDiagonal => vec![
                WinPattern::left_column(),
                WinPattern::anti_diagonal(),
                WinPattern::right_column(),
            ],
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Winning lines, checked in order.
    pub patterns: Vec<WinPattern>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::from_preset(PatternSet::default())
    }
}

impl GameConfig {
    /// Create a configuration with the canonical lines.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration from a built-in line list.
    #[must_use]
    pub fn from_preset(preset: PatternSet) -> Self {
        Self {
            patterns: preset.patterns(),
        }
    }

    /// Replace the winning lines.
    #[must_use]
    pub fn with_patterns(mut self, patterns: Vec<WinPattern>) -> Self {
        self.patterns = patterns;
        self
    }

    /// Add one winning line.
    #[must_use]
    pub fn with_pattern(mut self, pattern: WinPattern) -> Self {
        self.patterns.push(pattern);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_preset() {
        let patterns = PatternSet::Canonical.patterns();
        assert_eq!(patterns.len(), 4);
        assert!(patterns.contains(&WinPattern::main_diagonal()));
    }

    #[test]
    fn test_without_main_diagonal_preset() {
        let patterns = PatternSet::WithoutMainDiagonal.patterns();
        assert_eq!(patterns.len(), 3);
        assert!(!patterns.contains(&WinPattern::main_diagonal()));
        assert!(patterns.contains(&WinPattern::left_column()));
        assert!(patterns.contains(&WinPattern::anti_diagonal()));
        assert!(patterns.contains(&WinPattern::right_column()));
    }

    #[test]
    fn test_pattern_cells() {
        let row = WinPattern::left_column();
        assert_eq!(row.cells[0], Position::new(1, 1).unwrap());
        assert_eq!(row.cells[3], Position::new(1, 4).unwrap());

        let anti = WinPattern::anti_diagonal();
        assert_eq!(anti.cells[3], Position::new(4, 1).unwrap());
    }

    #[test]
    fn test_game_config_builder() {
        let config = GameConfig::new();
        assert_eq!(config.patterns.len(), 4);

        let custom = GameConfig::new()
            .with_patterns(vec![])
            .with_pattern(WinPattern::right_column());
        assert_eq!(custom.patterns, vec![WinPattern::right_column()]);
    }

    #[test]
    fn test_game_config_serialization() {
        let config = GameConfig::from_preset(PatternSet::WithoutMainDiagonal);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, deserialized);
    }
}
