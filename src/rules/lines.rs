//! Winning line detection.

use crate::core::{GameConfig, PositionSet, WinPattern};

/// Checks cell sets against a fixed list of winning lines.
///
/// Pure: holds nothing but the line list it was built with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineDetector {
    patterns: Vec<WinPattern>,
}

impl Default for LineDetector {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

impl LineDetector {
    /// Create a detector for the given lines.
    #[must_use]
    pub fn new(patterns: Vec<WinPattern>) -> Self {
        Self { patterns }
    }

    /// Create a detector for a game configuration.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.patterns.clone())
    }

    /// The lines being checked.
    #[must_use]
    pub fn patterns(&self) -> &[WinPattern] {
        &self.patterns
    }

    /// Check if `set` holds every cell of at least one line.
    #[must_use]
    pub fn has_line(&self, set: &PositionSet) -> bool {
        self.completed_line(set).is_some()
    }

    /// The first line fully contained in `set`, if any.
    #[must_use]
    pub fn completed_line(&self, set: &PositionSet) -> Option<&WinPattern> {
        self.patterns
            .iter()
            .find(|pattern| pattern.cells.iter().all(|&cell| set.contains(cell)))
    }
}
