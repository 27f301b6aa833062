//! Unordered sets of board cells.
//!
//! A `PositionSet` never holds more than the 16 cells of the board, so the
//! members live inline in a `SmallVec` and never touch the heap.
//!
//! All operations are total: inserting a member twice and removing an absent
//! one are defined no-ops.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::position::{Position, CELL_COUNT};

/// Collection of unique positions. Insertion order is not significant.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Position>", into = "Vec<Position>")]
pub struct PositionSet {
    cells: SmallVec<[Position; CELL_COUNT]>,
}

impl PositionSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set holding every cell of the board.
    #[must_use]
    pub fn full_board() -> Self {
        Position::all().collect()
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the set has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check membership.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    /// Add a position.
    ///
    /// Returns false (and leaves the set alone) if it was already a member.
    pub fn insert(&mut self, pos: Position) -> bool {
        if self.contains(pos) {
            return false;
        }
        self.cells.push(pos);
        true
    }

    /// Remove a position.
    ///
    /// The last member takes the freed slot. Returns false if `pos` was not
    /// a member.
    pub fn remove(&mut self, pos: Position) -> bool {
        match self.cells.iter().position(|&p| p == pos) {
            Some(idx) => {
                self.cells.swap_remove(idx);
                true
            }
            None => false,
        }
    }

    /// Iterate over members in storage order.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().copied()
    }

    /// Members in row-major order.
    #[must_use]
    pub fn sorted(&self) -> Vec<Position> {
        let mut cells = self.cells.to_vec();
        cells.sort_by_key(|p| p.index());
        cells
    }

    /// Check if every member of `self` is in `other`.
    #[must_use]
    pub fn is_subset_of(&self, other: &PositionSet) -> bool {
        self.iter().all(|p| other.contains(p))
    }

    /// Check if the two sets share no member.
    #[must_use]
    pub fn is_disjoint(&self, other: &PositionSet) -> bool {
        !self.iter().any(|p| other.contains(p))
    }
}

/// Equality ignores storage order.
impl PartialEq for PositionSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset_of(other)
    }
}

impl Eq for PositionSet {}

impl FromIterator<Position> for PositionSet {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        let mut set = Self::new();
        for pos in iter {
            set.insert(pos);
        }
        set
    }
}

impl From<Vec<Position>> for PositionSet {
    fn from(cells: Vec<Position>) -> Self {
        cells.into_iter().collect()
    }
}

impl From<PositionSet> for Vec<Position> {
    fn from(set: PositionSet) -> Self {
        set.cells.into_vec()
    }
}

impl Extend<Position> for PositionSet {
    fn extend<I: IntoIterator<Item = Position>>(&mut self, iter: I) {
        for pos in iter {
            self.insert(pos);
        }
    }
}
