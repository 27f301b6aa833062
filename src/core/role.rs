//! The three participants.
//!
//! ## Role
//!
//! - `Uno`: places pieces, wins by completing a line.
//! - `Tres`: places pieces, wins by completing a line. Moves first.
//! - `Dos`: removes pieces, wins when the board fills with no line.

use serde::{Deserialize, Serialize};

/// A participant in the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// First placing role.
    Uno,
    /// Removing role.
    Dos,
    /// Second placing role.
    Tres,
}

impl Role {
    /// Every role, in name order.
    pub const ALL: [Role; 3] = [Role::Uno, Role::Dos, Role::Tres];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Role::Uno => "Uno",
            Role::Dos => "Dos",
            Role::Tres => "Tres",
        }
    }

    /// Check if this role puts pieces on the board (as opposed to removing them).
    #[must_use]
    pub const fn is_placer(self) -> bool {
        matches!(self, Role::Uno | Role::Tres)
    }

    /// Board marker for the role's pieces. `None` for the remover.
    #[must_use]
    pub const fn marker(self) -> Option<char> {
        match self {
            Role::Uno => Some('U'),
            Role::Tres => Some('T'),
            Role::Dos => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_names() {
        assert_eq!(format!("{}", Role::Uno), "Uno");
        assert_eq!(format!("{}", Role::Dos), "Dos");
        assert_eq!(format!("{}", Role::Tres), "Tres");
    }

    #[test]
    fn test_role_placers() {
        let placers: Vec<_> = Role::ALL.into_iter().filter(|r| r.is_placer()).collect();
        assert_eq!(placers, vec![Role::Uno, Role::Tres]);

        assert_eq!(Role::Uno.marker(), Some('U'));
        assert_eq!(Role::Tres.marker(), Some('T'));
        assert_eq!(Role::Dos.marker(), None);
    }
}
