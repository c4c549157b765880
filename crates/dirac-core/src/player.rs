use serde::{Deserialize, Serialize};

/// One of the two fixed players of a game.
///
/// Player identity never changes during a game, unlike the
/// to-move / waiting roles used by the game engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerId {
    /// The player who moves first.
    One,
    /// The player who moves second.
    Two,
}

impl PlayerId {
    /// Both players in turn order.
    pub const ALL: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    /// The other player.
    pub fn opponent(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    /// Zero-based index, handy for two-element arrays.
    pub fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }

    /// The player number as written in puzzle input.
    pub fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_is_involution() {
        for player in PlayerId::ALL {
            assert_ne!(player.opponent(), player);
            assert_eq!(player.opponent().opponent(), player);
        }
    }

    #[test]
    fn numbers_and_indices() {
        assert_eq!(PlayerId::One.index(), 0);
        assert_eq!(PlayerId::Two.index(), 1);
        assert_eq!(PlayerId::One.number(), 1);
        assert_eq!(PlayerId::Two.number(), 2);
    }

    #[test]
    fn display() {
        assert_eq!(PlayerId::One.to_string(), "Player 1");
        assert_eq!(PlayerId::Two.to_string(), "Player 2");
    }
}
