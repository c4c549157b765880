//! Universe tallies.

use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};

/// Number of universes won by each role in some subtree of the game.
///
/// Counts are framed the same way as the [`GameState`](super::GameState)
/// they belong to: `to_move` is the side whose turn it is at that state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UniverseCount {
    /// Universes won by the player to move.
    pub to_move: u128,
    /// Universes won by the waiting player.
    pub waiting: u128,
}

impl UniverseCount {
    /// No universes at all.
    pub const ZERO: Self = Self {
        to_move: 0,
        waiting: 0,
    };

    /// Create a count from its two sides.
    pub fn new(to_move: u128, waiting: u128) -> Self {
        Self { to_move, waiting }
    }

    /// The same count framed from the other player's turn.
    pub fn swapped(self) -> Self {
        Self {
            to_move: self.waiting,
            waiting: self.to_move,
        }
    }

    /// Add `weight` copies of `other` into this count.
    pub fn add_weighted(&mut self, other: Self, weight: u64) -> MechResult<()> {
        let weight = u128::from(weight);
        let to_move = other
            .to_move
            .checked_mul(weight)
            .and_then(|n| n.checked_add(self.to_move))
            .ok_or(MechError::CountOverflow)?;
        let waiting = other
            .waiting
            .checked_mul(weight)
            .and_then(|n| n.checked_add(self.waiting))
            .ok_or(MechError::CountOverflow)?;
        self.to_move = to_move;
        self.waiting = waiting;
        Ok(())
    }

    /// Total universes counted, or `None` if the sum does not fit.
    pub fn total(self) -> Option<u128> {
        self.to_move.checked_add(self.waiting)
    }
}

impl std::fmt::Display for UniverseCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.to_move, self.waiting)
    }
}
