//! Counting wins across every universe of a Dirac dice game.
//!
//! Each roll of the Dirac die splits the game into three universes, one per
//! face. [`MultiverseCounter`] tallies how many universes each player wins
//! without visiting them one by one: states are framed by role (to move /
//! waiting) and memoized, which collapses the exponential tree down to a few
//! tens of thousands of distinct states.

pub mod count;
pub mod counter;
pub mod state;

pub use count::UniverseCount;
pub use counter::MultiverseCounter;
pub use state::{GameState, StateKey};

use dirac_core::{PlayerId, StartingPositions};
use serde::{Deserialize, Serialize};

use crate::error::MechResult;

/// Universes won by each player over a whole game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinCounts {
    /// Universes in which player one reaches the threshold first.
    pub player_one: u128,
    /// Universes in which player two reaches the threshold first.
    pub player_two: u128,
}

impl WinCounts {
    /// Translate a role-framed count back to fixed players.
    pub fn from_roles(mover: PlayerId, counts: UniverseCount) -> Self {
        match mover {
            PlayerId::One => Self {
                player_one: counts.to_move,
                player_two: counts.waiting,
            },
            PlayerId::Two => Self {
                player_one: counts.waiting,
                player_two: counts.to_move,
            },
        }
    }

    /// Universes won by the given player.
    pub fn get(&self, player: PlayerId) -> u128 {
        match player {
            PlayerId::One => self.player_one,
            PlayerId::Two => self.player_two,
        }
    }

    /// Universes won by whichever player wins more often.
    pub fn max(&self) -> u128 {
        self.player_one.max(self.player_two)
    }

    /// The player who wins in more universes, or `None` on a tie.
    pub fn leader(&self) -> Option<PlayerId> {
        match self.player_one.cmp(&self.player_two) {
            std::cmp::Ordering::Greater => Some(PlayerId::One),
            std::cmp::Ordering::Less => Some(PlayerId::Two),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Total universes, or `None` if the sum does not fit.
    pub fn total(&self) -> Option<u128> {
        self.player_one.checked_add(self.player_two)
    }

    /// The same counts with the players exchanged.
    pub fn swapped(&self) -> Self {
        Self {
            player_one: self.player_two,
            player_two: self.player_one,
        }
    }
}

/// Count universe wins for a game starting on the given one-based spaces.
///
/// A fresh cache is built for the query and dropped afterwards.
pub fn count_universe_wins(
    start_player_one: u32,
    start_player_two: u32,
    win_threshold: u32,
) -> MechResult<WinCounts> {
    let starts = StartingPositions::from_one_based(start_player_one, start_player_two)?;
    count_from(&starts, win_threshold)
}

/// Count universe wins for a game with the given starting positions.
pub fn count_from(starts: &StartingPositions, win_threshold: u32) -> MechResult<WinCounts> {
    let state = GameState::initial(starts, win_threshold)?;
    let mut counter = MultiverseCounter::new();
    let counts = counter.count(&state)?;
    log::debug!(
        "counted {} from {}/{} to {}: {} states expanded, {} cached",
        counts,
        starts.player_one,
        starts.player_two,
        win_threshold,
        counter.expansions(),
        counter.cache_len()
    );
    Ok(WinCounts::from_roles(state.mover, counts))
}
