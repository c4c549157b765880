//! Role-tagged game states.

use dirac_core::config::check_win_threshold;
use dirac_core::{PlayerId, Position, StartingPositions};

use crate::error::{MechError, MechResult};
use crate::multiverse::count::UniverseCount;

/// A point in the game tree, framed from the point of view of the player to move.
///
/// Positions and points still needed are stored by role (to move / waiting)
/// rather than by player, so the same state reached by either player maps to
/// the same cache entry. `mover` records which fixed player currently holds
/// the to-move role so results can be translated back to player identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameState {
    /// The player whose turn it is.
    pub mover: PlayerId,
    /// Position of the player to move.
    pub pos_to_move: Position,
    /// Position of the waiting player.
    pub pos_waiting: Position,
    /// Points the player to move still needs to win.
    pub needed_to_move: i32,
    /// Points the waiting player still needs to win.
    pub needed_waiting: i32,
}

/// The identity-free part of a [`GameState`], used as the memoization key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateKey {
    pos_to_move: Position,
    pos_waiting: Position,
    needed_to_move: i32,
    needed_waiting: i32,
}

impl GameState {
    /// The opening state: player one to move, both players needing `threshold` points.
    ///
    /// Thresholds above [`MAX_WIN_THRESHOLD`](dirac_core::config::MAX_WIN_THRESHOLD)
    /// are rejected.
    pub fn initial(starts: &StartingPositions, threshold: u32) -> MechResult<Self> {
        let needed = check_win_threshold(threshold)? as i32;
        Ok(Self {
            mover: PlayerId::One,
            pos_to_move: starts.player_one,
            pos_waiting: starts.player_two,
            needed_to_move: needed,
            needed_waiting: needed,
        })
    }

    /// The state after the player to move advances `sum` spaces.
    ///
    /// Roles swap: the player who just moved becomes the waiting player.
    pub fn after_move(&self, sum: u32) -> Self {
        let landed = self.pos_to_move.advance(sum);
        Self {
            mover: self.mover.opponent(),
            pos_to_move: self.pos_waiting,
            pos_waiting: landed,
            needed_to_move: self.needed_waiting,
            needed_waiting: self.needed_to_move - landed.score() as i32,
        }
    }

    /// Reject states where both players have already won.
    pub fn check(&self) -> MechResult<()> {
        if self.needed_to_move <= 0 && self.needed_waiting <= 0 {
            return Err(MechError::UnreachableState {
                needed_to_move: self.needed_to_move,
                needed_waiting: self.needed_waiting,
            });
        }
        Ok(())
    }

    /// The single universe this state represents if the game is already over.
    ///
    /// The win is credited to whichever role reached the threshold, in this
    /// state's framing.
    pub fn terminal(&self) -> Option<UniverseCount> {
        if self.needed_to_move <= 0 {
            Some(UniverseCount::new(1, 0))
        } else if self.needed_waiting <= 0 {
            Some(UniverseCount::new(0, 1))
        } else {
            None
        }
    }

    /// Memoization key for this state.
    pub fn key(&self) -> StateKey {
        StateKey {
            pos_to_move: self.pos_to_move,
            pos_waiting: self.pos_waiting,
            needed_to_move: self.needed_to_move,
            needed_waiting: self.needed_waiting,
        }
    }
}
