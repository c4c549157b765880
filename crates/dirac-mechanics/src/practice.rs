//! The deterministic practice game.
//!
//! Before the Dirac die comes out, the game is played with a deterministic
//! hundred-sided die to a target of 1000 points. It shares the board rules
//! with the Dirac game but nothing else.

use dirac_core::config::check_practice_target;
use dirac_core::{PlayerId, Position, StartingPositions};
use serde::{Deserialize, Serialize};

use crate::dice::DeterministicDie;
use crate::error::MechResult;

/// How a practice game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeOutcome {
    /// The player who reached the target.
    pub winner: PlayerId,
    /// The winner's final score.
    pub winning_score: u32,
    /// The loser's final score.
    pub losing_score: u32,
    /// Total number of times the die was rolled.
    pub rolls: u64,
}

impl PracticeOutcome {
    /// The losing score multiplied by the number of rolls.
    pub fn answer(&self) -> u64 {
        u64::from(self.losing_score) * self.rolls
    }
}

/// A game played with the deterministic die.
#[derive(Debug, Clone)]
pub struct PracticeGame {
    positions: [Position; 2],
    scores: [u32; 2],
    target: u32,
    die: DeterministicDie,
}

impl PracticeGame {
    /// Set up a game that ends when a player reaches `target`.
    ///
    /// Targets above [`MAX_PRACTICE_TARGET`](dirac_core::config::MAX_PRACTICE_TARGET)
    /// are rejected, which keeps scores and the answer from overflowing.
    pub fn new(starts: &StartingPositions, target: u32) -> MechResult<Self> {
        let target = check_practice_target(target)?;
        Ok(Self {
            positions: [starts.player_one, starts.player_two],
            scores: [0, 0],
            target,
            die: DeterministicDie::new(),
        })
    }

    /// Play until someone reaches the target.
    pub fn play(mut self) -> PracticeOutcome {
        let mut mover = PlayerId::One;
        loop {
            let m = mover.index();
            let steps = self.die.roll_turn();
            self.positions[m] = self.positions[m].advance(steps);
            self.scores[m] += self.positions[m].score();
            log::trace!(
                "{mover} moves {steps} to space {} for a total of {}",
                self.positions[m],
                self.scores[m]
            );

            if self.scores[m] >= self.target {
                return PracticeOutcome {
                    winner: mover,
                    winning_score: self.scores[m],
                    losing_score: self.scores[mover.opponent().index()],
                    rolls: self.die.rolls(),
                };
            }
            mover = mover.opponent();
        }
    }
}
