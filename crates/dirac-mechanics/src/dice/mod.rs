//! Dice used by the two game variants.
//!
//! The Dirac die has three faces and is rolled three times per turn; every
//! roll splits the game into one universe per face. The practice game uses
//! a deterministic hundred-sided die instead.

pub mod deterministic;
pub mod outcome;

pub use deterministic::DeterministicDie;
pub use outcome::{TURN_OUTCOMES, TurnOutcome, TurnOutcomeTable};

use rand::Rng;
use rand::rngs::StdRng;

/// Number of faces on the Dirac die.
pub const DIRAC_FACES: u32 = 3;

/// Number of times a player rolls per turn.
pub const ROLLS_PER_TURN: u32 = 3;

/// The three-sided Dirac die.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiracDie;

impl DiracDie {
    /// Roll once, picking a single universe at random.
    pub fn roll(self, rng: &mut StdRng) -> u32 {
        rng.random_range(1..=DIRAC_FACES)
    }

    /// Roll a full turn.
    pub fn roll_turn(self, rng: &mut StdRng) -> [u32; ROLLS_PER_TURN as usize] {
        std::array::from_fn(|_| self.roll(rng))
    }
}
