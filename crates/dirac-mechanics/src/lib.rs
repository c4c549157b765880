//! Game engines for the Dirac Dice race game.
//!
//! Provides the dice (the three-sided Dirac die, its turn-outcome table and
//! the deterministic practice die), the memoized multiverse counter that
//! tallies wins across every universe the Dirac die splits into, a
//! layer-by-layer sweep that cross-checks it, the deterministic practice
//! game, and a sampler that plays out a single universe.

pub mod dice;
pub mod error;
pub mod multiverse;
pub mod practice;
pub mod sample;
pub mod sweep;

pub use dice::{DeterministicDie, DiracDie, TURN_OUTCOMES, TurnOutcome, TurnOutcomeTable};
pub use error::{MechError, MechResult};
pub use multiverse::{
    GameState, MultiverseCounter, UniverseCount, WinCounts, count_from, count_universe_wins,
};
pub use practice::{PracticeGame, PracticeOutcome};
pub use sample::{TurnRecord, UniverseTrace, sample_universe};
pub use sweep::count_by_sweep;
