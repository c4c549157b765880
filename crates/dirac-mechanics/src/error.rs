//! Error types for the game engines.

use dirac_core::DiracError;

/// Errors that can occur while counting or playing games.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// The game setup was invalid.
    #[error(transparent)]
    Core(#[from] DiracError),

    /// A state where both players have already reached the threshold.
    ///
    /// Such a state cannot arise from play; constructing one is a bug in the caller.
    #[error(
        "unreachable state: both players have reached the threshold (needed {needed_to_move} and {needed_waiting})"
    )]
    UnreachableState {
        /// Points still needed by the player to move.
        needed_to_move: i32,
        /// Points still needed by the waiting player.
        needed_waiting: i32,
    },

    /// A universe count no longer fits in 128 bits.
    #[error("universe count overflow")]
    CountOverflow,
}

/// Convenience result type for engine operations.
pub type MechResult<T> = Result<T, MechError>;
