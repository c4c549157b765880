//! Error types for game setup.

/// Alias for `Result<T, DiracError>`.
pub type DiracResult<T> = Result<T, DiracError>;

/// Errors that can occur when building or reading a game setup.
#[derive(Debug, thiserror::Error)]
pub enum DiracError {
    /// A position outside the track was supplied.
    #[error("invalid position: {0}")]
    InvalidPosition(u32),

    /// A win threshold or target score outside its accepted range was supplied.
    #[error("invalid threshold: {0} (out of range)")]
    InvalidThreshold(u32),

    /// A line of puzzle input could not be understood.
    #[error("line {line}: {message}")]
    Parse {
        /// One-based line number in the input.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// The input ended before a player's starting line was found.
    #[error("missing starting position for player {0}")]
    MissingPlayer(u8),
}
