//! Core types for the Dirac Dice race game.
//!
//! Two players race around a circular track of ten spaces. This crate holds
//! the board rules, player identities, starting-position parsing, and the
//! configuration shared by the game engines in `dirac-mechanics`.

/// Track geometry and the board-scoring rule.
pub mod board;
/// Game configuration builders.
pub mod config;
/// Error types used throughout the crate.
pub mod error;
/// Parsing of starting positions from puzzle input.
pub mod input;
/// Fixed player identities.
pub mod player;

/// Re-export board types.
pub use board::{Position, TRACK_LENGTH};
/// Re-export configuration.
pub use config::GameConfig;
/// Re-export error types.
pub use error::{DiracError, DiracResult};
/// Re-export input types.
pub use input::StartingPositions;
/// Re-export player identity.
pub use player::PlayerId;
