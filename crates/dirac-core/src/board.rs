//! The circular track.
//!
//! Spaces are numbered 1 through 10 in puzzle input and on screen, but are
//! stored zero-based so that movement is a plain `mod 10`. Landing on a
//! space scores its one-based number.

use serde::{Deserialize, Serialize};

use crate::error::{DiracError, DiracResult};

/// Number of spaces on the track.
pub const TRACK_LENGTH: u8 = 10;

/// A zero-based space on the track, always in `0..TRACK_LENGTH`.
///
/// Serializes as the one-based space number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Position(u8);

impl Position {
    /// Create a position from a zero-based index.
    pub fn new(index: u8) -> DiracResult<Self> {
        if index < TRACK_LENGTH {
            Ok(Self(index))
        } else {
            Err(DiracError::InvalidPosition(u32::from(index)))
        }
    }

    /// Create a position from the one-based space number used in puzzle input.
    pub fn from_one_based(space: u32) -> DiracResult<Self> {
        match space {
            1..=10 => Ok(Self((space - 1) as u8)),
            _ => Err(DiracError::InvalidPosition(space)),
        }
    }

    /// Zero-based index of this space.
    pub fn index(self) -> u8 {
        self.0
    }

    /// One-based space number.
    pub fn one_based(self) -> u8 {
        self.0 + 1
    }

    /// The space reached after moving `steps` spaces clockwise.
    pub fn advance(self, steps: u32) -> Self {
        let index = (u32::from(self.0) + steps) % u32::from(TRACK_LENGTH);
        Self(index as u8)
    }

    /// Points scored for landing on this space.
    pub fn score(self) -> u32 {
        u32::from(self.0) + 1
    }

    /// All spaces of the track in order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..TRACK_LENGTH).map(Self)
    }
}

impl TryFrom<u32> for Position {
    type Error = DiracError;

    fn try_from(space: u32) -> DiracResult<Self> {
        Self::from_one_based(space)
    }
}

impl From<Position> for u32 {
    fn from(position: Position) -> u32 {
        u32::from(position.one_based())
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.one_based())
    }
}
