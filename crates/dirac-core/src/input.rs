//! Starting positions from puzzle input.
//!
//! The input is two lines of the form:
//!
//! ```text
//! Player 1 starting position: 4
//! Player 2 starting position: 8
//! ```

use serde::{Deserialize, Serialize};

use crate::board::Position;
use crate::error::{DiracError, DiracResult};
use crate::player::PlayerId;

/// Where each player starts on the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartingPositions {
    /// Starting space of the first player.
    pub player_one: Position,
    /// Starting space of the second player.
    pub player_two: Position,
}

impl StartingPositions {
    /// Build from one-based space numbers.
    pub fn from_one_based(player_one: u32, player_two: u32) -> DiracResult<Self> {
        Ok(Self {
            player_one: Position::from_one_based(player_one)?,
            player_two: Position::from_one_based(player_two)?,
        })
    }

    /// Parse the two starting lines from puzzle input. Blank lines are skipped.
    pub fn parse(text: &str) -> DiracResult<Self> {
        let mut lines = text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty());

        let mut read = |expected: PlayerId| -> DiracResult<Position> {
            let (idx, line) = lines
                .next()
                .ok_or(DiracError::MissingPlayer(expected.number()))?;
            parse_line(idx + 1, line, expected)
        };

        let player_one = read(PlayerId::One)?;
        let player_two = read(PlayerId::Two)?;
        Ok(Self {
            player_one,
            player_two,
        })
    }

    /// Starting space of the given player.
    pub fn get(&self, player: PlayerId) -> Position {
        match player {
            PlayerId::One => self.player_one,
            PlayerId::Two => self.player_two,
        }
    }
}

fn parse_line(line_no: usize, line: &str, expected: PlayerId) -> DiracResult<Position> {
    let parse_err = |message: String| DiracError::Parse {
        line: line_no,
        message,
    };

    let rest = line
        .trim()
        .strip_prefix("Player")
        .ok_or_else(|| parse_err(format!("expected 'Player', found '{}'", line.trim())))?;
    let (player, space) = rest
        .split_once("starting position:")
        .ok_or_else(|| parse_err("expected 'starting position:'".to_string()))?;

    let player: u8 = player
        .trim()
        .parse()
        .map_err(|_| parse_err(format!("invalid player number '{}'", player.trim())))?;
    if player != expected.number() {
        return Err(parse_err(format!(
            "expected player {}, found player {player}",
            expected.number()
        )));
    }

    let space: u32 = space
        .trim()
        .parse()
        .map_err(|_| parse_err(format!("invalid starting position '{}'", space.trim())))?;
    Position::from_one_based(space)
}
