//! Layer-by-layer universe counting.
//!
//! Scores only ever increase, so every move goes from a cell with a lower
//! combined score to one with a higher combined score. Sweeping cells in
//! increasing combined-score order therefore sees each cell only after all
//! of its predecessors have pushed their universes into it. This gives the
//! same answer as [`MultiverseCounter`](crate::MultiverseCounter) without
//! recursion and serves as an independent check on it.

use dirac_core::config::check_win_threshold;
use dirac_core::{PlayerId, Position, StartingPositions, TRACK_LENGTH};

use crate::dice::TURN_OUTCOMES;
use crate::error::{MechError, MechResult};
use crate::multiverse::WinCounts;

/// Universe weights for every `(scores, positions, mover)` cell below the threshold.
struct Grid {
    threshold: usize,
    cells: Vec<u128>,
}

impl Grid {
    fn new(threshold: usize) -> Self {
        let track = usize::from(TRACK_LENGTH);
        Self {
            threshold,
            cells: vec![0; threshold * threshold * track * track * 2],
        }
    }

    fn index(&self, scores: [usize; 2], positions: [Position; 2], mover: PlayerId) -> usize {
        let track = usize::from(TRACK_LENGTH);
        let by_score = scores[0] * self.threshold + scores[1];
        let by_position = (by_score * track + usize::from(positions[0].index())) * track
            + usize::from(positions[1].index());
        by_position * 2 + mover.index()
    }
}

/// Count universe wins by sweeping score layers instead of recursing.
pub fn count_by_sweep(starts: &StartingPositions, win_threshold: u32) -> MechResult<WinCounts> {
    let threshold = check_win_threshold(win_threshold)? as usize;
    let mut grid = Grid::new(threshold);
    let mut wins = [0u128; 2];

    let start = grid.index([0, 0], [starts.player_one, starts.player_two], PlayerId::One);
    grid.cells[start] = 1;

    for combined in 0..=2 * (threshold - 1) {
        let low = combined.saturating_sub(threshold - 1);
        let high = combined.min(threshold - 1);
        for score_one in low..=high {
            let scores = [score_one, combined - score_one];
            for pos_one in Position::all() {
                for pos_two in Position::all() {
                    for mover in PlayerId::ALL {
                        let weight = grid.cells[grid.index(scores, [pos_one, pos_two], mover)];
                        if weight == 0 {
                            continue;
                        }
                        let m = mover.index();
                        for outcome in TURN_OUTCOMES.iter() {
                            let universes = weight
                                .checked_mul(u128::from(outcome.multiplicity))
                                .ok_or(MechError::CountOverflow)?;
                            let mut positions = [pos_one, pos_two];
                            let mut next = scores;
                            positions[m] = positions[m].advance(outcome.sum);
                            next[m] += positions[m].score() as usize;

                            let slot = if next[m] >= threshold {
                                &mut wins[m]
                            } else {
                                let i = grid.index(next, positions, mover.opponent());
                                &mut grid.cells[i]
                            };
                            *slot = slot
                                .checked_add(universes)
                                .ok_or(MechError::CountOverflow)?;
                        }
                    }
                }
            }
        }
    }

    Ok(WinCounts {
        player_one: wins[0],
        player_two: wins[1],
    })
}
