//! Playing out a single universe.

use dirac_core::{PlayerId, Position, StartingPositions};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::dice::{DiracDie, ROLLS_PER_TURN};
use crate::error::MechResult;
use crate::multiverse::GameState;

/// One turn of a sampled universe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnRecord {
    /// The player who moved.
    pub player: PlayerId,
    /// The faces rolled, in order.
    pub faces: [u32; ROLLS_PER_TURN as usize],
    /// Where the player landed.
    pub landed: Position,
    /// The player's score after landing.
    pub score: u32,
}

/// Every turn of one universe, from the opening move to the win.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UniverseTrace {
    /// Turns in the order they were played.
    pub turns: Vec<TurnRecord>,
    /// The player who reached the threshold.
    pub winner: PlayerId,
}

/// Follow one randomly chosen branch of the multiverse to its end.
pub fn sample_universe(
    starts: &StartingPositions,
    win_threshold: u32,
    rng: &mut StdRng,
) -> MechResult<UniverseTrace> {
    let mut state = GameState::initial(starts, win_threshold)?;
    let mut scores = [0u32; 2];
    let mut turns = Vec::new();

    loop {
        let player = state.mover;
        let faces = DiracDie.roll_turn(rng);
        state = state.after_move(faces.iter().sum());

        // After the move the player is waiting.
        let landed = state.pos_waiting;
        scores[player.index()] += landed.score();
        turns.push(TurnRecord {
            player,
            faces,
            landed,
            score: scores[player.index()],
        });

        if state.terminal().is_some() {
            return Ok(UniverseTrace {
                turns,
                winner: player,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn sample(seed: u64, threshold: u32) -> UniverseTrace {
        let starts = StartingPositions::from_one_based(4, 8).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        sample_universe(&starts, threshold, &mut rng).unwrap()
    }

    #[test]
    fn trace_ends_with_a_win() {
        for seed in 0..20 {
            let trace = sample(seed, 21);
            let last = trace.turns.last().unwrap();
            assert_eq!(last.player, trace.winner);
            assert!(last.score >= 21);
            let loser_best = trace
                .turns
                .iter()
                .filter(|t| t.player != trace.winner)
                .map(|t| t.score)
                .max()
                .unwrap_or(0);
            assert!(loser_best < 21);
        }
    }

    #[test]
    fn turns_alternate_from_player_one() {
        let trace = sample(3, 21);
        for (i, turn) in trace.turns.iter().enumerate() {
            let expected = if i % 2 == 0 {
                PlayerId::One
            } else {
                PlayerId::Two
            };
            assert_eq!(turn.player, expected);
            assert!(turn.faces.iter().all(|f| (1..=3).contains(f)));
        }
    }

    #[test]
    fn threshold_one_is_a_single_turn() {
        let trace = sample(9, 1);
        assert_eq!(trace.turns.len(), 1);
        assert_eq!(trace.winner, PlayerId::One);
    }

    #[test]
    fn same_seed_same_universe() {
        let a = sample(11, 21);
        let b = sample(11, 21);
        assert_eq!(a.turns.len(), b.turns.len());
        assert_eq!(a.winner, b.winner);
    }

    #[test]
    fn zero_threshold_rejected() {
        let starts = StartingPositions::from_one_based(4, 8).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(sample_universe(&starts, 0, &mut rng).is_err());
    }
}
