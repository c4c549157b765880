//! The memoized universe counter.

use std::collections::HashMap;

use crate::dice::TURN_OUTCOMES;
use crate::error::MechResult;
use crate::multiverse::count::UniverseCount;
use crate::multiverse::state::{GameState, StateKey};

/// Counts universe wins by depth-first search over the game tree.
///
/// Every state ever expanded is cached, so each distinct state is expanded
/// at most once no matter how many universes reach it. The cache is tied to
/// this counter; independent queries should each use a fresh counter (or
/// [`clear`](Self::clear) it between them).
#[derive(Debug, Default)]
pub struct MultiverseCounter {
    cache: HashMap<StateKey, UniverseCount>,
    expansions: u64,
}

impl MultiverseCounter {
    /// A counter with an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Universes won by each role over all continuations of `state`.
    ///
    /// The result is framed like `state`: `to_move` counts wins for
    /// `state.mover`.
    pub fn count(&mut self, state: &GameState) -> MechResult<UniverseCount> {
        state.check()?;
        if let Some(leaf) = state.terminal() {
            return Ok(leaf);
        }

        let key = state.key();
        if let Some(&cached) = self.cache.get(&key) {
            return Ok(cached);
        }

        self.expansions += 1;
        let mut total = UniverseCount::ZERO;
        for outcome in TURN_OUTCOMES.iter() {
            let next = state.after_move(outcome.sum);
            // `next` is framed from the opponent's turn.
            let sub = self.count(&next)?.swapped();
            total.add_weighted(sub, outcome.multiplicity)?;
        }

        self.cache.insert(key, total);
        Ok(total)
    }

    /// Number of states currently cached.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Number of states expanded (cache misses on non-terminal states).
    pub fn expansions(&self) -> u64 {
        self.expansions
    }

    /// Forget every cached state and reset the expansion counter.
    pub fn clear(&mut self) {
        self.cache.clear();
        self.expansions = 0;
    }
}
