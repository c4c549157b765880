//! Distribution of turn totals for the Dirac die.
//!
//! Three rolls of a three-sided die give 27 equally likely combinations but
//! only seven distinct totals. Counting universes per total lets the engines
//! branch seven ways, weighted by multiplicity, instead of 27 ways.

use super::{DIRAC_FACES, ROLLS_PER_TURN};

/// Number of distinct turn totals (3 through 9).
pub const DISTINCT_SUMS: usize = (ROLLS_PER_TURN * (DIRAC_FACES - 1) + 1) as usize;

/// Number of roll combinations per turn.
pub const TOTAL_BRANCHES: u64 = (DIRAC_FACES as u64).pow(ROLLS_PER_TURN);

/// One possible turn total and the number of roll combinations producing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOutcome {
    /// Spaces moved this turn.
    pub sum: u32,
    /// How many of the roll combinations add up to `sum`.
    pub multiplicity: u64,
}

/// All turn totals with their multiplicities, ordered by total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOutcomeTable {
    entries: [TurnOutcome; DISTINCT_SUMS],
}

/// The turn-outcome table, computed at compile time.
pub const TURN_OUTCOMES: TurnOutcomeTable = TurnOutcomeTable::new();

impl TurnOutcomeTable {
    /// Enumerate every combination of rolls and tally their totals.
    pub const fn new() -> Self {
        let mut entries = [TurnOutcome {
            sum: 0,
            multiplicity: 0,
        }; DISTINCT_SUMS];
        let mut i = 0;
        while i < DISTINCT_SUMS {
            entries[i].sum = ROLLS_PER_TURN + i as u32;
            i += 1;
        }

        // Each combination is a base-FACES number with one digit per roll.
        let mut combo = 0;
        while combo < TOTAL_BRANCHES {
            let mut rest = combo;
            let mut sum = 0;
            let mut roll = 0;
            while roll < ROLLS_PER_TURN {
                sum += (rest % DIRAC_FACES as u64) as u32 + 1;
                rest /= DIRAC_FACES as u64;
                roll += 1;
            }
            entries[(sum - ROLLS_PER_TURN) as usize].multiplicity += 1;
            combo += 1;
        }

        Self { entries }
    }

    /// Iterate over the entries.
    pub fn iter(&self) -> impl Iterator<Item = &TurnOutcome> {
        self.entries.iter()
    }

    /// Number of roll combinations the table accounts for.
    pub fn total_branches(&self) -> u64 {
        self.entries.iter().map(|e| e.multiplicity).sum()
    }
}

impl Default for TurnOutcomeTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplicities_sum_to_27() {
        assert_eq!(TURN_OUTCOMES.total_branches(), 27);
        assert_eq!(TOTAL_BRANCHES, 27);
    }

    #[test]
    fn exact_distribution() {
        let pairs: Vec<(u32, u64)> = TURN_OUTCOMES
            .iter()
            .map(|e| (e.sum, e.multiplicity))
            .collect();
        assert_eq!(
            pairs,
            vec![(3, 1), (4, 3), (5, 6), (6, 7), (7, 6), (8, 3), (9, 1)]
        );
    }

    #[test]
    fn matches_brute_force_enumeration() {
        let mut counts = [0u64; 10];
        for a in 1..=3 {
            for b in 1..=3 {
                for c in 1..=3 {
                    counts[a + b + c] += 1;
                }
            }
        }
        for entry in TURN_OUTCOMES.iter() {
            assert_eq!(entry.multiplicity, counts[entry.sum as usize]);
        }
    }
}
