//! The deterministic practice die.

/// Highest face of the practice die.
pub const PRACTICE_FACES: u32 = 100;

/// A die that always rolls 1, 2, 3, ... 100, then starts over at 1.
#[derive(Debug, Clone)]
pub struct DeterministicDie {
    next: u32,
    rolls: u64,
}

impl DeterministicDie {
    /// A fresh die whose first roll is 1.
    pub fn new() -> Self {
        Self { next: 1, rolls: 0 }
    }

    /// Roll once.
    pub fn roll(&mut self) -> u32 {
        let value = self.next;
        self.next = if value == PRACTICE_FACES { 1 } else { value + 1 };
        self.rolls += 1;
        value
    }

    /// Roll three times and return the total.
    pub fn roll_turn(&mut self) -> u32 {
        (0..super::ROLLS_PER_TURN).map(|_| self.roll()).sum()
    }

    /// How many times the die has been rolled.
    pub fn rolls(&self) -> u64 {
        self.rolls
    }
}

impl Default for DeterministicDie {
    fn default() -> Self {
        Self::new()
    }
}
