//! Game configuration and the bounds on its scores.

use crate::error::{DiracError, DiracResult};

/// Score needed to win a Dirac dice game.
pub const DEFAULT_WIN_THRESHOLD: u32 = 21;

/// Largest Dirac dice threshold accepted; universe counts stay within 128 bits up to here.
pub const MAX_WIN_THRESHOLD: u32 = 50;

/// Score needed to win the deterministic practice game.
pub const DEFAULT_PRACTICE_TARGET: u32 = 1000;

/// Largest practice target accepted.
pub const MAX_PRACTICE_TARGET: u32 = 1_000_000;

/// Check that a Dirac dice threshold lies in `1..=MAX_WIN_THRESHOLD`.
pub fn check_win_threshold(threshold: u32) -> DiracResult<u32> {
    if (1..=MAX_WIN_THRESHOLD).contains(&threshold) {
        Ok(threshold)
    } else {
        Err(DiracError::InvalidThreshold(threshold))
    }
}

/// Check that a practice target lies in `1..=MAX_PRACTICE_TARGET`.
pub fn check_practice_target(target: u32) -> DiracResult<u32> {
    if (1..=MAX_PRACTICE_TARGET).contains(&target) {
        Ok(target)
    } else {
        Err(DiracError::InvalidThreshold(target))
    }
}

/// Configuration for a game run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Score at which a player wins the Dirac dice game.
    pub win_threshold: u32,
    /// Score at which a player wins the deterministic practice game.
    pub practice_target: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            win_threshold: DEFAULT_WIN_THRESHOLD,
            practice_target: DEFAULT_PRACTICE_TARGET,
        }
    }
}

impl GameConfig {
    /// Set the Dirac dice win threshold.
    pub fn with_win_threshold(mut self, threshold: u32) -> Self {
        self.win_threshold = threshold;
        self
    }

    /// Set the practice game target score.
    pub fn with_practice_target(mut self, target: u32) -> Self {
        self.practice_target = target;
        self
    }

    /// Check that both scores are within their bounds.
    pub fn validate(&self) -> DiracResult<()> {
        check_win_threshold(self.win_threshold)?;
        check_practice_target(self.practice_target)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = GameConfig::default();
        assert_eq!(config.win_threshold, 21);
        assert_eq!(config.practice_target, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_builder_chain() {
        let config = GameConfig::default()
            .with_win_threshold(5)
            .with_practice_target(50);
        assert_eq!(config.win_threshold, 5);
        assert_eq!(config.practice_target, 50);
    }

    #[test]
    fn zero_threshold_rejected() {
        let config = GameConfig::default().with_win_threshold(0);
        assert!(matches!(
            config.validate(),
            Err(DiracError::InvalidThreshold(0))
        ));
        let config = GameConfig::default().with_practice_target(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn oversized_scores_rejected() {
        assert_eq!(check_win_threshold(MAX_WIN_THRESHOLD).unwrap(), 50);
        assert!(matches!(
            check_win_threshold(1_000_000),
            Err(DiracError::InvalidThreshold(1_000_000))
        ));
        assert!(check_practice_target(MAX_PRACTICE_TARGET).is_ok());
        assert!(check_practice_target(MAX_PRACTICE_TARGET + 1).is_err());
        let config = GameConfig::default().with_practice_target(u32::MAX);
        assert!(config.validate().is_err());
    }
}
