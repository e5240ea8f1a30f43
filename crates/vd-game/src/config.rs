//! Configuration for a game session.

use crate::dice::Die;

/// Configuration for a game session.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// RNG seed for reproducible secrets, deals, and die rolls.
    pub seed: u64,
    /// How many clues each participant is dealt (pool permitting).
    pub clues_per_participant: usize,
    /// The die rolled at the start of each turn.
    pub die: Die,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            clues_per_participant: 3,
            die: Die::D6,
        }
    }
}

impl GameConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the number of clues dealt to each participant.
    pub fn with_clues(mut self, clues: usize) -> Self {
        self.clues_per_participant = clues;
        self
    }

    /// Set the turn die.
    pub fn with_die(mut self, die: Die) -> Self {
        self.die = die;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.clues_per_participant, 3);
        assert_eq!(cfg.die, Die::D6);
    }

    #[test]
    fn builder_methods() {
        let d20 = Die::custom(20).unwrap();
        let cfg = GameConfig::default().with_seed(7).with_clues(2).with_die(d20);
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.clues_per_participant, 2);
        assert_eq!(cfg.die, d20);
    }
}
