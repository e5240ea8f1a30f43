//! Dice rolling.
//!
//! The turn loop only ever rolls a d6, but the die type is kept general
//! so a variant game can swap it.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// A die with a fixed number of sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Die(u32);

impl Die {
    /// The standard six-sided turn die.
    pub const D6: Self = Self(6);

    /// Create a die with a custom number of sides (at least 2).
    pub fn custom(sides: u32) -> Option<Self> {
        if sides >= 2 { Some(Self(sides)) } else { None }
    }

    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        self.0
    }

    /// Roll the die, producing a uniform value in `1..=sides`.
    pub fn roll(self, rng: &mut StdRng) -> u32 {
        rng.random_range(1..=self.0)
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn d6_has_six_sides() {
        assert_eq!(Die::D6.sides(), 6);
        assert_eq!(Die::D6.to_string(), "d6");
    }

    #[test]
    fn custom_rejects_degenerate_dice() {
        assert_eq!(Die::custom(0), None);
        assert_eq!(Die::custom(1), None);
        assert_eq!(Die::custom(20).map(Die::sides), Some(20));
    }

    #[test]
    fn roll_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let value = Die::D6.roll(&mut rng);
            assert!((1..=6).contains(&value));
        }
    }

    #[test]
    fn roll_deterministic_with_seed() {
        let mut rng1 = StdRng::seed_from_u64(99);
        let mut rng2 = StdRng::seed_from_u64(99);
        for _ in 0..20 {
            assert_eq!(Die::D6.roll(&mut rng1), Die::D6.roll(&mut rng2));
        }
    }

    #[test]
    fn roll_distribution_is_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(7);
        let trials = 60_000;
        let mut counts = [0u32; 6];
        for _ in 0..trials {
            counts[(Die::D6.roll(&mut rng) - 1) as usize] += 1;
        }
        // Expected 10_000 per face; allow a generous tolerance.
        for (face, &count) in counts.iter().enumerate() {
            assert!(
                (9_500..=10_500).contains(&count),
                "face {} rolled {count} times out of {trials}",
                face + 1
            );
        }
    }
}
