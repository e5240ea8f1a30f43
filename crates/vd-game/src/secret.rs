//! The hidden secret combination.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use vd_core::{Entity, EntityKind, Participant};

use crate::error::{GameError, GameResult};
use crate::guess::Guess;

/// The hidden (participant, hideout, chamber) triple.
///
/// Selected once at setup and immutable for the rest of the session.
/// The fields are private: the session never renders them, and the clue
/// dealer withholds these exact names from the pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretCombination {
    participant: String,
    hideout: String,
    chamber: String,
}

impl SecretCombination {
    /// Build a secret from three known names. Used by variant setups and
    /// tests; normal games use [`SecretCombination::select`].
    pub fn new(
        participant: impl Into<String>,
        hideout: impl Into<String>,
        chamber: impl Into<String>,
    ) -> Self {
        Self {
            participant: participant.into(),
            hideout: hideout.into(),
            chamber: chamber.into(),
        }
    }

    /// Pick one name per category with a uniform random index.
    ///
    /// Empty catalogs are a construction-time error, not undefined
    /// runtime behavior.
    pub fn select(
        participants: &[Participant],
        hideouts: &[Entity],
        chambers: &[Entity],
        rng: &mut StdRng,
    ) -> GameResult<Self> {
        if participants.is_empty() {
            return Err(GameError::EmptyCatalog(EntityKind::Participant));
        }
        if hideouts.is_empty() {
            return Err(GameError::EmptyCatalog(EntityKind::Hideout));
        }
        if chambers.is_empty() {
            return Err(GameError::EmptyCatalog(EntityKind::Chamber));
        }

        Ok(Self {
            participant: participants[rng.random_range(0..participants.len())]
                .name
                .clone(),
            hideout: hideouts[rng.random_range(0..hideouts.len())].name.clone(),
            chamber: chambers[rng.random_range(0..chambers.len())].name.clone(),
        })
    }

    /// Whether a literal name is one of the three secret values.
    ///
    /// This is the clue filter: it matches by name alone, across
    /// categories, so a non-secret entity that shares a name with a
    /// secret entity from another category is also withheld.
    pub fn contains_name(&self, name: &str) -> bool {
        name == self.participant || name == self.hideout || name == self.chamber
    }

    /// Whether a guess names the secret exactly.
    ///
    /// Pure string equality on all three fields: case-sensitive, no
    /// trimming.
    pub fn matches(&self, guess: &Guess) -> bool {
        guess.participant == self.participant
            && guess.hideout == self.hideout
            && guess.chamber == self.chamber
    }
}
