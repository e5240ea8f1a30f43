//! Clue pool construction and dealing.
//!
//! Every entity name goes into one flat pool, the pool is shuffled
//! uniformly, and participants are filled in catalog order from a
//! single left-to-right walk. Entries matching a secret value are
//! discarded, not deferred.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use vd_core::{Entity, Participant};

use crate::secret::SecretCombination;

/// Build the flat clue pool: every participant, hideout, and chamber
/// name, one entry per entity. Duplicate names across categories are
/// distinct pool entries.
pub fn build_clue_pool(
    participants: &[Participant],
    hideouts: &[Entity],
    chambers: &[Entity],
) -> Vec<String> {
    participants
        .iter()
        .map(|p| p.name.clone())
        .chain(hideouts.iter().map(|h| h.name.clone()))
        .chain(chambers.iter().map(|c| c.name.clone()))
        .collect()
}

/// Shuffle the clue pool and deal it out.
///
/// Convenience wrapper over [`build_clue_pool`] and [`deal_from_pool`].
pub fn deal_clues(
    participants: &mut [Participant],
    hideouts: &[Entity],
    chambers: &[Entity],
    secret: &SecretCombination,
    clues_per_participant: usize,
    rng: &mut StdRng,
) {
    let mut pool = build_clue_pool(participants, hideouts, chambers);
    pool.shuffle(rng);
    deal_from_pool(participants, &pool, secret, clues_per_participant);
}

/// Deal a (shuffled) pool to participants in catalog order.
///
/// One shared index walks the pool left to right. Each participant draws
/// until they hold `clues_per_participant` clues or the pool runs out;
/// an entry whose literal value equals a secret value is discarded and
/// the walk advances. Later participants may end up with fewer clues if
/// the pool is exhausted — that is not an error.
pub fn deal_from_pool(
    participants: &mut [Participant],
    pool: &[String],
    secret: &SecretCombination,
    clues_per_participant: usize,
) {
    let mut index = 0;
    for participant in participants.iter_mut() {
        while participant.clues.len() < clues_per_participant && index < pool.len() {
            let entry = &pool[index];
            index += 1;
            if !secret.contains_name(entry) {
                participant.receive_clue(entry.clone());
            }
        }
    }
}
