//! The standard catalogs.
//!
//! Fixed at startup and never mutated: six participants, six hideouts,
//! nine chambers. The engine can be handed custom catalogs instead, but
//! these are the ones the stock game plays with.

use crate::entity::{Entity, EntityKind, Participant};

/// Names of the six standard participants.
pub const PARTICIPANT_NAMES: [&str; 6] = ["Alice", "Bob", "Charlie", "Diana", "Eve", "Frank"];

/// Names of the six standard hideouts.
pub const HIDEOUT_NAMES: [&str; 6] = [
    "Behind the curtain",
    "Under the rug",
    "In the closet",
    "Under the bed",
    "On the shelf",
    "In the drawer",
];

/// Names of the nine standard chambers.
pub const CHAMBER_NAMES: [&str; 9] = [
    "Living room",
    "Kitchen",
    "Library",
    "Bathroom",
    "Bedroom",
    "Dining room",
    "Garage",
    "Attic",
    "Basement",
];

/// The six standard participants, in fixed catalog order.
pub fn standard_participants() -> Vec<Participant> {
    PARTICIPANT_NAMES.iter().map(|name| Participant::new(*name)).collect()
}

/// The six standard hideouts.
pub fn standard_hideouts() -> Vec<Entity> {
    HIDEOUT_NAMES
        .iter()
        .map(|name| Entity::new(EntityKind::Hideout, *name))
        .collect()
}

/// The nine standard chambers.
pub fn standard_chambers() -> Vec<Entity> {
    CHAMBER_NAMES
        .iter()
        .map(|name| Entity::new(EntityKind::Chamber, *name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_sizes() {
        assert_eq!(standard_participants().len(), 6);
        assert_eq!(standard_hideouts().len(), 6);
        assert_eq!(standard_chambers().len(), 9);
    }

    #[test]
    fn catalogs_have_no_duplicate_names() {
        let mut all: Vec<&str> = PARTICIPANT_NAMES
            .iter()
            .chain(HIDEOUT_NAMES.iter())
            .chain(CHAMBER_NAMES.iter())
            .copied()
            .collect();
        let total = all.len();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), total);
    }

    #[test]
    fn hideout_labels() {
        let labels: Vec<String> = standard_hideouts().iter().map(Entity::label).collect();
        insta::assert_snapshot!(labels.join("\n"), @r"
        Hideout: Behind the curtain
        Hideout: Under the rug
        Hideout: In the closet
        Hideout: Under the bed
        Hideout: On the shelf
        Hideout: In the drawer
        ");
    }

    #[test]
    fn chamber_labels() {
        let labels: Vec<String> = standard_chambers().iter().map(Entity::label).collect();
        insta::assert_snapshot!(labels.join("\n"), @r"
        Chamber: Living room
        Chamber: Kitchen
        Chamber: Library
        Chamber: Bathroom
        Chamber: Bedroom
        Chamber: Dining room
        Chamber: Garage
        Chamber: Attic
        Chamber: Basement
        ");
    }
}
