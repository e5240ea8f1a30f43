use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of a game entity.
///
/// The original design modeled these as an inheritance hierarchy; here a
/// kind tag on a single entity shape covers the same ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// A player-controlled entity that accumulates clues and guesses.
    Participant,
    /// A possible hiding spot in the secret combination.
    Hideout,
    /// A possible room in the secret combination.
    Chamber,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Participant => write!(f, "Participant"),
            Self::Hideout => write!(f, "Hideout"),
            Self::Chamber => write!(f, "Chamber"),
        }
    }
}

/// A named game entity. The name is immutable after construction.
///
/// Empty names are accepted and render a degenerate label (`"Kind: "`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// The kind (category) of this entity.
    pub kind: EntityKind,
    /// Display name of the entity.
    pub name: String,
}

impl Entity {
    /// Create a new entity of the given kind.
    pub fn new(kind: EntityKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }

    /// Render the kind-prefixed one-line label, e.g. `"Hideout: Under the rug"`.
    pub fn label(&self) -> String {
        format!("{}: {}", self.kind, self.name)
    }
}

/// A participant: the one stateful entity kind.
///
/// Clues are stored in the order received; that order is what the player
/// sees on their clue sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Display name of the participant.
    pub name: String,
    /// Clues dealt to this participant, in insertion order.
    pub clues: Vec<String>,
}

impl Participant {
    /// Create a participant with no clues.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            clues: Vec::new(),
        }
    }

    /// Append a clue to this participant's sheet.
    pub fn receive_clue(&mut self, clue: impl Into<String>) {
        self.clues.push(clue.into());
    }

    /// Render the kind-prefixed one-line label, e.g. `"Participant: Alice"`.
    pub fn label(&self) -> String {
        format!("{}: {}", EntityKind::Participant, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_display() {
        assert_eq!(EntityKind::Participant.to_string(), "Participant");
        assert_eq!(EntityKind::Hideout.to_string(), "Hideout");
        assert_eq!(EntityKind::Chamber.to_string(), "Chamber");
    }

    #[test]
    fn entity_label_is_kind_prefixed() {
        let e = Entity::new(EntityKind::Hideout, "Under the rug");
        assert_eq!(e.label(), "Hideout: Under the rug");
    }

    #[test]
    fn empty_name_renders_degenerate_label() {
        let e = Entity::new(EntityKind::Chamber, "");
        assert_eq!(e.label(), "Chamber: ");
    }

    #[test]
    fn participant_starts_without_clues() {
        let p = Participant::new("Alice");
        assert_eq!(p.name, "Alice");
        assert!(p.clues.is_empty());
        assert_eq!(p.label(), "Participant: Alice");
    }

    #[test]
    fn clues_keep_insertion_order() {
        let mut p = Participant::new("Bob");
        p.receive_clue("Kitchen");
        p.receive_clue("Under the bed");
        p.receive_clue("Eve");
        assert_eq!(p.clues, vec!["Kitchen", "Under the bed", "Eve"]);
    }

    #[test]
    fn entity_serde_round_trip() {
        let e = Entity::new(EntityKind::Hideout, "In the closet");
        let json = serde_json::to_string(&e).unwrap();
        let back: Entity = serde_json::from_str(&json).unwrap();
        assert_eq!(e, back);
    }
}
