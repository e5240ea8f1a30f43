//! Guess parsing.

use serde::{Deserialize, Serialize};

/// A submitted (participant, hideout, chamber) guess.
///
/// Fields are taken verbatim from the input line: no trimming, no case
/// folding. `"Alice, Kitchen"` and `"Alice,Kitchen"` name different
/// hideouts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guess {
    /// The guessed participant name.
    pub participant: String,
    /// The guessed hideout name.
    pub hideout: String,
    /// The guessed chamber name.
    pub chamber: String,
}

impl Guess {
    /// Build a guess from three names.
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

    /// Parse a guess line: exactly three comma-separated fields,
    /// interpreted positionally as participant, hideout, chamber.
    ///
    /// Returns `None` for any other field count. Fields are not trimmed.
    pub fn parse(line: &str) -> Option<Self> {
        let mut fields = line.split(',');
        let participant = fields.next()?;
        let hideout = fields.next()?;
        let chamber = fields.next()?;
        if fields.next().is_some() {
            return None;
        }
        Some(Self::new(participant, hideout, chamber))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_three_fields() {
        let guess = Guess::parse("Alice,Under the rug,Kitchen").unwrap();
        assert_eq!(guess.participant, "Alice");
        assert_eq!(guess.hideout, "Under the rug");
        assert_eq!(guess.chamber, "Kitchen");
    }

    #[test]
    fn parse_rejects_wrong_field_count() {
        assert_eq!(Guess::parse("only,two"), None);
        assert_eq!(Guess::parse("a,b,c,d"), None);
        assert_eq!(Guess::parse("no commas here"), None);
    }

    #[test]
    fn parse_does_not_trim() {
        let guess = Guess::parse("Alice, Under the rug,Kitchen").unwrap();
        assert_eq!(guess.hideout, " Under the rug");
    }

    #[test]
    fn parse_keeps_empty_fields() {
        let guess = Guess::parse(",,").unwrap();
        assert_eq!(guess, Guess::new("", "", ""));
    }

    #[test]
    fn guess_serde_round_trip() {
        let guess = Guess::new("Alice", "Under the rug", "Kitchen");
        let json = serde_json::to_string(&guess).unwrap();
        let back: Guess = serde_json::from_str(&json).unwrap();
        assert_eq!(guess, back);
    }
}
