//! Game engine for Verdacht, a text-driven deduction game.
//!
//! A session hides a secret (participant, hideout, chamber) combination,
//! deals every other entity name out as clues, and then cycles through
//! participants: roll a die, submit a guess, repeat until someone names
//! the exact secret triple.
//!
//! The engine never touches stdin or stdout. [`GameSession::prompt`]
//! and [`GameSession::process`] return strings; a frontend decides how
//! to present them. All randomness flows from the seed in
//! [`GameConfig`], so any game is reproducible.

/// Clue pool construction and dealing.
pub mod clues;
/// Session configuration (seed, clues per participant).
pub mod config;
/// Dice rolling.
pub mod dice;
/// Error types for the engine.
pub mod error;
/// Guess parsing.
pub mod guess;
/// The hidden secret combination.
pub mod secret;
/// The turn-loop session state machine.
pub mod session;

pub use clues::{build_clue_pool, deal_clues, deal_from_pool};
pub use config::GameConfig;
pub use dice::Die;
pub use error::{GameError, GameResult};
pub use guess::Guess;
pub use secret::SecretCombination;
pub use session::{GameSession, TurnPhase};
