use thiserror::Error;

use vd_core::EntityKind;

/// Alias for `Result<T, GameError>`.
pub type GameResult<T> = Result<T, GameError>;

/// Errors that can occur when setting up a game.
///
/// Runtime input is never an error: malformed commands and guesses are
/// absorbed by the turn loop. Only construction can fail.
#[derive(Debug, Error)]
pub enum GameError {
    /// A catalog handed to the session had no entries to choose from.
    #[error("empty catalog: no {0} entries to choose a secret from")]
    EmptyCatalog(EntityKind),
}
