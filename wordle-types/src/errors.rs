use thiserror::Error;

use crate::game::GameView;

/// Failures surfaced by the game core. The request layer decides how each
/// maps to a transport status; the core never retries.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("guess must be exactly {expected} letters, got {actual}")]
    InvalidInput { expected: usize, actual: usize },

    /// The player's current game is terminal or stale. The submission is a
    /// no-op; the carried view is the game unchanged.
    #[error("game is not accepting guesses")]
    GameNotActive { game: GameView },

    #[error("word source unavailable: {reason}")]
    WordSourceUnavailable { reason: String },

    #[error("key-value store unavailable: {reason}")]
    StoreUnavailable { reason: String },
}
