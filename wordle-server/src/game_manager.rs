use std::sync::Arc;

use wordle_core::{compare, validate_guess, MAX_GUESSES};
use wordle_persistence::{Clock, GameRepository};
use wordle_types::{GameError, GameStatus, GameView, Player};

/// The game state machine: validates a submission, applies it to the
/// player's current game, and persists the result. The only transitions
/// are running -> running, running -> won, and running -> lost; nothing
/// leaves a terminal state.
pub struct GameService {
    repository: GameRepository,
    clock: Arc<dyn Clock>,
}

impl GameService {
    pub fn new(repository: GameRepository, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Apply a guess to the player's game for today.
    ///
    /// Guesses are lowercased before comparison. A malformed guess fails
    /// with `InvalidInput` and leaves all state untouched; a guess against
    /// a terminal or stale game fails with `GameNotActive` carrying the
    /// unchanged view. Dictionary validity is not checked here (see
    /// `validate_guess`).
    ///
    /// Two concurrent submissions for the same player can interleave
    /// between load and save; the last save wins and the other guess is
    /// lost. Accepted limitation of the per-key store contract.
    pub async fn submit_guess(&self, player: &Player, guess: &str) -> Result<GameView, GameError> {
        let guess = guess.to_lowercase();
        validate_guess(&guess)?;

        let mut game = self.repository.load(player).await?;

        // The date re-check is defensive: load never hands back a stale
        // record, but a terminal game for today must stay frozen.
        if game.status != GameStatus::Running || game.date != self.clock.today() {
            return Err(GameError::GameNotActive {
                game: GameView::from(&game),
            });
        }

        let result = compare(&game.word, &guess);
        let won = result.is_match;
        game.guesses.push(result);

        if won {
            game.status = GameStatus::Won;
        } else if game.guesses.len() >= MAX_GUESSES {
            game.status = GameStatus::Lost;
        }

        self.repository.save(&game).await?;
        tracing::info!(
            "Guess {} for {} -> {:?}",
            game.guesses.len(),
            player.storage_key(),
            game.status
        );

        Ok(GameView::from(&game))
    }

    /// Read-only view of the player's game for today. `None` when no
    /// record exists yet; never creates or mutates one.
    pub async fn current_game(&self, player: &Player) -> Result<Option<GameView>, GameError> {
        let record = self.repository.find(player).await?;
        Ok(record.as_ref().map(GameView::from))
    }
}
