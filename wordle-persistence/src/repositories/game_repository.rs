use std::sync::Arc;

use wordle_types::{GameError, GameRecord, GameStatus, Player};

use crate::clock::Clock;
use crate::selector::WordSelector;
use crate::store::KeyValueStore;

/// Loads and saves the per-player game record, applying the day-rollover
/// rule: a stored record dated before today is treated as expired and
/// replaced on the next save.
pub struct GameRepository {
    store: Arc<dyn KeyValueStore>,
    selector: WordSelector,
    clock: Arc<dyn Clock>,
}

impl GameRepository {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        selector: WordSelector,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            selector,
            clock,
        }
    }

    /// Read-only lookup of today's record. Returns `None` when nothing is
    /// stored for the player, the stored value fails to decode, or the
    /// record belongs to an earlier day.
    pub async fn find(&self, player: &Player) -> Result<Option<GameRecord>, GameError> {
        let key = player.storage_key();
        let Some(value) = self.store.get(&key).await? else {
            return Ok(None);
        };

        let record: GameRecord = match serde_json::from_value(value) {
            Ok(record) => record,
            Err(err) => {
                tracing::warn!("Discarding unreadable game record at {}: {}", key, err);
                return Ok(None);
            }
        };

        if record.date != self.clock.today() {
            return Ok(None);
        }
        Ok(Some(record))
    }

    /// The player's current game, synthesizing a fresh one on first access
    /// of the day. The synthesized record is not persisted here; that only
    /// happens through `save` after a state transition.
    pub async fn load(&self, player: &Player) -> Result<GameRecord, GameError> {
        if let Some(record) = self.find(player).await? {
            return Ok(record);
        }

        let word = self.selector.get_word().await?;
        Ok(GameRecord {
            player: player.clone(),
            date: self.clock.today(),
            status: GameStatus::Running,
            word,
            guesses: Vec::new(),
        })
    }

    /// Overwrite the stored record at the player's key with the full
    /// current record. Last write wins.
    pub async fn save(&self, record: &GameRecord) -> Result<(), GameError> {
        let value = serde_json::to_value(record).map_err(|err| GameError::StoreUnavailable {
            reason: err.to_string(),
        })?;
        self.store.set(&record.player.storage_key(), value).await
    }
}
