use std::sync::Arc;

use async_trait::async_trait;
use rand::Rng;

use wordle_types::{DailyWord, GameError};

use crate::clock::Clock;
use crate::store::KeyValueStore;

/// Store key of the shared daily word record.
pub const DAILY_WORD_KEY: &str = "word";

/// External provider of the candidate word list.
#[async_trait]
pub trait WordSource: Send + Sync {
    async fn fetch_words(&self) -> Result<Vec<String>, GameError>;
}

/// Uniform index selection over `[0, len)`. Injected so word selection is
/// deterministic under test.
pub trait IndexPicker: Send + Sync {
    fn pick(&self, len: usize) -> usize;
}

pub struct RandomPicker;

impl IndexPicker for RandomPicker {
    fn pick(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Picks and memoizes the secret word for the current day. The word is
/// selected at most once per day and shared by every player until
/// rollover.
pub struct WordSelector {
    store: Arc<dyn KeyValueStore>,
    source: Arc<dyn WordSource>,
    clock: Arc<dyn Clock>,
    picker: Arc<dyn IndexPicker>,
}

impl WordSelector {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        source: Arc<dyn WordSource>,
        clock: Arc<dyn Clock>,
        picker: Arc<dyn IndexPicker>,
    ) -> Self {
        Self {
            store,
            source,
            clock,
            picker,
        }
    }

    /// Today's secret word. Returns the stored word unchanged for the rest
    /// of the day; on first access of a day, fetches the candidate list,
    /// picks one uniformly, and persists the new daily record.
    pub async fn get_word(&self) -> Result<String, GameError> {
        let today = self.clock.today();

        if let Some(value) = self.store.get(DAILY_WORD_KEY).await? {
            match serde_json::from_value::<DailyWord>(value) {
                Ok(record) if record.date == today => return Ok(record.word),
                Ok(_) => {} // stale record, reselect below
                Err(err) => {
                    tracing::warn!("Discarding unreadable daily word record: {}", err);
                }
            }
        }

        let words = self.source.fetch_words().await?;
        if words.is_empty() {
            return Err(GameError::WordSourceUnavailable {
                reason: "candidate word list is empty".to_string(),
            });
        }

        let word = words[self.picker.pick(words.len())].clone();
        tracing::info!("Selected daily word for {}", today);

        let record = DailyWord {
            word: word.clone(),
            date: today,
        };
        let value =
            serde_json::to_value(&record).map_err(|err| GameError::StoreUnavailable {
                reason: err.to_string(),
            })?;
        self.store.set(DAILY_WORD_KEY, value).await?;

        Ok(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::store::MemoryStore;
    use chrono::NaiveDate;
    use std::sync::Mutex;

    struct StaticWords(Vec<&'static str>);

    #[async_trait]
    impl WordSource for StaticWords {
        async fn fetch_words(&self) -> Result<Vec<String>, GameError> {
            Ok(self.0.iter().map(|w| w.to_string()).collect())
        }
    }

    struct FailingWords;

    #[async_trait]
    impl WordSource for FailingWords {
        async fn fetch_words(&self) -> Result<Vec<String>, GameError> {
            Err(GameError::WordSourceUnavailable {
                reason: "status 500".to_string(),
            })
        }
    }

    /// Counts fetches so tests can assert the provider is consulted at
    /// most once per day.
    struct CountingWords {
        words: Vec<&'static str>,
        fetches: Mutex<usize>,
    }

    #[async_trait]
    impl WordSource for CountingWords {
        async fn fetch_words(&self) -> Result<Vec<String>, GameError> {
            *self.fetches.lock().unwrap() += 1;
            Ok(self.words.iter().map(|w| w.to_string()).collect())
        }
    }

    struct FixedPicker(usize);

    impl IndexPicker for FixedPicker {
        fn pick(&self, len: usize) -> usize {
            self.0 % len
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2022, 3, d).unwrap()
    }

    fn selector_with(
        store: Arc<dyn KeyValueStore>,
        source: Arc<dyn WordSource>,
        date: NaiveDate,
        index: usize,
    ) -> WordSelector {
        WordSelector::new(
            store,
            source,
            Arc::new(FixedClock(date)),
            Arc::new(FixedPicker(index)),
        )
    }

    #[tokio::test]
    async fn test_selects_and_persists_word() {
        let store = Arc::new(MemoryStore::new());
        let selector = selector_with(
            store.clone(),
            Arc::new(StaticWords(vec!["fiver", "heart"])),
            day(14),
            1,
        );

        assert_eq!(selector.get_word().await.unwrap(), "heart");

        let stored: DailyWord =
            serde_json::from_value(store.get(DAILY_WORD_KEY).await.unwrap().unwrap()).unwrap();
        assert_eq!(stored.word, "heart");
        assert_eq!(stored.date, day(14));
    }

    #[tokio::test]
    async fn test_idempotent_within_a_day() {
        let store = Arc::new(MemoryStore::new());
        let source = Arc::new(CountingWords {
            words: vec!["fiver", "heart", "tears"],
            fetches: Mutex::new(0),
        });
        let selector = selector_with(store, source.clone(), day(14), 0);

        let first = selector.get_word().await.unwrap();
        for _ in 0..5 {
            assert_eq!(selector.get_word().await.unwrap(), first);
        }
        assert_eq!(*source.fetches.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_reselects_after_rollover() {
        let store = Arc::new(MemoryStore::new());
        let words = Arc::new(StaticWords(vec!["fiver", "heart"]));

        let yesterday = selector_with(store.clone(), words.clone(), day(14), 0);
        assert_eq!(yesterday.get_word().await.unwrap(), "fiver");

        // Next day, a different pick replaces the stale record.
        let today = selector_with(store.clone(), words, day(15), 1);
        assert_eq!(today.get_word().await.unwrap(), "heart");

        let stored: DailyWord =
            serde_json::from_value(store.get(DAILY_WORD_KEY).await.unwrap().unwrap()).unwrap();
        assert_eq!(stored.date, day(15));
    }

    #[tokio::test]
    async fn test_provider_failure_propagates() {
        let selector = selector_with(
            Arc::new(MemoryStore::new()),
            Arc::new(FailingWords),
            day(14),
            0,
        );

        let err = selector.get_word().await.unwrap_err();
        assert!(matches!(err, GameError::WordSourceUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_empty_word_list_is_an_error() {
        let selector = selector_with(
            Arc::new(MemoryStore::new()),
            Arc::new(StaticWords(vec![])),
            day(14),
            0,
        );

        let err = selector.get_word().await.unwrap_err();
        assert!(matches!(err, GameError::WordSourceUnavailable { .. }));
    }
}
