use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;

use wordle_types::GameError;

/// The narrow persistence interface the game consumes: JSON values keyed
/// by string, atomic per key. Nothing here guarantees isolation across a
/// load, mutate, save sequence.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Value>, GameError>;
    async fn set(&self, key: &str, value: Value) -> Result<(), GameError>;
}

/// In-process store backing the trait with a concurrent map.
#[derive(Default)]
pub struct MemoryStore {
    values: DashMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, GameError> {
        Ok(self.values.get(key).map(|entry| entry.value().clone()))
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), GameError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}
