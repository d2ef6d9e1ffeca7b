use serde::{Deserialize, Serialize};

/// Sentinel login used when a request carries no identity headers,
/// so anonymous and test contexts still map to a stable store key.
pub const ANONYMOUS_LOGIN: &str = "anonymous";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: Option<i64>,
    pub login: Option<String>,
}

impl Player {
    pub fn new(id: Option<i64>, login: Option<String>) -> Self {
        Self { id, login }
    }

    /// Stable per-player key for the key-value store.
    pub fn storage_key(&self) -> String {
        format!("games.{}", self.login.as_deref().unwrap_or(ANONYMOUS_LOGIN))
    }
}
