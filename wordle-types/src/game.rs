use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::player::Player;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Running, // Guesses still accepted
    Won,     // Terminal
    Lost,    // Terminal
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackTag {
    Green,  // Correct letter in correct position
    Yellow, // Letter appears elsewhere in the word
    Gray,   // Letter absent from the word
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessResult {
    pub guess: String,
    pub matches: Vec<FeedbackTag>,
    pub is_match: bool,
}

/// One game per player per day. The stored record is the full source of
/// truth; saves overwrite it wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub player: Player,
    pub date: NaiveDate,
    pub status: GameStatus,
    pub word: String,
    pub guesses: Vec<GuessResult>,
}

/// The secret word shared by all players for one calendar day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyWord {
    pub word: String,
    pub date: NaiveDate,
}

/// Safe version of GameRecord that doesn't expose the secret word or the
/// player identity. Used for every HTTP response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameView {
    pub status: GameStatus,
    pub guesses: Vec<GuessResult>,
}

impl From<&GameRecord> for GameView {
    fn from(record: &GameRecord) -> Self {
        GameView {
            status: record.status.clone(),
            guesses: record.guesses.clone(),
        }
    }
}
