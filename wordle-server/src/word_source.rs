use async_trait::async_trait;
use base64::Engine;
use reqwest::Client;
use serde::Deserialize;

use wordle_persistence::WordSource;
use wordle_types::GameError;

use crate::config::Config;

#[derive(Debug, Deserialize)]
struct ContentsResponse {
    content: String,
}

/// Word-source provider backed by a remote content repository: reads the
/// word list file through the contents API, which returns the file body as
/// a line-wrapped base64 payload holding a JSON array of words.
pub struct ContentWordSource {
    client: Client,
    api_base: String,
    repo: String,
    path: String,
}

impl ContentWordSource {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            api_base: config.github_api_base.clone(),
            repo: config.words_repo.clone(),
            path: config.words_path.clone(),
        }
    }

    fn unavailable(reason: impl ToString) -> GameError {
        GameError::WordSourceUnavailable {
            reason: reason.to_string(),
        }
    }
}

#[async_trait]
impl WordSource for ContentWordSource {
    async fn fetch_words(&self) -> Result<Vec<String>, GameError> {
        let url = format!(
            "{}/repos/{}/contents/{}",
            self.api_base, self.repo, self.path
        );
        tracing::debug!("Fetching word list from {}", url);

        let response = self
            .client
            .get(&url)
            .header("User-Agent", "wordle-server")
            .header("Accept", "application/vnd.github+json")
            .send()
            .await
            .map_err(Self::unavailable)?;

        if !response.status().is_success() {
            return Err(Self::unavailable(format!(
                "content request returned {}",
                response.status()
            )));
        }

        let body: ContentsResponse = response.json().await.map_err(Self::unavailable)?;

        // The contents API wraps the base64 payload across lines.
        let encoded: String = body.content.split_whitespace().collect();
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(encoded.as_bytes())
            .map_err(Self::unavailable)?;

        let words: Vec<String> = serde_json::from_slice(&decoded).map_err(Self::unavailable)?;
        Ok(words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_host_maps_to_word_source_error() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            words_repo: "extendo/words".to_string(),
            words_path: "words.json".to_string(),
            // Reserved TLD, never resolves.
            github_api_base: "http://words.invalid".to_string(),
        };

        let source = ContentWordSource::new(&config);
        let err = source.fetch_words().await.unwrap_err();
        assert!(matches!(err, GameError::WordSourceUnavailable { .. }));
    }

    #[test]
    fn test_decodes_wrapped_base64_word_list() {
        // The same decode path fetch_words runs after the HTTP exchange.
        let payload = base64::engine::general_purpose::STANDARD
            .encode(serde_json::to_vec(&vec!["fiver", "heart"]).unwrap());
        let wrapped = format!("{}\n{}", &payload[..10], &payload[10..]);

        let encoded: String = wrapped.split_whitespace().collect();
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(encoded.as_bytes())
            .unwrap();
        let words: Vec<String> = serde_json::from_slice(&decoded).unwrap();

        assert_eq!(words, vec!["fiver", "heart"]);
    }
}
