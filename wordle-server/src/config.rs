use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Content repository holding the candidate word list, as `owner/repo`.
    pub words_repo: String,
    /// Path of the word list file within the repository.
    pub words_path: String,
    pub github_api_base: String,
}

impl Config {
    pub fn new() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("Invalid PORT"),
            words_repo: env::var("WORDS_REPO").unwrap_or_else(|_| "extendo/words".to_string()),
            words_path: env::var("WORDS_PATH").unwrap_or_else(|_| "words.json".to_string()),
            github_api_base: env::var("GITHUB_API_BASE")
                .unwrap_or_else(|_| "https://api.github.com".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
