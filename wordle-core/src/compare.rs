use wordle_types::{FeedbackTag, GuessResult};

/// Every secret word and guess is exactly five letters.
pub const WORD_LENGTH: usize = 5;

/// A game ends in a loss after the sixth unsuccessful guess.
pub const MAX_GUESSES: usize = 6;

/// Compare a guess against the secret word, producing one feedback tag per
/// letter position.
///
/// A letter in the right position is green; a letter present anywhere in
/// the word is yellow; anything else is gray. Yellows are not budgeted
/// against duplicates: a letter occurring once in the word but twice in
/// the guess can earn two yellows. That is the served contract, so it
/// stays as-is.
///
/// The caller guarantees both strings are `WORD_LENGTH` characters and
/// case-normalized.
pub fn compare(word: &str, guess: &str) -> GuessResult {
    let word_chars: Vec<char> = word.chars().collect();

    let matches: Vec<FeedbackTag> = guess
        .chars()
        .enumerate()
        .map(|(i, ch)| {
            if word_chars.get(i) == Some(&ch) {
                FeedbackTag::Green
            } else if word_chars.contains(&ch) {
                FeedbackTag::Yellow
            } else {
                FeedbackTag::Gray
            }
        })
        .collect();

    let is_match = matches.iter().all(|tag| *tag == FeedbackTag::Green);

    GuessResult {
        guess: guess.to_string(),
        matches,
        is_match,
    }
}
