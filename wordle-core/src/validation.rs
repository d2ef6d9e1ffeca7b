use wordle_types::GameError;

use crate::compare::WORD_LENGTH;

/// Check the shape of a submitted guess.
///
/// Only the length is enforced here. A dictionary-validity check against
/// the candidate word list is a planned extension point to be layered in
/// front of the game service; it is currently disabled and deliberately
/// not part of this contract.
pub fn validate_guess(guess: &str) -> Result<(), GameError> {
    let actual = guess.chars().count();
    if actual != WORD_LENGTH {
        return Err(GameError::InvalidInput {
            expected: WORD_LENGTH,
            actual,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_letter_guess_is_accepted() {
        assert!(validate_guess("heart").is_ok());
    }

    #[test]
    fn test_wrong_length_is_rejected() {
        for guess in ["", "hear", "hearts", "abcdefghij"] {
            let err = validate_guess(guess).unwrap_err();
            match err {
                GameError::InvalidInput { expected, actual } => {
                    assert_eq!(expected, 5);
                    assert_eq!(actual, guess.chars().count());
                }
                other => panic!("expected InvalidInput, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // five characters, more than five bytes
        assert!(validate_guess("crêpe").is_ok());
    }
}
