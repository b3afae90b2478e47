// ============================================================
// Layer 4 - Word Tokenizer
// ============================================================
// Splits a message into the tokens the TF-IDF vocabulary is
// built from. The same function runs at training time and at
// prediction time, so both sides always agree on what a
// "word" is.
//
// Rules (applied in order):
//   1. Lowercase the whole message
//   2. Keep every run of 2 or more Unicode word characters
//      (letters, digits, underscore)
//   3. Everything else (punctuation, single characters,
//      whitespace) is dropped
//
// Reference: regex crate documentation (Unicode classes)

use once_cell::sync::Lazy;
use regex::Regex;

static TOKEN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b\w\w+\b").expect("token regex should be valid")
});

/// Tokenize a message into lowercase words of length >= 2.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_REGEX
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_splits() {
        assert_eq!(tokenize("Win FREE Money"), vec!["win", "free", "money"]);
    }

    #[test]
    fn test_drops_single_characters() {
        // "a" and "I" are too short to be tokens
        assert_eq!(tokenize("I have a car"), vec!["have", "car"]);
    }

    #[test]
    fn test_punctuation_is_a_separator() {
        assert_eq!(
            tokenize("Claim now!!! Call 0800-123."),
            vec!["claim", "now", "call", "0800", "123"]
        );
    }

    #[test]
    fn test_unicode_words() {
        assert_eq!(tokenize("Grüße aus München"), vec!["grüße", "aus", "münchen"]);
    }

    #[test]
    fn test_empty_string() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  ! ? ").is_empty());
    }
}
