//! # Word Tokenizer
//!
//! Turns raw message text into normalized word tokens.
//!
//! Two normalizations are offered and they are intentionally not the same:
//! [`Tokenizer::extract_words`] deletes punctuation outright, so `end.Start`
//! becomes the single token `endstart`, while
//! [`Tokenizer::punctuation_to_space`] turns each punctuation mark into a
//! space so the same text later yields `end` and `start`. Training and
//! evaluation run the second before the first; direct prediction does not.

/// Tokenizer for short text messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Create a new tokenizer instance.
    pub fn new() -> Self {
        Self
    }

    /// Split text into lowercase tokens with all ASCII punctuation removed.
    ///
    /// # Examples
    /// ```
    /// use hamspam_core::text::Tokenizer;
    ///
    /// let tokenizer = Tokenizer::new();
    /// assert_eq!(tokenizer.extract_words("Don't STOP now!"), ["dont", "stop", "now"]);
    /// ```
    pub fn extract_words(&self, text: &str) -> Vec<String> {
        self.normalize(text)
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    /// Number of tokens [`extract_words`](Self::extract_words) would return.
    pub fn count_words(&self, text: &str) -> usize {
        self.normalize(text).split_whitespace().count()
    }

    /// Replace every ASCII punctuation character with a single space.
    ///
    /// Case and all other characters are left untouched.
    pub fn punctuation_to_space(&self, text: &str) -> String {
        text.chars()
            .map(|c| if is_punctuation(c) { ' ' } else { c })
            .collect()
    }

    fn normalize(&self, text: &str) -> String {
        text.to_lowercase()
            .chars()
            .filter(|c| !is_punctuation(*c))
            .collect()
    }
}

/// `!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~`
fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_words_basic() {
        let tokenizer = Tokenizer::new();
        let words = tokenizer.extract_words("Free entry in 2 a wkly comp!");
        assert_eq!(words, ["free", "entry", "in", "2", "a", "wkly", "comp"]);
    }

    #[test]
    fn test_extract_words_joins_across_punctuation() {
        let tokenizer = Tokenizer::new();
        assert_eq!(tokenizer.extract_words("end.Start"), ["endstart"]);
        assert_eq!(tokenizer.extract_words("U.S.A."), ["usa"]);
    }

    #[test]
    fn test_punctuation_to_space_keeps_boundaries() {
        let tokenizer = Tokenizer::new();
        let spaced = tokenizer.punctuation_to_space("end.Start");
        assert_eq!(spaced, "end Start");
        assert_eq!(tokenizer.extract_words(&spaced), ["end", "start"]);
    }

    #[test]
    fn test_punctuation_to_space_is_one_for_one() {
        let tokenizer = Tokenizer::new();
        let input = "a,b;;c\td";
        let spaced = tokenizer.punctuation_to_space(input);
        assert_eq!(spaced, "a b  c\td");
        assert_eq!(spaced.chars().count(), input.chars().count());
    }

    #[test]
    fn test_extract_words_empty() {
        let tokenizer = Tokenizer::new();
        assert!(tokenizer.extract_words("").is_empty());
        assert!(tokenizer.extract_words("   \t\n").is_empty());
    }

    #[test]
    fn test_extract_words_only_punctuation() {
        let tokenizer = Tokenizer::new();
        assert!(tokenizer.extract_words("!!! ... ???").is_empty());
    }

    #[test]
    fn test_non_ascii_symbols_survive() {
        let tokenizer = Tokenizer::new();
        assert_eq!(tokenizer.extract_words("Win £100 NOW"), ["win", "£100", "now"]);
    }

    #[test]
    fn test_count_words_matches_extract() {
        let tokenizer = Tokenizer::new();
        let text = "Ok lar... Joking wif u oni...";
        assert_eq!(
            tokenizer.count_words(text),
            tokenizer.extract_words(text).len()
        );
    }
}
