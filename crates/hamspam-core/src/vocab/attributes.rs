//! # Attribute Vocabulary
//!
//! The set of words the model knows about. Only these words receive
//! conditional probabilities and only these words move a prediction.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use tracing::{debug, info};

use crate::error::Result;
use crate::text::{Tokenizer, read_to_string};
use crate::vocab::stopwords::Stopwords;

/// Unique tokens forming the model's vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeSet {
    words: HashSet<String>,
}

impl AttributeSet {
    /// Collect every token occurring at least `min_frequency` times in `corpus`.
    ///
    /// The corpus is scanned as one blob, label column included, so the
    /// words `ham` and `spam` become attributes like any other.
    ///
    /// # Examples
    /// ```
    /// use hamspam_core::vocab::AttributeSet;
    ///
    /// let attributes = AttributeSet::collect("ham\tok lar\nspam\tWIN cash", 1);
    /// assert!(attributes.contains("cash"));
    /// assert!(attributes.contains("spam"));
    /// assert_eq!(attributes.len(), 6);
    /// ```
    pub fn collect(corpus: &str, min_frequency: usize) -> Self {
        let tokenizer = Tokenizer::new();
        let spaced = tokenizer.punctuation_to_space(corpus);

        let mut counts: HashMap<String, usize> = HashMap::new();
        for word in tokenizer.extract_words(&spaced) {
            *counts.entry(word).or_default() += 1;
        }
        let distinct = counts.len();

        let words: HashSet<String> = counts
            .into_iter()
            .filter(|(_, count)| *count >= min_frequency)
            .map(|(word, _)| word)
            .collect();

        info!(
            distinct,
            kept = words.len(),
            min_frequency,
            "collected attribute vocabulary"
        );
        Self { words }
    }

    /// Read `path` and [`collect`](Self::collect) its vocabulary.
    pub fn collect_from_file<P: AsRef<Path>>(path: P, min_frequency: usize) -> Result<Self> {
        let corpus = read_to_string(path)?;
        Ok(Self::collect(&corpus, min_frequency))
    }

    /// Drop every attribute that exactly matches a stopword.
    ///
    /// Returns how many attributes were removed.
    pub fn remove_stopwords(&mut self, stopwords: &Stopwords) -> usize {
        let before = self.words.len();
        self.words.retain(|word| !stopwords.contains(word));
        let removed = before - self.words.len();
        debug!(before, after = self.words.len(), removed, "removed stopwords");
        removed
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate attributes in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl FromIterator<String> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(str::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORPUS: &str = "ham\tI love cats, and cats love me.\n\
                          spam\tBuy cheap pills now!\n\
                          ham\tCats? I'm allergic.\n";

    #[test]
    fn test_two_line_corpus_vocabulary() {
        let attributes = AttributeSet::collect("ham\ti love cats\nspam\tbuy cheap pills now\n", 1);

        for word in ["i", "love", "cats", "buy", "cheap", "pills", "now"] {
            assert!(attributes.contains(word), "missing {word}");
        }
        // The label column is part of the scanned text.
        assert!(attributes.contains("ham"));
        assert!(attributes.contains("spam"));
        assert_eq!(attributes.len(), 9);
    }

    #[test]
    fn test_punctuation_splits_words() {
        let attributes = AttributeSet::collect(CORPUS, 1);
        // "I'm" becomes "i" and "m", never "im".
        assert!(attributes.contains("i"));
        assert!(attributes.contains("m"));
        assert!(!attributes.contains("im"));
        assert!(attributes.contains("cats"));
        assert!(!attributes.contains("cats,"));
    }

    #[test]
    fn test_min_frequency_filters() {
        let attributes = AttributeSet::collect(CORPUS, 2);
        let mut words: Vec<_> = attributes.iter().collect();
        words.sort_unstable();
        assert_eq!(words, ["cats", "ham", "i", "love"]);
    }

    #[test]
    fn test_raising_min_frequency_never_grows() {
        let mut previous = usize::MAX;
        for m in 0..6 {
            let size = AttributeSet::collect(CORPUS, m).len();
            assert!(size <= previous, "m={m} grew from {previous} to {size}");
            previous = size;
        }
    }

    #[test]
    fn test_zero_and_one_are_equivalent() {
        assert_eq!(AttributeSet::collect(CORPUS, 0), AttributeSet::collect(CORPUS, 1));
    }

    #[test]
    fn test_remove_stopwords_is_subset() {
        let mut attributes = AttributeSet::collect(CORPUS, 1);
        let before = attributes.clone();
        let stopwords = Stopwords::parse("i\nand\nme\nnotaword");

        let removed = attributes.remove_stopwords(&stopwords);

        assert_eq!(removed, 3);
        assert_eq!(attributes.len(), before.len() - 3);
        assert!(attributes.iter().all(|w| before.contains(w)));
        assert!(attributes.iter().all(|w| !stopwords.contains(w)));
    }

    #[test]
    fn test_collect_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("train.txt");
        std::fs::write(&path, CORPUS).unwrap();

        let attributes = AttributeSet::collect_from_file(&path, 1).unwrap();
        assert_eq!(attributes, AttributeSet::collect(CORPUS, 1));
    }
}
