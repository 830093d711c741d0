use std::collections::HashSet;
use std::path::Path;

use crate::error::Result;
use crate::text::read_to_string;

/// Words to exclude from the vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Stopwords {
    /// Parse a newline-delimited list.
    ///
    /// Lines end at `\n` or `\r\n`. Otherwise they are taken verbatim: no
    /// trimming, no case folding, no comments.
    pub fn parse(contents: &str) -> Self {
        Self {
            words: contents.lines().map(str::to_string).collect(),
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::parse(&read_to_string(path)?))
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
}
