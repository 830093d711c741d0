//! # Classifier Pipeline
//!
//! Runs the whole training pipeline (vocabulary, optional stopword filter,
//! parameter estimation) and exposes scoring and evaluation on the result.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::ClassifierConfig;
use crate::error::Result;
use crate::eval::{EvaluationReport, Evaluator};
use crate::model::{NaiveBayesModel, RankedEntry};
use crate::text::read_to_string;
use crate::types::{Label, Scores};
use crate::vocab::{AttributeSet, Stopwords};

/// Vocabulary sizes observed while building the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyStats {
    /// Attributes after the frequency threshold.
    pub collected: usize,
    /// Attributes left after stopword removal, if a list was supplied.
    pub after_stopwords: Option<usize>,
}

impl VocabularyStats {
    /// Size of the vocabulary the model was trained with.
    #[must_use]
    pub fn final_size(&self) -> usize {
        self.after_stopwords.unwrap_or(self.collected)
    }
}

/// A ham/spam classifier trained from a labeled corpus.
#[derive(Debug, Clone)]
pub struct NbClassifier {
    config: ClassifierConfig,
    vocabulary: VocabularyStats,
    model: NaiveBayesModel,
}

impl NbClassifier {
    /// Train on corpus text, optionally filtering the vocabulary first.
    ///
    /// # Examples
    /// ```
    /// use hamspam_core::{ClassifierConfig, Label, NbClassifier};
    ///
    /// let corpus = "ham\tsee you at lunch\nspam\tfree prize, call now\n";
    /// let classifier = NbClassifier::from_corpus(corpus, None, ClassifierConfig::default()).unwrap();
    ///
    /// assert_eq!(classifier.classify("call now for a free prize"), Some(Label::Spam));
    /// ```
    pub fn from_corpus(
        corpus: &str,
        stopwords: Option<&Stopwords>,
        config: ClassifierConfig,
    ) -> Result<Self> {
        config.validate()?;

        let mut attributes = AttributeSet::collect(corpus, config.min_frequency);
        let collected = attributes.len();

        let after_stopwords = stopwords.map(|stopwords| {
            attributes.remove_stopwords(stopwords);
            attributes.len()
        });

        let vocabulary = VocabularyStats {
            collected,
            after_stopwords,
        };
        info!(
            collected,
            after_stopwords = ?after_stopwords,
            "vocabulary ready"
        );

        let model = NaiveBayesModel::train(attributes, corpus, config.smoothing)?;

        Ok(Self {
            config,
            vocabulary,
            model,
        })
    }

    /// Read the training file (and stopword file, if given) and train.
    pub fn from_files<P, Q>(training: P, stopwords: Option<Q>, config: ClassifierConfig) -> Result<Self>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        // Reject bad settings before touching the filesystem.
        config.validate()?;
        let corpus = read_to_string(training)?;
        let stopwords = stopwords.map(Stopwords::from_file).transpose()?;
        Self::from_corpus(&corpus, stopwords.as_ref(), config)
    }

    pub fn predict(&self, text: &str) -> Scores {
        self.model.predict(text)
    }

    pub fn classify(&self, text: &str) -> Option<Label> {
        self.model.classify(text)
    }

    pub fn evaluate(&self, dataset: &str) -> Result<EvaluationReport> {
        Evaluator::new(&self.model).evaluate(dataset)
    }

    pub fn evaluate_file<P: AsRef<Path>>(&self, path: P) -> Result<EvaluationReport> {
        Evaluator::new(&self.model).evaluate_file(path)
    }

    /// The `n` most probable `(token, label)` pairs in the model.
    pub fn top_probabilities(&self, n: usize) -> Vec<RankedEntry> {
        self.model.likelihoods().top(n)
    }

    pub fn vocabulary_stats(&self) -> VocabularyStats {
        self.vocabulary
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn model(&self) -> &NaiveBayesModel {
        &self.model
    }
}
