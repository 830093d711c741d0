//! # Multinomial Naive Bayes Model
//!
//! Immutable trained parameters plus the log-space scorer.

use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::model::table::ConditionalTable;
use crate::model::trainer::{LabeledMessages, TrainingStats, estimate};
use crate::text::{Tokenizer, read_to_string};
use crate::types::{Label, PerLabel, Scores};
use crate::vocab::AttributeSet;

/// A trained ham/spam model.
#[derive(Debug, Clone)]
pub struct NaiveBayesModel {
    attributes: AttributeSet,
    prior: PerLabel<f64>,
    likelihoods: ConditionalTable,
    stats: TrainingStats,
    smoothing: f64,
    tokenizer: Tokenizer,
}

impl NaiveBayesModel {
    /// Estimate priors and smoothed likelihoods from a `label<TAB>message` corpus.
    ///
    /// # Errors
    /// - [`EmptyTrainingSet`](crate::ClassifierError::EmptyTrainingSet) if no line carries a
    ///   `ham` or `spam` label.
    /// - [`InvalidConfig`](crate::ClassifierError::InvalidConfig) if `smoothing` is not positive.
    ///
    /// # Examples
    /// ```
    /// use hamspam_core::model::NaiveBayesModel;
    /// use hamspam_core::vocab::AttributeSet;
    /// use hamspam_core::Label;
    ///
    /// let corpus = "ham\ti love cats\nspam\tbuy cheap pills now\n";
    /// let attributes = AttributeSet::collect(corpus, 1);
    /// let model = NaiveBayesModel::train(attributes, corpus, 1.0).unwrap();
    ///
    /// assert_eq!(model.classify("cheap pills"), Some(Label::Spam));
    /// ```
    pub fn train(attributes: AttributeSet, corpus: &str, smoothing: f64) -> Result<Self> {
        let tokenizer = Tokenizer::new();
        let gathered = LabeledMessages::gather(corpus, &tokenizer);
        let prior = gathered.prior()?;
        let likelihoods = estimate(&attributes, &gathered, smoothing)?;

        info!(
            ham_messages = gathered.stats.messages.ham,
            spam_messages = gathered.stats.messages.spam,
            skipped = gathered.stats.skipped_lines,
            attributes = attributes.len(),
            smoothing,
            "trained naive bayes model"
        );

        Ok(Self {
            attributes,
            prior,
            likelihoods,
            stats: gathered.stats,
            smoothing,
            tokenizer,
        })
    }

    /// Read `path` and [`train`](Self::train) on its contents.
    pub fn train_file<P: AsRef<Path>>(
        attributes: AttributeSet,
        path: P,
        smoothing: f64,
    ) -> Result<Self> {
        let corpus = read_to_string(path)?;
        Self::train(attributes, &corpus, smoothing)
    }

    /// Relative log-belief for each label.
    ///
    /// `text` goes through [`Tokenizer::extract_words`] only, so punctuation
    /// joins the words around it. Tokens outside the vocabulary are ignored.
    /// A label absent from training has a prior of zero and scores `-inf`.
    pub fn predict(&self, text: &str) -> Scores {
        let mut scores = self.prior.map(f64::ln);

        for word in self.tokenizer.extract_words(text) {
            if let Some(p) = self.likelihoods.get(&word) {
                debug_assert!(p.ham > 0.0 && p.spam > 0.0, "non-positive P({word}|_)");
                scores.ham += p.ham.ln();
                scores.spam += p.spam.ln();
            }
        }

        scores
    }

    /// The label `predict` favours, or `None` if both score the same.
    pub fn classify(&self, text: &str) -> Option<Label> {
        self.predict(text).best()
    }

    pub fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }

    pub fn prior(&self) -> PerLabel<f64> {
        self.prior
    }

    pub fn likelihoods(&self) -> &ConditionalTable {
        &self.likelihoods
    }

    pub fn stats(&self) -> &TrainingStats {
        &self.stats
    }

    pub fn smoothing(&self) -> f64 {
        self.smoothing
    }
}
