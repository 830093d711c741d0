//! # Accuracy Evaluation
//!
//! Scores every line of a labeled dataset and tallies the outcome.

use std::path::Path;

use tracing::{info, trace};

use crate::error::{ClassifierError, Result};
use crate::eval::report::EvaluationReport;
use crate::model::NaiveBayesModel;
use crate::text::{LabeledLine, Tokenizer, read_to_string};

/// Runs a trained model over labeled data.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    model: &'a NaiveBayesModel,
    tokenizer: Tokenizer,
}

impl<'a> Evaluator<'a> {
    pub fn new(model: &'a NaiveBayesModel) -> Self {
        Self {
            model,
            tokenizer: Tokenizer::new(),
        }
    }

    /// Evaluate a `label<TAB>message` dataset.
    ///
    /// Lines with fewer than two fields are skipped. Messages have
    /// punctuation replaced by spaces before scoring. A prediction is correct
    /// only when the true label scores strictly higher.
    ///
    /// # Errors
    /// [`EmptyEvaluationSet`](ClassifierError::EmptyEvaluationSet) if no line is valid.
    pub fn evaluate(&self, dataset: &str) -> Result<EvaluationReport> {
        let mut report = EvaluationReport::default();

        for (number, line) in dataset.lines().enumerate() {
            let Some(parsed) = LabeledLine::parse(line) else {
                trace!(line = number + 1, "skipping malformed evaluation line");
                continue;
            };

            let truth = parsed.label();
            let message = self.tokenizer.punctuation_to_space(parsed.message);
            let scores = self.model.predict(&message);
            report.record(truth, truth.is_some_and(|label| scores.favours(label)));
        }

        if report.total == 0 {
            return Err(ClassifierError::EmptyEvaluationSet);
        }

        info!(
            total = report.total,
            correct = report.correct,
            accuracy = ?report.accuracy(),
            "evaluated dataset"
        );
        Ok(report)
    }

    /// Read `path` and [`evaluate`](Self::evaluate) its contents.
    pub fn evaluate_file<P: AsRef<Path>>(&self, path: P) -> Result<EvaluationReport> {
        let dataset = read_to_string(path)?;
        self.evaluate(&dataset)
    }
}
