//! Parameter estimation for the Naive Bayes model.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::check_smoothing;
use crate::error::{ClassifierError, Result};
use crate::model::table::ConditionalTable;
use crate::text::{LabeledLine, Tokenizer};
use crate::types::{Label, PerLabel};
use crate::vocab::AttributeSet;

/// Counts gathered from the training corpus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingStats {
    /// Labeled messages per class.
    pub messages: PerLabel<usize>,
    /// Total tokens per class.
    pub words: PerLabel<usize>,
    /// Lines without a tab or with an unrecognized label.
    pub skipped_lines: usize,
}

/// Normalized training messages grouped by label.
#[derive(Debug, Default)]
pub(crate) struct LabeledMessages {
    pub messages: PerLabel<Vec<String>>,
    pub stats: TrainingStats,
}

impl LabeledMessages {
    /// Split the corpus into per-label messages.
    ///
    /// Each message is lowercased and has punctuation replaced by spaces.
    pub fn gather(corpus: &str, tokenizer: &Tokenizer) -> Self {
        let mut gathered = Self::default();

        for (number, line) in corpus.lines().enumerate() {
            let Some((label, message)) = LabeledLine::parse(line)
                .and_then(|parsed| parsed.label().map(|label| (label, parsed.message)))
            else {
                trace!(line = number + 1, "skipping unlabeled training line");
                gathered.stats.skipped_lines += 1;
                continue;
            };

            let message = tokenizer.punctuation_to_space(&message.to_lowercase());
            *gathered.stats.words.get_mut(label) += tokenizer.count_words(&message);
            *gathered.stats.messages.get_mut(label) += 1;
            gathered.messages.get_mut(label).push(message);
        }

        gathered
    }

    /// Relative frequency of each label among the labeled messages.
    pub fn prior(&self) -> Result<PerLabel<f64>> {
        let counts = self.stats.messages;
        let total = counts.ham + counts.spam;
        if total == 0 {
            return Err(ClassifierError::EmptyTrainingSet);
        }
        Ok(counts.map(|n| n as f64 / total as f64))
    }

    /// Occurrences of `attribute` as a substring of the label's messages.
    ///
    /// Matches are not restricted to whole tokens: `sun` is found in `sunny`.
    pub fn occurrences(&self, attribute: &str, label: Label) -> usize {
        self.messages
            .get(label)
            .iter()
            .map(|message| message.matches(attribute).count())
            .sum()
    }
}

/// Estimate the smoothed conditional table for every attribute.
///
/// `P(a|L) = (c(a,L) + k) / (words(L) + k * |attributes|)`
pub(crate) fn estimate(
    attributes: &AttributeSet,
    gathered: &LabeledMessages,
    smoothing: f64,
) -> Result<ConditionalTable> {
    check_smoothing(smoothing)?;

    let vocabulary = attributes.len() as f64;
    let denominators = gathered
        .stats
        .words
        .map(|words| words as f64 + smoothing * vocabulary);
    debug!(
        ham = denominators.ham,
        spam = denominators.spam,
        "smoothing denominators"
    );

    let mut table = ConditionalTable::default();
    for attribute in attributes.iter() {
        let probabilities = PerLabel::from_fn(|label| {
            let count = gathered.occurrences(attribute, label) as f64;
            (count + smoothing) / denominators.get(label)
        });
        table.insert(attribute.to_string(), probabilities);
    }

    // Only positivity is checked. Substring counts can exceed the word total,
    // so a cell may be above 1.
    if let Some(bad) = table.first_invalid() {
        return Err(ClassifierError::ModelInvariant {
            token: bad.token,
            label: bad.label,
            probability: bad.probability,
        });
    }

    Ok(table)
}
