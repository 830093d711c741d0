//! Result rendering for the CLI.

use std::io::Write;

use hamspam_core::{ClassifierConfig, EvaluationReport, Label, RankedEntry, VocabularyStats};
use serde::Serialize;

/// Pairs a well-trained model on the SMS corpus is expected to rank highest.
pub const EXPECTED_TOP: [(&str, Label); 3] =
    [("i", Label::Ham), ("you", Label::Ham), ("to", Label::Ham)];

/// Everything a run prints.
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub config: ClassifierConfig,
    pub vocabulary: VocabularyStats,
    pub evaluation: EvaluationReport,
    pub accuracy: Option<f64>,
    pub matches_expected_top: bool,
    pub top: Vec<RankedEntry>,
}

impl RunSummary {
    pub fn new(
        config: ClassifierConfig,
        vocabulary: VocabularyStats,
        evaluation: EvaluationReport,
        top: Vec<RankedEntry>,
    ) -> Self {
        Self {
            config,
            vocabulary,
            accuracy: evaluation.accuracy(),
            evaluation,
            matches_expected_top: matches_expected(&top),
            top,
        }
    }

    /// Vocabulary size(s), accuracy, the sanity flag and the top pairs, one per line.
    pub fn write_text<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "{}", self.vocabulary.collected)?;
        if let Some(after) = self.vocabulary.after_stopwords {
            writeln!(out, "{after}")?;
        }
        match self.accuracy {
            Some(accuracy) => writeln!(out, "{accuracy}")?,
            None => writeln!(out, "n/a")?,
        }
        writeln!(out, "{}", if self.matches_expected_top { "True" } else { "False" })?;
        writeln!(out, "{}", format_pairs(&self.top))
    }

    pub fn write_json<W: Write>(&self, out: &mut W) -> serde_json::Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out).map_err(serde_json::Error::io)
    }
}

/// Whether the first three entries are exactly [`EXPECTED_TOP`].
pub fn matches_expected(top: &[RankedEntry]) -> bool {
    top.len() >= EXPECTED_TOP.len()
        && top
            .iter()
            .zip(EXPECTED_TOP)
            .all(|(entry, (token, label))| entry.token == token && entry.label == label)
}

/// `[('i', 'ham'), ('you', 'ham')]`
pub fn format_pairs(top: &[RankedEntry]) -> String {
    let pairs: Vec<String> = top
        .iter()
        .map(|entry| format!("('{}', '{}')", entry.token, entry.label))
        .collect();
    format!("[{}]", pairs.join(", "))
}
