use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{Label, PerLabel};

/// Outcome of running the scorer over a labeled dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Lines with at least two tab-separated fields.
    pub total: usize,
    /// Lines whose true label strictly outscored the other.
    pub correct: usize,
    /// Wrong or tied predictions, keyed by the true label.
    pub misclassified: PerLabel<usize>,
    /// Valid lines whose label column was neither `ham` nor `spam`.
    pub unrecognized: usize,
}

impl EvaluationReport {
    pub(crate) fn record(&mut self, truth: Option<Label>, correct: bool) {
        self.total += 1;
        match truth {
            Some(_) if correct => self.correct += 1,
            Some(label) => *self.misclassified.get_mut(label) += 1,
            None => self.unrecognized += 1,
        }
    }

    /// Percentage of valid lines classified correctly, in `[0, 100]`.
    ///
    /// `None` when no line was recorded.
    #[must_use]
    pub fn accuracy(&self) -> Option<f64> {
        (self.total > 0).then(|| self.correct as f64 / self.total as f64 * 100.0)
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} correct", self.correct, self.total)?;
        if let Some(accuracy) = self.accuracy() {
            write!(f, " ({accuracy:.4}%)")?;
        }
        write!(
            f,
            ", missed ham={}, missed spam={}",
            self.misclassified.ham, self.misclassified.spam
        )?;
        if self.unrecognized > 0 {
            write!(f, ", unrecognized={}", self.unrecognized)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_tallies_outcomes() {
        let mut report = EvaluationReport::default();
        report.record(Some(Label::Ham), true);
        report.record(Some(Label::Ham), false);
        report.record(Some(Label::Spam), false);
        report.record(None, false);

        assert_eq!(report.total, 4);
        assert_eq!(report.correct, 1);
        assert_eq!(report.misclassified, PerLabel::new(1, 1));
        assert_eq!(report.unrecognized, 1);
        assert_eq!(report.accuracy(), Some(25.0));
    }

    #[test]
    fn report_display() {
        let report = EvaluationReport {
            total: 8,
            correct: 6,
            misclassified: PerLabel::new(1, 1),
            unrecognized: 0,
        };
        let display = report.to_string();
        assert!(display.contains("6/8"));
        assert!(display.contains("75.0000%"));
        assert!(!display.contains("unrecognized"));
    }

    #[test]
    fn empty_report_has_no_accuracy() {
        let report = EvaluationReport::default();
        assert_eq!(report.accuracy(), None);
        assert_eq!(report.to_string(), "0/0 correct, missed ham=0, missed spam=0");
    }

    #[test]
    fn report_serializes_misclassified_by_label() {
        let report = EvaluationReport {
            total: 3,
            correct: 1,
            misclassified: PerLabel::new(2, 0),
            unrecognized: 0,
        };
        let json = serde_json::to_value(report).unwrap();
        assert_eq!(json["misclassified"]["ham"], 2);
        assert_eq!(json["correct"], 1);
    }
}
