use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{Label, PerLabel};

/// Smoothed `P(token | label)` for every attribute.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConditionalTable {
    entries: HashMap<String, PerLabel<f64>>,
}

/// One `(token, label)` cell of a [`ConditionalTable`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub token: String,
    pub label: Label,
    pub probability: f64,
}

impl ConditionalTable {
    pub(crate) fn insert(&mut self, token: String, probabilities: PerLabel<f64>) {
        self.entries.insert(token, probabilities);
    }

    /// Both label probabilities for `token`, if it is an attribute.
    pub fn get(&self, token: &str) -> Option<&PerLabel<f64>> {
        self.entries.get(token)
    }

    pub fn probability(&self, token: &str, label: Label) -> Option<f64> {
        self.get(token).map(|p| *p.get(label))
    }

    /// Number of attributes (each holds one entry per label).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PerLabel<f64>)> {
        self.entries.iter().map(|(token, p)| (token.as_str(), p))
    }

    /// The `n` most probable `(token, label)` cells.
    ///
    /// Sorted by probability descending; equal probabilities are ordered by
    /// token, then label, so the result does not depend on hash order.
    pub fn top(&self, n: usize) -> Vec<RankedEntry> {
        let mut cells: Vec<(&str, Label, f64)> = self
            .iter()
            .flat_map(|(token, p)| p.iter().map(move |(label, &prob)| (token, label, prob)))
            .collect();

        cells.sort_by(|a, b| {
            b.2.total_cmp(&a.2)
                .then_with(|| a.0.cmp(b.0))
                .then_with(|| a.1.cmp(&b.1))
        });

        cells
            .into_iter()
            .take(n)
            .map(|(token, label, probability)| RankedEntry {
                token: token.to_string(),
                label,
                probability,
            })
            .collect()
    }

    /// Returns the first cell that is not strictly positive and finite.
    pub(crate) fn first_invalid(&self) -> Option<RankedEntry> {
        self.iter().find_map(|(token, p)| {
            p.iter()
                .find(|(_, prob)| !is_valid_probability(**prob))
                .map(|(label, &probability)| RankedEntry {
                    token: token.to_string(),
                    label,
                    probability,
                })
        })
    }
}

fn is_valid_probability(p: f64) -> bool {
    p.is_finite() && p > 0.0
}
