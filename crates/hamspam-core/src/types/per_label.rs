use serde::{Deserialize, Serialize};

use super::label::Label;

/// One value for each label.
///
/// Used for priors, per-label counts and prediction scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PerLabel<T> {
    pub ham: T,
    pub spam: T,
}

impl<T> PerLabel<T> {
    #[must_use]
    pub fn new(ham: T, spam: T) -> Self {
        Self { ham, spam }
    }

    /// Builds a pair by evaluating `f` once per label.
    pub fn from_fn(mut f: impl FnMut(Label) -> T) -> Self {
        Self {
            ham: f(Label::Ham),
            spam: f(Label::Spam),
        }
    }

    pub fn get(&self, label: Label) -> &T {
        match label {
            Label::Ham => &self.ham,
            Label::Spam => &self.spam,
        }
    }

    pub fn get_mut(&mut self, label: Label) -> &mut T {
        match label {
            Label::Ham => &mut self.ham,
            Label::Spam => &mut self.spam,
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> PerLabel<U> {
        PerLabel {
            ham: f(self.ham),
            spam: f(self.spam),
        }
    }

    /// Iterates `(label, value)` pairs, ham first.
    pub fn iter(&self) -> impl Iterator<Item = (Label, &T)> {
        [(Label::Ham, &self.ham), (Label::Spam, &self.spam)].into_iter()
    }
}

/// Unnormalized log-likelihood per label, as returned by the scorer.
pub type Scores = PerLabel<f64>;

impl PerLabel<f64> {
    /// Returns `true` if `label` scores strictly higher than the other label.
    #[must_use]
    pub fn favours(&self, label: Label) -> bool {
        *self.get(label) > *self.get(label.other())
    }

    /// The label with the strictly higher score, or `None` on a tie.
    #[must_use]
    pub fn best(&self) -> Option<Label> {
        Label::ALL.into_iter().find(|&label| self.favours(label))
    }

    /// Sum of both values.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.ham + self.spam
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_and_get_mut_address_the_right_slot() {
        let mut counts = PerLabel::new(1usize, 2usize);
        assert_eq!(*counts.get(Label::Ham), 1);
        assert_eq!(*counts.get(Label::Spam), 2);

        *counts.get_mut(Label::Spam) += 5;
        assert_eq!(counts.spam, 7);
    }

    #[test]
    fn best_requires_strict_win() {
        assert_eq!(PerLabel::new(-1.0, -2.0).best(), Some(Label::Ham));
        assert_eq!(PerLabel::new(-3.0, -2.0).best(), Some(Label::Spam));
        assert_eq!(PerLabel::new(-2.0, -2.0).best(), None);
    }

    #[test]
    fn tie_favours_neither() {
        let scores = Scores::new(0.0, 0.0);
        assert!(!scores.favours(Label::Ham));
        assert!(!scores.favours(Label::Spam));
    }

    #[test]
    fn from_fn_and_iter_agree() {
        let pair = PerLabel::from_fn(|label| label.as_str().len());
        let collected: Vec<_> = pair.iter().map(|(l, v)| (l, *v)).collect();
        assert_eq!(collected, vec![(Label::Ham, 3), (Label::Spam, 4)]);
    }
}
