//! Reading `label<TAB>message` data files.

use std::fs;
use std::path::Path;

use crate::error::{ClassifierError, Result};
use crate::types::Label;

/// One line of a data file split into its first two tab-separated fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabeledLine<'a> {
    /// Raw first column.
    pub label_field: &'a str,
    /// Raw second column. Anything after a further tab is dropped.
    pub message: &'a str,
}

impl<'a> LabeledLine<'a> {
    /// Splits a line on tabs. Returns `None` when there are fewer than two fields.
    pub fn parse(line: &'a str) -> Option<Self> {
        let mut fields = line.split('\t');
        let label_field = fields.next()?;
        let message = fields.next()?;
        Some(Self {
            label_field,
            message,
        })
    }

    /// The label column, if it is exactly `ham` or `spam`.
    pub fn label(&self) -> Option<Label> {
        Label::from_field(self.label_field)
    }
}

/// Read a whole data, stopword or evaluation file into memory.
pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| ClassifierError::io(path, source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_fields() {
        let line = LabeledLine::parse("spam\tWINNER!! claim now").unwrap();
        assert_eq!(line.label_field, "spam");
        assert_eq!(line.message, "WINNER!! claim now");
        assert_eq!(line.label(), Some(Label::Spam));
    }

    #[test]
    fn test_parse_drops_extra_fields() {
        let line = LabeledLine::parse("ham\tfirst\tsecond").unwrap();
        assert_eq!(line.message, "first");
    }

    #[test]
    fn test_parse_without_tab() {
        assert!(LabeledLine::parse("ham i love cats").is_none());
        assert!(LabeledLine::parse("").is_none());
    }

    #[test]
    fn test_unknown_label_still_parses() {
        let line = LabeledLine::parse("HAM\thello").unwrap();
        assert_eq!(line.label(), None);
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_to_string("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, ClassifierError::Io { .. }));
    }
}
