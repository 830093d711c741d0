use std::fmt;

use serde::{Deserialize, Serialize};

/// Target class of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// Legitimate message.
    Ham,
    /// Unsolicited message.
    Spam,
}

impl Label {
    /// Both labels, ham first.
    pub const ALL: [Label; 2] = [Label::Ham, Label::Spam];

    /// The label as it appears in the first column of a data file.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ham => "ham",
            Self::Spam => "spam",
        }
    }

    /// Parses a label column. Matching is exact and case-sensitive.
    #[must_use]
    pub fn from_field(field: &str) -> Option<Self> {
        match field {
            "ham" => Some(Self::Ham),
            "spam" => Some(Self::Spam),
            _ => None,
        }
    }

    /// The opposing label.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Ham => Self::Spam,
            Self::Spam => Self::Ham,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
