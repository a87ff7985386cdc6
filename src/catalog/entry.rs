//! A single catalog entry.

use serde::{Deserialize, Serialize};

/// An immutable term with its definition.
///
/// ```
/// use term_match::catalog::TermEntry;
///
/// let entry = TermEntry::new("Big Data", "Large datasets analyzed computationally.");
/// assert!(entry.matches("Large datasets analyzed computationally."));
/// assert!(!entry.matches("Training machines to learn from data."));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TermEntry {
    /// The term shown on the card face.
    pub term: String,

    /// The correct definition.
    pub definition: String,
}

impl TermEntry {
    /// Create a new entry.
    #[must_use]
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
        }
    }

    /// Exact comparison against a chosen definition.
    #[must_use]
    pub fn matches(&self, definition: &str) -> bool {
        self.definition == definition
    }

    /// True when either field is empty or whitespace.
    pub(crate) fn is_blank(&self) -> bool {
        self.term.trim().is_empty() || self.definition.trim().is_empty()
    }
}

impl std::fmt::Display for TermEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.term, self.definition)
    }
}
