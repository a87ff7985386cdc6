//! Validated term catalog.
//!
//! The `TermCatalog` stores entries in a fixed order and never changes
//! after construction. Validation happens once, up front, so the round
//! engine can rely on unique terms and unique definitions.

use rustc_hash::FxHashSet;

use super::builtin::AI_TERMS;
use super::entry::TermEntry;
use crate::core::{EngineError, Result};

/// Ordered, read-only list of term entries.
///
/// ## Example
///
/// ```
/// use term_match::catalog::{TermCatalog, TermEntry};
///
/// let catalog = TermCatalog::builtin();
/// assert_eq!(catalog.size(), 5);
/// assert_eq!(catalog.all()[4].term, "Big Data");
///
/// let dup = TermCatalog::new(vec![
///     TermEntry::new("A", "one"),
///     TermEntry::new("A", "two"),
/// ]);
/// assert!(dup.is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TermCatalog {
    entries: Vec<TermEntry>,
}

impl TermCatalog {
    /// Build a catalog, rejecting empty, blank, or duplicate entries.
    ///
    /// A catalog smaller than a round's candidate count is still valid
    /// here; the engine reports that when a round starts.
    pub fn new(entries: Vec<TermEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(EngineError::EmptyCatalog);
        }

        let mut terms = FxHashSet::default();
        let mut definitions = FxHashSet::default();

        for (index, entry) in entries.iter().enumerate() {
            if entry.is_blank() {
                return Err(EngineError::EmptyField { index });
            }
            if !terms.insert(entry.term.as_str()) {
                return Err(EngineError::DuplicateTerm(entry.term.clone()));
            }
            if !definitions.insert(entry.definition.as_str()) {
                return Err(EngineError::DuplicateDefinition(entry.definition.clone()));
            }
        }

        Ok(Self { entries })
    }

    /// The shipped five-entry AI vocabulary.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            entries: AI_TERMS
                .iter()
                .map(|&(term, definition)| TermEntry::new(term, definition))
                .collect(),
        }
    }

    /// All entries in catalog order.
    #[must_use]
    pub fn all(&self) -> &[TermEntry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// Look up an entry by its term.
    #[must_use]
    pub fn find(&self, term: &str) -> Option<&TermEntry> {
        self.entries.iter().find(|e| e.term == term)
    }

    /// Iterate over entries in order.
    pub fn iter(&self) -> impl Iterator<Item = &TermEntry> {
        self.entries.iter()
    }
}

impl Default for TermCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(n: usize) -> Vec<TermEntry> {
        (0..n)
            .map(|i| TermEntry::new(format!("term {i}"), format!("definition {i}")))
            .collect()
    }

    #[test]
    fn test_builtin_is_valid() {
        let builtin = TermCatalog::builtin();
        let rebuilt = TermCatalog::new(builtin.all().to_vec()).unwrap();
        assert_eq!(builtin, rebuilt);
        assert_eq!(builtin.size(), 5);
    }

    #[test]
    fn test_builtin_order() {
        let catalog = TermCatalog::builtin();
        let terms: Vec<_> = catalog.iter().map(|e| e.term.as_str()).collect();
        assert_eq!(
            terms,
            vec![
                "Artificial Intelligence",
                "Machine Learning",
                "Neural Network",
                "Augmented Reality",
                "Big Data",
            ]
        );
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(TermCatalog::new(vec![]), Err(EngineError::EmptyCatalog));
    }

    #[test]
    fn test_blank_rejected() {
        let mut list = entries(3);
        list[2].definition = String::new();
        assert_eq!(
            TermCatalog::new(list),
            Err(EngineError::EmptyField { index: 2 })
        );
    }

    #[test]
    fn test_duplicate_definition_rejected() {
        let mut list = entries(3);
        list[1].definition = "definition 0".to_string();
        assert_eq!(
            TermCatalog::new(list),
            Err(EngineError::DuplicateDefinition("definition 0".to_string()))
        );
    }

    #[test]
    fn test_small_catalog_allowed() {
        let catalog = TermCatalog::new(entries(2)).unwrap();
        assert_eq!(catalog.size(), 2);
    }

    #[test]
    fn test_lookup() {
        let catalog = TermCatalog::builtin();
        assert_eq!(
            catalog.find("Big Data").map(|e| e.definition.as_str()),
            Some("Large datasets analyzed computationally.")
        );
        assert!(catalog.find("Blockchain").is_none());
    }
}
