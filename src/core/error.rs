//! Error taxonomy for the engine.
//!
//! Only construction-time problems are errors. Calling an engine
//! operation in the wrong phase is a no-op, not an error.

use thiserror::Error;

/// Errors raised by catalog construction, configuration, and round start.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The catalog cannot supply the configured number of candidates.
    #[error("catalog has {available} entries but a round needs at least {required}")]
    InsufficientCatalog { required: usize, available: usize },

    /// A catalog must contain at least one entry.
    #[error("catalog is empty")]
    EmptyCatalog,

    /// An entry has a blank term or definition.
    #[error("catalog entry {index} has an empty term or definition")]
    EmptyField { index: usize },

    /// Two entries share the same term.
    #[error("duplicate term in catalog: {0:?}")]
    DuplicateTerm(String),

    /// Two entries share the same definition.
    ///
    /// A round must contain exactly one correct candidate, so definitions
    /// have to be unique too.
    #[error("duplicate definition in catalog: {0:?}")]
    DuplicateDefinition(String),

    /// Configuration failed to parse or validate.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_catalog_message() {
        let err = EngineError::InsufficientCatalog {
            required: 5,
            available: 3,
        };
        assert_eq!(
            err.to_string(),
            "catalog has 3 entries but a round needs at least 5"
        );
    }

    #[test]
    fn test_duplicate_messages_quote_value() {
        let err = EngineError::DuplicateTerm("Big Data".to_string());
        assert_eq!(err.to_string(), "duplicate term in catalog: \"Big Data\"");
    }
}
