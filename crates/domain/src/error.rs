//! Unified error types for the domain layer
//!
//! Provides a common error type for draft edits, enabling consistent error
//! handling without forcing the controller to use String or anyhow.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for closed option sets and field identifiers)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    ///
    /// # Example
    /// ```ignore
    /// if name.trim().is_empty() {
    ///     return Err(DomainError::validation("Character name cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any member of a closed set:
    /// - Unknown race, profession or work status labels
    /// - Unknown field wire names
    ///
    /// # Example
    /// ```ignore
    /// impl FromStr for Race {
    ///     type Err = DomainError;
    ///     fn from_str(s: &str) -> Result<Self, Self::Err> {
    ///         match s {
    ///             "Orco" => Ok(Self::Orc),
    ///             _ => Err(DomainError::parse(format!("Unknown race: {}", s))),
    ///         }
    ///     }
    /// }
    /// ```
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("name cannot be empty");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(err.to_string(), "Validation failed: name cannot be empty");
    }

    #[test]
    fn test_parse_error() {
        let err = DomainError::parse("Unknown race: Elfo");
        assert!(matches!(err, DomainError::Parse(_)));
        assert_eq!(err.to_string(), "Parse error: Unknown race: Elfo");
    }
}
