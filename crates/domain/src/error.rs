//! Unified error types for the domain layer
//!
//! Provides a common error type for every fallible sheet operation, so callers
//! can report failures without resorting to String or anyhow.

use thiserror::Error;

use crate::formula::FormulaError;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., negative characteristic, unsupported specialization)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Catalog or character lookup miss
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Skill point allocation rejected at the boundary
    #[error("Invalid allocation of {points} points to '{skill}'")]
    InvalidAllocation { skill: String, points: i32 },

    /// Parse error (formula text, enum names)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    ///
    /// Use this when an edit carries a value outside the domain the rules
    /// engine accepts:
    /// - Negative characteristics
    /// - Specializations on skills that take none
    /// - Too many occupational skill picks
    ///
    /// # Example
    /// ```ignore
    /// if value < 0 {
    ///     return Err(DomainError::validation("STR cannot be negative"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Create an invalid allocation error
    pub fn invalid_allocation(skill: impl Into<String>, points: i32) -> Self {
        Self::InvalidAllocation {
            skill: skill.into(),
            points,
        }
    }

    /// Creates a parse error for string-to-type conversion failures.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

impl From<FormulaError> for DomainError {
    fn from(err: FormulaError) -> Self {
        Self::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("STR cannot be negative");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(err.to_string(), "Validation failed: STR cannot be negative");
    }

    #[test]
    fn test_not_found_error() {
        let err = DomainError::not_found("Occupation", "Astronaut");
        assert!(matches!(err, DomainError::NotFound { .. }));
        assert_eq!(err.to_string(), "Entity not found: Occupation 'Astronaut'");
    }

    #[test]
    fn test_invalid_allocation_error() {
        let err = DomainError::invalid_allocation("Dodge", -5);
        assert_eq!(err.to_string(), "Invalid allocation of -5 points to 'Dodge'");
    }

    #[test]
    fn test_from_formula_error() {
        let formula_err = FormulaError::Empty;
        let domain_err: DomainError = formula_err.into();
        assert!(matches!(domain_err, DomainError::Parse(_)));
        assert!(domain_err.to_string().contains("Empty formula"));
    }
}
