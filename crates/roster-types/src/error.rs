use serde::{Deserialize, Serialize};
use thiserror::Error;

use std::fmt;

use crate::contractor::{ContractorField, ContractorId};

/// A single validation message attached to one input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: ContractorField,
    pub message: String,
}

impl FieldError {
    pub fn new(field: ContractorField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Errors related to contractor registry operations.
#[derive(Debug, Error)]
pub enum ContractorError {
    #[error("validation failed: {}", join_field_errors(.0))]
    Validation(Vec<FieldError>),

    #[error("contractor {0} not found")]
    NotFound(ContractorId),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("no contractor id left after {0}")]
    IdsExhausted(ContractorId),
}

impl ContractorError {
    /// Per-field messages when this is a validation failure, empty otherwise.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            ContractorError::Validation(errors) => errors,
            _ => &[],
        }
    }
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors from slot storage operations (used by trait definitions in roster-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("io error: {0}")]
    Io(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display_lists_fields() {
        let err = ContractorError::Validation(vec![
            FieldError::new(ContractorField::Name, "Name is required"),
            FieldError::new(ContractorField::ContactNumber, "Contact number is required"),
        ]);
        assert_eq!(
            err.to_string(),
            "validation failed: name: Name is required; contactNo: Contact number is required"
        );
        assert_eq!(err.field_errors().len(), 2);
    }

    #[test]
    fn test_not_found_display() {
        let err = ContractorError::NotFound(ContractorId(42));
        assert_eq!(err.to_string(), "contractor 42 not found");
        assert!(err.field_errors().is_empty());
    }

    #[test]
    fn test_ids_exhausted_display() {
        let err = ContractorError::IdsExhausted(ContractorId(i64::MAX));
        assert_eq!(err.to_string(), "no contractor id left after 9223372036854775807");
    }

    #[test]
    fn test_repository_error_display() {
        let err = RepositoryError::Query("syntax error".to_string());
        assert_eq!(err.to_string(), "query error: syntax error");
    }
}
