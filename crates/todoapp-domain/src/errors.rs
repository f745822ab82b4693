//! Domain errors for todoapp
//!
//! Expected validation failures travel as [`crate::outcome::Outcome`] values.
//! `DomainError` covers everything else: contract violations on untyped
//! input, and rule or state violations raised by entities.

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("Validation failed: {message}")]
    Validation { message: String },

    #[error("Business rule violation [{rule}]: {details}")]
    BusinessRuleViolation { rule: String, details: String },

    #[error("Invalid state [{current_state}] for operation [{operation}]")]
    InvalidState {
        current_state: String,
        operation: String,
    },

    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: String,
        identifier: String,
    },

    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: String,
        identifier: String,
    },
}

impl DomainError {
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        DomainError::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation {
            message: message.into(),
        }
    }

    pub fn business_rule_violation(rule: impl Into<String>, details: impl Into<String>) -> Self {
        DomainError::BusinessRuleViolation {
            rule: rule.into(),
            details: details.into(),
        }
    }

    pub fn invalid_state(current_state: impl Into<String>, operation: impl Into<String>) -> Self {
        DomainError::InvalidState {
            current_state: current_state.into(),
            operation: operation.into(),
        }
    }

    pub fn not_found(entity_type: impl Into<String>, identifier: impl Into<String>) -> Self {
        DomainError::NotFound {
            entity_type: entity_type.into(),
            identifier: identifier.into(),
        }
    }

    pub fn duplicate(entity_type: impl Into<String>, identifier: impl Into<String>) -> Self {
        DomainError::Duplicate {
            entity_type: entity_type.into(),
            identifier: identifier.into(),
        }
    }

    /// True for errors caused by defects in the calling code rather than user input
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, DomainError::InvalidArgument { .. })
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
