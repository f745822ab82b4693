//! Validation traits and common validators
//!
//! Lengths are measured in Unicode scalar values, never bytes, so that
//! Japanese and ASCII input are bounded the same way.

use std::ops::RangeInclusive;

use thiserror::Error;

/// Validation error with context
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field missing: {field}")]
    Required { field: String },

    #[error("{field} is too short: expected at least {min} characters, got {actual}")]
    TooShort {
        field: String,
        min: usize,
        actual: usize,
    },

    #[error("{field} is too long: expected at most {max} characters, got {actual}")]
    TooLong {
        field: String,
        max: usize,
        actual: usize,
    },
}

/// Trait for validators that can check values
pub trait Validator<T: ?Sized> {
    /// Validate a value
    fn validate(&self, value: &T) -> Result<(), ValidationError>;

    /// Check a value without returning the error details
    fn is_valid(&self, value: &T) -> bool {
        self.validate(value).is_ok()
    }
}

/// Number of characters in `value`
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Rejects empty or whitespace-only strings
pub struct NonBlankValidator {
    field_name: String,
}

impl NonBlankValidator {
    pub fn new(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
        }
    }
}

impl Validator<str> for NonBlankValidator {
    fn validate(&self, value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::Required {
                field: self.field_name.clone(),
            });
        }
        Ok(())
    }
}

/// Character-count bounds, both ends inclusive
#[derive(Debug, Clone)]
pub struct CharLengthValidator {
    field_name: String,
    range: RangeInclusive<usize>,
}

impl CharLengthValidator {
    pub fn new(field_name: impl Into<String>, min: usize, max: usize) -> Self {
        Self {
            field_name: field_name.into(),
            range: min..=max,
        }
    }

    /// Only an upper bound
    pub fn at_most(field_name: impl Into<String>, max: usize) -> Self {
        Self::new(field_name, 0, max)
    }

    pub fn min(&self) -> usize {
        *self.range.start()
    }

    pub fn max(&self) -> usize {
        *self.range.end()
    }
}

impl Validator<str> for CharLengthValidator {
    fn validate(&self, value: &str) -> Result<(), ValidationError> {
        let actual = char_len(value);
        if actual < self.min() {
            return Err(ValidationError::TooShort {
                field: self.field_name.clone(),
                min: self.min(),
                actual,
            });
        }
        if actual > self.max() {
            return Err(ValidationError::TooLong {
                field: self.field_name.clone(),
                max: self.max(),
                actual,
            });
        }
        Ok(())
    }
}
