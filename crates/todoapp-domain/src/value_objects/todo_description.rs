//! Optional Todo description

use std::fmt;

use serde::{Deserialize, Serialize};
use todoapp_common::{CharLengthValidator, ValidationError, Validator};

use crate::errors::DomainError;
use crate::outcome::Outcome;

/// Free text of at most 1000 characters; blank input means "no description"
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Option<String>", into = "Option<String>")]
pub struct TodoDescription(Option<String>);

impl TodoDescription {
    pub const MAX_LENGTH: usize = 1000;

    /// A description with no text
    pub fn empty() -> Self {
        Self(None)
    }

    pub fn of(value: Option<&str>) -> Outcome<Self> {
        let trimmed = match value.map(str::trim) {
            None | Some("") => return Outcome::success(Self::empty()),
            Some(trimmed) => trimmed,
        };

        let validator = CharLengthValidator::at_most("description", Self::MAX_LENGTH);
        if let Err(ValidationError::TooLong { max, actual, .. }) = validator.validate(trimmed) {
            return Outcome::failure(format!(
                "Todo description must be at most {} characters (actual: {})",
                max, actual
            ));
        }

        Outcome::success(Self(Some(trimmed.to_string())))
    }

    pub fn has_value(&self) -> bool {
        self.0.is_some()
    }

    pub fn value(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn value_or_default<'a>(&'a self, default: &'a str) -> &'a str {
        self.0.as_deref().unwrap_or(default)
    }

    /// Length in characters, 0 when absent
    pub fn len(&self) -> usize {
        self.0.as_deref().map_or(0, |text| text.chars().count())
    }

    pub fn is_empty(&self) -> bool {
        !self.has_value()
    }

    /// Case-insensitive substring search; false when absent
    pub fn contains(&self, text: &str) -> bool {
        self.0
            .as_deref()
            .is_some_and(|value| value.to_lowercase().contains(&text.to_lowercase()))
    }

    pub fn is_same_as(&self, other: &TodoDescription) -> bool {
        self == other
    }
}

impl fmt::Display for TodoDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value_or_default(""))
    }
}

impl TryFrom<Option<String>> for TodoDescription {
    type Error = DomainError;

    fn try_from(value: Option<String>) -> Result<Self, Self::Error> {
        Self::of(value.as_deref()).into_result()
    }
}

impl From<TodoDescription> for Option<String> {
    fn from(description: TodoDescription) -> Self {
        description.0
    }
}
