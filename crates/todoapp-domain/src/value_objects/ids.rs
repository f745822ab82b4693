//! Numeric identifiers

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::outcome::Outcome;

/// Identifier of a Todo item, always at least 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct TodoId(i64);

impl TodoId {
    pub const MIN_VALUE: i64 = 1;

    pub fn of(value: i64) -> Outcome<Self> {
        if value < Self::MIN_VALUE {
            return Outcome::failure(format!(
                "TodoId value must be at least {}, but was: {}",
                Self::MIN_VALUE,
                value
            ));
        }
        Outcome::success(Self(value))
    }

    /// Parse a decimal string, ignoring surrounding whitespace
    pub fn parse(value: &str) -> Outcome<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Outcome::failure("TodoId string must not be empty");
        }
        match trimmed.parse::<i64>() {
            Ok(parsed) => Self::of(parsed),
            Err(_) => {
                Outcome::failure(format!("TodoId string must be a valid number: '{}'", value))
            }
        }
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    pub fn is_same_as(&self, other: &TodoId) -> bool {
        self == other
    }

    pub fn is_greater_than(&self, other: &TodoId) -> bool {
        self.0 > other.0
    }

    pub fn is_less_than(&self, other: &TodoId) -> bool {
        self.0 < other.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for TodoId {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::of(value).into_result()
    }
}

impl From<TodoId> for i64 {
    fn from(id: TodoId) -> Self {
        id.0
    }
}

/// Identifier of a user account, strictly positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct UserId(i64);

impl UserId {
    pub fn of(value: i64) -> Outcome<Self> {
        if value <= 0 {
            return Outcome::failure(format!(
                "UserId value must be positive (greater than 0), but was: {}",
                value
            ));
        }
        Outcome::success(Self(value))
    }

    /// Parse a decimal string, ignoring surrounding whitespace
    pub fn parse(value: &str) -> Outcome<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Outcome::failure("UserId string must not be empty");
        }
        match trimmed.parse::<i64>() {
            Ok(parsed) => Self::of(parsed),
            Err(_) => {
                Outcome::failure(format!("UserId string must be a valid number: '{}'", value))
            }
        }
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    pub fn is_same_as(&self, other: &UserId) -> bool {
        self == other
    }

    pub fn is_greater_than(&self, other: &UserId) -> bool {
        self.0 > other.0
    }

    pub fn is_less_than(&self, other: &UserId) -> bool {
        self.0 < other.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for UserId {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::of(value).into_result()
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_id_lower_bound() {
        assert_eq!(TodoId::of(1).value().value(), 1);
        let outcome = TodoId::of(-5);
        assert!(outcome.error_message().unwrap().contains("at least 1"));
        assert!(outcome.error_message().unwrap().contains("-5"));
        assert!(TodoId::of(0).is_failure());
        assert!(TodoId::of(i64::MAX).is_success());
    }

    #[test]
    fn test_todo_id_parse() {
        assert_eq!(TodoId::parse("007").into_value().value(), 7);
        assert_eq!(TodoId::parse("  42 ").into_value().value(), 42);
        assert_eq!(
            TodoId::parse("   ").error_message(),
            Some("TodoId string must not be empty")
        );
        assert_eq!(
            TodoId::parse("12ab").error_message(),
            Some("TodoId string must be a valid number: '12ab'")
        );
        assert!(TodoId::parse("0")
            .error_message()
            .unwrap()
            .contains("at least 1"));
        assert!(TodoId::parse("99999999999999999999").is_failure());
    }

    #[test]
    fn test_user_id_must_be_positive() {
        assert!(UserId::of(0).is_failure());
        assert!(UserId::of(-1)
            .error_message()
            .unwrap()
            .contains("greater than 0"));
        assert_eq!(UserId::parse("15").into_value().value(), 15);
        assert_eq!(
            UserId::parse("").error_message(),
            Some("UserId string must not be empty")
        );
        assert_eq!(
            UserId::parse("x").error_message(),
            Some("UserId string must be a valid number: 'x'")
        );
    }

    #[test]
    fn test_ordering() {
        let small = TodoId::of(3).into_value();
        let large = TodoId::of(10).into_value();
        assert!(large.is_greater_than(&small));
        assert!(small.is_less_than(&large));
        assert!(!small.is_same_as(&large));
        assert!(small < large);

        let a = UserId::of(2).into_value();
        let b = UserId::of(2).into_value();
        assert!(a.is_same_as(&b));
        assert!(!a.is_greater_than(&b));
    }

    #[test]
    fn test_serde_validates() {
        let id: TodoId = serde_json::from_str("12").unwrap();
        assert_eq!(id.value(), 12);
        assert_eq!(serde_json::to_string(&id).unwrap(), "12");
        assert!(serde_json::from_str::<TodoId>("0").is_err());
        assert!(serde_json::from_str::<UserId>("-3").is_err());
    }
}
