//! Todo title

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use todoapp_common::{CharLengthValidator, ValidationError, Validator};

use crate::errors::DomainError;
use crate::outcome::Outcome;

static INVALID_CHARS_RE: OnceLock<Regex> = OnceLock::new();

fn invalid_chars_regex() -> &'static Regex {
    INVALID_CHARS_RE.get_or_init(|| {
        // ASCII control characters and "Symbol, other", minus tab, LF and CR.
        let pattern = r"[[\x00-\x1F\x7F]\p{So}&&[^\t\n\r]]";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("todo title regex failed to compile: {error}"))
    })
}

fn length_validator() -> CharLengthValidator {
    CharLengthValidator::new("title", TodoTitle::MIN_LENGTH, TodoTitle::MAX_LENGTH)
}

/// Trimmed, non-empty title of at most 255 characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TodoTitle(String);

impl TodoTitle {
    pub const MIN_LENGTH: usize = 1;
    pub const MAX_LENGTH: usize = 255;

    pub fn of(value: &str) -> Outcome<Self> {
        let normalized = value.trim();

        match length_validator().validate(normalized) {
            Ok(()) => {}
            Err(ValidationError::TooLong { max, actual, .. }) => {
                return Outcome::failure(format!(
                    "Todo title must be at most {} characters (actual: {})",
                    max, actual
                ));
            }
            Err(_) => return Outcome::failure("Todo title must not be empty"),
        }

        if invalid_chars_regex().is_match(normalized) {
            return Outcome::failure("Todo title contains invalid characters");
        }

        Outcome::success(Self(normalized.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Never true for a validated title
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Case-insensitive substring search
    pub fn contains(&self, text: &str) -> bool {
        self.0.to_lowercase().contains(&text.to_lowercase())
    }

    /// Case-insensitive prefix check
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.0.to_lowercase().starts_with(&prefix.to_lowercase())
    }

    /// AND search over `keywords`; an empty list matches
    pub fn contains_all_keywords<S: AsRef<str>>(&self, keywords: &[S]) -> bool {
        let lowered = self.0.to_lowercase();
        keywords
            .iter()
            .all(|keyword| lowered.contains(&keyword.as_ref().to_lowercase()))
    }

    pub fn is_same_as(&self, other: &TodoTitle) -> bool {
        self == other
    }
}

impl fmt::Display for TodoTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TodoTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TodoTitle {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::of(&value).into_result()
    }
}

impl From<TodoTitle> for String {
    fn from(title: TodoTitle) -> Self {
        title.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_and_stores() {
        let title = TodoTitle::of("  Buy milk  ").into_value();
        assert_eq!(title.value(), "Buy milk");
        assert_eq!(title.len(), 8);
    }

    #[test]
    fn test_blank_is_rejected() {
        assert_eq!(
            TodoTitle::of("").error_message(),
            Some("Todo title must not be empty")
        );
        assert_eq!(
            TodoTitle::of(" \t\n ").error_message(),
            Some("Todo title must not be empty")
        );
    }

    #[test]
    fn test_length_limit_counts_characters() {
        assert!(TodoTitle::of(&"a".repeat(255)).is_success());
        assert!(TodoTitle::of(&"あ".repeat(255)).is_success());

        let outcome = TodoTitle::of(&"a".repeat(256));
        assert_eq!(
            outcome.error_message(),
            Some("Todo title must be at most 255 characters (actual: 256)")
        );
    }

    #[test]
    fn test_invalid_characters() {
        assert_eq!(
            TodoTitle::of("bell\u{0007}").error_message(),
            Some("Todo title contains invalid characters")
        );
        assert!(TodoTitle::of("party \u{1F389}").is_failure());
        assert!(TodoTitle::of("\u{00A9} notice").is_failure());
        assert!(TodoTitle::of("line one\nline two").is_success());
        assert!(TodoTitle::of("col\tcol").is_success());
        assert!(TodoTitle::of("買い物リスト").is_success());
    }

    #[test]
    fn test_search_helpers() {
        let title = TodoTitle::of("Write Quarterly Report").into_value();
        assert!(title.contains("quarterly"));
        assert!(title.starts_with("WRITE"));
        assert!(!title.starts_with("report"));
        assert!(title.contains_all_keywords(&["write", "report"]));
        assert!(!title.contains_all_keywords(&["write", "email"]));
        assert!(title.contains_all_keywords::<&str>(&[]));
    }

    #[test]
    fn test_serde_runs_validation() {
        let title: TodoTitle = serde_json::from_str("\"  Plan trip \"").unwrap();
        assert_eq!(title.value(), "Plan trip");
        assert!(serde_json::from_str::<TodoTitle>("\"   \"").is_err());
    }
}
