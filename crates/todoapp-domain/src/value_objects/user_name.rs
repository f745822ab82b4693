//! User display name

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use todoapp_common::{CharLengthValidator, NonBlankValidator, ValidationError, Validator};

use crate::errors::DomainError;
use crate::outcome::Outcome;

const INVALID_CHARACTERS: &str = "User name may only contain ASCII letters, digits, underscores, \
                                  hyphens, or Japanese characters";

static USER_NAME_RE: OnceLock<Regex> = OnceLock::new();

fn user_name_regex() -> &'static Regex {
    USER_NAME_RE.get_or_init(|| {
        let pattern = r"^[a-zA-Z0-9_\-\p{Hiragana}\p{Katakana}\p{Han}]+$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("user name regex failed to compile: {error}"))
    })
}

/// Trimmed name of 3 to 100 characters
///
/// Allowed characters are ASCII letters and digits, `_`, `-`, and the
/// Hiragana, Katakana and Han scripts. The first character may not be `_`
/// or `-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    pub const MIN_LENGTH: usize = 3;
    pub const MAX_LENGTH: usize = 100;

    pub fn of(value: &str) -> Outcome<Self> {
        let trimmed = value.trim();

        if NonBlankValidator::new("name").validate(trimmed).is_err() {
            return Outcome::failure("User name must not be empty");
        }

        let length = CharLengthValidator::new("name", Self::MIN_LENGTH, Self::MAX_LENGTH);
        match length.validate(trimmed) {
            Ok(()) => {}
            Err(ValidationError::TooShort { min, actual, .. }) => {
                return Outcome::failure(format!(
                    "User name must be at least {} characters (actual: {})",
                    min, actual
                ));
            }
            Err(ValidationError::TooLong { max, actual, .. }) => {
                return Outcome::failure(format!(
                    "User name must be at most {} characters (actual: {})",
                    max, actual
                ));
            }
            Err(err) => return Outcome::failure(err.to_string()),
        }

        if !user_name_regex().is_match(trimmed) {
            return Outcome::failure(INVALID_CHARACTERS);
        }

        if trimmed.starts_with(['-', '_']) {
            return Outcome::failure("User name must not start with a hyphen or underscore");
        }

        Outcome::success(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Never true for a validated name
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, text: &str) -> bool {
        self.0.to_lowercase().contains(&text.to_lowercase())
    }

    pub fn is_same_as(&self, other: &UserName) -> bool {
        self == other
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::of(&value).into_result()
    }
}

impl From<UserName> for String {
    fn from(name: UserName) -> Self {
        name.0
    }
}
