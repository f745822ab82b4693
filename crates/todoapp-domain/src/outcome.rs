//! Success/failure container for recoverable validation errors
//!
//! Every value-object factory returns an [`Outcome`]. A failure carries a
//! human readable, non-blank message and propagates unchanged through
//! `map`/`flat_map` chains without unwinding.

use std::fmt;

use crate::errors::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum State<T> {
    Success(T),
    Failure(String),
}

/// Result of a validating operation
///
/// Equality and hashing take the success flag into account: two failures
/// are equal only when their messages are, and a success never equals a
/// failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[must_use]
pub struct Outcome<T> {
    state: State<T>,
}

impl<T> Outcome<T> {
    /// Create a successful outcome
    pub fn success(value: T) -> Self {
        Self {
            state: State::Success(value),
        }
    }

    /// Create a failed outcome
    ///
    /// # Panics
    ///
    /// Panics when `message` is empty or whitespace only.
    pub fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        assert!(
            !message.trim().is_empty(),
            "Error message must not be empty"
        );
        Self {
            state: State::Failure(message),
        }
    }

    /// Convert a `Result`, rendering the error with `Display`
    pub fn from_result<E: fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(err) => Self::failure(non_blank(err.to_string(), "Unknown error")),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.state, State::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Borrow the success value
    ///
    /// # Panics
    ///
    /// Panics when called on a failure.
    pub fn value(&self) -> &T {
        match &self.state {
            State::Success(value) => value,
            State::Failure(message) => panic!("Cannot get value from failure result: {}", message),
        }
    }

    /// Take the success value
    ///
    /// # Panics
    ///
    /// Panics when called on a failure.
    pub fn into_value(self) -> T {
        match self.state {
            State::Success(value) => value,
            State::Failure(message) => panic!("Cannot get value from failure result: {}", message),
        }
    }

    pub fn value_optional(&self) -> Option<&T> {
        match &self.state {
            State::Success(value) => Some(value),
            State::Failure(_) => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            State::Success(_) => None,
            State::Failure(message) => Some(message),
        }
    }

    /// Discard the failure message
    pub fn ok(self) -> Option<T> {
        match self.state {
            State::Success(value) => Some(value),
            State::Failure(_) => None,
        }
    }

    /// Apply `f` to a success value; failures pass through untouched
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.state {
            State::Success(value) => Outcome::success(f(value)),
            State::Failure(message) => Outcome::failure(message),
        }
    }

    /// Like [`Outcome::map`], but a `None` from `f` becomes a failure
    pub fn map_optional<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self.state {
            State::Success(value) => match f(value) {
                Some(mapped) => Outcome::success(mapped),
                None => Outcome::failure("Mapped value must not be null"),
            },
            State::Failure(message) => Outcome::failure(message),
        }
    }

    /// Like [`Outcome::map`], but an `Err` from `f` becomes a failure
    /// reading `Mapping failed: <cause>`
    pub fn try_map<U, E, F>(self, f: F) -> Outcome<U>
    where
        E: fmt::Display,
        F: FnOnce(T) -> Result<U, E>,
    {
        match self.state {
            State::Success(value) => match f(value) {
                Ok(mapped) => Outcome::success(mapped),
                Err(err) => Outcome::failure(format!("Mapping failed: {}", err)),
            },
            State::Failure(message) => Outcome::failure(message),
        }
    }

    /// Chain another validating step
    pub fn flat_map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self.state {
            State::Success(value) => f(value),
            State::Failure(message) => Outcome::failure(message),
        }
    }

    /// Like [`Outcome::flat_map`], but a `None` from `f` becomes a failure
    pub fn flat_map_optional<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Option<Outcome<U>>,
    {
        match self.state {
            State::Success(value) => {
                f(value).unwrap_or_else(|| Outcome::failure("Mapped result must not be null"))
            }
            State::Failure(message) => Outcome::failure(message),
        }
    }

    /// Like [`Outcome::flat_map`], but an `Err` from `f` becomes a failure
    /// reading `FlatMapping failed: <cause>`
    pub fn try_flat_map<U, E, F>(self, f: F) -> Outcome<U>
    where
        E: fmt::Display,
        F: FnOnce(T) -> Result<Outcome<U>, E>,
    {
        match self.state {
            State::Success(value) => match f(value) {
                Ok(outcome) => outcome,
                Err(err) => Outcome::failure(format!("FlatMapping failed: {}", err)),
            },
            State::Failure(message) => Outcome::failure(message),
        }
    }

    /// Run `action` on the success value, then hand back `self` unchanged
    pub fn on_success<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let State::Success(value) = &self.state {
            action(value);
        }
        self
    }

    /// Run `action` on the failure message, then hand back `self` unchanged
    pub fn on_failure<F>(self, action: F) -> Self
    where
        F: FnOnce(&str),
    {
        if let State::Failure(message) = &self.state {
            action(message);
        }
        self
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self.state {
            State::Success(value) => value,
            State::Failure(_) => default,
        }
    }

    pub fn unwrap_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self.state {
            State::Success(value) => value,
            State::Failure(_) => default(),
        }
    }

    /// Borrowing view for pattern matching
    pub fn as_result(&self) -> Result<&T, &str> {
        match &self.state {
            State::Success(value) => Ok(value),
            State::Failure(message) => Err(message),
        }
    }

    /// Lift into the `?`-friendly error channel
    pub fn into_result(self) -> Result<T, DomainError> {
        match self.state {
            State::Success(value) => Ok(value),
            State::Failure(message) => Err(DomainError::validation(message)),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, DomainError> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}

impl<T: fmt::Display> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Success(value) => write!(f, "Success({})", value),
            State::Failure(message) => write!(f, "Failure({})", message),
        }
    }
}

fn non_blank(message: String, fallback: &str) -> String {
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}
