//! Todo lifecycle status
//!
//! Which changes between statuses are legal is decided by
//! [`crate::services::TodoStatusTransitionPolicy`], not here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};

/// Status of a Todo item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TodoStatus {
    Todo,
    InProgress,
    Completed,
    /// Logically deleted; terminal under the default rules
    Deleted,
}

impl TodoStatus {
    const ALL: [TodoStatus; 4] = [
        TodoStatus::Todo,
        TodoStatus::InProgress,
        TodoStatus::Completed,
        TodoStatus::Deleted,
    ];

    /// Every status, in declaration order
    pub fn all() -> &'static [TodoStatus] {
        &Self::ALL
    }

    /// Stable code used in storage and configuration
    pub fn code(&self) -> &'static str {
        match self {
            TodoStatus::Todo => "TODO",
            TodoStatus::InProgress => "IN_PROGRESS",
            TodoStatus::Completed => "COMPLETED",
            TodoStatus::Deleted => "DELETED",
        }
    }

    /// Constant name of the status; identical to the code
    pub fn name(&self) -> &'static str {
        self.code()
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TodoStatus::Todo => "To Do",
            TodoStatus::InProgress => "In Progress",
            TodoStatus::Completed => "Completed",
            TodoStatus::Deleted => "Deleted",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TodoStatus::Todo => "Newly created todo",
            TodoStatus::InProgress => "Todo being worked on",
            TodoStatus::Completed => "Finished todo",
            TodoStatus::Deleted => "Logically deleted todo",
        }
    }

    /// Look up a status by code, ignoring case and surrounding whitespace
    pub fn from_code(code: &str) -> DomainResult<Self> {
        let normalized = code.trim().to_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|status| status.code() == normalized)
            .ok_or_else(|| DomainError::invalid_argument(format!("Unknown status code: {}", code)))
    }

    /// Look up a status by constant name, ignoring case and surrounding whitespace
    pub fn from_name(name: &str) -> DomainResult<Self> {
        let normalized = name.trim().to_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|status| status.name() == normalized)
            .ok_or_else(|| DomainError::invalid_argument(format!("Unknown status name: {}", name)))
    }

    pub fn has_code(&self, code: &str) -> bool {
        self.code() == code.trim().to_uppercase()
    }

    /// Anything but deleted
    pub fn is_active(&self) -> bool {
        *self != TodoStatus::Deleted
    }

    pub fn is_completed(&self) -> bool {
        *self == TodoStatus::Completed
    }

    /// Work can still happen on the item
    pub fn is_workable(&self) -> bool {
        matches!(self, TodoStatus::Todo | TodoStatus::InProgress)
    }

    pub fn is_deleted(&self) -> bool {
        *self == TodoStatus::Deleted
    }

    pub fn is_in_progress(&self) -> bool {
        *self == TodoStatus::InProgress
    }

    pub fn is(&self, other: TodoStatus) -> bool {
        *self == other
    }

    pub fn is_any_of(&self, statuses: &[TodoStatus]) -> bool {
        statuses.contains(self)
    }
}

impl fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for TodoStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl TryFrom<String> for TodoStatus {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_code(&value)
    }
}

impl From<TodoStatus> for String {
    fn from(status: TodoStatus) -> Self {
        status.code().to_string()
    }
}
