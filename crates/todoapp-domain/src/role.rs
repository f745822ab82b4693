//! User roles
//!
//! The numeric level only orders roles coarsely. Authorization decisions go
//! through [`crate::services::UserPermissionPolicy`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};

/// Role assigned to a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum UserRole {
    User,
    Moderator,
    Admin,
    SuperAdmin,
}

impl UserRole {
    const ALL: [UserRole; 4] = [
        UserRole::User,
        UserRole::Moderator,
        UserRole::Admin,
        UserRole::SuperAdmin,
    ];

    pub fn all() -> &'static [UserRole] {
        &Self::ALL
    }

    pub fn code(&self) -> &'static str {
        match self {
            UserRole::User => "USER",
            UserRole::Moderator => "MODERATOR",
            UserRole::Admin => "ADMIN",
            UserRole::SuperAdmin => "SUPER_ADMIN",
        }
    }

    pub fn name(&self) -> &'static str {
        self.code()
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::User => "User",
            UserRole::Moderator => "Moderator",
            UserRole::Admin => "Administrator",
            UserRole::SuperAdmin => "Super Administrator",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            UserRole::User => "Can use the regular todo features",
            UserRole::Moderator => "Can use a subset of the management features",
            UserRole::Admin => "Can access system administration features",
            UserRole::SuperAdmin => "Can access every feature",
        }
    }

    /// Privilege level: 1, 5, 10, 99
    pub fn level(&self) -> u32 {
        match self {
            UserRole::User => 1,
            UserRole::Moderator => 5,
            UserRole::Admin => 10,
            UserRole::SuperAdmin => 99,
        }
    }

    pub fn from_code(code: &str) -> DomainResult<Self> {
        let normalized = code.trim().to_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|role| role.code() == normalized)
            .ok_or_else(|| DomainError::invalid_argument(format!("Unknown role code: {}", code)))
    }

    pub fn from_name(name: &str) -> DomainResult<Self> {
        let normalized = name.trim().to_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|role| role.name() == normalized)
            .ok_or_else(|| DomainError::invalid_argument(format!("Unknown role name: {}", name)))
    }

    pub fn has_code(&self, code: &str) -> bool {
        self.code() == code.trim().to_uppercase()
    }

    pub fn has_level_or_higher(&self, required_level: u32) -> bool {
        self.level() >= required_level
    }

    pub fn has_higher_level_than(&self, other: UserRole) -> bool {
        self.level() > other.level()
    }

    pub fn is(&self, other: UserRole) -> bool {
        *self == other
    }

    pub fn is_any_of(&self, roles: &[UserRole]) -> bool {
        roles.contains(self)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for UserRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl TryFrom<String> for UserRole {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_code(&value)
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        role.code().to_string()
    }
}
