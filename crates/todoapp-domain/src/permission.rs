//! Fine-grained capabilities granted to roles

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};

/// Permissions for access control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Permission {
    // Todos
    CreateTodo,
    ReadOwnTodo,
    UpdateOwnTodo,
    DeleteOwnTodo,
    ReadAllTodos,
    UpdateAllTodos,
    DeleteAllTodos,

    // User management
    CreateUser,
    ReadUserList,
    UpdateUserProfile,
    DeleteUser,
    ChangeUserRole,

    // System administration
    SystemConfiguration,
    ViewSystemLogs,
    BackupRestore,

    // Audit and reporting
    ViewAuditLogs,
    GenerateReports,
    ExportData,
}

impl Permission {
    const ALL: [Permission; 18] = [
        Permission::CreateTodo,
        Permission::ReadOwnTodo,
        Permission::UpdateOwnTodo,
        Permission::DeleteOwnTodo,
        Permission::ReadAllTodos,
        Permission::UpdateAllTodos,
        Permission::DeleteAllTodos,
        Permission::CreateUser,
        Permission::ReadUserList,
        Permission::UpdateUserProfile,
        Permission::DeleteUser,
        Permission::ChangeUserRole,
        Permission::SystemConfiguration,
        Permission::ViewSystemLogs,
        Permission::BackupRestore,
        Permission::ViewAuditLogs,
        Permission::GenerateReports,
        Permission::ExportData,
    ];

    pub fn all() -> &'static [Permission] {
        &Self::ALL
    }

    pub fn code(&self) -> &'static str {
        match self {
            Permission::CreateTodo => "CREATE_TODO",
            Permission::ReadOwnTodo => "READ_OWN_TODO",
            Permission::UpdateOwnTodo => "UPDATE_OWN_TODO",
            Permission::DeleteOwnTodo => "DELETE_OWN_TODO",
            Permission::ReadAllTodos => "READ_ALL_TODOS",
            Permission::UpdateAllTodos => "UPDATE_ALL_TODOS",
            Permission::DeleteAllTodos => "DELETE_ALL_TODOS",
            Permission::CreateUser => "CREATE_USER",
            Permission::ReadUserList => "READ_USER_LIST",
            Permission::UpdateUserProfile => "UPDATE_USER_PROFILE",
            Permission::DeleteUser => "DELETE_USER",
            Permission::ChangeUserRole => "CHANGE_USER_ROLE",
            Permission::SystemConfiguration => "SYSTEM_CONFIGURATION",
            Permission::ViewSystemLogs => "VIEW_SYSTEM_LOGS",
            Permission::BackupRestore => "BACKUP_RESTORE",
            Permission::ViewAuditLogs => "VIEW_AUDIT_LOGS",
            Permission::GenerateReports => "GENERATE_REPORTS",
            Permission::ExportData => "EXPORT_DATA",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Permission::CreateTodo => "Create todos",
            Permission::ReadOwnTodo => "Read own todos",
            Permission::UpdateOwnTodo => "Update own todos",
            Permission::DeleteOwnTodo => "Delete own todos",
            Permission::ReadAllTodos => "Read every todo",
            Permission::UpdateAllTodos => "Update every todo",
            Permission::DeleteAllTodos => "Delete every todo",
            Permission::CreateUser => "Create users",
            Permission::ReadUserList => "List users",
            Permission::UpdateUserProfile => "Update user profiles",
            Permission::DeleteUser => "Delete users",
            Permission::ChangeUserRole => "Change user roles",
            Permission::SystemConfiguration => "Change system settings",
            Permission::ViewSystemLogs => "Read system logs",
            Permission::BackupRestore => "Back up and restore",
            Permission::ViewAuditLogs => "Read audit logs",
            Permission::GenerateReports => "Generate reports",
            Permission::ExportData => "Export data",
        }
    }

    pub fn from_code(code: &str) -> DomainResult<Self> {
        let normalized = code.trim().to_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|permission| permission.code() == normalized)
            .ok_or_else(|| {
                DomainError::invalid_argument(format!("Unknown permission code: {}", code))
            })
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Permission {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl TryFrom<String> for Permission {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_code(&value)
    }
}

impl From<Permission> for String {
    fn from(permission: Permission) -> Self {
        permission.code().to_string()
    }
}
