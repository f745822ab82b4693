//! Role-based permission table

use std::collections::{HashMap, HashSet};

use parking_lot::RwLock;
use tracing::{debug, info};

use crate::permission::Permission;
use crate::role::UserRole;

const USER_PERMISSIONS: [Permission; 5] = [
    Permission::CreateTodo,
    Permission::ReadOwnTodo,
    Permission::UpdateOwnTodo,
    Permission::DeleteOwnTodo,
    Permission::UpdateUserProfile,
];

const MODERATOR_EXTRAS: [Permission; 3] = [
    Permission::ReadAllTodos,
    Permission::ReadUserList,
    Permission::ViewAuditLogs,
];

const ADMIN_EXTRAS: [Permission; 7] = [
    Permission::UpdateAllTodos,
    Permission::DeleteAllTodos,
    Permission::CreateUser,
    Permission::DeleteUser,
    Permission::ChangeUserRole,
    Permission::GenerateReports,
    Permission::ExportData,
];

/// Mapping from role to granted permissions
///
/// A role without an entry has no permissions. Readers get owned
/// snapshots; each single mutation is atomic.
#[derive(Debug)]
pub struct UserPermissionPolicy {
    role_permissions: RwLock<HashMap<UserRole, HashSet<Permission>>>,
}

impl UserPermissionPolicy {
    /// Policy with the default, additive role hierarchy
    pub fn new() -> Self {
        let user: HashSet<Permission> = USER_PERMISSIONS.into_iter().collect();
        let moderator: HashSet<Permission> = user.iter().copied().chain(MODERATOR_EXTRAS).collect();
        let admin: HashSet<Permission> = moderator.iter().copied().chain(ADMIN_EXTRAS).collect();
        let super_admin: HashSet<Permission> = Permission::all().iter().copied().collect();

        let role_permissions = HashMap::from([
            (UserRole::User, user),
            (UserRole::Moderator, moderator),
            (UserRole::Admin, admin),
            (UserRole::SuperAdmin, super_admin),
        ]);

        info!(
            role_count = role_permissions.len(),
            "Created default user permission policy"
        );
        Self {
            role_permissions: RwLock::new(role_permissions),
        }
    }

    /// Policy built only from `role_permissions`, skipping the defaults
    pub fn with_permissions(role_permissions: HashMap<UserRole, HashSet<Permission>>) -> Self {
        info!(
            role_count = role_permissions.len(),
            "Created custom user permission policy"
        );
        Self {
            role_permissions: RwLock::new(role_permissions),
        }
    }

    pub fn has_permission(&self, role: UserRole, permission: Permission) -> bool {
        self.role_permissions
            .read()
            .get(&role)
            .is_some_and(|granted| granted.contains(&permission))
    }

    /// True when every permission is granted; an empty list is always granted
    pub fn has_all_permissions(&self, role: UserRole, permissions: &[Permission]) -> bool {
        let guard = self.role_permissions.read();
        let granted = guard.get(&role);
        permissions
            .iter()
            .all(|permission| granted.is_some_and(|set| set.contains(permission)))
    }

    pub fn has_any_permission(&self, role: UserRole, permissions: &[Permission]) -> bool {
        let guard = self.role_permissions.read();
        let Some(granted) = guard.get(&role) else {
            return false;
        };
        permissions
            .iter()
            .any(|permission| granted.contains(permission))
    }

    /// Snapshot of the permissions granted to `role`
    pub fn permissions(&self, role: UserRole) -> HashSet<Permission> {
        self.role_permissions
            .read()
            .get(&role)
            .cloned()
            .unwrap_or_default()
    }

    /// Grant a permission, registering the role when needed
    pub fn add_permission(&self, role: UserRole, permission: Permission) {
        self.role_permissions
            .write()
            .entry(role)
            .or_default()
            .insert(permission);
        debug!(role = %role, permission = %permission, "Granted permission");
    }

    pub fn remove_permission(&self, role: UserRole, permission: Permission) {
        if let Some(granted) = self.role_permissions.write().get_mut(&role) {
            granted.remove(&permission);
        }
        debug!(role = %role, permission = %permission, "Revoked permission");
    }

    /// Drop the role from the table entirely
    pub fn clear_permissions(&self, role: UserRole) {
        self.role_permissions.write().remove(&role);
        debug!(role = %role, "Cleared permissions");
    }

    /// Replace the role's permission set
    pub fn add_role<I>(&self, role: UserRole, permissions: I)
    where
        I: IntoIterator<Item = Permission>,
    {
        let permissions: HashSet<Permission> = permissions.into_iter().collect();
        let count = permissions.len();
        self.role_permissions.write().insert(role, permissions);
        debug!(role = %role, permission_count = count, "Replaced role permissions");
    }
}

impl Default for UserPermissionPolicy {
    fn default() -> Self {
        Self::new()
    }
}
