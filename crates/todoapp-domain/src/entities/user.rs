//! User entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::entities::Todo;
use crate::errors::{DomainError, DomainResult};
use crate::permission::Permission;
use crate::role::UserRole;
use crate::services::UserPermissionPolicy;
use crate::value_objects::{UserId, UserName};

/// Kind of access requested on a todo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TodoAccess {
    Read,
    Update,
    Delete,
}

impl TodoAccess {
    fn own_permission(self) -> Permission {
        match self {
            TodoAccess::Read => Permission::ReadOwnTodo,
            TodoAccess::Update => Permission::UpdateOwnTodo,
            TodoAccess::Delete => Permission::DeleteOwnTodo,
        }
    }

    fn any_permission(self) -> Permission {
        match self {
            TodoAccess::Read => Permission::ReadAllTodos,
            TodoAccess::Update => Permission::UpdateAllTodos,
            TodoAccess::Delete => Permission::DeleteAllTodos,
        }
    }
}

/// A user account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: UserName,
    role: UserRole,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: UserId, name: UserName, role: UserRole) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            role,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &UserName {
        &self.name
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn has_permission(&self, permission: Permission, policy: &UserPermissionPolicy) -> bool {
        policy.has_permission(self.role, permission)
    }

    /// Owners need the "own" permission, everyone else the "all" one
    pub fn can_access(
        &self,
        todo: &Todo,
        access: TodoAccess,
        policy: &UserPermissionPolicy,
    ) -> bool {
        if todo.is_owned_by(self.id) && self.has_permission(access.own_permission(), policy) {
            return true;
        }
        self.has_permission(access.any_permission(), policy)
    }

    pub fn rename(&mut self, name: UserName) {
        self.name = name;
        self.updated_at = Utc::now();
    }

    /// Change this user's role on behalf of `actor`
    ///
    /// The actor needs CHANGE_USER_ROLE and cannot grant a role above its own level.
    pub fn change_role(
        &mut self,
        new_role: UserRole,
        actor: &User,
        policy: &UserPermissionPolicy,
    ) -> DomainResult<()> {
        if !actor.has_permission(Permission::ChangeUserRole, policy) {
            debug!(actor_id = %actor.id, target_id = %self.id, "Role change denied");
            return Err(DomainError::business_rule_violation(
                "role-change-permission",
                format!("User {} may not change roles", actor.id),
            ));
        }
        if new_role.has_higher_level_than(actor.role) {
            debug!(
                actor_id = %actor.id,
                target_id = %self.id,
                role = %new_role,
                "Role escalation denied"
            );
            return Err(DomainError::business_rule_violation(
                "role-escalation",
                format!(
                    "User {} ({}) may not grant {}",
                    actor.id, actor.role, new_role
                ),
            ));
        }

        self.role = new_role;
        self.updated_at = Utc::now();
        Ok(())
    }
}
