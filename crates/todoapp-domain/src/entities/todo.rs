//! Todo entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{DomainError, DomainResult};
use crate::services::TodoStatusTransitionPolicy;
use crate::status::TodoStatus;
use crate::value_objects::{TodoDescription, TodoId, TodoTitle, UserId};

/// A single item on a user's list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    id: TodoId,
    owner_id: UserId,
    title: TodoTitle,
    description: TodoDescription,
    status: TodoStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Todo {
    /// Create a todo in the TODO status
    pub fn new(
        id: TodoId,
        owner_id: UserId,
        title: TodoTitle,
        description: TodoDescription,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            owner_id,
            title,
            description,
            status: TodoStatus::Todo,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> TodoId {
        self.id
    }

    pub fn owner_id(&self) -> UserId {
        self.owner_id
    }

    pub fn title(&self) -> &TodoTitle {
        &self.title
    }

    pub fn description(&self) -> &TodoDescription {
        &self.description
    }

    pub fn status(&self) -> TodoStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }

    pub fn rename(&mut self, title: TodoTitle) {
        self.title = title;
        self.touch();
    }

    pub fn update_description(&mut self, description: TodoDescription) {
        self.description = description;
        self.touch();
    }

    /// Move to `to` if the policy allows it
    pub fn change_status(
        &mut self,
        to: TodoStatus,
        policy: &TodoStatusTransitionPolicy,
    ) -> DomainResult<()> {
        if !policy.can_transition(self.status, to) {
            debug!(todo_id = %self.id, from = %self.status, to = %to, "Transition denied");
            return Err(self.transition_denied(to));
        }
        self.set_status(to);
        Ok(())
    }

    /// Complete the todo; finishing in-progress work needs `approved`
    pub fn complete(
        &mut self,
        policy: &TodoStatusTransitionPolicy,
        approved: bool,
    ) -> DomainResult<()> {
        let to = TodoStatus::Completed;
        if !policy.can_transition(self.status, to) {
            debug!(todo_id = %self.id, from = %self.status, "Completion denied");
            return Err(self.transition_denied(to));
        }
        if !policy.can_transition_with_approval(self.status, to, approved) {
            debug!(todo_id = %self.id, "Completion is missing approval");
            return Err(DomainError::business_rule_violation(
                "approval-required",
                format!(
                    "Completing todo {} from {} requires approval",
                    self.id, self.status
                ),
            ));
        }
        self.set_status(to);
        Ok(())
    }

    /// Status change that bypasses the rule table when `is_emergency` is set
    pub fn emergency_change_status(
        &mut self,
        to: TodoStatus,
        policy: &TodoStatusTransitionPolicy,
        is_emergency: bool,
    ) -> DomainResult<()> {
        if !policy.can_emergency_transition(self.status, to, is_emergency) {
            debug!(
                todo_id = %self.id,
                from = %self.status,
                to = %to,
                is_emergency,
                "Emergency transition denied"
            );
            return Err(self.transition_denied(to));
        }
        self.set_status(to);
        Ok(())
    }

    /// Logical delete
    pub fn delete(&mut self, policy: &TodoStatusTransitionPolicy) -> DomainResult<()> {
        self.change_status(TodoStatus::Deleted, policy)
    }

    fn transition_denied(&self, to: TodoStatus) -> DomainError {
        DomainError::invalid_state(self.status.code(), format!("transition to {}", to))
    }

    fn set_status(&mut self, status: TodoStatus) {
        if self.status != status {
            self.status = status;
            self.touch();
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_todo() -> Todo {
        Todo::new(
            TodoId::of(1).into_value(),
            UserId::of(7).into_value(),
            TodoTitle::of("Write report").into_value(),
            TodoDescription::empty(),
        )
    }

    #[test]
    fn test_new_todo_starts_in_todo() {
        let todo = sample_todo();
        assert_eq!(todo.status(), TodoStatus::Todo);
        assert!(todo.is_owned_by(UserId::of(7).into_value()));
        assert!(!todo.is_owned_by(UserId::of(8).into_value()));
        assert_eq!(todo.created_at(), todo.updated_at());
    }

    #[test]
    fn test_change_status_follows_policy() {
        let policy = TodoStatusTransitionPolicy::new();
        let mut todo = sample_todo();
        todo.change_status(TodoStatus::InProgress, &policy).unwrap();
        assert_eq!(todo.status(), TodoStatus::InProgress);

        todo.delete(&policy).unwrap();
        let err = todo.change_status(TodoStatus::Todo, &policy).unwrap_err();
        assert_eq!(
            err,
            DomainError::invalid_state("DELETED", "transition to TODO")
        );
        assert_eq!(todo.status(), TodoStatus::Deleted);
    }

    #[test]
    fn test_complete_requires_approval_from_in_progress() {
        let policy = TodoStatusTransitionPolicy::new();
        let mut todo = sample_todo();
        todo.change_status(TodoStatus::InProgress, &policy).unwrap();

        let err = todo.complete(&policy, false).unwrap_err();
        assert!(matches!(
            err,
            DomainError::BusinessRuleViolation { ref rule, .. } if rule == "approval-required"
        ));
        assert_eq!(todo.status(), TodoStatus::InProgress);

        todo.complete(&policy, true).unwrap();
        assert!(todo.status().is_completed());
    }

    #[test]
    fn test_complete_from_todo_needs_no_approval() {
        let policy = TodoStatusTransitionPolicy::new();
        let mut todo = sample_todo();
        todo.complete(&policy, false).unwrap();
        assert_eq!(todo.status(), TodoStatus::Completed);
    }

    #[test]
    fn test_emergency_change() {
        let policy = TodoStatusTransitionPolicy::new();
        policy.remove_transition_rule(TodoStatus::Todo, TodoStatus::Completed);
        let mut todo = sample_todo();

        assert!(todo
            .emergency_change_status(TodoStatus::Completed, &policy, false)
            .is_err());
        todo.emergency_change_status(TodoStatus::Completed, &policy, true)
            .unwrap();
        assert_eq!(todo.status(), TodoStatus::Completed);

        todo.delete(&policy).unwrap();
        assert!(todo
            .emergency_change_status(TodoStatus::Todo, &policy, true)
            .is_err());
    }

    #[test]
    fn test_edits() {
        let mut todo = sample_todo();
        todo.rename(TodoTitle::of("Write final report").into_value());
        todo.update_description(TodoDescription::of(Some("due friday")).into_value());
        assert_eq!(todo.title().value(), "Write final report");
        assert_eq!(todo.description().value(), Some("due friday"));
        assert!(todo.updated_at() >= todo.created_at());
    }
}
