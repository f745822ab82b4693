//! Status transition rules for Todo items

use std::collections::{HashMap, HashSet};

use parking_lot::RwLock;
use tracing::{debug, info};

use crate::errors::DomainResult;
use crate::status::TodoStatus;

/// Table of legal status changes
///
/// Shared read-mostly state: readers never block each other and every
/// single-edge mutation is atomic. There is no transaction spanning
/// several calls.
#[derive(Debug)]
pub struct TodoStatusTransitionPolicy {
    rules: RwLock<HashMap<TodoStatus, HashSet<TodoStatus>>>,
}

impl TodoStatusTransitionPolicy {
    /// Policy with the default rule set
    ///
    /// TODO, IN_PROGRESS and COMPLETED reach each other and DELETED;
    /// DELETED reaches nothing.
    pub fn new() -> Self {
        let mut rules = HashMap::new();
        rules.insert(
            TodoStatus::Todo,
            HashSet::from([
                TodoStatus::InProgress,
                TodoStatus::Completed,
                TodoStatus::Deleted,
            ]),
        );
        rules.insert(
            TodoStatus::InProgress,
            HashSet::from([TodoStatus::Todo, TodoStatus::Completed, TodoStatus::Deleted]),
        );
        rules.insert(
            TodoStatus::Completed,
            HashSet::from([
                TodoStatus::Todo,
                TodoStatus::InProgress,
                TodoStatus::Deleted,
            ]),
        );
        rules.insert(TodoStatus::Deleted, HashSet::new());

        info!(
            rule_count = rules.len(),
            "Created default status transition policy"
        );
        Self {
            rules: RwLock::new(rules),
        }
    }

    /// Policy built only from `rules`; statuses without an entry reach nothing
    pub fn with_rules(rules: HashMap<TodoStatus, HashSet<TodoStatus>>) -> Self {
        info!(
            rule_count = rules.len(),
            "Created custom status transition policy"
        );
        Self {
            rules: RwLock::new(rules),
        }
    }

    /// A status may always stay where it is
    pub fn can_transition(&self, from: TodoStatus, to: TodoStatus) -> bool {
        if from == to {
            return true;
        }
        self.rules
            .read()
            .get(&from)
            .is_some_and(|allowed| allowed.contains(&to))
    }

    /// [`Self::can_transition`] for untyped status codes
    pub fn can_transition_codes(&self, from: &str, to: &str) -> DomainResult<bool> {
        let from = TodoStatus::from_code(from)?;
        let to = TodoStatus::from_code(to)?;
        Ok(self.can_transition(from, to))
    }

    /// Snapshot of the statuses reachable from `from`
    pub fn allowed_transitions(&self, from: TodoStatus) -> HashSet<TodoStatus> {
        self.rules.read().get(&from).cloned().unwrap_or_default()
    }

    pub fn add_transition_rule(&self, from: TodoStatus, to: TodoStatus) {
        self.rules.write().entry(from).or_default().insert(to);
        debug!(from = %from, to = %to, "Added transition rule");
    }

    pub fn remove_transition_rule(&self, from: TodoStatus, to: TodoStatus) {
        if let Some(allowed) = self.rules.write().get_mut(&from) {
            allowed.remove(&to);
        }
        debug!(from = %from, to = %to, "Removed transition rule");
    }

    /// Whether this edge additionally needs approval
    pub fn requires_approval(&self, from: TodoStatus, to: TodoStatus) -> bool {
        from == TodoStatus::InProgress && to == TodoStatus::Completed
    }

    /// Like [`Self::can_transition`]; IN_PROGRESS to COMPLETED also needs `has_approval`
    pub fn can_transition_with_approval(
        &self,
        from: TodoStatus,
        to: TodoStatus,
        has_approval: bool,
    ) -> bool {
        if !self.can_transition(from, to) {
            return false;
        }
        !self.requires_approval(from, to) || has_approval
    }

    /// In an emergency any transition is legal unless the item is already deleted
    pub fn can_emergency_transition(
        &self,
        from: TodoStatus,
        to: TodoStatus,
        is_emergency: bool,
    ) -> bool {
        if !is_emergency {
            return self.can_transition(from, to);
        }
        from != TodoStatus::Deleted
    }
}

impl Default for TodoStatusTransitionPolicy {
    fn default() -> Self {
        Self::new()
    }
}
