//! End-to-end scenarios across value objects, entities and policies

use todoapp_domain::{
    DomainError, Outcome, Permission, Todo, TodoAccess, TodoDescription, TodoId, TodoStatus,
    TodoStatusTransitionPolicy, TodoTitle, User, UserId, UserPermissionPolicy, UserRole,
};
use todoapp_integration_tests::{create_todo, create_user};

#[test]
fn test_full_lifecycle_with_approval() {
    let transitions = TodoStatusTransitionPolicy::new();
    let permissions = UserPermissionPolicy::new();

    let owner = create_user("1", "hanako", UserRole::User).unwrap();
    let mut todo = create_todo("007", &owner, "  Prepare slides  ", Some("   ")).unwrap();

    assert_eq!(todo.id().value(), 7);
    assert_eq!(todo.title().value(), "Prepare slides");
    assert!(!todo.description().has_value());
    assert!(owner.can_access(&todo, TodoAccess::Update, &permissions));

    todo.change_status(TodoStatus::InProgress, &transitions)
        .unwrap();
    assert!(todo.complete(&transitions, false).is_err());
    todo.complete(&transitions, true).unwrap();
    assert_eq!(todo.status(), TodoStatus::Completed);

    todo.delete(&transitions).unwrap();
    let err = todo
        .change_status(TodoStatus::Todo, &transitions)
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidState { .. }));
    assert!(todo
        .emergency_change_status(TodoStatus::Todo, &transitions, true)
        .is_err());
}

#[test]
fn test_invalid_input_stops_at_first_failure() {
    let owner = create_user("1", "taro", UserRole::User).unwrap();

    let err = create_todo("-5", &owner, "Title", None).unwrap_err();
    assert_eq!(
        err,
        DomainError::validation("TodoId value must be at least 1, but was: -5")
    );

    let err = create_todo("3", &owner, "", None).unwrap_err();
    assert_eq!(err, DomainError::validation("Todo title must not be empty"));

    let err = create_user("0", "valid_name", UserRole::User).unwrap_err();
    assert!(err.to_string().contains("greater than 0"));
}

#[test]
fn test_outcome_chain_builds_todo() {
    let owner_id = UserId::of(9).into_value();
    let todo = TodoId::parse(" 12 ").flat_map(|id| {
        TodoTitle::of("Renew passport").map(|title| {
            Todo::new(id, owner_id, title, TodoDescription::empty())
        })
    });
    assert!(todo.is_success());
    assert_eq!(todo.value().title().value(), "Renew passport");

    let failed = TodoId::parse("abc").flat_map(|id| {
        TodoTitle::of("never built").map(|title| {
            Todo::new(id, owner_id, title, TodoDescription::empty())
        })
    });
    assert_eq!(
        failed.error_message(),
        Some("TodoId string must be a valid number: 'abc'")
    );

    let fallback: Outcome<i64> = TodoId::of(0).map(|id| id.value());
    assert_eq!(fallback.unwrap_or(1), 1);
}

#[test]
fn test_role_based_access_across_users() {
    let permissions = UserPermissionPolicy::new();
    let owner = create_user("1", "owner", UserRole::User).unwrap();
    let other = create_user("2", "other", UserRole::User).unwrap();
    let moderator = create_user("3", "moderator", UserRole::Moderator).unwrap();
    let admin = create_user("4", "admin", UserRole::Admin).unwrap();
    let todo = create_todo("10", &owner, "Private plan", None).unwrap();

    assert!(!other.can_access(&todo, TodoAccess::Read, &permissions));
    assert!(moderator.can_access(&todo, TodoAccess::Read, &permissions));
    assert!(!moderator.can_access(&todo, TodoAccess::Delete, &permissions));
    assert!(admin.can_access(&todo, TodoAccess::Delete, &permissions));

    assert!(!permissions.has_permission(UserRole::User, Permission::DeleteAllTodos));

    permissions.add_permission(UserRole::User, Permission::ReadAllTodos);
    assert!(other.can_access(&todo, TodoAccess::Read, &permissions));
}

#[test]
fn test_role_promotion_rules() {
    let permissions = UserPermissionPolicy::new();
    let super_admin = create_user("1", "root_user", UserRole::SuperAdmin).unwrap();
    let admin = create_user("2", "admin", UserRole::Admin).unwrap();
    let mut member = create_user("3", "member", UserRole::User).unwrap();

    member
        .change_role(UserRole::Admin, &admin, &permissions)
        .unwrap();
    assert_eq!(member.role(), UserRole::Admin);

    assert!(member
        .change_role(UserRole::SuperAdmin, &admin, &permissions)
        .is_err());
    member
        .change_role(UserRole::SuperAdmin, &super_admin, &permissions)
        .unwrap();
    assert_eq!(member.role(), UserRole::SuperAdmin);
}

#[test]
fn test_entities_serialize_with_codes() {
    let owner = create_user("5", "やまだ", UserRole::Moderator).unwrap();
    let todo = create_todo("8", &owner, "Book flights", Some("window seat")).unwrap();

    let json = serde_json::to_value(&todo).unwrap();
    assert_eq!(json["status"], "TODO");
    assert_eq!(json["id"], 8);
    assert_eq!(json["description"], "window seat");

    let restored: Todo = serde_json::from_value(json).unwrap();
    assert_eq!(restored, todo);

    let json = serde_json::to_value(&owner).unwrap();
    assert_eq!(json["role"], "MODERATOR");
    assert_eq!(json["name"], "やまだ");

    let mut tampered = json;
    tampered["name"] = serde_json::Value::from("_bad");
    assert!(serde_json::from_value::<User>(tampered).is_err());
}
