//! Shared fixtures for the cross-crate scenario tests

use todoapp_domain::{
    DomainResult, Todo, TodoDescription, TodoId, TodoTitle, User, UserId, UserName, UserRole,
};

/// Build a user from raw input the way an application service would
pub fn create_user(id: &str, name: &str, role: UserRole) -> DomainResult<User> {
    let id = UserId::parse(id).into_result()?;
    let name = UserName::of(name).into_result()?;
    Ok(User::new(id, name, role))
}

/// Build a todo owned by `owner` from raw input
pub fn create_todo(
    id: &str,
    owner: &User,
    title: &str,
    description: Option<&str>,
) -> DomainResult<Todo> {
    let id = TodoId::parse(id).into_result()?;
    let title = TodoTitle::of(title).into_result()?;
    let description = TodoDescription::of(description).into_result()?;
    Ok(Todo::new(id, owner.id(), title, description))
}
