//! Entities that consult the policies
//!
//! - `todo`: Todo item with a policy-guarded status
//! - `user`: User account with role-based access checks

mod todo;
mod user;

pub use todo::Todo;
pub use user::{TodoAccess, User};
