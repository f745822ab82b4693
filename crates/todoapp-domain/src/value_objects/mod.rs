//! Value objects representing immutable domain concepts
//!
//! Every factory validates its input and returns an [`crate::Outcome`];
//! a constructed value is always valid and never changes.

mod ids;
mod todo_description;
mod todo_title;
mod user_name;

pub use ids::{TodoId, UserId};
pub use todo_description::TodoDescription;
pub use todo_title::TodoTitle;
pub use user_name::UserName;
