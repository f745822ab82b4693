//! Todo domain core
//!
//! Validated value objects, the [`Outcome`] type carrying recoverable
//! validation failures, status and role enums, and the two runtime-mutable
//! policies: [`TodoStatusTransitionPolicy`] and [`UserPermissionPolicy`].
//!
//! ```
//! use todoapp_domain::{TodoStatus, TodoStatusTransitionPolicy, TodoTitle};
//!
//! let title = TodoTitle::of("  Buy milk ");
//! assert_eq!(title.value().value(), "Buy milk");
//!
//! let policy = TodoStatusTransitionPolicy::new();
//! assert!(!policy.can_transition(TodoStatus::Deleted, TodoStatus::Todo));
//! ```

pub mod config;
pub mod entities;
pub mod errors;
pub mod outcome;
pub mod permission;
pub mod role;
pub mod services;
pub mod status;
pub mod value_objects;

pub use config::{ConfigError, ConfigLoader, DomainConfig, LoggingConfig, PolicyConfig};
pub use entities::{Todo, TodoAccess, User};
pub use errors::{DomainError, DomainResult};
pub use outcome::Outcome;
pub use permission::Permission;
pub use role::UserRole;
pub use services::{TodoStatusTransitionPolicy, UserPermissionPolicy};
pub use status::TodoStatus;
pub use value_objects::{TodoDescription, TodoId, TodoTitle, UserId, UserName};
