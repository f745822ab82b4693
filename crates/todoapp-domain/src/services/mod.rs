//! Policy services consulted by entities at decision points

mod permission_policy;
mod transition_policy;

pub use permission_policy::UserPermissionPolicy;
pub use transition_policy::TodoStatusTransitionPolicy;
