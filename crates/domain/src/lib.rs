//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod permission;
mod permission_set;
mod role;
mod scope;
mod session_user;

pub use permission::{Permission, Resource};
pub use permission_set::PermissionSet;
pub use role::Role;
pub use scope::{Scope, ScopedAction, ScopedResource};
pub use session_user::{PermissionSource, SessionUser};
