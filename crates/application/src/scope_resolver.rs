//! Scope fallback resolution.
//!
//! A request at a narrow scope is satisfied by a grant at the same or any
//! broader scope of the same action. Resolution never fails: absent sets,
//! unknown actions and scopes outside the resource hierarchy all resolve to
//! `false`.

use timecard_domain::{PermissionSet, Scope, ScopedAction, ScopedResource};

/// Returns whether `permissions` grant `action` on `resource` at
/// `requested` scope or a broader one.
#[must_use]
pub fn resolve_scoped_permission(
    permissions: Option<&PermissionSet>,
    resource: ScopedResource,
    action: ScopedAction,
    requested: Scope,
) -> bool {
    let Some(permissions) = permissions else {
        return false;
    };

    resource
        .scopes_from(requested)
        .iter()
        .filter_map(|scope| resource.permission_for(action, *scope))
        .any(|permission| permissions.contains(permission))
}

/// Resolves a request expressed with transport tokens.
///
/// Any key outside the catalog resolves to `false`.
#[must_use]
pub fn resolve_scoped_permission_raw(
    permissions: Option<&PermissionSet>,
    resource: &str,
    action: &str,
    requested: &str,
) -> bool {
    match (
        resource.parse::<ScopedResource>(),
        action.parse::<ScopedAction>(),
        requested.parse::<Scope>(),
    ) {
        (Ok(resource), Ok(action), Ok(requested)) => {
            resolve_scoped_permission(permissions, resource, action, requested)
        }
        _ => false,
    }
}
