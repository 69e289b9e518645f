//! Normalisation of the signed-in user payload.
//!
//! The backend returns users in two shapes: permissions nested under the
//! role (`{ "role": { "permissions": [...] } }`) or attached to the user
//! (`{ "permissions": [...] }`). Both are folded into [`SessionUser`] once,
//! when the session is loaded, so no caller inspects the raw shape again.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use timecard_core::UserIdentity;

use crate::{PermissionSet, Role};

/// Where a session's permissions were read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PermissionSource {
    /// `user.role.permissions`.
    Role {
        /// Role name as supplied by the backend.
        role_name: Option<String>,
    },
    /// `user.permissions`.
    Direct,
    /// Neither field was present.
    Missing,
}

/// Canonical signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    identity: UserIdentity,
    role: Option<Role>,
    source: PermissionSource,
    permissions: Arc<PermissionSet>,
}

impl SessionUser {
    /// Creates a session user holding the given permissions directly.
    #[must_use]
    pub fn new(identity: UserIdentity, permissions: PermissionSet) -> Self {
        Self {
            identity,
            role: None,
            source: PermissionSource::Direct,
            permissions: Arc::new(permissions),
        }
    }

    /// Creates a session user whose permissions come from a predefined role.
    #[must_use]
    pub fn with_role(identity: UserIdentity, role: Role) -> Self {
        Self {
            identity,
            role: Some(role),
            source: PermissionSource::Role {
                role_name: Some(role.as_str().to_owned()),
            },
            permissions: Arc::new(
                role.default_permissions()
                    .into_iter()
                    .collect::<PermissionSet>(),
            ),
        }
    }

    /// Returns a user without identity or permissions.
    #[must_use]
    pub fn anonymous() -> Self {
        Self {
            identity: UserIdentity::default(),
            role: None,
            source: PermissionSource::Missing,
            permissions: Arc::new(PermissionSet::empty()),
        }
    }

    /// Normalises a user payload of either accepted shape.
    ///
    /// Never fails: a payload that is not an object, or whose permission
    /// container is not an array, yields an empty permission set. Non-string
    /// array entries are kept as unrecognised tokens in their JSON text form.
    #[must_use]
    pub fn from_payload(payload: &Value) -> Self {
        let Some(object) = payload.as_object() else {
            return Self::anonymous();
        };

        let identity = UserIdentity::new(
            object.get("id").map(scalar_to_string).unwrap_or_default(),
            object
                .get("name")
                .or_else(|| object.get("display_name"))
                .and_then(Value::as_str)
                .unwrap_or_default(),
            object
                .get("email")
                .and_then(Value::as_str)
                .map(str::to_owned),
        );

        let role_value = object.get("role").filter(|value| !value.is_null());
        let role_name = role_value.and_then(|value| match value {
            Value::String(name) => Some(name.clone()),
            Value::Object(role) => role.get("name").and_then(Value::as_str).map(str::to_owned),
            _ => None,
        });
        let role = role_name
            .as_deref()
            .and_then(|name| Role::from_transport(name).ok());

        let role_permissions = role_value
            .and_then(|value| value.get("permissions"))
            .filter(|value| !value.is_null());
        let direct_permissions = object.get("permissions").filter(|value| !value.is_null());

        let (source, container) = match (role_permissions, direct_permissions) {
            (Some(container), _) => (PermissionSource::Role { role_name }, Some(container)),
            (None, Some(container)) => (PermissionSource::Direct, Some(container)),
            (None, None) => (PermissionSource::Missing, None),
        };

        Self {
            identity,
            role,
            source,
            permissions: Arc::new(permission_set_from_container(container)),
        }
    }

    /// Returns the authenticated identity.
    #[must_use]
    pub fn identity(&self) -> &UserIdentity {
        &self.identity
    }

    /// Returns the predefined role, when the role name is recognised.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// Returns where the permissions were read from.
    #[must_use]
    pub fn source(&self) -> &PermissionSource {
        &self.source
    }

    /// Returns the shared permission set.
    ///
    /// The `Arc` identity changes only when the user is replaced.
    #[must_use]
    pub fn permissions(&self) -> &Arc<PermissionSet> {
        &self.permissions
    }
}

fn permission_set_from_container(container: Option<&Value>) -> PermissionSet {
    let Some(Value::Array(values)) = container else {
        return PermissionSet::empty();
    };

    PermissionSet::from_raw(values.iter().map(|value| match value {
        Value::String(token) => token.clone(),
        other => other.to_string(),
    }))
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(value) => value.clone(),
        Value::Number(value) => value.to_string(),
        _ => String::new(),
    }
}
