use std::collections::BTreeSet;

use crate::Permission;

/// Immutable set of permissions held by one session.
///
/// Built once from transport strings. Tokens outside the catalog never grant
/// anything but are kept in the raw list for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionSet {
    granted: BTreeSet<Permission>,
    raw: Vec<String>,
}

impl PermissionSet {
    /// Returns an empty permission set.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a permission set from transport tokens.
    pub fn from_raw<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let raw: Vec<String> = values.into_iter().map(Into::into).collect();
        let granted = raw
            .iter()
            .filter_map(|value| Permission::from_transport(value).ok())
            .collect();

        Self { granted, raw }
    }

    /// Builds a permission set from catalog values.
    pub fn from_permissions<I>(permissions: I) -> Self
    where
        I: IntoIterator<Item = Permission>,
    {
        Self::from_raw(
            permissions
                .into_iter()
                .map(|permission| permission.as_str().to_owned()),
        )
    }

    /// Returns whether the permission is held.
    #[must_use]
    pub fn contains(&self, permission: Permission) -> bool {
        self.granted.contains(&permission)
    }

    /// Returns whether at least one of the permissions is held.
    #[must_use]
    pub fn contains_any(&self, permissions: &[Permission]) -> bool {
        permissions
            .iter()
            .any(|permission| self.contains(*permission))
    }

    /// Returns the tokens exactly as supplied.
    #[must_use]
    pub fn raw(&self) -> &[String] {
        self.raw.as_slice()
    }

    /// Returns tokens that are not part of the catalog.
    pub fn unrecognized(&self) -> impl Iterator<Item = &str> + '_ {
        self.raw
            .iter()
            .map(String::as_str)
            .filter(|value| Permission::from_transport(value).is_err())
    }

    /// Returns the number of supplied tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns whether no tokens were supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<T: IntoIterator<Item = Permission>>(iter: T) -> Self {
        Self::from_permissions(iter)
    }
}
