use std::sync::{Arc, Mutex, PoisonError};

use timecard_domain::{PermissionSet, SessionUser};

use super::Capabilities;

/// Memoized capability facade.
///
/// The facade is rebuilt if and only if the identity of the input permission
/// set changes. Sessions replace their permission set wholesale, so identity
/// equality implies value equality.
#[derive(Debug)]
pub struct CapabilityMemo {
    empty: Arc<PermissionSet>,
    cached: Mutex<Option<Arc<Capabilities>>>,
}

impl CapabilityMemo {
    /// Creates an empty memo.
    #[must_use]
    pub fn new() -> Self {
        Self {
            empty: Arc::new(PermissionSet::empty()),
            cached: Mutex::new(None),
        }
    }

    /// Returns the facade for `permissions`, reusing the cached one when the
    /// same set is passed again.
    pub fn get(&self, permissions: &Arc<PermissionSet>) -> Arc<Capabilities> {
        let mut cached = self.cached.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(capabilities) = cached.as_ref()
            && Arc::ptr_eq(capabilities.permissions(), permissions)
        {
            return Arc::clone(capabilities);
        }

        let capabilities = Arc::new(Capabilities::new(Arc::clone(permissions)));
        *cached = Some(Arc::clone(&capabilities));
        capabilities
    }

    /// Returns the facade for the signed-in user, or the deny-all facade.
    pub fn get_for_user(&self, user: Option<&SessionUser>) -> Arc<Capabilities> {
        match user {
            Some(user) => self.get(user.permissions()),
            None => self.get(&self.empty),
        }
    }
}

impl Default for CapabilityMemo {
    fn default() -> Self {
        Self::new()
    }
}
