use std::sync::Arc;

use serde_json::Value;
use timecard_core::{AppError, AppResult, NonEmptyString};
use timecard_domain::SessionUser;

use crate::{
    ActiveSession, Capabilities, Capability, CapabilityMemo, CapabilitySummary, SessionRepository,
    UserDirectory,
};

#[cfg(test)]
mod tests;

/// Application service owning the session lifecycle and capability checks.
///
/// Checks here decide client-side affordance only; the backend enforces.
#[derive(Clone)]
pub struct AccessService {
    sessions: Arc<dyn SessionRepository>,
    directory: Arc<dyn UserDirectory>,
    memo: Arc<CapabilityMemo>,
}

impl AccessService {
    /// Creates a new access service from port implementations.
    #[must_use]
    pub fn new(sessions: Arc<dyn SessionRepository>, directory: Arc<dyn UserDirectory>) -> Self {
        Self {
            sessions,
            directory,
            memo: Arc::new(CapabilityMemo::new()),
        }
    }

    /// Signs in the user with the given email and replaces the session.
    pub async fn sign_in(&self, email: &str) -> AppResult<ActiveSession> {
        let email = NonEmptyString::new(email.trim())?;
        let payload = self
            .directory
            .find_user_by_email(email.as_str())
            .await?
            .ok_or_else(|| {
                AppError::Unauthorized(format!("no user registered for '{}'", email.as_str()))
            })?;

        self.restore_session(&payload).await
    }

    /// Normalises a stored user payload and makes it the current session.
    pub async fn restore_session(&self, payload: &Value) -> AppResult<ActiveSession> {
        let session = ActiveSession::start(SessionUser::from_payload(payload));
        self.sessions.replace_session(session.clone()).await?;
        Ok(session)
    }

    /// Ends the current session.
    pub async fn sign_out(&self) -> AppResult<()> {
        self.sessions.clear_session().await
    }

    /// Reloads the signed-in user and replaces the session with the result.
    pub async fn refresh_profile(&self) -> AppResult<ActiveSession> {
        let current = self.require_session().await?;
        let subject = current.user.identity().subject();
        if subject.trim().is_empty() {
            return Err(AppError::Validation(
                "current session has no subject to refresh".to_owned(),
            ));
        }

        let payload = self
            .directory
            .find_user_by_subject(subject)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user '{subject}' no longer exists")))?;

        self.restore_session(&payload).await
    }

    /// Returns the capability facade for the current session.
    ///
    /// Without a session every capability is denied.
    pub async fn capabilities(&self) -> AppResult<Arc<Capabilities>> {
        let session = self.sessions.current_session().await?;
        Ok(self
            .memo
            .get_for_user(session.as_ref().map(|session| session.user.as_ref())))
    }

    /// Returns whether the current session allows the capability.
    pub async fn allows(&self, capability: Capability) -> AppResult<bool> {
        Ok(self.capabilities().await?.allows(capability))
    }

    /// Ensures the current session allows the capability.
    pub async fn require(&self, capability: Capability) -> AppResult<()> {
        let session = self.require_session().await?;
        let capabilities = self.memo.get_for_user(Some(session.user.as_ref()));

        if capabilities.allows(capability) {
            return Ok(());
        }

        Err(AppError::Forbidden(format!(
            "access denied: session '{}' lacks capability '{capability}'",
            session.session_id
        )))
    }

    /// Returns the diagnostic capability snapshot of the current session.
    pub async fn summary(&self) -> AppResult<CapabilitySummary> {
        Ok(self.capabilities().await?.summary())
    }

    async fn require_session(&self) -> AppResult<ActiveSession> {
        self.sessions
            .current_session()
            .await?
            .ok_or_else(|| AppError::Unauthorized("no active session".to_owned()))
    }
}
