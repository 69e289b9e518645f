use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use timecard_core::{AppResult, SessionId};
use timecard_domain::SessionUser;

/// Authenticated session held by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSession {
    /// Identifier issued when the session was created.
    pub session_id: SessionId,
    /// Normalised signed-in user.
    pub user: Arc<SessionUser>,
    /// Time the session was created.
    pub started_at: DateTime<Utc>,
}

impl ActiveSession {
    /// Starts a new session for a normalised user.
    #[must_use]
    pub fn start(user: SessionUser) -> Self {
        Self {
            session_id: SessionId::new(),
            user: Arc::new(user),
            started_at: Utc::now(),
        }
    }
}

/// Storage port for the current session.
///
/// Sessions are replaced wholesale; implementations never mutate a stored
/// session in place.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Returns the current session, if one is active.
    async fn current_session(&self) -> AppResult<Option<ActiveSession>>;

    /// Replaces the current session.
    async fn replace_session(&self, session: ActiveSession) -> AppResult<()>;

    /// Removes the current session.
    async fn clear_session(&self) -> AppResult<()>;
}

/// Lookup port for user payloads returned by the backend.
///
/// Payloads are returned raw and normalised by the caller at session load.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Finds a user payload by email address.
    async fn find_user_by_email(&self, email: &str) -> AppResult<Option<Value>>;

    /// Finds a user payload by subject identifier.
    async fn find_user_by_subject(&self, subject: &str) -> AppResult<Option<Value>>;
}
