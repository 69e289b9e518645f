use async_trait::async_trait;
use timecard_application::{ActiveSession, SessionRepository};
use timecard_core::AppResult;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// In-memory session store adapter.
///
/// One instance per client; tests construct their own.
#[derive(Default)]
pub struct InMemorySessionRepository {
    current: RwLock<Option<ActiveSession>>,
}

impl InMemorySessionRepository {
    /// Creates a store without an active session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn current_session(&self) -> AppResult<Option<ActiveSession>> {
        Ok(self.current.read().await.clone())
    }

    async fn replace_session(&self, session: ActiveSession) -> AppResult<()> {
        info!(
            session_id = %session.session_id,
            subject = %session.user.identity().subject(),
            permission_count = session.user.permissions().len(),
            "session replaced"
        );

        let unrecognized: Vec<&str> = session.user.permissions().unrecognized().collect();
        if !unrecognized.is_empty() {
            debug!(
                session_id = %session.session_id,
                unrecognized = ?unrecognized,
                "session carries permissions outside the catalog"
            );
        }

        *self.current.write().await = Some(session);
        Ok(())
    }

    async fn clear_session(&self) -> AppResult<()> {
        if let Some(previous) = self.current.write().await.take() {
            info!(session_id = %previous.session_id, "session cleared");
        }
        Ok(())
    }
}
