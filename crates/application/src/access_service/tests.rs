use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};
use timecard_core::{AppError, AppResult};
use timecard_domain::Scope;
use tokio::sync::Mutex;

use crate::{ActiveSession, Capability, SessionRepository, UserDirectory};

use super::AccessService;

#[derive(Default)]
struct FakeSessionRepository {
    current: Mutex<Option<ActiveSession>>,
}

#[async_trait]
impl SessionRepository for FakeSessionRepository {
    async fn current_session(&self) -> AppResult<Option<ActiveSession>> {
        Ok(self.current.lock().await.clone())
    }

    async fn replace_session(&self, session: ActiveSession) -> AppResult<()> {
        *self.current.lock().await = Some(session);
        Ok(())
    }

    async fn clear_session(&self) -> AppResult<()> {
        *self.current.lock().await = None;
        Ok(())
    }
}

struct FakeUserDirectory {
    users: Mutex<HashMap<String, Value>>,
}

impl FakeUserDirectory {
    fn new(users: Vec<Value>) -> Self {
        Self {
            users: Mutex::new(
                users
                    .into_iter()
                    .filter_map(|user| {
                        let email = user.get("email")?.as_str()?.to_owned();
                        Some((email, user))
                    })
                    .collect(),
            ),
        }
    }
}

#[async_trait]
impl UserDirectory for FakeUserDirectory {
    async fn find_user_by_email(&self, email: &str) -> AppResult<Option<Value>> {
        Ok(self.users.lock().await.get(email).cloned())
    }

    async fn find_user_by_subject(&self, subject: &str) -> AppResult<Option<Value>> {
        Ok(self
            .users
            .lock()
            .await
            .values()
            .find(|user| user.get("id").and_then(Value::as_str) == Some(subject))
            .cloned())
    }
}

fn directory() -> Arc<FakeUserDirectory> {
    Arc::new(FakeUserDirectory::new(vec![
        json!({
            "id": "u-employee",
            "email": "erin@example.com",
            "role": { "name": "employee", "permissions": ["view_own_timesheet", "create_own_timesheet"] }
        }),
        json!({
            "id": "u-approver",
            "email": "alex@example.com",
            "permissions": ["approve_all_timesheet"]
        }),
    ]))
}

fn service(directory: Arc<FakeUserDirectory>) -> (AccessService, Arc<FakeSessionRepository>) {
    let sessions = Arc::new(FakeSessionRepository::default());
    (AccessService::new(sessions.clone(), directory), sessions)
}

#[tokio::test]
async fn sign_in_grants_role_capabilities() {
    let (service, _) = service(directory());

    let session = service.sign_in("erin@example.com").await;
    assert!(session.is_ok());

    let allowed = service
        .allows(Capability::ViewTimesheets(Some(Scope::Own)))
        .await;
    assert!(matches!(allowed, Ok(true)));

    let approve = service
        .require(Capability::ApproveTimesheets(Some(Scope::Team)))
        .await;
    assert!(matches!(approve, Err(AppError::Forbidden(_))));
}

#[tokio::test]
async fn unknown_email_is_unauthorized() {
    let (service, sessions) = service(directory());

    let result = service.sign_in("nobody@example.com").await;
    assert!(matches!(result, Err(AppError::Unauthorized(_))));
    assert!(sessions.current.lock().await.is_none());
}

#[tokio::test]
async fn blank_email_is_rejected() {
    let (service, _) = service(directory());

    let result = service.sign_in("   ").await;
    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn no_session_denies_everything() {
    let (service, _) = service(directory());

    let summary = service.summary().await;
    assert!(summary.is_ok());
    let summary = summary.map(|summary| summary.total_permissions).unwrap_or(usize::MAX);
    assert_eq!(summary, 0);

    let result = service.require(Capability::ViewProfile).await;
    assert!(matches!(result, Err(AppError::Unauthorized(_))));
}

#[tokio::test]
async fn sign_out_revokes_capabilities() {
    let (service, _) = service(directory());

    assert!(service.sign_in("alex@example.com").await.is_ok());
    assert!(
        service
            .require(Capability::ApproveTimesheets(Some(Scope::Team)))
            .await
            .is_ok()
    );

    assert!(service.sign_out().await.is_ok());
    let allowed = service.allows(Capability::ApproveTimesheets(None)).await;
    assert!(matches!(allowed, Ok(false)));
}

#[tokio::test]
async fn capabilities_are_memoized_within_a_session() {
    let (service, _) = service(directory());
    assert!(service.sign_in("alex@example.com").await.is_ok());

    let first = service.capabilities().await;
    let second = service.capabilities().await;
    match (first, second) {
        (Ok(first), Ok(second)) => assert!(Arc::ptr_eq(&first, &second)),
        _ => panic!("capabilities should resolve"),
    }
}

#[tokio::test]
async fn refresh_profile_picks_up_new_permissions() {
    let directory = directory();
    let (service, _) = service(directory.clone());

    let first = service.sign_in("erin@example.com").await;
    assert!(first.is_ok());

    directory.users.lock().await.insert(
        "erin@example.com".to_owned(),
        json!({
            "id": "u-employee",
            "email": "erin@example.com",
            "role": { "name": "manager", "permissions": ["approve_team_timesheet"] }
        }),
    );

    let refreshed = service.refresh_profile().await;
    assert!(refreshed.is_ok());
    if let (Ok(first), Ok(refreshed)) = (first, refreshed) {
        assert_ne!(first.session_id, refreshed.session_id);
    }

    let allowed = service.allows(Capability::ApproveTimesheets(None)).await;
    assert!(matches!(allowed, Ok(true)));
}

#[tokio::test]
async fn refresh_without_session_is_unauthorized() {
    let (service, _) = service(directory());

    let result = service.refresh_profile().await;
    assert!(matches!(result, Err(AppError::Unauthorized(_))));
}

#[tokio::test]
async fn restored_malformed_session_fails_closed() {
    let (service, _) = service(directory());

    let session = service
        .restore_session(&json!({ "id": "u-9", "permissions": "approve_all_timesheet" }))
        .await;
    assert!(session.is_ok());

    let result = service.require(Capability::ApproveTimesheets(None)).await;
    assert!(matches!(result, Err(AppError::Forbidden(_))));
}
