use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::{Value, json};
use timecard_application::UserDirectory;
use timecard_core::{AppError, AppResult};
use timecard_domain::Role;
use tokio::sync::RwLock;
use tracing::debug;

/// In-memory user directory adapter.
///
/// Holds raw user payloads keyed by lowercase email. Every instance owns its
/// data, so tests never observe each other's writes.
#[derive(Default)]
pub struct InMemoryUserDirectory {
    users: RwLock<BTreeMap<String, Value>>,
}

impl InMemoryUserDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a directory with one demo user per predefined role.
    ///
    /// Users are addressed as `<role>@timecard.local`.
    #[must_use]
    pub fn with_role_fixtures() -> Self {
        let users = Role::all()
            .iter()
            .map(|role| {
                let email = format!("{}@timecard.local", role.as_str());
                let permissions: Vec<&str> = role
                    .default_permissions()
                    .iter()
                    .map(|permission| permission.as_str())
                    .collect();
                let payload = json!({
                    "id": format!("user-{}", role.as_str()),
                    "name": format!("Demo {}", role.as_str()),
                    "email": email,
                    "role": { "name": role.as_str(), "permissions": permissions },
                });
                (email, payload)
            })
            .collect();

        Self {
            users: RwLock::new(users),
        }
    }

    /// Inserts or replaces a user payload.
    ///
    /// The payload must carry a string `email` field.
    pub async fn upsert_user(&self, payload: Value) -> AppResult<()> {
        let email = payload
            .get("email")
            .and_then(Value::as_str)
            .map(|email| email.trim().to_lowercase())
            .filter(|email| !email.is_empty())
            .ok_or_else(|| {
                AppError::Validation("user payload requires a non-empty 'email'".to_owned())
            })?;

        self.users.write().await.insert(email, payload);
        Ok(())
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_user_by_email(&self, email: &str) -> AppResult<Option<Value>> {
        let key = email.trim().to_lowercase();
        let user = self.users.read().await.get(&key).cloned();
        debug!(email = %key, found = user.is_some(), "directory lookup by email");
        Ok(user)
    }

    async fn find_user_by_subject(&self, subject: &str) -> AppResult<Option<Value>> {
        let user = self
            .users
            .read()
            .await
            .values()
            .find(|user| match user.get("id") {
                Some(Value::String(id)) => id == subject,
                Some(Value::Number(id)) => id.to_string() == subject,
                _ => false,
            })
            .cloned();
        debug!(subject, found = user.is_some(), "directory lookup by subject");
        Ok(user)
    }
}
