use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::Credential;
use crate::domain::auth::models::EmailAddress;
use crate::domain::auth::models::Session;
use crate::domain::auth::models::UserId;
use crate::domain::auth::ports::CredentialStore;
use crate::domain::auth::ports::SessionStore;

/// In-memory credential store.
///
/// Stands in for the external user store; single-process only.
pub struct InMemoryCredentialStore {
    records: RwLock<HashMap<String, Credential>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn create(&self, email: EmailAddress, credential: Credential) -> Result<(), AuthError> {
        let mut records = self.records.write().await;

        if records.contains_key(email.as_str()) {
            return Err(AuthError::EmailAlreadyExists(email.to_string()));
        }

        records.insert(email.as_str().to_string(), credential);
        Ok(())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Credential>, AuthError> {
        let records = self.records.read().await;
        Ok(records.get(email.as_str()).cloned())
    }
}

/// In-memory refresh-session store.
///
/// Enforces the session invariants at resolution time: a revoked or expired
/// session never resolves to a user, and revocation is monotonic.
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, Session>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create_session(&self, session: Session) -> Result<(), AuthError> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.token.clone(), session);
        Ok(())
    }

    async fn resolve_session(&self, token: &str) -> Result<Option<UserId>, AuthError> {
        let sessions = self.sessions.read().await;

        let user_id = sessions
            .get(token)
            .filter(|session| session.revoked_at.is_none() && session.expires_at > Utc::now())
            .map(|session| session.user_id);

        Ok(user_id)
    }

    async fn revoke_session(&self, token: &str) -> Result<bool, AuthError> {
        let mut sessions = self.sessions.write().await;

        match sessions.get_mut(token) {
            Some(session) if session.revoked_at.is_none() => {
                session.revoked_at = Some(Utc::now());
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
