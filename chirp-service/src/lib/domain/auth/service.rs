use std::sync::Arc;

use async_trait::async_trait;
use auth::JwtHandler;
use auth::PasswordHasher;
use chrono::Duration;
use chrono::Utc;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AuthTokens;
use crate::domain::auth::models::Credential;
use crate::domain::auth::models::EmailAddress;
use crate::domain::auth::models::Session;
use crate::domain::auth::models::UserId;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::ports::CredentialStore;
use crate::domain::auth::ports::SessionStore;

/// The auth gateway.
///
/// Composes password verification, token signing, refresh-token issuance,
/// and the session store into the request-level flows handlers call.
/// Constructed once with its secret and store dependencies and passed by
/// reference; it holds no per-request state.
pub struct AuthService<CS, SS>
where
    CS: CredentialStore,
    SS: SessionStore,
{
    credentials: Arc<CS>,
    sessions: Arc<SS>,
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    access_ttl: Duration,
    refresh_ttl: Duration,
    webhook_key: String,
}

impl<CS, SS> AuthService<CS, SS>
where
    CS: CredentialStore,
    SS: SessionStore,
{
    /// Create a new gateway with injected dependencies.
    ///
    /// # Arguments
    /// * `credentials` - Credential lookup implementation
    /// * `sessions` - Refresh-session store implementation
    /// * `jwt_secret` - Symmetric secret for access-token signing
    /// * `access_ttl` - Access-token lifetime (production default 1 hour)
    /// * `refresh_ttl` - Refresh-session lifetime (production default 60 days)
    /// * `webhook_key` - API key expected from the trusted webhook caller
    pub fn new(
        credentials: Arc<CS>,
        sessions: Arc<SS>,
        jwt_secret: &[u8],
        access_ttl: Duration,
        refresh_ttl: Duration,
        webhook_key: String,
    ) -> Self {
        Self {
            credentials,
            sessions,
            password_hasher: PasswordHasher::new(),
            jwt_handler: JwtHandler::new(jwt_secret),
            access_ttl,
            refresh_ttl,
            webhook_key,
        }
    }

    fn issue_access_token(&self, user_id: &UserId) -> Result<String, AuthError> {
        // An encoding fault is an internal failure, not a token-validation
        // kind; keep it out of the Token variant
        self.jwt_handler
            .issue(user_id.0, self.access_ttl)
            .map_err(|e| AuthError::Internal(e.to_string()))
    }
}

#[async_trait]
impl<CS, SS> AuthServicePort for AuthService<CS, SS>
where
    CS: CredentialStore,
    SS: SessionStore,
{
    async fn register(&self, email: EmailAddress, password: &str) -> Result<UserId, AuthError> {
        let password_hash = self.password_hasher.hash(password)?;
        let user_id = UserId::new();

        self.credentials
            .create(
                email,
                Credential {
                    user_id,
                    password_hash,
                },
            )
            .await?;

        Ok(user_id)
    }

    async fn login(&self, email: EmailAddress, password: &str) -> Result<AuthTokens, AuthError> {
        let credential = match self.credentials.find_by_email(&email).await? {
            Some(credential) => credential,
            None => {
                // Same kind as a wrong password so callers cannot probe
                // which accounts exist
                tracing::debug!("Login attempt for unknown account");
                return Err(AuthError::InvalidCredentials);
            }
        };

        self.password_hasher
            .verify(password, &credential.password_hash)?;

        let access_token = self.issue_access_token(&credential.user_id)?;
        let refresh_token = auth::refresh::generate()?;

        // Issuance and persistence are separate steps: a store failure here
        // surfaces as Internal, distinct from a generation failure
        let session = Session::new(
            refresh_token.clone(),
            credential.user_id,
            Utc::now() + self.refresh_ttl,
        );
        self.sessions.create_session(session).await?;

        tracing::info!(user_id = %credential.user_id, "User logged in");

        Ok(AuthTokens {
            user_id: credential.user_id,
            access_token,
            refresh_token,
        })
    }

    async fn identify(&self, authorization: Option<&str>) -> Result<UserId, AuthError> {
        let token = auth::bearer::bearer_token(authorization)?;
        let user_id = self.jwt_handler.verify(token)?;

        Ok(UserId(user_id))
    }

    async fn refresh(&self, authorization: Option<&str>) -> Result<String, AuthError> {
        let token = auth::bearer::bearer_token(authorization)?;

        let user_id = self
            .sessions
            .resolve_session(token)
            .await?
            .ok_or(AuthError::SessionNotFound)?;

        // The refresh token itself is not rotated; it stays valid until its
        // own expiry or an explicit revoke
        self.issue_access_token(&user_id)
    }

    async fn revoke(&self, authorization: Option<&str>) -> Result<(), AuthError> {
        let token = auth::bearer::bearer_token(authorization)?;

        if self.sessions.revoke_session(token).await? {
            Ok(())
        } else {
            Err(AuthError::SessionNotFound)
        }
    }

    fn authorize_owner(&self, caller: &UserId, owner: &UserId) -> Result<(), AuthError> {
        if caller == owner {
            Ok(())
        } else {
            tracing::warn!(caller = %caller, owner = %owner, "Ownership check failed");
            Err(AuthError::Forbidden)
        }
    }

    fn authenticate_api_key(&self, authorization: Option<&str>) -> Result<(), AuthError> {
        let key = auth::bearer::api_key(authorization)?;

        if key == self.webhook_key {
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use auth::BearerError;
    use auth::JwtError;
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;

    mock! {
        pub TestCredentialStore {}

        #[async_trait]
        impl CredentialStore for TestCredentialStore {
            async fn create(&self, email: EmailAddress, credential: Credential) -> Result<(), AuthError>;
            async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Credential>, AuthError>;
        }
    }

    mock! {
        pub TestSessionStore {}

        #[async_trait]
        impl SessionStore for TestSessionStore {
            async fn create_session(&self, session: Session) -> Result<(), AuthError>;
            async fn resolve_session(&self, token: &str) -> Result<Option<UserId>, AuthError>;
            async fn revoke_session(&self, token: &str) -> Result<bool, AuthError>;
        }
    }

    const JWT_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes!";
    const WEBHOOK_KEY: &str = "test-webhook-key";

    fn service(
        credentials: MockTestCredentialStore,
        sessions: MockTestSessionStore,
    ) -> AuthService<MockTestCredentialStore, MockTestSessionStore> {
        AuthService::new(
            Arc::new(credentials),
            Arc::new(sessions),
            JWT_SECRET,
            Duration::hours(1),
            Duration::days(60),
            WEBHOOK_KEY.to_string(),
        )
    }

    fn email(s: &str) -> EmailAddress {
        EmailAddress::new(s.to_string()).unwrap()
    }

    fn stored_credential(user_id: UserId, password: &str) -> Credential {
        Credential {
            user_id,
            password_hash: PasswordHasher::new().hash(password).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_login_success_issues_both_tokens() {
        let mut credentials = MockTestCredentialStore::new();
        let mut sessions = MockTestSessionStore::new();

        let user_id = UserId::new();
        let credential = stored_credential(user_id, "secret1");

        credentials
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(credential.clone())));

        sessions
            .expect_create_session()
            .withf(move |session| {
                let remaining = session.expires_at - Utc::now();
                session.user_id == user_id
                    && session.revoked_at.is_none()
                    && session.token.len() == 64
                    && remaining > Duration::days(59)
                    && remaining <= Duration::days(60)
            })
            .times(1)
            .returning(|_| Ok(()));

        let service = service(credentials, sessions);

        let tokens = service.login(email("e@x.com"), "secret1").await.unwrap();

        assert_eq!(tokens.user_id, user_id);
        // The issued access token resolves back to the same identity
        let verified = JwtHandler::new(JWT_SECRET)
            .verify(&tokens.access_token)
            .unwrap();
        assert_eq!(verified, user_id.0);
        assert_eq!(tokens.refresh_token.len(), 64);
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let mut credentials = MockTestCredentialStore::new();
        let mut sessions = MockTestSessionStore::new();

        let credential = stored_credential(UserId::new(), "secret1");
        credentials
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(credential.clone())));
        sessions.expect_create_session().times(0);

        let service = service(credentials, sessions);

        let result = service.login(email("e@x.com"), "wrong").await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_unknown_account_same_error_kind() {
        let mut credentials = MockTestCredentialStore::new();
        let mut sessions = MockTestSessionStore::new();

        credentials
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));
        sessions.expect_create_session().times(0);

        let service = service(credentials, sessions);

        // Indistinguishable from a wrong password
        let result = service.login(email("ghost@x.com"), "secret1").await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_identify_round_trip() {
        let credentials = MockTestCredentialStore::new();
        let sessions = MockTestSessionStore::new();
        let service = service(credentials, sessions);

        let user_id = UserId::new();
        let token = JwtHandler::new(JWT_SECRET)
            .issue(user_id.0, Duration::hours(1))
            .unwrap();

        let identified = service
            .identify(Some(&format!("Bearer {token}")))
            .await
            .unwrap();
        assert_eq!(identified, user_id);
    }

    #[tokio::test]
    async fn test_identify_missing_header() {
        let service = service(MockTestCredentialStore::new(), MockTestSessionStore::new());

        let result = service.identify(None).await;
        assert!(matches!(
            result,
            Err(AuthError::Bearer(BearerError::MissingHeader))
        ));
    }

    #[tokio::test]
    async fn test_identify_malformed_header() {
        let service = service(MockTestCredentialStore::new(), MockTestSessionStore::new());

        let result = service.identify(Some("Basic")).await;
        assert!(matches!(
            result,
            Err(AuthError::Bearer(BearerError::MalformedHeader))
        ));
    }

    #[tokio::test]
    async fn test_identify_bad_signature() {
        let service = service(MockTestCredentialStore::new(), MockTestSessionStore::new());

        let token = JwtHandler::new(b"some-other-secret-32-bytes-long!!")
            .issue(UserId::new().0, Duration::hours(1))
            .unwrap();

        let result = service.identify(Some(&format!("Bearer {token}"))).await;
        assert!(matches!(
            result,
            Err(AuthError::Token(JwtError::BadSignature))
        ));
    }

    #[tokio::test]
    async fn test_refresh_success() {
        let mut sessions = MockTestSessionStore::new();

        let user_id = UserId::new();
        sessions
            .expect_resolve_session()
            .withf(|token| token == "deadbeef")
            .times(1)
            .returning(move |_| Ok(Some(user_id)));

        let service = service(MockTestCredentialStore::new(), sessions);

        let access_token = service.refresh(Some("Bearer deadbeef")).await.unwrap();

        let verified = JwtHandler::new(JWT_SECRET).verify(&access_token).unwrap();
        assert_eq!(verified, user_id.0);
    }

    #[tokio::test]
    async fn test_refresh_unknown_session() {
        let mut sessions = MockTestSessionStore::new();
        sessions
            .expect_resolve_session()
            .times(1)
            .returning(|_| Ok(None));

        let service = service(MockTestCredentialStore::new(), sessions);

        let result = service.refresh(Some("Bearer deadbeef")).await;
        assert!(matches!(result, Err(AuthError::SessionNotFound)));
    }

    #[tokio::test]
    async fn test_revoke_success_then_not_found() {
        let mut sessions = MockTestSessionStore::new();
        let mut live = true;
        sessions
            .expect_revoke_session()
            .withf(|token| token == "deadbeef")
            .times(2)
            .returning(move |_| {
                let was_live = live;
                live = false;
                Ok(was_live)
            });

        let service = service(MockTestCredentialStore::new(), sessions);

        assert!(service.revoke(Some("Bearer deadbeef")).await.is_ok());

        // Idempotent in effect, but the second call reports not-found
        let result = service.revoke(Some("Bearer deadbeef")).await;
        assert!(matches!(result, Err(AuthError::SessionNotFound)));
    }

    #[tokio::test]
    async fn test_register_hashes_password() {
        let mut credentials = MockTestCredentialStore::new();
        credentials
            .expect_create()
            .withf(|_, credential| credential.password_hash.starts_with("$argon2"))
            .times(1)
            .returning(|_, _| Ok(()));

        let service = service(credentials, MockTestSessionStore::new());

        let result = service.register(email("e@x.com"), "secret1").await;
        assert!(result.is_ok());
    }

    #[test]
    fn test_authorize_owner() {
        let service = service(MockTestCredentialStore::new(), MockTestSessionStore::new());

        let owner = UserId::new();
        let other = UserId::new();

        assert!(service.authorize_owner(&owner, &owner).is_ok());
        assert!(matches!(
            service.authorize_owner(&other, &owner),
            Err(AuthError::Forbidden)
        ));
    }

    #[test]
    fn test_authenticate_api_key() {
        let service = service(MockTestCredentialStore::new(), MockTestSessionStore::new());

        assert!(service
            .authenticate_api_key(Some(&format!("ApiKey {WEBHOOK_KEY}")))
            .is_ok());
        assert!(matches!(
            service.authenticate_api_key(Some("ApiKey wrong-key")),
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            service.authenticate_api_key(None),
            Err(AuthError::Bearer(BearerError::MissingHeader))
        ));
    }
}
