use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AuthTokens;
use crate::domain::auth::models::Credential;
use crate::domain::auth::models::EmailAddress;
use crate::domain::auth::models::Session;
use crate::domain::auth::models::UserId;

/// Port for the auth gateway, the surface request handlers call.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new account: hash the password and persist the credential.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Account identifier is already registered
    /// * `Internal` - Hashing fault or store failure
    async fn register(&self, email: EmailAddress, password: &str) -> Result<UserId, AuthError>;

    /// Verify credentials, then issue an access token and a refresh session.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown account or wrong password, on purpose
    ///   the same kind for both
    /// * `Internal` - Hashing fault, entropy failure, or store failure
    async fn login(&self, email: EmailAddress, password: &str) -> Result<AuthTokens, AuthError>;

    /// Resolve the caller's identity from a bearer access token.
    ///
    /// # Arguments
    /// * `authorization` - Raw `Authorization` header value, if present
    ///
    /// # Errors
    /// * `Bearer` - Header missing or malformed
    /// * `Token` - Token malformed, mis-signed, expired, or with a bad subject
    async fn identify(&self, authorization: Option<&str>) -> Result<UserId, AuthError>;

    /// Exchange a refresh token for a fresh access token.
    ///
    /// # Errors
    /// * `Bearer` - Header missing or malformed
    /// * `SessionNotFound` - Token unknown, expired, or revoked
    /// * `Internal` - Store failure or token encoding fault
    async fn refresh(&self, authorization: Option<&str>) -> Result<String, AuthError>;

    /// Revoke a refresh token. Revocation is monotonic; a revoked session
    /// never becomes valid again.
    ///
    /// # Errors
    /// * `Bearer` - Header missing or malformed
    /// * `SessionNotFound` - Token never valid or already revoked
    /// * `Internal` - Store failure
    async fn revoke(&self, authorization: Option<&str>) -> Result<(), AuthError>;

    /// Ownership check for mutation endpoints. Runs only after `identify`
    /// has succeeded; never infer ownership from unauthenticated input.
    ///
    /// # Errors
    /// * `Forbidden` - Caller is not the resource owner
    fn authorize_owner(&self, caller: &UserId, owner: &UserId) -> Result<(), AuthError>;

    /// Authenticate the trusted webhook caller by its configured API key.
    ///
    /// # Errors
    /// * `Bearer` - Header missing or malformed
    /// * `InvalidCredentials` - Key does not match
    fn authenticate_api_key(&self, authorization: Option<&str>) -> Result<(), AuthError>;
}

/// Credential lookup consumed from the external user store.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Persist a new credential record.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Account identifier is already registered
    /// * `Internal` - Store failure
    async fn create(&self, email: EmailAddress, credential: Credential) -> Result<(), AuthError>;

    /// Retrieve the credential for an account identifier.
    ///
    /// # Returns
    /// Optional credential (None if no such account)
    ///
    /// # Errors
    /// * `Internal` - Store failure
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Credential>, AuthError>;
}

/// Refresh-session persistence consumed from the external store.
///
/// Every call may race with other callers' calls; nothing here assumes
/// read-then-write atomicity across two separate operations.
#[async_trait]
pub trait SessionStore: Send + Sync + 'static {
    /// Persist a new session. The expiry policy is chosen by the gateway,
    /// not the store.
    ///
    /// # Errors
    /// * `Internal` - Store failure
    async fn create_session(&self, session: Session) -> Result<(), AuthError>;

    /// Resolve a refresh token to its owning identity.
    ///
    /// Must enforce non-revoked and non-expired internally: a revoked or
    /// expired session resolves to `None`, never to a user.
    ///
    /// # Errors
    /// * `Internal` - Store failure
    async fn resolve_session(&self, token: &str) -> Result<Option<UserId>, AuthError>;

    /// Revoke (soft-delete) a session.
    ///
    /// # Returns
    /// `true` if a live session was revoked, `false` if the token was
    /// unknown or already revoked
    ///
    /// # Errors
    /// * `Internal` - Store failure
    async fn revoke_session(&self, token: &str) -> Result<bool, AuthError>;
}
