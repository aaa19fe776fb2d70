use thiserror::Error;

use auth::BearerError;
use auth::JwtError;
use auth::PasswordError;
use auth::RefreshTokenError;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for all authentication and authorization operations.
///
/// Every expected failure is a typed variant; kinds stay distinguishable
/// here for logging and tests, and are collapsed to coarse outcomes only
/// at the HTTP boundary. The gateway never upgrades or downgrades a kind's
/// severity on the way through.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    // Bearer transport failures (automatically converted via #[from])
    #[error(transparent)]
    Bearer(#[from] BearerError),

    // Access-token verification failures
    #[error(transparent)]
    Token(#[from] JwtError),

    /// Unknown account or wrong password; deliberately one kind for both.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Refresh token unknown, expired, or already revoked.
    #[error("Session not found")]
    SessionNotFound,

    /// Authenticated, but not the owner of the resource.
    #[error("Not the resource owner")]
    Forbidden,

    #[error("Email already registered: {0}")]
    EmailAlreadyExists(String),

    // Infrastructure faults: entropy exhaustion, hashing fault, store
    // unavailability. Fatal to the request, never retried here.
    #[error("Internal failure: {0}")]
    Internal(String),
}

impl From<RefreshTokenError> for AuthError {
    fn from(err: RefreshTokenError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

impl From<PasswordError> for AuthError {
    fn from(err: PasswordError) -> Self {
        match err {
            PasswordError::Mismatch => AuthError::InvalidCredentials,
            PasswordError::HashingFailed(e) => AuthError::Internal(e),
        }
    }
}

impl From<anyhow::Error> for AuthError {
    fn from(err: anyhow::Error) -> Self {
        AuthError::Internal(err.to_string())
    }
}
