use thiserror::Error;

/// Error type for refresh-token generation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RefreshTokenError {
    #[error("Secure random source unavailable: {0}")]
    EntropyUnavailable(String),
}
