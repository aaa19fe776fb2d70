use thiserror::Error;

/// Error type for authorization-header parsing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BearerError {
    #[error("Authorization header is missing or empty")]
    MissingHeader,

    #[error("Authorization header is malformed, expected '<scheme> <token>'")]
    MalformedHeader,
}
