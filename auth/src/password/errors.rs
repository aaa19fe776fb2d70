use thiserror::Error;

/// Error type for password operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    /// The password does not match the stored digest, or the digest itself
    /// could not be parsed. The two causes are deliberately collapsed into
    /// one kind so callers cannot tell them apart.
    #[error("Password mismatch")]
    Mismatch,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}
