use rand::rngs::OsRng;
use rand::RngCore;

use super::errors::RefreshTokenError;

/// Number of random bytes drawn per token.
const TOKEN_BYTES: usize = 32;

/// Generate an opaque, high-entropy refresh token.
///
/// Draws 32 bytes from the OS CSPRNG and encodes them as 64 lowercase hex
/// characters. The token carries no meaning itself; owner, expiry, and
/// revocation state live entirely in the session store.
///
/// Generation does not persist anything: issuance and persistence are two
/// separate steps so a storage failure stays distinguishable from an
/// entropy failure.
///
/// # Errors
/// * `EntropyUnavailable` - The random source failed. Fatal to the request;
///   never retried, since retrying could mask a degraded security posture.
pub fn generate() -> Result<String, RefreshTokenError> {
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| RefreshTokenError::EntropyUnavailable(e.to_string()))?;

    Ok(hex::encode(bytes))
}
