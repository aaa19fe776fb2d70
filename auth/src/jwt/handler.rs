use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use uuid::Uuid;

use super::claims::Claims;
use super::errors::JwtError;

/// Access-token signer and verifier.
///
/// Issues short-lived, stateless identity tokens and validates them by
/// signature and expiry alone; no server-side record exists once a token
/// is issued. Uses HS256 (HMAC with SHA-256) keyed by a symmetric secret.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtHandler {
    /// Create a new handler with a signing secret.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Issue a signed access token for a user.
    ///
    /// # Arguments
    /// * `user_id` - Token subject
    /// * `ttl` - Time until the token expires
    ///
    /// # Returns
    /// Signed token string, safe for plain-text header transport
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, user_id: Uuid, ttl: Duration) -> Result<String, JwtError> {
        let claims = Claims::for_user(user_id, Utc::now(), ttl);
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Validate a token and extract its subject.
    ///
    /// Checks the signature, then enforces expiry strictly: no clock-skew
    /// allowance, and a token is rejected at its exact `exp` second, not
    /// just after it.
    ///
    /// # Arguments
    /// * `token` - Token string to validate
    ///
    /// # Returns
    /// The user id the token asserts
    ///
    /// # Errors
    /// * `Malformed` - Token is structurally invalid
    /// * `BadSignature` - Signature does not verify under the secret
    /// * `Expired` - Token is past its expiry
    /// * `InvalidSubject` - Subject is not a parseable user id
    pub fn verify(&self, token: &str) -> Result<Uuid, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        // The library's own expiry check keeps a token alive through its
        // whole expiry second; expiry is enforced below instead
        validation.validate_exp = false;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::InvalidSignature => JwtError::BadSignature,
                    _ => JwtError::Malformed(e.to_string()),
                }
            })?;

        if Utc::now().timestamp() >= token_data.claims.exp {
            return Err(JwtError::Expired);
        }

        let subject = token_data.claims.sub;
        Uuid::parse_str(&subject).map_err(|_| JwtError::InvalidSubject(subject.clone()))
    }
}
