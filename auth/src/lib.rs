//! Authentication utilities library
//!
//! Provides the authentication building blocks for the chirpy service:
//! - Password hashing (Argon2id)
//! - Short-lived signed access tokens (JWT, HS256)
//! - Bearer and API-key header extraction
//! - Opaque refresh-token generation
//!
//! The service composes these pieces into its own gateway; nothing in this
//! crate touches storage or the network.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).is_ok());
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::JwtHandler;
//! use chrono::Duration;
//! use uuid::Uuid;
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let user_id = Uuid::new_v4();
//! let token = handler.issue(user_id, Duration::hours(1)).unwrap();
//! assert_eq!(handler.verify(&token).unwrap(), user_id);
//! ```
//!
//! ## Bearer Extraction
//! ```
//! use auth::bearer;
//!
//! let token = bearer::bearer_token(Some("Bearer abc123")).unwrap();
//! assert_eq!(token, "abc123");
//! ```

pub mod bearer;
pub mod jwt;
pub mod password;
pub mod refresh;

// Re-export commonly used items
pub use bearer::BearerError;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use refresh::RefreshTokenError;
