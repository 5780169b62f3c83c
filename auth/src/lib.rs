//! Credential utilities library
//!
//! Building blocks for credential-based authentication:
//! - Password hashing (Argon2id) with a fixed work factor
//! - JWT bearer token encoding and fail-closed validation
//! - Token lifetime parsing ("1d", "24h", ...)
//!
//! Services define their own capability traits and adapt these
//! implementations behind them.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("Password1!").unwrap();
//! assert!(hasher.verify("Password1!", &hash).unwrap());
//! assert!(!hasher.verify("Password2!", &hash).unwrap());
//! ```
//!
//! ## JWT Tokens
//! ```
//! use auth::{parse_duration, Claims, JwtHandler};
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let ttl = parse_duration("1d").unwrap();
//! let claims = Claims::new("user123", "user@example.com", ttl);
//! let token = handler.encode(&claims).unwrap();
//! let decoded = handler.decode(&token).unwrap();
//! assert_eq!(decoded.sub, "user123");
//! ```

pub mod expiry;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use expiry::parse_duration;
pub use expiry::ExpiryError;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
