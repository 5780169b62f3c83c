use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Bearer token payload.
///
/// Carries the subject identifier and email plus the two time claims.
/// No roles or scopes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Subject email at issuance time
    pub email: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims issued now and expiring after `ttl`.
    ///
    /// # Arguments
    /// * `sub` - Subject identifier
    /// * `email` - Subject email
    /// * `ttl` - Time until the token expires
    pub fn new(sub: impl ToString, email: impl ToString, ttl: Duration) -> Self {
        let now = Utc::now().timestamp();
        Self::issued_at(sub, email, now, ttl)
    }

    /// Create claims with an explicit issue time.
    pub fn issued_at(sub: impl ToString, email: impl ToString, iat: i64, ttl: Duration) -> Self {
        Self {
            sub: sub.to_string(),
            email: email.to_string(),
            iat,
            exp: iat + ttl.num_seconds(),
        }
    }
}
