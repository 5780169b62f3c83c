use chrono::Duration;

use crate::domain::auth::models::TokenSubject;
use crate::domain::auth::ports::TokenService;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UserId;
use crate::user::errors::TokenError;

/// JWT adapter for the token port.
///
/// Holds the signing key and the configured lifetime. Stateless: there is
/// no revocation list, tokens die only by expiry.
pub struct JwtTokenService {
    handler: auth::JwtHandler,
    ttl: Duration,
}

impl JwtTokenService {
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            handler: auth::JwtHandler::new(secret),
            ttl,
        }
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, user_id: &UserId, email: &EmailAddress) -> Result<String, TokenError> {
        let claims = auth::Claims::new(user_id, email, self.ttl);

        self.handler
            .encode(&claims)
            .map_err(|e| TokenError::IssueFailed(e.to_string()))
    }

    fn verify(&self, token: &str) -> Result<TokenSubject, TokenError> {
        let claims = self.handler.decode(token).map_err(|e| match e {
            auth::JwtError::Expired => TokenError::Expired,
            other => TokenError::Invalid(other.to_string()),
        })?;

        let user_id = UserId::from_string(&claims.sub)
            .map_err(|e| TokenError::Invalid(format!("Invalid subject: {}", e)))?;

        Ok(TokenSubject {
            user_id,
            email: claims.email,
        })
    }
}
