use async_trait::async_trait;

use crate::domain::auth::models::AuthSession;
use crate::domain::auth::models::CurrentUser;
use crate::domain::auth::models::SignInCommand;
use crate::domain::auth::models::SignUpCommand;
use crate::domain::auth::models::TokenSubject;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::PasswordDigest;
use crate::domain::user::models::UserId;
use crate::user::errors::PasswordError;
use crate::user::errors::TokenError;
use crate::user::errors::UserError;

/// Port for registration, authentication and request authorization.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user and issue a token for it.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered (any letter case)
    /// * `Password` - Hashing subsystem failed
    /// * `Token` - Token issuance failed
    /// * `DatabaseError` - Database operation failed
    async fn sign_up(&self, command: SignUpCommand) -> Result<AuthSession, UserError>;

    /// Authenticate with email and password and issue a token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password, indistinguishably
    /// * `Password` - Stored digest could not be checked
    /// * `Token` - Token issuance failed
    /// * `DatabaseError` - Database operation failed
    async fn sign_in(&self, command: SignInCommand) -> Result<AuthSession, UserError>;

    /// Resolve a bearer token to a live caller identity.
    ///
    /// # Errors
    /// * `Unauthorized` - Token is invalid or expired, or its user no longer exists
    /// * `DatabaseError` - Database operation failed
    async fn authorize(&self, token: &str) -> Result<CurrentUser, UserError>;
}

/// One-way password hashing with a fixed work factor.
#[async_trait]
pub trait CredentialHasher: Send + Sync + 'static {
    /// Hash a plaintext password with a fresh salt.
    async fn hash(&self, password: &str) -> Result<PasswordDigest, PasswordError>;

    /// Check a plaintext password against a digest.
    ///
    /// A mismatch is `Ok(false)`; an unusable digest is an error.
    async fn verify(&self, password: &str, digest: &PasswordDigest)
        -> Result<bool, PasswordError>;
}

/// Issuance and verification of signed, time-limited bearer tokens.
pub trait TokenService: Send + Sync + 'static {
    /// Issue a token asserting the given subject.
    fn issue(&self, user_id: &UserId, email: &EmailAddress) -> Result<String, TokenError>;

    /// Verify a token. Fails closed on any signature, format or expiry problem.
    fn verify(&self, token: &str) -> Result<TokenSubject, TokenError>;
}
