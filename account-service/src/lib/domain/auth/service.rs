use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::models::AuthSession;
use crate::domain::auth::models::CurrentUser;
use crate::domain::auth::models::SignInCommand;
use crate::domain::auth::models::SignUpCommand;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::ports::CredentialHasher;
use crate::domain::auth::ports::TokenService;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::TokenError;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;

/// Domain service for sign-up, sign-in and token authorization.
///
/// Sign-up and sign-in end in the same token issuance step, so a token
/// does not reveal which of the two produced it.
pub struct AuthService<UR, CH, TS>
where
    UR: UserRepository,
    CH: CredentialHasher,
    TS: TokenService,
{
    repository: Arc<UR>,
    hasher: Arc<CH>,
    tokens: Arc<TS>,
}

impl<UR, CH, TS> AuthService<UR, CH, TS>
where
    UR: UserRepository,
    CH: CredentialHasher,
    TS: TokenService,
{
    /// Create a new auth service with injected dependencies.
    pub fn new(repository: Arc<UR>, hasher: Arc<CH>, tokens: Arc<TS>) -> Self {
        Self {
            repository,
            hasher,
            tokens,
        }
    }

    fn open_session(&self, user: User) -> Result<AuthSession, UserError> {
        let access_token = self.tokens.issue(&user.id, &user.email)?;
        Ok(AuthSession { access_token, user })
    }
}

#[async_trait]
impl<UR, CH, TS> AuthServicePort for AuthService<UR, CH, TS>
where
    UR: UserRepository,
    CH: CredentialHasher,
    TS: TokenService,
{
    async fn sign_up(&self, command: SignUpCommand) -> Result<AuthSession, UserError> {
        // Friendly early exit only; the store's unique index is authoritative.
        if self
            .repository
            .find_by_email(&command.email)
            .await?
            .is_some()
        {
            return Err(UserError::EmailAlreadyExists(command.email.to_string()));
        }

        let password_hash = self.hasher.hash(command.password.as_str()).await?;

        let user = self
            .repository
            .create(NewUser {
                id: UserId::new(),
                email: command.email,
                name: command.name,
                password_hash,
            })
            .await?;

        tracing::info!(user_id = %user.id, email = %user.email, "User signed up successfully");

        self.open_session(user)
    }

    async fn sign_in(&self, command: SignInCommand) -> Result<AuthSession, UserError> {
        let Some(credentials) = self
            .repository
            .find_credentials_by_email(&command.email)
            .await?
        else {
            tracing::warn!(email = %command.email, "Signin failed: user not found");
            return Err(UserError::InvalidCredentials);
        };

        let is_valid = self
            .hasher
            .verify(&command.password, &credentials.password_hash)
            .await?;

        if !is_valid {
            tracing::warn!(email = %command.email, "Signin failed: wrong password");
            return Err(UserError::InvalidCredentials);
        }

        let user = credentials.user;
        tracing::info!(user_id = %user.id, email = %user.email, "User signed in successfully");

        self.open_session(user)
    }

    async fn authorize(&self, token: &str) -> Result<CurrentUser, UserError> {
        let subject = self.tokens.verify(token).map_err(|e| {
            tracing::warn!(error = %e, "Token verification failed");
            match e {
                TokenError::Expired => UserError::Unauthorized("Token is expired".to_string()),
                _ => UserError::Unauthorized("Invalid token".to_string()),
            }
        })?;

        let user = self
            .repository
            .find_by_id(&subject.user_id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(user_id = %subject.user_id, "Token references a missing user");
                UserError::Unauthorized("User not found".to_string())
            })?;

        Ok(CurrentUser::from(&user))
    }
}
