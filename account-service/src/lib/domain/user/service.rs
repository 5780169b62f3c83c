use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::ports::CredentialHasher;
use crate::domain::user::models::ChangePasswordCommand;
use crate::domain::user::models::UpdateProfileCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::ProfileServicePort;
use crate::user::ports::UserRepository;

/// Domain service for profile reads, profile updates and password changes.
///
/// Every operation acts on an identity already resolved by the
/// authorization gate.
pub struct ProfileService<UR, CH>
where
    UR: UserRepository,
    CH: CredentialHasher,
{
    repository: Arc<UR>,
    hasher: Arc<CH>,
}

impl<UR, CH> ProfileService<UR, CH>
where
    UR: UserRepository,
    CH: CredentialHasher,
{
    /// Create a new profile service with injected dependencies.
    pub fn new(repository: Arc<UR>, hasher: Arc<CH>) -> Self {
        Self { repository, hasher }
    }
}

#[async_trait]
impl<UR, CH> ProfileServicePort for ProfileService<UR, CH>
where
    UR: UserRepository,
    CH: CredentialHasher,
{
    async fn get_profile(&self, id: &UserId) -> Result<User, UserError> {
        self.repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(user_id = %id, "User not found");
            UserError::NotFound(id.to_string())
        })
    }

    async fn update_profile(
        &self,
        id: &UserId,
        command: UpdateProfileCommand,
    ) -> Result<User, UserError> {
        // Nothing to change: no write, `updated_at` untouched.
        if command.is_empty() {
            return self.get_profile(id).await;
        }

        if let Some(email) = &command.email {
            if let Some(owner) = self.repository.find_by_email(email).await? {
                if owner.id != *id {
                    return Err(UserError::EmailAlreadyExists(email.to_string()));
                }
            }
        }

        let user = self.repository.update_profile(id, &command).await?;

        tracing::info!(user_id = %user.id, "User profile updated");

        Ok(user)
    }

    async fn change_password(
        &self,
        id: &UserId,
        command: ChangePasswordCommand,
    ) -> Result<(), UserError> {
        let credentials = self
            .repository
            .find_credentials_by_id(id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(user_id = %id, "Password change failed: user not found");
                UserError::NotFound(id.to_string())
            })?;

        let current_matches = self
            .hasher
            .verify(&command.current_password, &credentials.password_hash)
            .await?;

        if !current_matches {
            tracing::warn!(user_id = %id, "Password change failed: wrong current password");
            return Err(UserError::CurrentPasswordIncorrect);
        }

        // Only reached by a caller who proved the current password.
        let reused = self
            .hasher
            .verify(command.new_password.as_str(), &credentials.password_hash)
            .await?;

        if reused {
            return Err(UserError::SamePassword);
        }

        let password_hash = self.hasher.hash(command.new_password.as_str()).await?;
        self.repository.update_password(id, &password_hash).await?;

        tracing::info!(user_id = %id, "Password changed successfully");

        Ok(())
    }
}
