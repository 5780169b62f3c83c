use async_trait::async_trait;

use crate::domain::user::models::ChangePasswordCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::PasswordDigest;
use crate::domain::user::models::UpdateProfileCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserCredentials;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;

/// Port for profile and credential management of an authorized caller.
#[async_trait]
pub trait ProfileServicePort: Send + Sync + 'static {
    /// Retrieve the caller's profile.
    ///
    /// # Errors
    /// * `NotFound` - User no longer exists
    /// * `DatabaseError` - Database operation failed
    async fn get_profile(&self, id: &UserId) -> Result<User, UserError>;

    /// Apply a partial profile update.
    ///
    /// Changing the email to the caller's own current address is a no-op,
    /// not a conflict.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email belongs to another user
    /// * `NotFound` - User no longer exists
    /// * `DatabaseError` - Database operation failed
    async fn update_profile(
        &self,
        id: &UserId,
        command: UpdateProfileCommand,
    ) -> Result<User, UserError>;

    /// Rotate the caller's password.
    ///
    /// Outstanding tokens stay valid until they expire.
    ///
    /// # Errors
    /// * `NotFound` - User no longer exists
    /// * `CurrentPasswordIncorrect` - Current password does not match
    /// * `SamePassword` - New password matches the stored digest
    /// * `Password` - Hashing subsystem failed
    /// * `DatabaseError` - Database operation failed
    async fn change_password(
        &self,
        id: &UserId,
        command: ChangePasswordCommand,
    ) -> Result<(), UserError>;
}

/// Persistence operations for user aggregate.
///
/// Email arguments are already normalized. Only the `*_credentials_*`
/// lookups return the password digest.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Uniqueness constraint rejected the email
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: NewUser) -> Result<User, UserError>;

    /// Retrieve user by identifier, without the password digest.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve user by email, without the password digest.
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError>;

    /// Retrieve user and password digest by identifier.
    async fn find_credentials_by_id(
        &self,
        id: &UserId,
    ) -> Result<Option<UserCredentials>, UserError>;

    /// Retrieve user and password digest by email.
    async fn find_credentials_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<UserCredentials>, UserError>;

    /// Apply provided profile fields and refresh `updated_at`.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `EmailAlreadyExists` - Uniqueness constraint rejected the email
    /// * `DatabaseError` - Database operation failed
    async fn update_profile(
        &self,
        id: &UserId,
        changes: &UpdateProfileCommand,
    ) -> Result<User, UserError>;

    /// Overwrite the stored password digest and refresh `updated_at`.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_password(
        &self,
        id: &UserId,
        password_hash: &PasswordDigest,
    ) -> Result<(), UserError>;
}
