use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::PasswordDigest;
use crate::domain::user::models::UpdateProfileCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserCredentials;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

/// Process-local user store.
///
/// Enforces email uniqueness under the write lock, so it gives the same
/// guarantee as the Postgres unique index.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<UserId, UserCredentials>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove a user out-of-band. Not part of the repository port.
    pub async fn remove(&self, id: &UserId) -> bool {
        self.users.write().await.remove(id).is_some()
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    fn email_owner<'a>(
        users: &'a HashMap<UserId, UserCredentials>,
        email: &EmailAddress,
    ) -> Option<&'a UserCredentials> {
        users.values().find(|stored| stored.user.email == *email)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, UserError> {
        let mut users = self.users.write().await;

        if Self::email_owner(&users, &user.email).is_some() {
            return Err(UserError::EmailAlreadyExists(user.email.to_string()));
        }
        if users.contains_key(&user.id) {
            return Err(UserError::DatabaseError(format!(
                "Duplicate user id: {}",
                user.id
            )));
        }

        let now = Utc::now();
        let created = User {
            id: user.id,
            email: user.email,
            name: user.name,
            created_at: now,
            updated_at: now,
        };

        users.insert(
            created.id,
            UserCredentials {
                user: created.clone(),
                password_hash: user.password_hash,
            },
        );

        Ok(created)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .read()
            .await
            .get(id)
            .map(|stored| stored.user.clone()))
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError> {
        let users = self.users.read().await;
        Ok(Self::email_owner(&users, email).map(|stored| stored.user.clone()))
    }

    async fn find_credentials_by_id(
        &self,
        id: &UserId,
    ) -> Result<Option<UserCredentials>, UserError> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn find_credentials_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<UserCredentials>, UserError> {
        let users = self.users.read().await;
        Ok(Self::email_owner(&users, email).cloned())
    }

    async fn update_profile(
        &self,
        id: &UserId,
        changes: &UpdateProfileCommand,
    ) -> Result<User, UserError> {
        let mut users = self.users.write().await;

        if let Some(email) = &changes.email {
            if let Some(owner) = Self::email_owner(&users, email) {
                if owner.user.id != *id {
                    return Err(UserError::EmailAlreadyExists(email.to_string()));
                }
            }
        }

        let stored = users
            .get_mut(id)
            .ok_or_else(|| UserError::NotFound(id.to_string()))?;

        if let Some(email) = &changes.email {
            stored.user.email = email.clone();
        }
        if let Some(name) = &changes.name {
            stored.user.name = name.clone();
        }
        stored.user.updated_at = Utc::now();

        Ok(stored.user.clone())
    }

    async fn update_password(
        &self,
        id: &UserId,
        password_hash: &PasswordDigest,
    ) -> Result<(), UserError> {
        let mut users = self.users.write().await;

        let stored = users
            .get_mut(id)
            .ok_or_else(|| UserError::NotFound(id.to_string()))?;

        stored.password_hash = password_hash.clone();
        stored.user.updated_at = Utc::now();

        Ok(())
    }
}
