use async_trait::async_trait;

use crate::domain::auth::ports::CredentialHasher;
use crate::domain::user::models::PasswordDigest;
use crate::user::errors::PasswordError;

/// Argon2 adapter for the hashing port.
///
/// Argon2 is CPU-bound by design, so both operations run on tokio's
/// blocking pool instead of the request's worker thread.
#[derive(Debug, Clone, Default)]
pub struct Argon2CredentialHasher {
    hasher: auth::PasswordHasher,
}

impl Argon2CredentialHasher {
    pub fn new(hasher: auth::PasswordHasher) -> Self {
        Self { hasher }
    }
}

#[async_trait]
impl CredentialHasher for Argon2CredentialHasher {
    async fn hash(&self, password: &str) -> Result<PasswordDigest, PasswordError> {
        let hasher = self.hasher.clone();
        let password = password.to_owned();

        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| PasswordError::HashingFailed(format!("Hashing task failed: {}", e)))?
            .map(PasswordDigest::new)
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    async fn verify(
        &self,
        password: &str,
        digest: &PasswordDigest,
    ) -> Result<bool, PasswordError> {
        let hasher = self.hasher.clone();
        let password = password.to_owned();
        let digest = digest.as_str().to_owned();

        tokio::task::spawn_blocking(move || hasher.verify(&password, &digest))
            .await
            .map_err(|e| {
                PasswordError::VerificationFailed(format!("Verification task failed: {}", e))
            })?
            .map_err(|e| PasswordError::VerificationFailed(e.to_string()))
    }
}
