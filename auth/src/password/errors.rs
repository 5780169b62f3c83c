use thiserror::Error;

/// Error type for password operations.
///
/// A plain mismatch is never an error; these variants mean the hashing
/// subsystem itself could not do its job.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Password verification failed: {0}")]
    VerificationFailed(String),

    #[error("Invalid hashing parameters: {0}")]
    InvalidParameters(String),
}
