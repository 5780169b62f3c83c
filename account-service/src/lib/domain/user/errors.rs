use thiserror::Error;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Please provide a valid email: {0}")]
    InvalidFormat(String),
}

/// Error for UserName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("Name is required")]
    Empty,

    #[error("Name too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },
}

/// Error for password policy violations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    #[error("Password is required")]
    Empty,

    #[error("Password too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Password must contain at least one letter")]
    MissingLetter,

    #[error("Password must contain at least one number")]
    MissingDigit,

    #[error("Password must contain at least one special character (@$!%*#?&)")]
    MissingSpecialCharacter,
}

/// Error for the hashing subsystem (not a password mismatch)
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Password verification failed: {0}")]
    VerificationFailed(String),
}

/// Error for token issuance and verification
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token issuance failed: {0}")]
    IssueFailed(String),

    #[error("Token is expired")]
    Expired,

    #[error("Token is invalid: {0}")]
    Invalid(String),
}

/// Outward classification of every failure the core can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ValidationFailed,
    DuplicateIdentity,
    InvalidCredentials,
    SamePassword,
    Unauthorized,
    NotFound,
    Internal,
}

/// Top-level error for all user-related operations
#[derive(Debug, Clone, Error)]
pub enum UserError {
    // Value object validation errors (automatically converted via #[from])
    #[error("{0}")]
    InvalidEmail(#[from] EmailError),

    #[error("{0}")]
    InvalidName(#[from] NameError),

    #[error("{0}")]
    WeakPassword(#[from] PasswordPolicyError),

    #[error("{0} is required")]
    MissingField(&'static str),

    // Domain-level errors
    #[error("User not found: {0}")]
    NotFound(String),

    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Current password is incorrect")]
    CurrentPasswordIncorrect,

    #[error("New password must be different from current password")]
    SamePassword,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    // Infrastructure errors
    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl UserError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            UserError::InvalidEmail(_)
            | UserError::InvalidName(_)
            | UserError::WeakPassword(_)
            | UserError::MissingField(_) => ErrorKind::ValidationFailed,
            UserError::EmailAlreadyExists(_) => ErrorKind::DuplicateIdentity,
            UserError::InvalidCredentials | UserError::CurrentPasswordIncorrect => {
                ErrorKind::InvalidCredentials
            }
            UserError::SamePassword => ErrorKind::SamePassword,
            UserError::Unauthorized(_) => ErrorKind::Unauthorized,
            UserError::NotFound(_) => ErrorKind::NotFound,
            UserError::Password(_)
            | UserError::Token(_)
            | UserError::DatabaseError(_) => ErrorKind::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_failures_share_a_kind() {
        assert_eq!(
            UserError::InvalidCredentials.kind(),
            ErrorKind::InvalidCredentials
        );
        assert_eq!(
            UserError::CurrentPasswordIncorrect.kind(),
            ErrorKind::InvalidCredentials
        );
        assert_eq!(UserError::SamePassword.kind(), ErrorKind::SamePassword);
    }

    #[test]
    fn test_infrastructure_failures_are_internal() {
        assert_eq!(
            UserError::Password(PasswordError::VerificationFailed("bad".into())).kind(),
            ErrorKind::Internal
        );
        assert_eq!(
            UserError::Token(TokenError::IssueFailed("bad".into())).kind(),
            ErrorKind::Internal
        );
        assert_eq!(
            UserError::DatabaseError("down".into()).kind(),
            ErrorKind::Internal
        );
    }

    #[test]
    fn test_validation_kinds() {
        assert_eq!(
            UserError::from(NameError::Empty).kind(),
            ErrorKind::ValidationFailed
        );
        assert_eq!(
            UserError::MissingField("currentPassword").to_string(),
            "currentPassword is required"
        );
    }
}
