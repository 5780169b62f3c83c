use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::user::errors::EmailError;
use crate::user::errors::NameError;
use crate::user::errors::PasswordPolicyError;
use crate::user::errors::UserIdError;

/// User aggregate entity, as seen by profile reads.
///
/// Carries no password material. The digest only travels inside
/// [`UserCredentials`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: EmailAddress,
    pub name: UserName,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A user together with its stored password digest.
///
/// Returned only by the repository lookups that explicitly ask for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: PasswordDigest,
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Normalized email address.
///
/// Validated with an RFC 5322 parser, trimmed and lowercased, so two
/// addresses that differ only in letter case compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated, normalized email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: impl AsRef<str>) -> Result<Self, EmailError> {
        let normalized = email.as_ref().trim().to_lowercase();

        email_address::EmailAddress::from_str(&normalized)
            .map(|_| EmailAddress(normalized))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Display name, at least 3 characters after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserName(String);

impl UserName {
    const MIN_LENGTH: usize = 3;

    /// # Errors
    /// * `Empty` - Name is blank
    /// * `TooShort` - Fewer than 3 characters
    pub fn new(name: impl AsRef<str>) -> Result<Self, NameError> {
        let name = name.as_ref().trim();
        let length = name.chars().count();

        if length == 0 {
            Err(NameError::Empty)
        } else if length < Self::MIN_LENGTH {
            Err(NameError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(name.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Plaintext password that satisfies the password policy.
///
/// At least 8 characters with at least one letter, one digit and one of
/// `@$!%*#?&`. Never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    const MIN_LENGTH: usize = 8;
    pub const SPECIAL_CHARACTERS: &'static str = "@$!%*#?&";

    /// # Errors
    /// * `Empty`, `TooShort`, `MissingLetter`, `MissingDigit`, `MissingSpecialCharacter`
    pub fn new(password: impl Into<String>) -> Result<Self, PasswordPolicyError> {
        let password = password.into();
        let length = password.chars().count();

        if length == 0 {
            return Err(PasswordPolicyError::Empty);
        }
        if length < Self::MIN_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            });
        }
        if !password.chars().any(|c| c.is_ascii_alphabetic()) {
            return Err(PasswordPolicyError::MissingLetter);
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(PasswordPolicyError::MissingDigit);
        }
        if !password
            .chars()
            .any(|c| Self::SPECIAL_CHARACTERS.contains(c))
        {
            return Err(PasswordPolicyError::MissingSpecialCharacter);
        }

        Ok(Self(password))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

/// One-way password digest as stored at rest.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    pub fn new(digest: impl Into<String>) -> Self {
        Self(digest.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordDigest(***)")
    }
}

/// Record handed to the repository when a user signs up.
///
/// Timestamps are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub id: UserId,
    pub email: EmailAddress,
    pub name: UserName,
    pub password_hash: PasswordDigest,
}

/// Partial profile update. Only provided fields are changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateProfileCommand {
    pub email: Option<EmailAddress>,
    pub name: Option<UserName>,
}

impl UpdateProfileCommand {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.name.is_none()
    }
}

/// Command to rotate the caller's password.
#[derive(Clone)]
pub struct ChangePasswordCommand {
    /// Checked against the stored digest, not against the policy.
    pub current_password: String,
    pub new_password: Password,
}

impl fmt::Debug for ChangePasswordCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangePasswordCommand").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_is_normalized() {
        let email = EmailAddress::new("  Ann.A@X.COM ").unwrap();
        assert_eq!(email.as_str(), "ann.a@x.com");
        assert_eq!(email, EmailAddress::new("ann.a@x.com").unwrap());
    }

    #[test]
    fn test_email_rejects_invalid_format() {
        assert!(matches!(
            EmailAddress::new("invalid-email"),
            Err(EmailError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_name_length() {
        assert_eq!(UserName::new("Ann A").unwrap().as_str(), "Ann A");
        assert_eq!(UserName::new("  Bob  ").unwrap().as_str(), "Bob");
        assert_eq!(
            UserName::new("Al"),
            Err(NameError::TooShort { min: 3, actual: 2 })
        );
        assert_eq!(UserName::new("   "), Err(NameError::Empty));
    }

    #[test]
    fn test_password_policy() {
        assert!(Password::new("Password1!").is_ok());
        assert_eq!(Password::new(""), Err(PasswordPolicyError::Empty));
        assert_eq!(
            Password::new("Pa1!"),
            Err(PasswordPolicyError::TooShort { min: 8, actual: 4 })
        );
        assert_eq!(
            Password::new("12345678!"),
            Err(PasswordPolicyError::MissingLetter)
        );
        assert_eq!(
            Password::new("Password!"),
            Err(PasswordPolicyError::MissingDigit)
        );
        assert_eq!(
            Password::new("Password123"),
            Err(PasswordPolicyError::MissingSpecialCharacter)
        );
    }

    #[test]
    fn test_secrets_are_not_printed() {
        let password = Password::new("Password1!").unwrap();
        let digest = PasswordDigest::new("$argon2id$secret");

        assert!(!format!("{:?}", password).contains("Password1!"));
        assert!(!format!("{:?}", digest).contains("secret"));
    }

    #[test]
    fn test_user_id_round_trip() {
        let id = UserId::new();
        assert_eq!(UserId::from_string(&id.to_string()), Ok(id));
        assert!(UserId::from_string("not-a-uuid").is_err());
    }
}
