use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Password;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserName;

/// Command to register a new user with domain types
#[derive(Debug, Clone)]
pub struct SignUpCommand {
    pub email: EmailAddress,
    pub name: UserName,
    pub password: Password,
}

impl SignUpCommand {
    pub fn new(email: EmailAddress, name: UserName, password: Password) -> Self {
        Self {
            email,
            name,
            password,
        }
    }
}

/// Command to authenticate with stored credentials.
///
/// The password is not checked against the policy, only against the digest.
#[derive(Clone)]
pub struct SignInCommand {
    pub email: EmailAddress,
    pub password: String,
}

impl std::fmt::Debug for SignInCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignInCommand")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Outcome of a successful sign-up or sign-in.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub access_token: String,
    pub user: User,
}

/// Identity asserted by a verified token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSubject {
    pub user_id: UserId,
    pub email: String,
}

/// Caller identity resolved by the authorization gate.
///
/// Never carries password material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: UserId,
    pub email: EmailAddress,
    pub name: UserName,
}

impl From<&User> for CurrentUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
        }
    }
}
