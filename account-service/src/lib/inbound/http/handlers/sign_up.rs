use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::AuthResponseData;
use super::ValidJson;
use crate::domain::auth::models::SignUpCommand;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Password;
use crate::domain::user::models::UserName;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

pub async fn sign_up(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<SignUpRequest>,
) -> Result<ApiSuccess<AuthResponseData>, ApiError> {
    let session = state.auth_service.sign_up(body.try_into_command()?).await?;

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        AuthResponseData::new("User registered successfully", &session),
    ))
}

/// HTTP request body for registration (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SignUpRequest {
    email: String,
    name: String,
    password: String,
}

impl SignUpRequest {
    fn try_into_command(self) -> Result<SignUpCommand, UserError> {
        let email = EmailAddress::new(self.email)?;
        let name = UserName::new(self.name)?;
        let password = Password::new(self.password)?;
        Ok(SignUpCommand::new(email, name, password))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::errors::ErrorKind;

    fn request(email: &str, name: &str, password: &str) -> SignUpRequest {
        SignUpRequest {
            email: email.to_string(),
            name: name.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_request_normalizes_email() {
        let command = request("  Ann@Example.COM ", "Ann A", "Password1!")
            .try_into_command()
            .unwrap();

        assert_eq!(command.email.as_str(), "ann@example.com");
        assert_eq!(command.name.as_str(), "Ann A");
    }

    #[test]
    fn test_invalid_fields_are_validation_failures() {
        for bad in [
            request("not-an-email", "Ann A", "Password1!"),
            request("a@x.com", "An", "Password1!"),
            request("a@x.com", "Ann A", "short1!"),
            request("a@x.com", "Ann A", "Password1"),
        ] {
            let err = bad.try_into_command().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ValidationFailed);
        }
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: Result<SignUpRequest, _> = serde_json::from_str(
            r#"{"email":"a@x.com","name":"Ann A","password":"Password1!","role":"admin"}"#,
        );
        assert!(result.is_err());
    }
}
