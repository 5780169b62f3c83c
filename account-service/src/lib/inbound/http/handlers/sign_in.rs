use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::AuthResponseData;
use super::ValidJson;
use crate::domain::auth::models::SignInCommand;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::user::models::EmailAddress;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

pub async fn sign_in(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<SignInRequest>,
) -> Result<ApiSuccess<AuthResponseData>, ApiError> {
    let session = state.auth_service.sign_in(body.try_into_command()?).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        AuthResponseData::new("Signin successful", &session),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SignInRequest {
    email: String,
    password: String,
}

impl SignInRequest {
    fn try_into_command(self) -> Result<SignInCommand, UserError> {
        let email = EmailAddress::new(self.email)?;
        if self.password.is_empty() {
            return Err(UserError::MissingField("Password"));
        }
        Ok(SignInCommand {
            email,
            password: self.password,
        })
    }
}
