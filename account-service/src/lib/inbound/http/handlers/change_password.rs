use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::MessageResponseData;
use super::ValidJson;
use crate::domain::auth::models::CurrentUser;
use crate::domain::user::models::ChangePasswordCommand;
use crate::domain::user::models::Password;
use crate::domain::user::ports::ProfileServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

pub async fn change_password(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    ValidJson(body): ValidJson<ChangePasswordRequest>,
) -> Result<ApiSuccess<MessageResponseData>, ApiError> {
    state
        .profile_service
        .change_password(&current_user.id, body.try_into_command()?)
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        MessageResponseData {
            message: "Password changed successfully".to_string(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ChangePasswordRequest {
    current_password: String,
    new_password: String,
}

impl ChangePasswordRequest {
    fn try_into_command(self) -> Result<ChangePasswordCommand, UserError> {
        if self.current_password.is_empty() {
            return Err(UserError::MissingField("Current password"));
        }
        Ok(ChangePasswordCommand {
            current_password: self.current_password,
            new_password: Password::new(self.new_password)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_fields() {
        let request: ChangePasswordRequest = serde_json::from_str(
            r#"{"currentPassword":"Password1!","newPassword":"Password2@"}"#,
        )
        .unwrap();

        let command = request.try_into_command().unwrap();
        assert_eq!(command.current_password, "Password1!");
        assert_eq!(command.new_password.as_str(), "Password2@");
    }

    #[test]
    fn test_missing_current_password() {
        let request = ChangePasswordRequest {
            current_password: String::new(),
            new_password: "Password2@".to_string(),
        };
        assert!(matches!(
            request.try_into_command(),
            Err(UserError::MissingField(_))
        ));
    }

    #[test]
    fn test_weak_new_password() {
        let request = ChangePasswordRequest {
            current_password: "Password1!".to_string(),
            new_password: "password".to_string(),
        };
        assert!(matches!(
            request.try_into_command(),
            Err(UserError::WeakPassword(_))
        ));
    }
}
