use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::ProfileResponseData;
use super::ValidJson;
use crate::domain::auth::models::CurrentUser;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UpdateProfileCommand;
use crate::domain::user::models::UserName;
use crate::domain::user::ports::ProfileServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

pub async fn update_profile(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    ValidJson(body): ValidJson<UpdateProfileRequest>,
) -> Result<ApiSuccess<ProfileResponseData>, ApiError> {
    let command = body.try_into_command()?;

    state
        .profile_service
        .update_profile(&current_user.id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, user.into()))
}

/// Partial update; absent fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateProfileRequest {
    email: Option<String>,
    name: Option<String>,
}

impl UpdateProfileRequest {
    fn try_into_command(self) -> Result<UpdateProfileCommand, UserError> {
        let email = self.email.map(EmailAddress::new).transpose()?;
        let name = self.name.map(UserName::new).transpose()?;
        Ok(UpdateProfileCommand { email, name })
    }
}
