use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::SecondsFormat;
use chrono::Utc;
use serde::Serialize;

use crate::domain::auth::models::AuthSession;
use crate::domain::user::models::User;
use crate::user::errors::ErrorKind;
use crate::user::errors::UserError;

pub mod change_password;
pub mod get_profile;
pub mod health;
pub mod sign_in;
pub mod sign_up;
pub mod update_profile;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
}

/// Marker left on failure responses so the envelope layer can stamp the
/// request path onto the body.
#[derive(Debug, Clone)]
pub struct ApiFailure {
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(detail) => {
                tracing::error!(error = %detail, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        let mut response = (
            status,
            Json(ApiErrorBody::new(status, message.clone(), String::new())),
        )
            .into_response();
        response.extensions_mut().insert(ApiFailure { message });
        response
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err.kind() {
            ErrorKind::ValidationFailed | ErrorKind::SamePassword => {
                ApiError::BadRequest(err.to_string())
            }
            ErrorKind::DuplicateIdentity => ApiError::Conflict("Email already exists".to_string()),
            ErrorKind::InvalidCredentials | ErrorKind::Unauthorized => {
                ApiError::Unauthorized(err.to_string())
            }
            ErrorKind::NotFound => ApiError::NotFound("User not found".to_string()),
            ErrorKind::Internal => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Uniform failure envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    pub status_code: u16,
    pub message: String,
    pub timestamp: String,
    pub path: String,
}

impl ApiErrorBody {
    pub fn new(status_code: StatusCode, message: String, path: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            message,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            path,
        }
    }
}

/// JSON body extractor whose rejections use the failure envelope.
///
/// Paired with `#[serde(deny_unknown_fields)]` on request types, this is
/// the strict input mode: unknown fields are a validation failure.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ValidJson<T>(pub T);

/// Profile projection shared by the sign-up/sign-in payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummary {
    pub id: String,
    pub email: String,
    pub name: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.as_str().to_string(),
            name: user.name.as_str().to_string(),
        }
    }
}

/// Full profile as returned by profile reads and updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponseData {
    pub id: String,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for ProfileResponseData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.as_str().to_string(),
            name: user.name.as_str().to_string(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Payload of a successful sign-up or sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthResponseData {
    pub message: String,
    pub access_token: String,
    pub user: UserSummary,
}

impl AuthResponseData {
    pub fn new(message: &str, session: &AuthSession) -> Self {
        Self {
            message: message.to_string(),
            access_token: session.access_token.clone(),
            user: (&session.user).into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponseData {
    pub message: String,
}
