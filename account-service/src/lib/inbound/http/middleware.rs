use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;

use super::handlers::ApiError;
use super::handlers::ApiErrorBody;
use super::handlers::ApiFailure;
use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

/// Middleware that resolves the bearer token to a live caller identity and
/// adds it to the request extensions as `CurrentUser`.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token_from_header(&req)?;

    let current_user = state.auth_service.authorize(&token).await?;

    req.extensions_mut().insert(current_user);

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<String, ApiError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            ApiError::Unauthorized("Missing Authorization header".to_string())
        })?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::Unauthorized("Invalid Authorization header".to_string()))?;

    // The auth scheme is case-insensitive.
    let token = auth_str
        .split_once(' ')
        .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("bearer"))
        .map(|(_, token)| token.trim())
        .filter(|token| !token.is_empty());

    match token {
        Some(token) => Ok(token.to_string()),
        None => {
            tracing::warn!("Malformed Authorization header");
            Err(ApiError::Unauthorized(
                "Invalid Authorization header format. Expected: Bearer <token>".to_string(),
            ))
        }
    }
}

/// Outermost layer: every failure response leaves with the full envelope,
/// request path included.
pub async fn error_envelope(req: Request, next: Next) -> Response {
    let path = req.uri().path().to_string();
    let response = next.run(req).await;

    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) {
        return response;
    }

    let message = match response.extensions().get::<ApiFailure>() {
        Some(failure) => failure.message.clone(),
        None => status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string(),
    };

    let (parts, _) = response.into_parts();
    let mut headers = parts.headers;
    headers.remove(header::CONTENT_LENGTH);
    headers.remove(header::CONTENT_TYPE);

    let mut enveloped = (
        parts.status,
        Json(ApiErrorBody::new(parts.status, message, path)),
    )
        .into_response();
    enveloped.headers_mut().extend(headers);
    enveloped
}

/// Fallback for unknown routes.
pub async fn route_not_found() -> ApiError {
    ApiError::NotFound("Route not found".to_string())
}

/// Reported as Internal; the panic payload is logged, never returned.
pub fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    ApiError::InternalServerError(format!("Handler panicked: {}", detail)).into_response()
}
