use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::patch;
use axum::routing::post;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::change_password::change_password;
use super::handlers::get_profile::get_profile;
use super::handlers::health::health;
use super::handlers::sign_in::sign_in;
use super::handlers::sign_up::sign_up;
use super::handlers::update_profile::update_profile;
use super::middleware::authenticate as auth_middleware;
use super::middleware::error_envelope;
use super::middleware::handle_panic;
use super::middleware::route_not_found;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::ports::CredentialHasher;
use crate::domain::auth::ports::TokenService;
use crate::domain::auth::service::AuthService;
use crate::domain::user::ports::ProfileServicePort;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::service::ProfileService;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServicePort>,
    pub profile_service: Arc<dyn ProfileServicePort>,
}

impl AppState {
    pub fn new(
        auth_service: Arc<dyn AuthServicePort>,
        profile_service: Arc<dyn ProfileServicePort>,
    ) -> Self {
        Self {
            auth_service,
            profile_service,
        }
    }

    /// Wire both domain services over one store, hasher and token service.
    pub fn from_parts<UR, CH, TS>(repository: Arc<UR>, hasher: Arc<CH>, tokens: Arc<TS>) -> Self
    where
        UR: UserRepository,
        CH: CredentialHasher,
        TS: TokenService,
    {
        let auth_service = AuthService::new(repository.clone(), hasher.clone(), tokens);
        let profile_service = ProfileService::new(repository, hasher);

        Self::new(Arc::new(auth_service), Arc::new(profile_service))
    }
}

pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/", get(health))
        .route("/auth/signup", post(sign_up))
        .route("/auth/signin", post(sign_in));

    let protected_routes = Router::new()
        .route("/users/me", get(get_profile).patch(update_profile))
        .route("/users/me/password", patch(change_password))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    let api = Router::new().merge(public_routes).merge(protected_routes);

    Router::new()
        .nest("/api/v1", api)
        .fallback(route_not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(error_envelope))
        .with_state(state)
}
