use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::patch;
use axum::routing::post;
use axum::Json;
use axum::Router;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_identity::create_identity;
use super::handlers::current_identity::current_identity;
use super::handlers::delete_identity::delete_identity;
use super::handlers::get_identity::get_identity;
use super::handlers::list_identities::list_identities;
use super::handlers::login::login;
use super::handlers::update_identity::update_identity;
use super::middleware::authenticate as auth_middleware;
use crate::domain::auth::service::AuthService;
use crate::domain::identity::service::IdentityService;
use crate::outbound::repositories::memory::InMemoryIdentityRepository;

#[derive(Clone)]
pub struct AppState {
    pub identity_service: Arc<IdentityService<InMemoryIdentityRepository>>,
    pub auth_service: Arc<AuthService<InMemoryIdentityRepository>>,
}

pub fn create_router(
    identity_service: Arc<IdentityService<InMemoryIdentityRepository>>,
    auth_service: Arc<AuthService<InMemoryIdentityRepository>>,
) -> Router {
    let state = AppState {
        identity_service,
        auth_service,
    };

    let public_routes = Router::new()
        .route("/health", get(health))
        .route("/api/auth/login", post(login))
        .route("/api/identities", post(create_identity));

    let protected_routes = Router::new()
        .route("/api/auth/me", get(current_identity))
        .route("/api/identities", get(list_identities))
        .route("/api/identities/:id", get(get_identity))
        .route("/api/identities/:id", patch(update_identity))
        .route("/api/identities/:id", delete(delete_identity))
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

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "healthy" }))
}
