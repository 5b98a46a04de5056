use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::auth::ports::AuthServicePort;
use crate::domain::identity::models::Identity;
use crate::inbound::http::router::AppState;

/// Extension type carrying the identity resolved from the bearer token
#[derive(Debug, Clone)]
pub struct AuthenticatedIdentity {
    pub identity: Identity,
}

/// Middleware that resolves bearer tokens to identities.
///
/// The auth core collapses every rejection cause (malformed, tampered,
/// expired, unknown subject) into one kind, so the response body stays
/// equally vague; the cause is only logged.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)?;

    let identity = state.auth_service.resolve_token(token).await.map_err(|e| {
        tracing::warn!("Token resolution failed: {}", e);
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "Could not validate credentials"
            })),
        )
            .into_response()
    })?;

    req.extensions_mut().insert(AuthenticatedIdentity { identity });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({
                    "error": "Missing Authorization header"
                })),
            )
                .into_response()
        })?;

    let auth_str = auth_header.to_str().map_err(|_| {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "Invalid Authorization header"
            })),
        )
            .into_response()
    })?;

    if !auth_str.starts_with("Bearer ") {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "Invalid Authorization header format. Expected: Bearer <token>"
            })),
        )
            .into_response());
    }

    Ok(auth_str.trim_start_matches("Bearer "))
}
