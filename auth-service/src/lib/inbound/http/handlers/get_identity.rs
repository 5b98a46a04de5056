use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::identity::models::Identity;
use crate::domain::identity::models::IdentityId;
use crate::identity::ports::IdentityServicePort;
use crate::inbound::http::router::AppState;

pub async fn get_identity(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<GetIdentityResponseData>, ApiError> {
    let id = IdentityId::from_string(&id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .identity_service
        .get_identity(&id)
        .await
        .map_err(ApiError::from)
        .map(|ref identity| ApiSuccess::new(StatusCode::OK, identity.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetIdentityResponseData {
    pub id: String,
    pub username: String,
    pub email: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Identity> for GetIdentityResponseData {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id.to_string(),
            username: identity.username.as_str().to_string(),
            email: identity.email.as_str().to_string(),
            active: identity.active,
            created_at: identity.created_at,
            updated_at: identity.updated_at,
        }
    }
}
