use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::identity::models::Identity;
use crate::identity::ports::IdentityServicePort;
use crate::inbound::http::router::AppState;

pub async fn list_identities(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<IdentitySummaryData>>, ApiError> {
    state
        .identity_service
        .list_identities()
        .await
        .map_err(ApiError::from)
        .map(|identities| {
            let data = identities.iter().map(IdentitySummaryData::from).collect();
            ApiSuccess::new(StatusCode::OK, data)
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentitySummaryData {
    pub id: String,
    pub username: String,
    pub email: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Identity> for IdentitySummaryData {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id.to_string(),
            username: identity.username.as_str().to_string(),
            email: identity.email.as_str().to_string(),
            active: identity.active,
            created_at: identity.created_at,
        }
    }
}
