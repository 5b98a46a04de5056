use axum::http::StatusCode;
use axum::Extension;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::identity::models::Identity;
use crate::inbound::http::middleware::AuthenticatedIdentity;

/// Return the identity resolved from the presented bearer token.
///
/// All the work happens in the middleware; by the time this handler runs
/// the token has been decoded and the subject re-resolved via the store.
pub async fn current_identity(
    Extension(authenticated): Extension<AuthenticatedIdentity>,
) -> Result<ApiSuccess<CurrentIdentityResponseData>, ApiError> {
    Ok(ApiSuccess::new(
        StatusCode::OK,
        (&authenticated.identity).into(),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentIdentityResponseData {
    pub id: String,
    pub username: String,
    pub email: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Identity> for CurrentIdentityResponseData {
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
