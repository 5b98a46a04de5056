use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::identity::models::EmailAddress;
use crate::domain::identity::models::Identity;
use crate::domain::identity::models::IdentityId;
use crate::domain::identity::models::UpdateIdentityCommand;
use crate::domain::identity::models::Username;
use crate::identity::errors::IdentityError;
use crate::identity::ports::IdentityServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// HTTP request body for updating an identity (raw JSON)
#[derive(Debug, Deserialize)]
pub struct UpdateIdentityRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub active: Option<bool>,
}

impl UpdateIdentityRequest {
    fn try_into_command(self) -> Result<UpdateIdentityCommand, ApiError> {
        let username = self
            .username
            .map(Username::new)
            .transpose()
            .map_err(IdentityError::from)?;

        let email = self
            .email
            .map(EmailAddress::new)
            .transpose()
            .map_err(IdentityError::from)?;

        if let Some(password) = &self.password {
            if password.len() < 8 {
                return Err(ApiError::UnprocessableEntity(
                    "Password too short: minimum 8 characters".to_string(),
                ));
            }
        }

        Ok(UpdateIdentityCommand {
            username,
            email,
            password: self.password,
            active: self.active,
        })
    }
}

/// Response body for identity update
#[derive(Debug, Serialize, PartialEq)]
pub struct IdentityResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub active: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Identity> for IdentityResponse {
    fn from(identity: Identity) -> Self {
        Self {
            id: identity.id.to_string(),
            username: identity.username.as_str().to_string(),
            email: identity.email.as_str().to_string(),
            active: identity.active,
            created_at: identity.created_at.to_rfc3339(),
            updated_at: identity.updated_at.to_rfc3339(),
        }
    }
}

pub async fn update_identity(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateIdentityRequest>,
) -> Result<ApiSuccess<IdentityResponse>, ApiError> {
    // Parse at the HTTP boundary; the domain only sees validated types
    let id = IdentityId::from_string(&id).map_err(IdentityError::from)?;
    let command = req.try_into_command()?;

    state
        .identity_service
        .update_identity(&id, command)
        .await
        .map_err(ApiError::from)
        .map(|identity| ApiSuccess::new(StatusCode::OK, identity.into()))
}
