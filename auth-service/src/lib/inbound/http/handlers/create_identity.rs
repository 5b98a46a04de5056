use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::identity::models::CreateIdentityCommand;
use crate::domain::identity::models::EmailAddress;
use crate::domain::identity::models::Identity;
use crate::domain::identity::models::Username;
use crate::identity::errors::EmailError;
use crate::identity::errors::UsernameError;
use crate::identity::ports::IdentityServicePort;
use crate::inbound::http::router::AppState;

const MIN_PASSWORD_LENGTH: usize = 8;

pub async fn create_identity(
    State(state): State<AppState>,
    Json(body): Json<CreateIdentityRequest>,
) -> Result<ApiSuccess<CreateIdentityResponseData>, ApiError> {
    state
        .identity_service
        .create_identity(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref identity| ApiSuccess::new(StatusCode::CREATED, identity.into()))
}

/// HTTP request body for registering an identity (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateIdentityRequest {
    username: String,
    email: String,
    password: String,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateIdentityRequestError {
    #[error("Invalid username: {0}")]
    Username(#[from] UsernameError),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("Password too short: minimum {min} characters")]
    PasswordTooShort { min: usize },
}

impl CreateIdentityRequest {
    fn try_into_command(self) -> Result<CreateIdentityCommand, ParseCreateIdentityRequestError> {
        let username = Username::new(self.username)?;
        let email = EmailAddress::new(self.email)?;
        if self.password.len() < MIN_PASSWORD_LENGTH {
            return Err(ParseCreateIdentityRequestError::PasswordTooShort {
                min: MIN_PASSWORD_LENGTH,
            });
        }
        Ok(CreateIdentityCommand::new(username, email, self.password))
    }
}

impl From<ParseCreateIdentityRequestError> for ApiError {
    fn from(err: ParseCreateIdentityRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateIdentityResponseData {
    pub id: String,
    pub username: String,
    pub email: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Identity> for CreateIdentityResponseData {
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
