use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;
use credentials::PasswordHasher;
use credentials::TokenCodec;

use crate::auth::errors::AuthError;
use crate::auth::models::IssuedToken;
use crate::auth::models::LoginCommand;
use crate::auth::models::TokenKind;
use crate::auth::ports::AuthServicePort;
use crate::domain::identity::models::Identity;
use crate::identity::ports::IdentityRepository;

/// The authentication protocol state machine.
///
/// Composes the user store, the password hasher, and the token codec
/// into a two-phase protocol: login mints a bearer token, and a later
/// request resolves that token back to an identity. Each request is
/// stateless end-to-end; the token is the only state carried between
/// the phases and its validity window is bounded solely by its embedded
/// expiry.
pub struct AuthService<R>
where
    R: IdentityRepository,
{
    repository: Arc<R>,
    password_hasher: Arc<PasswordHasher>,
    token_codec: Arc<TokenCodec>,
    token_ttl: Duration,
}

impl<R> AuthService<R>
where
    R: IdentityRepository,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User store implementation
    /// * `password_hasher` - Secret verification
    /// * `token_codec` - Token minting and validation
    /// * `token_ttl` - Lifetime stamped into every issued token
    pub fn new(
        repository: Arc<R>,
        password_hasher: Arc<PasswordHasher>,
        token_codec: Arc<TokenCodec>,
        token_ttl: Duration,
    ) -> Self {
        Self {
            repository,
            password_hasher,
            token_codec,
            token_ttl,
        }
    }

    /// Resolve the identifier to an identity record.
    ///
    /// Username lookup runs first; a string that matches both a username
    /// and a different identity's email always resolves to the username
    /// match.
    async fn resolve_identifier(&self, identifier: &str) -> Result<Option<Identity>, AuthError> {
        let by_username = self
            .repository
            .find_by_username(identifier)
            .await
            .map_err(|e| AuthError::Store(e.to_string()))?;

        match by_username {
            Some(identity) => Ok(Some(identity)),
            None => self
                .repository
                .find_by_email(identifier)
                .await
                .map_err(|e| AuthError::Store(e.to_string())),
        }
    }
}

#[async_trait]
impl<R> AuthServicePort for AuthService<R>
where
    R: IdentityRepository,
{
    async fn login(&self, command: LoginCommand) -> Result<IssuedToken, AuthError> {
        // Rejected before the store is touched
        let identifier = command.identifier().ok_or(AuthError::IdentifierRequired)?;

        let identity = self.resolve_identifier(identifier).await?;

        // Unknown identifier and wrong secret must be indistinguishable
        let identity = identity.ok_or(AuthError::AuthenticationFailed)?;
        if !self
            .password_hasher
            .verify(&command.password, &identity.password_hash)
        {
            return Err(AuthError::AuthenticationFailed);
        }

        let access_token = self
            .token_codec
            .encode(identity.username.as_str(), self.token_ttl)
            .map_err(|e| AuthError::TokenIssuance(e.to_string()))?;

        Ok(IssuedToken {
            access_token,
            token_kind: TokenKind::Bearer,
        })
    }

    async fn resolve_token(&self, token: &str) -> Result<Identity, AuthError> {
        // Malformed, tampered, and expired all collapse to the same kind
        let claims = self
            .token_codec
            .decode(token)
            .map_err(|_| AuthError::CredentialsInvalid)?;

        let subject = claims.subject().ok_or(AuthError::CredentialsInvalid)?;

        self.repository
            .find_by_username(subject)
            .await
            .map_err(|e| AuthError::Store(e.to_string()))?
            .ok_or(AuthError::CredentialsInvalid)
    }
}
