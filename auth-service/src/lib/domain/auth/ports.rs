use async_trait::async_trait;

use crate::auth::errors::AuthError;
use crate::auth::models::IssuedToken;
use crate::auth::models::LoginCommand;
use crate::domain::identity::models::Identity;

/// Port for the two-phase authentication protocol.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Phase 1: verify presented credentials and mint a bearer token.
    ///
    /// # Errors
    /// * `IdentifierRequired` - Neither username nor email was supplied
    /// * `AuthenticationFailed` - Unknown identifier or wrong secret
    ///   (deliberately indistinguishable)
    /// * `TokenIssuance` - Token signing failed
    /// * `Store` - Store operation failed
    async fn login(&self, command: LoginCommand) -> Result<IssuedToken, AuthError>;

    /// Phase 2: resolve a presented token back to an authenticated identity.
    ///
    /// # Errors
    /// * `CredentialsInvalid` - Malformed, tampered, or expired token;
    ///   missing subject; or subject no longer resolves to an identity
    /// * `Store` - Store operation failed
    async fn resolve_token(&self, token: &str) -> Result<Identity, AuthError>;
}
