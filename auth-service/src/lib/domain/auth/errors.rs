use thiserror::Error;

/// Errors surfaced by the authentication protocol.
///
/// `AuthenticationFailed` covers both an unknown identifier and a wrong
/// secret; `CredentialsInvalid` covers every token-time rejection. Each
/// is a single variant with a single message so the underlying causes
/// stay indistinguishable to callers (anti-enumeration).
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Username or email is required")]
    IdentifierRequired,

    #[error("Incorrect username/email or password")]
    AuthenticationFailed,

    #[error("Could not validate credentials")]
    CredentialsInvalid,

    #[error("Token issuance failed: {0}")]
    TokenIssuance(String),

    #[error("Store error: {0}")]
    Store(String),
}
