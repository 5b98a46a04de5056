use thiserror::Error;

/// Error type for token operations.
///
/// `Invalid` and `Expired` are deliberately distinct kinds: callers must
/// reject the request either way but may log them differently.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is invalid: {0}")]
    Invalid(String),

    #[error("Token is expired")]
    Expired,
}
