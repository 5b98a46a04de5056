use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried by an issued token.
///
/// The codec always stamps `sub`, `iat`, and `exp`; all fields stay
/// optional on the wire so that foreign tokens still deserialize and can
/// be rejected with a precise reason instead of a parse error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (the identity this token was issued for)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Expiration time (Unix timestamp, absolute)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    /// Issued at (Unix timestamp, absolute)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

impl Claims {
    /// Build claims for a subject with an expiry `ttl` from now.
    pub fn with_ttl(subject: &str, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            sub: Some(subject.to_string()),
            exp: Some((now + ttl).timestamp()),
            iat: Some(now.timestamp()),
        }
    }

    /// Get the subject claim, if present.
    pub fn subject(&self) -> Option<&str> {
        self.sub.as_deref()
    }

    /// Check whether the token has expired at `current_timestamp`.
    ///
    /// A token is expired once the current time reaches its recorded
    /// expiry. Tokens without an `exp` claim never expire.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp.map_or(false, |exp| current_timestamp >= exp)
    }
}
