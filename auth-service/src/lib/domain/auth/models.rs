use std::fmt;

/// Credential presentation for one login attempt.
///
/// The caller may supply a username, an email, or both as alternatives.
/// Transient; never persisted and dropped at the end of the attempt.
#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: String,
}

impl LoginCommand {
    pub fn new(username: Option<String>, email: Option<String>, password: String) -> Self {
        Self {
            username,
            email,
            password,
        }
    }

    /// The identifier to authenticate, username taking precedence.
    ///
    /// Empty strings count as absent, so a body carrying `"username": ""`
    /// falls through to the email field.
    pub fn identifier(&self) -> Option<&str> {
        self.username
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.email.as_deref().filter(|s| !s.is_empty()))
    }
}

/// Bearer token handed to a caller after a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub access_token: String,
    pub token_kind: TokenKind,
}

/// Kind of credential the issued token represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Bearer,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Bearer => "bearer",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
