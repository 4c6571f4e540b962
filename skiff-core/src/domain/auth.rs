//! Access token domain model

use serde::{Deserialize, Serialize};

/// Kind of token presented to the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TokenType {
    /// Short-lived user session token
    #[default]
    Bearer,
    /// Long-lived API token
    Token,
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenType::Bearer => write!(f, "Bearer"),
            TokenType::Token => write!(f, "Token"),
        }
    }
}

/// Credential used to authenticate platform requests
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    pub token_type: TokenType,
    token: String,
}

impl AccessToken {
    /// Create a token, trimming surrounding whitespace from the raw value
    pub fn new(token_type: TokenType, token: impl AsRef<str>) -> Self {
        Self {
            token_type,
            token: token.as_ref().trim().to_string(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn is_empty(&self) -> bool {
        self.token.is_empty()
    }

    /// `Authorization` header value using the token's own type
    pub fn authorization(&self) -> String {
        format!("{} {}", self.token_type, self.token)
    }

    /// `Authorization` header value for endpoints that only accept bearer tokens
    pub fn bearer_authorization(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

// Never print the secret itself.
impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("token_type", &self.token_type)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_is_trimmed() {
        let token = AccessToken::new(TokenType::Bearer, "  abc.def \n");
        assert_eq!(token.token(), "abc.def");
        assert_eq!(token.authorization(), "Bearer abc.def");
    }

    #[test]
    fn test_api_token_header() {
        let token = AccessToken::new(TokenType::Token, "qov_123");
        assert_eq!(token.authorization(), "Token qov_123");
        assert_eq!(token.bearer_authorization(), "Bearer qov_123");
    }

    #[test]
    fn test_debug_redacts_secret() {
        let token = AccessToken::new(TokenType::Bearer, "secret-value");
        assert!(!format!("{:?}", token).contains("secret-value"));
    }
}
