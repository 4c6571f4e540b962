//! Credential providers
//!
//! Supplies the access token used by both the platform and admin clients.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use skiff_core::domain::auth::{AccessToken, TokenType};

use crate::config::Config;
use crate::error::DeployError;

/// Environment variable holding an API token
pub const ACCESS_TOKEN_VAR: &str = "SKIFF_ACCESS_TOKEN";

/// Source of an access token
pub trait CredentialProvider {
    fn access_token(&self) -> Result<AccessToken, DeployError>;
}

/// Reads an API token from the environment
#[derive(Debug, Clone)]
pub struct EnvCredentialProvider {
    value: Option<String>,
}

impl EnvCredentialProvider {
    pub fn new(value: Option<String>) -> Self {
        Self { value }
    }

    pub fn from_env() -> Self {
        Self::new(std::env::var(ACCESS_TOKEN_VAR).ok())
    }
}

impl CredentialProvider for EnvCredentialProvider {
    fn access_token(&self) -> Result<AccessToken, DeployError> {
        let token = self
            .value
            .as_deref()
            .map(|raw| AccessToken::new(TokenType::Token, raw))
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                DeployError::Auth(format!(
                    "{ACCESS_TOKEN_VAR} is not set; export an API token or pass --token-file"
                ))
            })?;
        Ok(token)
    }
}

/// On-disk token as written by a login flow
#[derive(Debug, Deserialize)]
struct TokenFile {
    access_token: String,
    #[serde(default)]
    token_type: TokenType,
}

/// Reads a token from a JSON file
#[derive(Debug, Clone)]
pub struct FileCredentialProvider {
    path: PathBuf,
}

impl FileCredentialProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialProvider for FileCredentialProvider {
    fn access_token(&self) -> Result<AccessToken, DeployError> {
        let raw = std::fs::read_to_string(self.path()).map_err(|err| {
            DeployError::Auth(format!(
                "cannot read token file {}: {}",
                self.path().display(),
                err
            ))
        })?;

        let file: TokenFile = serde_json::from_str(&raw).map_err(|err| {
            DeployError::Auth(format!(
                "invalid token file {}: {}",
                self.path().display(),
                err
            ))
        })?;

        let token = AccessToken::new(file.token_type, &file.access_token);
        if token.is_empty() {
            return Err(DeployError::Auth(format!(
                "token file {} holds an empty token",
                self.path().display()
            )));
        }
        Ok(token)
    }
}

/// Pick the credential source for this invocation
pub fn provider_for(config: &Config) -> Box<dyn CredentialProvider> {
    match &config.token_file {
        Some(path) => Box::new(FileCredentialProvider::new(path)),
        None => Box::new(EnvCredentialProvider::from_env()),
    }
}
