//! Skiff HTTP Client
//!
//! A simple, type-safe HTTP client for the platform API and its admin endpoint.
//!
//! Two clients are exposed:
//! - [`PlatformClient`] for organizations, projects, environments and jobs
//! - [`AdminClient`] for cluster deployments, rooted at the admin URL
//!
//! # Example
//!
//! ```no_run
//! use skiff_client::PlatformClient;
//! use skiff_core::domain::auth::{AccessToken, TokenType};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let token = AccessToken::new(TokenType::Token, "qov_xxx");
//!     let client = PlatformClient::new("https://api.example.com", &token)?;
//!
//!     for org in client.list_organizations().await? {
//!         println!("{} {}", org.id, org.name);
//!     }
//!     Ok(())
//! }
//! ```

mod admin;
pub mod error;
mod jobs;
mod organizations;

pub use admin::AdminClient;
pub use error::{ClientError, Result};

use reqwest::Client;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use skiff_core::domain::auth::AccessToken;

/// HTTP client for the platform API
///
/// Every request carries the `Authorization` header built from the access
/// token the client was created with.
#[derive(Debug, Clone)]
pub struct PlatformClient {
    /// Base URL of the platform API (e.g., "https://api.example.com")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl PlatformClient {
    /// Create a new platform client authenticated with `token`
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the platform API
    /// * `token` - Access token, sent as `<type> <token>`
    pub fn new(base_url: impl Into<String>, token: &AccessToken) -> Result<Self> {
        let client = authorized_client(&token.authorization())?;
        Ok(Self::with_client(base_url, client))
    }

    /// Create a new platform client with a custom HTTP client
    ///
    /// The caller is responsible for configuring authentication headers.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the platform API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Build a reqwest client that sends `authorization` on every request
pub(crate) fn authorized_client(authorization: &str) -> Result<Client> {
    let mut value = HeaderValue::from_str(authorization).map_err(|_| {
        ClientError::InvalidRequest("access token contains invalid header characters".to_string())
    })?;
    value.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, value);

    Ok(Client::builder().default_headers(headers).build()?)
}

// =============================================================================
// Response Handlers
// =============================================================================

/// Check the status code and deserialize a JSON body
pub(crate) async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();

    if !status.is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ClientError::api_error(status.as_u16(), error_text));
    }

    response
        .json()
        .await
        .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
}

/// Check the status code of a response whose body is ignored
pub(crate) async fn handle_empty_response(response: reqwest::Response) -> Result<()> {
    let status = response.status();

    if !status.is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ClientError::api_error(status.as_u16(), error_text));
    }

    Ok(())
}

/// Check the status code of a request the server accepted
///
/// Any 2xx counts as accepted. The body is decoded when it holds a `T`;
/// an empty or undecodable body yields `None`.
pub(crate) async fn handle_accepted_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<Option<T>> {
    let status = response.status();

    if !status.is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ClientError::api_error(status.as_u16(), error_text));
    }

    let body = response.bytes().await.unwrap_or_default();
    if body.is_empty() {
        return Ok(None);
    }

    match serde_json::from_slice(&body) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            tracing::debug!(error = %e, "ignoring undecodable body of accepted request");
            Ok(None)
        }
    }
}
