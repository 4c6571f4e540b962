//! Cluster deploy endpoints served by the admin API

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use skiff_core::domain::auth::AccessToken;
use skiff_core::dto::cluster::ClusterDeployRequest;
use url::Url;
use uuid::Uuid;

use crate::error::Result;
use crate::{authorized_client, handle_empty_response};

/// HTTP client for the admin API
///
/// The admin API only accepts bearer authentication, whatever the token type.
#[derive(Debug, Clone)]
pub struct AdminClient {
    base_url: String,
    client: Client,
}

impl AdminClient {
    /// Create a new admin client
    ///
    /// # Arguments
    /// * `base_url` - Admin API root, usually taken from `ADMIN_URL`
    /// * `token` - Access token, always sent as `Bearer <token>`
    pub fn new(base_url: &Url, token: &AccessToken) -> Result<Self> {
        let client = authorized_client(&token.bearer_authorization())?;
        Ok(Self::with_client(base_url, client))
    }

    /// Create a new admin client with a custom HTTP client
    pub fn with_client(base_url: &Url, client: Client) -> Self {
        Self {
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Deploy a single cluster
    pub async fn deploy_cluster(&self, cluster_id: Uuid, req: &ClusterDeployRequest) -> Result<()> {
        let url = format!("{}/cluster/deploy/{}", self.base_url, cluster_id);
        self.post_deploy(&url, req).await
    }

    /// Deploy every cluster managed by the admin API
    pub async fn deploy_all_clusters(&self, req: &ClusterDeployRequest) -> Result<()> {
        let url = format!("{}/cluster/deploy", self.base_url);
        self.post_deploy(&url, req).await
    }

    async fn post_deploy(&self, url: &str, req: &ClusterDeployRequest) -> Result<()> {
        tracing::debug!(%url, dry_run = req.dry_run, "deploying cluster");
        let builder = self.client.post(url);
        let builder = match req.body() {
            Some(body) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(serde_json::to_vec(&body).map_err(|e| {
                    crate::ClientError::InvalidRequest(format!("Failed to encode body: {}", e))
                })?),
            None => builder,
        };
        let response = builder.send().await?;

        handle_empty_response(response).await
    }
}
