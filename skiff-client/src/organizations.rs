//! Organization, project and environment endpoints

use crate::error::Result;
use crate::{PlatformClient, handle_response};
use skiff_core::domain::organization::{Environment, Organization, Project};
use skiff_core::domain::state::EnvironmentStatus;
use skiff_core::dto::Results;
use uuid::Uuid;

impl PlatformClient {
    // =============================================================================
    // Naming Hierarchy
    // =============================================================================

    /// List every organization the token can access
    pub async fn list_organizations(&self) -> Result<Vec<Organization>> {
        let url = format!("{}/organization", self.base_url);
        tracing::debug!(%url, "listing organizations");
        let response = self.client.get(&url).send().await?;

        let page: Results<Organization> = handle_response(response).await?;
        Ok(page.results)
    }

    /// List the projects of an organization
    ///
    /// # Arguments
    /// * `organization_id` - The organization UUID
    pub async fn list_projects(&self, organization_id: Uuid) -> Result<Vec<Project>> {
        let url = format!("{}/organization/{}/project", self.base_url, organization_id);
        tracing::debug!(%url, "listing projects");
        let response = self.client.get(&url).send().await?;

        let page: Results<Project> = handle_response(response).await?;
        Ok(page.results)
    }

    /// List the environments of a project
    ///
    /// # Arguments
    /// * `project_id` - The project UUID
    pub async fn list_environments(&self, project_id: Uuid) -> Result<Vec<Environment>> {
        let url = format!("{}/project/{}/environment", self.base_url, project_id);
        tracing::debug!(%url, "listing environments");
        let response = self.client.get(&url).send().await?;

        let page: Results<Environment> = handle_response(response).await?;
        Ok(page.results)
    }

    // =============================================================================
    // Environment Status
    // =============================================================================

    /// Get the current operation state of an environment
    ///
    /// # Arguments
    /// * `environment_id` - The environment UUID
    pub async fn get_environment_status(&self, environment_id: Uuid) -> Result<EnvironmentStatus> {
        let url = format!("{}/environment/{}/status", self.base_url, environment_id);
        tracing::debug!(%url, "fetching environment status");
        let response = self.client.get(&url).send().await?;

        handle_response(response).await
    }
}
