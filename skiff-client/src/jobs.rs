//! Job-related API endpoints

use crate::error::Result;
use crate::{PlatformClient, handle_accepted_response, handle_response};
use skiff_core::domain::state::Status;
use skiff_core::dto::Results;
use skiff_core::dto::job::{JobDeployRequest, JobResponse};
use uuid::Uuid;

impl PlatformClient {
    // =============================================================================
    // Jobs
    // =============================================================================

    /// List all jobs of an environment, lifecycle and cron alike
    ///
    /// # Arguments
    /// * `environment_id` - The environment UUID
    pub async fn list_jobs(&self, environment_id: Uuid) -> Result<Vec<JobResponse>> {
        let url = format!("{}/environment/{}/job", self.base_url, environment_id);
        tracing::debug!(%url, "listing jobs");
        let response = self.client.get(&url).send().await?;

        let page: Results<JobResponse> = handle_response(response).await?;
        Ok(page.results)
    }

    /// Get the current status of a job
    ///
    /// # Arguments
    /// * `job_id` - The job UUID
    pub async fn get_job_status(&self, job_id: Uuid) -> Result<Status> {
        let url = format!("{}/job/{}/status", self.base_url, job_id);
        tracing::debug!(%url, "fetching job status");
        let response = self.client.get(&url).send().await?;

        handle_response(response).await
    }

    /// Trigger a deployment of a job
    ///
    /// # Arguments
    /// * `job_id` - The job UUID
    /// * `req` - Commit or image tag to deploy
    ///
    /// # Returns
    /// The job status right after the deployment was accepted, when the
    /// platform sent one back. Any 2xx means the deployment is queued.
    pub async fn deploy_job(&self, job_id: Uuid, req: &JobDeployRequest) -> Result<Option<Status>> {
        let url = format!("{}/job/{}/deploy", self.base_url, job_id);
        tracing::debug!(%url, ?req, "deploying job");
        let response = self.client.post(&url).json(req).send().await?;

        handle_accepted_response(response).await
    }
}
