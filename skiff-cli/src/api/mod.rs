//! API seams
//!
//! The deploy pipeline talks to the platform through these traits so it can be
//! exercised against in-memory fakes. The real implementations delegate to
//! `skiff_client`.

#[cfg(test)]
pub mod fake;

use async_trait::async_trait;
use skiff_client::{AdminClient, ClientError, PlatformClient};
use skiff_core::domain::organization::{Environment, Organization, Project};
use skiff_core::domain::state::{EnvironmentStatus, Status};
use skiff_core::dto::cluster::ClusterDeployRequest;
use skiff_core::dto::job::{JobDeployRequest, JobResponse};
use uuid::Uuid;

type ApiResult<T> = Result<T, ClientError>;

/// Read and deploy operations of the platform API
#[async_trait]
pub trait PlatformApi: Send + Sync {
    async fn list_organizations(&self) -> ApiResult<Vec<Organization>>;

    async fn list_projects(&self, organization_id: Uuid) -> ApiResult<Vec<Project>>;

    async fn list_environments(&self, project_id: Uuid) -> ApiResult<Vec<Environment>>;

    async fn list_jobs(&self, environment_id: Uuid) -> ApiResult<Vec<JobResponse>>;

    async fn environment_status(&self, environment_id: Uuid) -> ApiResult<EnvironmentStatus>;

    async fn job_status(&self, job_id: Uuid) -> ApiResult<Status>;

    /// `None` when the deployment was accepted without a status in the reply
    async fn deploy_job(&self, job_id: Uuid, req: &JobDeployRequest) -> ApiResult<Option<Status>>;
}

/// Cluster deploy operations of the admin API
#[async_trait]
pub trait AdminApi: Send + Sync {
    async fn deploy_cluster(&self, cluster_id: Uuid, req: &ClusterDeployRequest) -> ApiResult<()>;

    async fn deploy_all_clusters(&self, req: &ClusterDeployRequest) -> ApiResult<()>;
}

#[async_trait]
impl PlatformApi for PlatformClient {
    async fn list_organizations(&self) -> ApiResult<Vec<Organization>> {
        PlatformClient::list_organizations(self).await
    }

    async fn list_projects(&self, organization_id: Uuid) -> ApiResult<Vec<Project>> {
        PlatformClient::list_projects(self, organization_id).await
    }

    async fn list_environments(&self, project_id: Uuid) -> ApiResult<Vec<Environment>> {
        PlatformClient::list_environments(self, project_id).await
    }

    async fn list_jobs(&self, environment_id: Uuid) -> ApiResult<Vec<JobResponse>> {
        PlatformClient::list_jobs(self, environment_id).await
    }

    async fn environment_status(&self, environment_id: Uuid) -> ApiResult<EnvironmentStatus> {
        self.get_environment_status(environment_id).await
    }

    async fn job_status(&self, job_id: Uuid) -> ApiResult<Status> {
        self.get_job_status(job_id).await
    }

    async fn deploy_job(&self, job_id: Uuid, req: &JobDeployRequest) -> ApiResult<Option<Status>> {
        PlatformClient::deploy_job(self, job_id, req).await
    }
}

#[async_trait]
impl AdminApi for AdminClient {
    async fn deploy_cluster(&self, cluster_id: Uuid, req: &ClusterDeployRequest) -> ApiResult<()> {
        AdminClient::deploy_cluster(self, cluster_id, req).await
    }

    async fn deploy_all_clusters(&self, req: &ClusterDeployRequest) -> ApiResult<()> {
        AdminClient::deploy_all_clusters(self, req).await
    }
}
