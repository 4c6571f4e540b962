//! In-memory platform used by pipeline tests

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;
use skiff_client::ClientError;
use skiff_core::domain::organization::{Environment, Organization, Project};
use skiff_core::domain::state::{EnvironmentStatus, OperationState, Status};
use skiff_core::dto::cluster::ClusterDeployRequest;
use skiff_core::dto::job::{JobDeployRequest, JobResponse};
use uuid::Uuid;

use super::{AdminApi, ApiResult, PlatformApi};
use crate::deploy::dry_run::Confirm;
use crate::error::DeployError;

/// Fixed hierarchy: one organization, one project, one environment
pub struct FakePlatform {
    pub organization: Organization,
    pub project: Project,
    pub environment: Environment,
    pub environment_state: Mutex<OperationState>,
    pub jobs: Mutex<Vec<JobResponse>>,
    /// Job states returned by successive status polls; `None` fails the poll
    pub job_states: Mutex<VecDeque<Option<OperationState>>>,
    pub deploy_calls: Mutex<Vec<(Uuid, JobDeployRequest)>>,
    pub status_polls: Mutex<usize>,
    pub list_calls: Mutex<usize>,
}

impl FakePlatform {
    pub fn new() -> Self {
        Self {
            organization: Organization {
                id: Uuid::new_v4(),
                name: "acme".to_string(),
            },
            project: Project {
                id: Uuid::new_v4(),
                name: "billing".to_string(),
            },
            environment: Environment {
                id: Uuid::new_v4(),
                name: "production".to_string(),
                mode: Some("PRODUCTION".to_string()),
            },
            environment_state: Mutex::new(OperationState::Deployed),
            jobs: Mutex::new(Vec::new()),
            job_states: Mutex::new(VecDeque::new()),
            deploy_calls: Mutex::new(Vec::new()),
            status_polls: Mutex::new(0),
            list_calls: Mutex::new(0),
        }
    }

    pub fn with_environment_state(self, state: OperationState) -> Self {
        *self.environment_state.lock().unwrap() = state;
        self
    }

    pub fn with_job_states(self, states: impl IntoIterator<Item = Option<OperationState>>) -> Self {
        *self.job_states.lock().unwrap() = states.into_iter().collect();
        self
    }

    /// Add a lifecycle job deployed from git
    pub fn add_git_job(&self, name: &str, deployed_commit_id: &str) -> Uuid {
        self.add_job(
            name,
            "LIFECYCLE",
            json!({
                "docker": {
                    "git_repository": {
                        "url": "https://github.com/acme/billing.git",
                        "deployed_commit_id": deployed_commit_id
                    }
                }
            }),
        )
    }

    /// Add a lifecycle job pulled from a registry
    pub fn add_image_job(&self, name: &str, tag: &str) -> Uuid {
        self.add_job(
            name,
            "LIFECYCLE",
            json!({ "image": { "image_name": "acme/billing", "tag": tag } }),
        )
    }

    pub fn add_job(&self, name: &str, job_type: &str, source: serde_json::Value) -> Uuid {
        let id = Uuid::new_v4();
        let job = serde_json::from_value(json!({
            "id": id,
            "name": name,
            "environment": { "id": self.environment.id },
            "job_type": job_type,
            "source": source
        }))
        .unwrap();
        self.jobs.lock().unwrap().push(job);
        id
    }

    pub fn deploy_calls(&self) -> Vec<(Uuid, JobDeployRequest)> {
        self.deploy_calls.lock().unwrap().clone()
    }

    pub fn status_polls(&self) -> usize {
        *self.status_polls.lock().unwrap()
    }
}

#[async_trait]
impl PlatformApi for FakePlatform {
    async fn list_organizations(&self) -> ApiResult<Vec<Organization>> {
        *self.list_calls.lock().unwrap() += 1;
        Ok(vec![self.organization.clone()])
    }

    async fn list_projects(&self, organization_id: Uuid) -> ApiResult<Vec<Project>> {
        *self.list_calls.lock().unwrap() += 1;
        if organization_id == self.organization.id {
            Ok(vec![self.project.clone()])
        } else {
            Err(ClientError::api_error(404, "organization not found"))
        }
    }

    async fn list_environments(&self, project_id: Uuid) -> ApiResult<Vec<Environment>> {
        *self.list_calls.lock().unwrap() += 1;
        if project_id == self.project.id {
            Ok(vec![self.environment.clone()])
        } else {
            Err(ClientError::api_error(404, "project not found"))
        }
    }

    async fn list_jobs(&self, environment_id: Uuid) -> ApiResult<Vec<JobResponse>> {
        *self.list_calls.lock().unwrap() += 1;
        Ok(self
            .jobs
            .lock()
            .unwrap()
            .iter()
            .filter(|job| job.environment.id == environment_id)
            .cloned()
            .collect())
    }

    async fn environment_status(&self, environment_id: Uuid) -> ApiResult<EnvironmentStatus> {
        if environment_id != self.environment.id {
            return Err(ClientError::api_error(404, "environment not found"));
        }
        Ok(EnvironmentStatus {
            id: environment_id,
            state: *self.environment_state.lock().unwrap(),
            last_deployment_date: None,
        })
    }

    async fn job_status(&self, job_id: Uuid) -> ApiResult<Status> {
        *self.status_polls.lock().unwrap() += 1;
        match self.job_states.lock().unwrap().pop_front() {
            Some(Some(state)) => Ok(Status {
                id: job_id,
                state,
                message: None,
            }),
            Some(None) => Err(ClientError::api_error(500, "status unavailable")),
            None => Ok(Status {
                id: job_id,
                state: OperationState::Deploying,
                message: None,
            }),
        }
    }

    async fn deploy_job(&self, job_id: Uuid, req: &JobDeployRequest) -> ApiResult<Option<Status>> {
        self.deploy_calls.lock().unwrap().push((job_id, req.clone()));
        Ok(Some(Status {
            id: job_id,
            state: OperationState::DeploymentQueued,
            message: None,
        }))
    }
}

/// Records cluster deploy calls; ids in `failing` are rejected
#[derive(Default)]
pub struct FakeAdmin {
    pub failing: HashSet<Uuid>,
    pub cluster_calls: Mutex<Vec<(Uuid, ClusterDeployRequest)>>,
    pub all_calls: Mutex<Vec<ClusterDeployRequest>>,
}

impl FakeAdmin {
    pub fn failing(ids: impl IntoIterator<Item = Uuid>) -> Self {
        Self {
            failing: ids.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn total_calls(&self) -> usize {
        self.cluster_calls.lock().unwrap().len() + self.all_calls.lock().unwrap().len()
    }

    pub fn cluster_requests(&self) -> HashMap<Uuid, ClusterDeployRequest> {
        self.cluster_calls.lock().unwrap().iter().cloned().collect()
    }
}

#[async_trait]
impl AdminApi for FakeAdmin {
    async fn deploy_cluster(&self, cluster_id: Uuid, req: &ClusterDeployRequest) -> ApiResult<()> {
        self.cluster_calls.lock().unwrap().push((cluster_id, *req));
        if self.failing.contains(&cluster_id) {
            return Err(ClientError::api_error(409, "cluster is locked"));
        }
        Ok(())
    }

    async fn deploy_all_clusters(&self, req: &ClusterDeployRequest) -> ApiResult<()> {
        self.all_calls.lock().unwrap().push(*req);
        Ok(())
    }
}

/// Answers every confirmation the same way and records what was asked
pub struct FakeConfirm {
    answer: bool,
    asked: Vec<String>,
}

impl FakeConfirm {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            asked: Vec::new(),
        }
    }

    pub fn asked(&self) -> &[String] {
        &self.asked
    }
}

#[async_trait]
impl Confirm for FakeConfirm {
    async fn confirm(&mut self, action: &str) -> Result<bool, DeployError> {
        self.asked.push(action.to_string());
        Ok(self.answer)
    }
}
