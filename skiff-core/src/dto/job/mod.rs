//! Job DTOs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ReferenceObject;
use crate::domain::Named;
use crate::domain::job::JobKind;

/// Job record as returned by `GET /environment/{id}/job`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobResponse {
    pub id: Uuid,
    pub name: String,
    pub environment: ReferenceObject,
    pub job_type: JobKind,
    #[serde(default)]
    pub source: JobSourceResponse,
}

/// Job source as sent on the wire: at most one member is expected
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobSourceResponse {
    #[serde(default)]
    pub docker: Option<DockerSource>,
    #[serde(default)]
    pub image: Option<ImageSource>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DockerSource {
    pub git_repository: GitRepository,
    #[serde(default)]
    pub dockerfile_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitRepository {
    pub url: String,
    #[serde(default)]
    pub branch: Option<String>,
    #[serde(default)]
    pub deployed_commit_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageSource {
    pub image_name: String,
    pub tag: String,
}

impl Named for JobResponse {
    fn id(&self) -> Uuid {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Body of `POST /job/{id}/deploy`
///
/// Exactly one field is set, matching the job's source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDeployRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_commit_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_tag: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deploy_request_omits_unset_fields() {
        let req = JobDeployRequest {
            git_commit_id: Some("abc123".to_string()),
            image_tag: None,
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({ "git_commit_id": "abc123" })
        );
    }

    #[test]
    fn test_job_without_source_field_parses() {
        let job: JobResponse = serde_json::from_value(serde_json::json!({
            "id": "0b4f8a1e-5d0e-4a4e-9a52-2a9f3c1d7e10",
            "name": "seed",
            "environment": { "id": "7c9e6679-7425-40de-944b-e07fc1f90ae7" },
            "job_type": "CRON"
        }))
        .unwrap();
        assert_eq!(job.job_type, JobKind::Cron);
        assert!(job.source.docker.is_none() && job.source.image.is_none());
    }
}
