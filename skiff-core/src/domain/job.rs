//! Job domain types

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::Named;
use crate::dto::job::JobResponse;

/// Kind of platform-managed job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobKind {
    Lifecycle,
    Cron,
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for JobKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobKind::Lifecycle => write!(f, "lifecycle job"),
            JobKind::Cron => write!(f, "cron job"),
            JobKind::Unknown => write!(f, "job"),
        }
    }
}

/// Where a job's runnable artifact comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobSource {
    /// Built from a git repository
    Git {
        repository: String,
        deployed_commit_id: Option<String>,
    },
    /// Pulled from a container registry
    Image { image_name: String, tag: String },
}

/// A validated job record
#[derive(Debug, Clone)]
pub struct Job {
    pub id: Uuid,
    pub name: String,
    pub environment_id: Uuid,
    pub kind: JobKind,
    pub source: JobSource,
}

/// Job record returned by the platform without a usable source
#[derive(Debug, Error, PartialEq, Eq)]
#[error("job '{name}' ({id}) has neither a git nor an image source")]
pub struct MalformedJob {
    pub id: Uuid,
    pub name: String,
}

impl TryFrom<JobResponse> for Job {
    type Error = MalformedJob;

    fn try_from(response: JobResponse) -> Result<Self, Self::Error> {
        let JobResponse {
            id,
            name,
            environment,
            job_type,
            source,
        } = response;

        // Git is checked first: a record carrying both is deployed from git.
        let source = match (source.docker, source.image) {
            (Some(docker), _) => JobSource::Git {
                repository: docker.git_repository.url,
                deployed_commit_id: docker.git_repository.deployed_commit_id,
            },
            (None, Some(image)) => JobSource::Image {
                image_name: image.image_name,
                tag: image.tag,
            },
            (None, None) => return Err(MalformedJob { id, name }),
        };

        Ok(Job {
            id,
            name,
            environment_id: environment.id,
            kind: job_type,
            source,
        })
    }
}

impl Named for Job {
    fn id(&self) -> Uuid {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(source: serde_json::Value) -> JobResponse {
        serde_json::from_value(json!({
            "id": "0b4f8a1e-5d0e-4a4e-9a52-2a9f3c1d7e10",
            "name": "billing-migration",
            "environment": { "id": "7c9e6679-7425-40de-944b-e07fc1f90ae7" },
            "job_type": "LIFECYCLE",
            "source": source
        }))
        .unwrap()
    }

    #[test]
    fn test_git_source_conversion() {
        let job = Job::try_from(response(json!({
            "docker": {
                "git_repository": {
                    "url": "https://github.com/acme/billing.git",
                    "deployed_commit_id": "abc123"
                }
            }
        })))
        .unwrap();

        assert_eq!(job.kind, JobKind::Lifecycle);
        assert_eq!(
            job.source,
            JobSource::Git {
                repository: "https://github.com/acme/billing.git".to_string(),
                deployed_commit_id: Some("abc123".to_string()),
            }
        );
    }

    #[test]
    fn test_image_source_conversion() {
        let job = Job::try_from(response(json!({
            "image": { "image_name": "acme/billing", "tag": "1.4.2" }
        })))
        .unwrap();

        assert_eq!(
            job.source,
            JobSource::Image {
                image_name: "acme/billing".to_string(),
                tag: "1.4.2".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_source_is_malformed() {
        let err = Job::try_from(response(json!({}))).unwrap_err();
        assert_eq!(err.name, "billing-migration");
        assert!(err.to_string().contains("neither a git nor an image source"));
    }

    #[test]
    fn test_git_wins_when_both_present() {
        let job = Job::try_from(response(json!({
            "docker": { "git_repository": { "url": "https://example.com/r.git" } },
            "image": { "image_name": "acme/billing", "tag": "latest" }
        })))
        .unwrap();

        assert!(matches!(job.source, JobSource::Git { .. }));
    }
}
