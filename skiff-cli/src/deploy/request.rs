//! Job deploy request builder

use skiff_core::domain::job::{Job, JobSource};
use skiff_core::dto::job::JobDeployRequest;
use tracing::debug;

/// Build the deploy request matching the job's source
///
/// Git jobs redeploy their deployed commit unless `commit_id_override` is a
/// non-empty string. Image jobs always redeploy their tag: an override given
/// for an image job is ignored on purpose, so one command line works across a
/// mix of git and image jobs.
pub fn build(job: &Job, commit_id_override: Option<&str>) -> JobDeployRequest {
    let commit_id_override = commit_id_override.filter(|commit| !commit.is_empty());

    match &job.source {
        JobSource::Git {
            deployed_commit_id, ..
        } => JobDeployRequest {
            git_commit_id: commit_id_override
                .map(str::to_string)
                .or_else(|| deployed_commit_id.clone()),
            image_tag: None,
        },
        JobSource::Image { tag, .. } => {
            if let Some(commit) = commit_id_override {
                debug!(job = %job.name, %commit, "ignoring commit id for image-based job");
            }
            JobDeployRequest {
                git_commit_id: None,
                image_tag: Some(tag.clone()),
            }
        }
    }
}
