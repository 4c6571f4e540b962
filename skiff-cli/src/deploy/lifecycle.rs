//! Lifecycle job deploy pipeline

use std::future::Future;
use std::time::Duration;

use colored::*;
use skiff_core::domain::job::Job;
use skiff_core::domain::state::OperationState;
use skiff_core::domain::target::DeployTarget;
use skiff_core::dto::job::JobDeployRequest;
use tracing::info;

use super::watch::{self, WatchTarget};
use super::{guard, request};
use crate::api::PlatformApi;
use crate::error::DeployError;
use crate::resolver;
use crate::types::DeployParams;

/// What was submitted, and how it ended when watched
#[derive(Debug, Clone)]
pub struct LifecycleDeployment {
    pub job: Job,
    /// Commit or image tag that was submitted
    pub request: JobDeployRequest,
    /// Terminal state observed by the watch, if `--watch` was given
    pub final_state: Option<OperationState>,
}

/// Resolve, guard, build, submit and optionally watch a lifecycle job deploy
///
/// `cancel` is only awaited while watching.
pub async fn deploy_lifecycle<C>(
    api: &dyn PlatformApi,
    params: &DeployParams,
    poll_interval: Duration,
    cancel: C,
) -> Result<LifecycleDeployment, DeployError>
where
    C: Future<Output = ()>,
{
    let environment_id = resolver::resolve_environment_id(api, &params.context).await?;

    guard::assert_terminal(api, environment_id).await?;

    let job = resolver::resolve_lifecycle_job(api, environment_id, &params.lifecycle).await?;
    let request = request::build(&job, params.commit_id.as_deref());

    let accepted = api.deploy_job(job.id, &request).await?;
    let accepted_state = accepted.as_ref().map(|status| status.state.as_str());
    info!(job_id = %job.id, ?request, ?accepted_state, "lifecycle deploy accepted");
    println!("{} Lifecycle job is deploying!", "✓".green());

    let final_state = if params.watch {
        let target = WatchTarget {
            job_id: job.id,
            environment_id,
        };
        let state = watch::watch(api, target, poll_interval, cancel, watch::print_progress).await?;
        if state.is_error() {
            return Err(DeployError::Failed {
                target: DeployTarget::Job(job).to_string(),
                state,
            });
        }
        Some(state)
    } else {
        None
    };

    Ok(LifecycleDeployment {
        job,
        request,
        final_state,
    })
}
