//! Target resolver module
//!
//! Resolves human-readable names (organization → project → environment → job)
//! to ids by querying the API. Explicit ids bypass the lookup of their level and
//! of every level above it. Name matching is exact and case-sensitive.

use skiff_core::domain::Named;
use skiff_core::domain::job::{Job, JobKind};
use tracing::debug;
use uuid::Uuid;

use crate::api::PlatformApi;
use crate::error::{DeployError, ResourceKind};
use crate::types::{ContextParams, IdOrName};

/// Hint printed when a lifecycle job cannot be found
pub const LIFECYCLE_LIST_HINT: &str = "You can list all lifecycle jobs with: skiff lifecycle list";

/// Find the single item named exactly `name`
///
/// # Errors
/// Returns an error if:
/// - No item has this name
/// - Several items share this name (ambiguous)
pub fn match_unique<'a, T: Named>(
    items: &'a [T],
    kind: ResourceKind,
    name: &str,
    hint: Option<&str>,
) -> Result<&'a T, DeployError> {
    let matches: Vec<&T> = items.iter().filter(|item| item.name() == name).collect();

    match matches.as_slice() {
        [] => Err(DeployError::NotFound {
            kind,
            name: name.to_string(),
            hint: hint.map(str::to_string),
        }),
        [only] => Ok(*only),
        many => Err(DeployError::Ambiguous {
            kind,
            name: name.to_string(),
            ids: many.iter().map(|item| item.id()).collect(),
        }),
    }
}

/// Resolve the organization id
pub async fn resolve_organization_id(
    api: &dyn PlatformApi,
    ctx: &ContextParams,
) -> Result<Uuid, DeployError> {
    match IdOrName::from_flags(ctx.organization_id, ctx.organization.as_deref(), "organization")? {
        IdOrName::Id(id) => Ok(id),
        IdOrName::Name(name) => {
            let organizations = api.list_organizations().await?;
            let organization =
                match_unique(&organizations, ResourceKind::Organization, &name, None)?;
            debug!(%name, id = %organization.id, "resolved organization");
            Ok(organization.id)
        }
    }
}

/// Resolve the project id, resolving its organization only when needed
pub async fn resolve_project_id(
    api: &dyn PlatformApi,
    ctx: &ContextParams,
) -> Result<Uuid, DeployError> {
    match IdOrName::from_flags(ctx.project_id, ctx.project.as_deref(), "project")? {
        IdOrName::Id(id) => Ok(id),
        IdOrName::Name(name) => {
            let organization_id = resolve_organization_id(api, ctx).await?;
            let projects = api.list_projects(organization_id).await?;
            let project = match_unique(&projects, ResourceKind::Project, &name, None)?;
            debug!(%name, id = %project.id, "resolved project");
            Ok(project.id)
        }
    }
}

/// Resolve the environment id, resolving its project only when needed
pub async fn resolve_environment_id(
    api: &dyn PlatformApi,
    ctx: &ContextParams,
) -> Result<Uuid, DeployError> {
    match IdOrName::from_flags(ctx.environment_id, ctx.environment.as_deref(), "environment")? {
        IdOrName::Id(id) => Ok(id),
        IdOrName::Name(name) => {
            let project_id = resolve_project_id(api, ctx).await?;
            let environments = api.list_environments(project_id).await?;
            let environment =
                match_unique(&environments, ResourceKind::Environment, &name, None)?;
            debug!(%name, id = %environment.id, "resolved environment");
            Ok(environment.id)
        }
    }
}

/// Resolve a lifecycle job of an environment by exact name
///
/// # Errors
/// Returns an error if:
/// - No lifecycle job has this name (with a hint to list them)
/// - Several lifecycle jobs share this name
/// - The matching record has no usable source
/// - API call fails
pub async fn resolve_lifecycle_job(
    api: &dyn PlatformApi,
    environment_id: Uuid,
    name: &str,
) -> Result<Job, DeployError> {
    let lifecycles: Vec<_> = api
        .list_jobs(environment_id)
        .await?
        .into_iter()
        .filter(|job| job.job_type == JobKind::Lifecycle)
        .collect();

    let found = match_unique(
        &lifecycles,
        ResourceKind::LifecycleJob,
        name,
        Some(LIFECYCLE_LIST_HINT),
    )?;
    debug!(%name, id = %found.id, "resolved lifecycle job");

    Ok(Job::try_from(found.clone())?)
}
