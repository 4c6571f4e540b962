//! Lifecycle command handlers
//!
//! Handles deploying and listing lifecycle jobs.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::*;
use skiff_client::PlatformClient;
use skiff_core::domain::job::{Job, JobKind, JobSource, MalformedJob};
use skiff_core::dto::job::JobDeployRequest;
use uuid::Uuid;

use crate::api::PlatformApi;
use crate::config::Config;
use crate::credentials::provider_for;
use crate::deploy::deploy_lifecycle;
use crate::deploy::watch::colorize_state;
use crate::resolver::resolve_environment_id;
use crate::types::{ContextParams, DeployParams};

/// Organization / project / environment selection
#[derive(Args, Debug, Clone, Default)]
pub struct ContextArgs {
    /// Organization name
    #[arg(long)]
    organization: Option<String>,

    /// Organization id (skips the name lookup)
    #[arg(long)]
    organization_id: Option<Uuid>,

    /// Project name
    #[arg(long)]
    project: Option<String>,

    /// Project id (skips the name lookup)
    #[arg(long)]
    project_id: Option<Uuid>,

    /// Environment name
    #[arg(long)]
    environment: Option<String>,

    /// Environment id (skips every name lookup)
    #[arg(long)]
    environment_id: Option<Uuid>,
}

impl From<ContextArgs> for ContextParams {
    fn from(args: ContextArgs) -> Self {
        ContextParams {
            organization: args.organization,
            organization_id: args.organization_id,
            project: args.project,
            project_id: args.project_id,
            environment: args.environment,
            environment_id: args.environment_id,
        }
    }
}

/// Lifecycle subcommands
#[derive(Subcommand)]
pub enum LifecycleCommands {
    /// Deploy a lifecycle job
    Deploy {
        #[command(flatten)]
        context: ContextArgs,

        /// Lifecycle job name
        #[arg(short = 'n', long)]
        lifecycle: String,

        /// Commit to deploy (git-based jobs only)
        #[arg(short, long)]
        commit_id: Option<String>,

        /// Watch lifecycle status until it's ready or an error occurs
        #[arg(short, long)]
        watch: bool,
    },
    /// List lifecycle jobs of an environment
    List {
        #[command(flatten)]
        context: ContextArgs,
    },
}

/// Handle lifecycle commands
///
/// Routes lifecycle subcommands to their respective handlers.
///
/// # Arguments
/// * `command` - The lifecycle command to execute
/// * `config` - The CLI configuration
pub async fn handle_lifecycle_command(command: LifecycleCommands, config: &Config) -> Result<()> {
    let token = provider_for(config).access_token()?;
    let client = PlatformClient::new(&config.api_url, &token)
        .context("Failed to create platform client")?;

    match command {
        LifecycleCommands::Deploy {
            context,
            lifecycle,
            commit_id,
            watch,
        } => {
            let params = DeployParams {
                context: context.into(),
                lifecycle,
                commit_id,
                watch,
            };
            deploy(&client, &params, config.watch_interval).await
        }
        LifecycleCommands::List { context } => {
            let lifecycles = list_lifecycles(&client, &context.into()).await?;
            print_lifecycles(&lifecycles);
            Ok(())
        }
    }
}

/// Deploy a lifecycle job and report the result
async fn deploy(api: &dyn PlatformApi, params: &DeployParams, poll_interval: Duration) -> Result<()> {
    let deployment =
        deploy_lifecycle(api, params, poll_interval, super::interrupt_signal()).await?;
    println!("    Version: {}", describe_request(&deployment.request));

    if let Some(state) = deployment.final_state {
        println!(
            "{} Lifecycle job {} finished: {}",
            "✓".green(),
            deployment.job.name.bold(),
            colorize_state(state)
        );
    }

    Ok(())
}

/// Human-readable version carried by a deploy request
fn describe_request(request: &JobDeployRequest) -> String {
    match (&request.git_commit_id, &request.image_tag) {
        (Some(commit), _) => format!("commit {}", commit),
        (None, Some(tag)) => format!("image tag {}", tag),
        (None, None) => "current".to_string(),
    }
}

/// Lifecycle jobs of an environment, records without a usable source included
async fn list_lifecycles(
    api: &dyn PlatformApi,
    context: &ContextParams,
) -> Result<Vec<Result<Job, MalformedJob>>> {
    let environment_id = resolve_environment_id(api, context).await?;

    Ok(api
        .list_jobs(environment_id)
        .await?
        .into_iter()
        .filter(|job| job.job_type == JobKind::Lifecycle)
        .map(Job::try_from)
        .collect())
}

/// Print the lifecycle job listing
fn print_lifecycles(lifecycles: &[Result<Job, MalformedJob>]) {
    if lifecycles.is_empty() {
        println!("{}", "No lifecycle jobs found.".yellow());
        return;
    }

    println!(
        "{}",
        format!("Found {} lifecycle job(s):", lifecycles.len()).bold()
    );
    println!();
    for lifecycle in lifecycles {
        match lifecycle {
            Ok(job) => print_lifecycle_summary(job),
            Err(malformed) => {
                println!(
                    "  {} {} {}",
                    "▸".cyan(),
                    malformed.name.bold(),
                    malformed.id.to_string().dimmed()
                );
                println!("    Source:  {}", "missing".red());
                println!();
            }
        }
    }
}

/// Print a lifecycle job summary
fn print_lifecycle_summary(job: &Job) {
    println!(
        "  {} {} {}",
        "▸".cyan(),
        job.name.bold(),
        job.id.to_string().dimmed()
    );
    match &job.source {
        JobSource::Git {
            repository,
            deployed_commit_id,
        } => {
            println!("    Source:  git {}", repository.dimmed());
            println!(
                "    Commit:  {}",
                deployed_commit_id.as_deref().unwrap_or("-")
            );
        }
        JobSource::Image { image_name, tag } => {
            println!("    Source:  image {}", image_name.dimmed());
            println!("    Tag:     {}", tag);
        }
    }
    println!();
}
