//! Dry-run gate
//!
//! Decides whether a cluster deploy is simulated and asks the user to confirm
//! before anything is submitted. The flag is expressed as "dry run disabled":
//! `false` (the default) simulates, `true` deploys for real.

use std::io;

use async_trait::async_trait;
use colored::*;
use dialoguer::Input;
use skiff_core::dto::cluster::ClusterDeployRequest;
use tracing::debug;

use crate::error::DeployError;

/// Action name shown in the confirmation prompt
pub const DEPLOYMENT_ACTION: &str = "deployment";

/// The only answer that approves
const CONFIRMATION_WORD: &str = "yes";

/// Interactive confirmation
#[async_trait]
pub trait Confirm: Send {
    /// Ask the user to approve `action`; `Ok(false)` means declined
    async fn confirm(&mut self, action: &str) -> Result<bool, DeployError>;
}

/// Asks on the terminal
///
/// The prompt blocks, so it runs on the blocking pool.
pub struct PromptConfirm;

#[async_trait]
impl Confirm for PromptConfirm {
    async fn confirm(&mut self, action: &str) -> Result<bool, DeployError> {
        let prompt = confirmation_prompt(action);
        let answer = tokio::task::spawn_blocking(move || {
            Input::<String>::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()
        })
        .await
        .map_err(|err| DeployError::Io(io::Error::other(err)))??;

        Ok(is_confirmation(&answer))
    }
}

/// Approves without asking (`--yes`)
pub struct AssumeYes;

#[async_trait]
impl Confirm for AssumeYes {
    async fn confirm(&mut self, action: &str) -> Result<bool, DeployError> {
        debug!(%action, "confirmation skipped");
        Ok(true)
    }
}

fn confirmation_prompt(action: &str) -> String {
    format!("Type '{}' to confirm the {}", CONFIRMATION_WORD, action)
}

fn is_confirmation(answer: &str) -> bool {
    answer.trim() == CONFIRMATION_WORD
}

/// Outcome of the gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProceedDecision {
    /// Submit this request
    Proceed(ClusterDeployRequest),
    /// The user declined; nothing must be sent
    Abort,
}

/// Banner announcing the deploy mode
pub fn dry_run_banner(dry_run_disabled: bool) -> String {
    if dry_run_disabled {
        format!(
            "{} Dry run is disabled: this deployment will be applied.",
            "⚠".yellow()
        )
    } else {
        format!(
            "{} Dry run mode: the deployment is only simulated. Pass --disable-dry-run to apply it.",
            "ℹ".cyan()
        )
    }
}

/// Annotate the request and ask for confirmation
pub async fn gate(
    dry_run_disabled: bool,
    confirm: &mut dyn Confirm,
) -> Result<ProceedDecision, DeployError> {
    println!("{}", dry_run_banner(dry_run_disabled));

    if !confirm.confirm(DEPLOYMENT_ACTION).await? {
        debug!("deployment declined");
        return Ok(ProceedDecision::Abort);
    }

    Ok(ProceedDecision::Proceed(ClusterDeployRequest {
        dry_run: !dry_run_disabled,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::FakeConfirm;

    #[tokio::test]
    async fn test_dry_run_enabled_annotates_request() {
        let decision = gate(false, &mut AssumeYes).await.unwrap();
        let ProceedDecision::Proceed(req) = decision else {
            panic!("expected to proceed");
        };
        assert!(req.dry_run);
        assert!(req.body().is_some());
    }

    #[tokio::test]
    async fn test_dry_run_disabled_sends_no_marker() {
        let decision = gate(true, &mut AssumeYes).await.unwrap();
        assert_eq!(
            decision,
            ProceedDecision::Proceed(ClusterDeployRequest { dry_run: false })
        );
    }

    #[test]
    fn test_only_exact_yes_confirms() {
        assert!(is_confirmation("yes"));
        assert!(is_confirmation("  yes  \n"));
        assert!(!is_confirmation("y"));
        assert!(!is_confirmation("YES"));
        assert!(!is_confirmation(""));
    }

    #[test]
    fn test_prompt_names_the_action() {
        assert_eq!(
            confirmation_prompt(DEPLOYMENT_ACTION),
            "Type 'yes' to confirm the deployment"
        );
    }

    #[tokio::test]
    async fn test_declined_aborts() {
        let mut confirm = FakeConfirm::answering(false);
        let decision = gate(false, &mut confirm).await.unwrap();
        assert_eq!(decision, ProceedDecision::Abort);
        assert_eq!(confirm.asked(), [DEPLOYMENT_ACTION]);
    }
}
