//! Cluster deploy pipeline
//!
//! The dry-run gate is evaluated once, then every selected cluster is
//! submitted concurrently. A failing cluster never stops its siblings.

use futures_util::future::join_all;
use skiff_core::domain::target::DeployTarget;
use skiff_core::dto::cluster::ClusterDeployRequest;
use tracing::{info, warn};
use uuid::Uuid;

use super::dry_run::{self, Confirm, ProceedDecision};
use crate::api::AdminApi;
use crate::error::DeployError;

/// Which clusters to deploy
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClusterSelection {
    /// Explicit ids, deployed one request each
    Ids(Vec<Uuid>),
    /// Every cluster, through the organization-wide endpoint
    All,
}

impl ClusterSelection {
    /// Submission scopes in order, duplicates removed; `None` means every cluster
    fn scopes(&self) -> Vec<Option<Uuid>> {
        match self {
            ClusterSelection::All => vec![None],
            ClusterSelection::Ids(ids) => {
                let mut unique: Vec<Option<Uuid>> = Vec::with_capacity(ids.len());
                for id in ids {
                    if !unique.contains(&Some(*id)) {
                        unique.push(Some(*id));
                    }
                }
                unique
            }
        }
    }
}

/// Outcome for one target
#[derive(Debug)]
pub struct ClusterDeployResult {
    pub target: DeployTarget,
    pub result: Result<(), DeployError>,
}

#[derive(Debug)]
pub enum ClusterOutcome {
    /// Confirmation declined; nothing was sent
    Aborted,
    Submitted {
        request: ClusterDeployRequest,
        results: Vec<ClusterDeployResult>,
    },
}

impl ClusterOutcome {
    /// Number of targets whose submission failed
    pub fn failures(&self) -> usize {
        match self {
            ClusterOutcome::Aborted => 0,
            ClusterOutcome::Submitted { results, .. } => {
                results.iter().filter(|r| r.result.is_err()).count()
            }
        }
    }
}

/// Gate, then submit a deploy for every selected cluster
pub async fn deploy_clusters(
    admin: &dyn AdminApi,
    selection: &ClusterSelection,
    dry_run_disabled: bool,
    confirm: &mut dyn Confirm,
) -> Result<ClusterOutcome, DeployError> {
    let scopes = selection.scopes();
    if scopes.is_empty() {
        return Err(DeployError::config(
            "no cluster selected: pass --cluster-id <id> or --all",
        ));
    }

    let request = match dry_run::gate(dry_run_disabled, confirm).await? {
        ProceedDecision::Proceed(request) => request,
        ProceedDecision::Abort => return Ok(ClusterOutcome::Aborted),
    };

    let submissions = scopes.into_iter().map(|scope| async move {
        let (target, result) = match scope {
            Some(id) => (
                DeployTarget::Cluster { id },
                admin.deploy_cluster(id, &request).await,
            ),
            None => (
                DeployTarget::AllClusters,
                admin.deploy_all_clusters(&request).await,
            ),
        };

        match &result {
            Ok(()) => info!(%target, dry_run = request.dry_run, "cluster deploy accepted"),
            Err(err) => warn!(%target, error = %err, "cluster deploy failed"),
        }

        ClusterDeployResult {
            target,
            result: result.map_err(DeployError::from),
        }
    });

    let results = join_all(submissions).await;

    Ok(ClusterOutcome::Submitted { request, results })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{FakeAdmin, FakeConfirm};
    use crate::deploy::dry_run::AssumeYes;

    #[tokio::test]
    async fn test_declined_confirmation_sends_nothing() {
        let admin = FakeAdmin::default();
        let selection = ClusterSelection::Ids(vec![Uuid::new_v4()]);

        let mut confirm = FakeConfirm::answering(false);

        let outcome = deploy_clusters(&admin, &selection, false, &mut confirm)
            .await
            .unwrap();

        assert!(matches!(outcome, ClusterOutcome::Aborted));
        assert_eq!(confirm.asked().len(), 1);
        assert_eq!(admin.total_calls(), 0);
    }

    #[tokio::test]
    async fn test_single_cluster_dry_run() {
        let admin = FakeAdmin::default();
        let id = Uuid::new_v4();

        let outcome = deploy_clusters(&admin, &ClusterSelection::Ids(vec![id]), false, &mut AssumeYes)
            .await
            .unwrap();

        assert_eq!(outcome.failures(), 0);
        assert_eq!(
            admin.cluster_requests().get(&id),
            Some(&ClusterDeployRequest { dry_run: true })
        );
    }

    #[tokio::test]
    async fn test_all_clusters_uses_wide_endpoint() {
        let admin = FakeAdmin::default();

        deploy_clusters(&admin, &ClusterSelection::All, true, &mut AssumeYes)
            .await
            .unwrap();

        assert_eq!(
            *admin.all_calls.lock().unwrap(),
            vec![ClusterDeployRequest { dry_run: false }]
        );
        assert!(admin.cluster_calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_partial_failure_does_not_abort_siblings() {
        let ok_a = Uuid::new_v4();
        let failing = Uuid::new_v4();
        let ok_b = Uuid::new_v4();
        let admin = FakeAdmin::failing([failing]);

        let outcome = deploy_clusters(
            &admin,
            &ClusterSelection::Ids(vec![ok_a, failing, ok_b]),
            true,
            &mut AssumeYes,
        )
        .await
        .unwrap();

        assert_eq!(admin.total_calls(), 3);
        assert_eq!(outcome.failures(), 1);

        let ClusterOutcome::Submitted { results, .. } = outcome else {
            panic!("expected submissions");
        };
        let failed: Vec<_> = results
            .iter()
            .filter(|r| r.result.is_err())
            .map(|r| r.target.to_string())
            .collect();
        assert_eq!(failed, vec![format!("cluster {}", failing)]);
        assert!(matches!(
            results[1].result,
            Err(DeployError::Http { status: 409, .. })
        ));
    }

    #[tokio::test]
    async fn test_duplicate_ids_deploy_once() {
        let admin = FakeAdmin::default();
        let id = Uuid::new_v4();
        let mut confirm = FakeConfirm::answering(true);

        deploy_clusters(&admin, &ClusterSelection::Ids(vec![id, id]), true, &mut confirm)
            .await
            .unwrap();

        assert_eq!(confirm.asked().len(), 1);
        assert_eq!(admin.total_calls(), 1);
    }

    #[tokio::test]
    async fn test_empty_selection_is_config_error() {
        let admin = FakeAdmin::default();
        let mut confirm = FakeConfirm::answering(true);

        let err = deploy_clusters(&admin, &ClusterSelection::Ids(vec![]), true, &mut confirm)
            .await
            .unwrap_err();

        assert!(matches!(err, DeployError::Config(_)));
        assert!(confirm.asked().is_empty());
    }
}
