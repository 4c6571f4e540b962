//! Cluster deploy DTOs

use serde::{Deserialize, Serialize};

/// Cluster deploy submission
///
/// Only simulated deploys carry a body; a real deploy is an empty POST.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusterDeployRequest {
    pub dry_run: bool,
}

impl ClusterDeployRequest {
    /// Body to send, if any
    pub fn body(&self) -> Option<ClusterDeployBody> {
        self.dry_run.then_some(ClusterDeployBody {
            metadata: DeployMetadata {
                dry_run_deploy: true,
            },
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterDeployBody {
    pub metadata: DeployMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeployMetadata {
    pub dry_run_deploy: bool,
}
