//! Deploy target domain type

use uuid::Uuid;

use super::job::Job;

/// A resolved deployment target
///
/// Created once by target resolution and consumed read-only by the rest of
/// the deploy pipeline.
#[derive(Debug, Clone)]
pub enum DeployTarget {
    /// A job scoped to an environment
    Job(Job),
    /// A single cluster
    Cluster { id: Uuid },
    /// Every cluster the admin endpoint manages
    AllClusters,
}

impl std::fmt::Display for DeployTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeployTarget::Job(job) => write!(f, "{} '{}' ({})", job.kind, job.name, job.id),
            DeployTarget::Cluster { id } => write!(f, "cluster {}", id),
            DeployTarget::AllClusters => write!(f, "all clusters"),
        }
    }
}
