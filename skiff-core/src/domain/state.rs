//! Operation state domain types
//!
//! States are only ever mutated by the platform; the client reads them to decide
//! whether a new deployment may be enqueued and when a watch is finished.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// State of an environment or service operation as reported by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationState {
    Ready,
    Queued,
    DeploymentQueued,
    Building,
    BuildError,
    Built,
    Deploying,
    DeploymentError,
    Deployed,
    Stopping,
    StopError,
    Stopped,
    Restarting,
    RestartError,
    Restarted,
    Deleting,
    DeleteError,
    Deleted,
    Canceling,
    Canceled,
    /// Any state this client does not know about; never terminal
    #[serde(other)]
    Unknown,
}

impl OperationState {
    /// Whether no further transition is expected without a new trigger
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            OperationState::Ready
                | OperationState::BuildError
                | OperationState::DeploymentError
                | OperationState::Deployed
                | OperationState::StopError
                | OperationState::Stopped
                | OperationState::RestartError
                | OperationState::Restarted
                | OperationState::DeleteError
                | OperationState::Deleted
                | OperationState::Canceled
        )
    }

    /// Whether this terminal state reports a failed operation
    pub fn is_error(self) -> bool {
        matches!(
            self,
            OperationState::BuildError
                | OperationState::DeploymentError
                | OperationState::StopError
                | OperationState::RestartError
                | OperationState::DeleteError
                | OperationState::Canceled
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OperationState::Ready => "READY",
            OperationState::Queued => "QUEUED",
            OperationState::DeploymentQueued => "DEPLOYMENT_QUEUED",
            OperationState::Building => "BUILDING",
            OperationState::BuildError => "BUILD_ERROR",
            OperationState::Built => "BUILT",
            OperationState::Deploying => "DEPLOYING",
            OperationState::DeploymentError => "DEPLOYMENT_ERROR",
            OperationState::Deployed => "DEPLOYED",
            OperationState::Stopping => "STOPPING",
            OperationState::StopError => "STOP_ERROR",
            OperationState::Stopped => "STOPPED",
            OperationState::Restarting => "RESTARTING",
            OperationState::RestartError => "RESTART_ERROR",
            OperationState::Restarted => "RESTARTED",
            OperationState::Deleting => "DELETING",
            OperationState::DeleteError => "DELETE_ERROR",
            OperationState::Deleted => "DELETED",
            OperationState::Canceling => "CANCELING",
            OperationState::Canceled => "CANCELED",
            OperationState::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for OperationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of a single service (job, application, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Status {
    pub id: Uuid,
    pub state: OperationState,
    #[serde(default)]
    pub message: Option<String>,
}

/// Status of a whole environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentStatus {
    pub id: Uuid,
    pub state: OperationState,
    #[serde(default)]
    pub last_deployment_date: Option<DateTime<Utc>>,
}
