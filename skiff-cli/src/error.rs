//! Deploy pipeline errors

use skiff_client::ClientError;
use skiff_core::domain::job::MalformedJob;
use skiff_core::domain::state::OperationState;
use thiserror::Error;
use uuid::Uuid;

/// Kind of resource a lookup was about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Organization,
    Project,
    Environment,
    LifecycleJob,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::Organization => write!(f, "organization"),
            ResourceKind::Project => write!(f, "project"),
            ResourceKind::Environment => write!(f, "environment"),
            ResourceKind::LifecycleJob => write!(f, "lifecycle"),
        }
    }
}

/// Errors surfaced by the deploy pipeline
#[derive(Debug, Error)]
pub enum DeployError {
    /// No usable credential
    #[error("not authenticated: {0}")]
    Auth(String),

    /// A named resource does not exist
    #[error("{kind} {name} not found")]
    NotFound {
        kind: ResourceKind,
        name: String,
        /// Follow-up command the user can run
        hint: Option<String>,
    },

    /// A name matches more than one resource
    #[error("{kind} name '{name}' is ambiguous, it matches {}", join_ids(.ids))]
    Ambiguous {
        kind: ResourceKind,
        name: String,
        ids: Vec<Uuid>,
    },

    /// The target is busy with another operation
    #[error(
        "environment id '{environment_id}' is not in a terminal state (currently {state}). \
         The request is not queued and you must wait for the end of the current operation \
         to run your command. Try again in a few moments"
    )]
    NotTerminal {
        environment_id: Uuid,
        state: OperationState,
    },

    /// The platform returned a record the pipeline cannot act on
    #[error("data integrity error: {0}")]
    DataIntegrity(#[from] MalformedJob),

    /// Non-2xx response
    #[error("request failed with status {status}: {body}")]
    Http { status: u16, body: String },

    /// Transport or decoding failure
    #[error(transparent)]
    Client(ClientError),

    /// The operation was interrupted
    #[error("{0}")]
    Cancelled(String),

    /// Terminal input/output failure
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The confirmation prompt could not be shown or read
    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// Missing or invalid configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// A watched operation ended in an error state
    #[error("{target} finished in state {state}")]
    Failed {
        target: String,
        state: OperationState,
    },
}

fn join_ids(ids: &[Uuid]) -> String {
    ids.iter()
        .map(Uuid::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl DeployError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            // Conventional status for SIGINT
            DeployError::Cancelled(_) => 130,
            _ => 1,
        }
    }

    pub fn hint(&self) -> Option<&str> {
        match self {
            DeployError::NotFound { hint, .. } => hint.as_deref(),
            _ => None,
        }
    }
}

impl From<ClientError> for DeployError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::ApiError { status, message } => DeployError::Http {
                status,
                body: message,
            },
            other => DeployError::Client(other),
        }
    }
}
