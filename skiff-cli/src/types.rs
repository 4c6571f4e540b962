//! Common types used across CLI modules

use uuid::Uuid;

use crate::error::DeployError;

/// Identifier that is either an explicit id or a name to look up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdOrName {
    /// Explicit id, no lookup needed
    Id(Uuid),
    /// Exact, case-sensitive name
    Name(String),
}

impl IdOrName {
    /// Build from a pair of `--<flag>-id` / `--<flag>` values
    ///
    /// The id wins when both are given. An empty name counts as absent.
    pub fn from_flags(id: Option<Uuid>, name: Option<&str>, flag: &str) -> Result<Self, DeployError> {
        match (id, name.filter(|n| !n.is_empty())) {
            (Some(id), _) => Ok(IdOrName::Id(id)),
            (None, Some(name)) => Ok(IdOrName::Name(name.to_string())),
            (None, None) => Err(DeployError::config(format!(
                "{flag} is required: pass --{flag} <name> or --{flag}-id <id>"
            ))),
        }
    }
}

impl std::fmt::Display for IdOrName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdOrName::Id(id) => write!(f, "{}", id),
            IdOrName::Name(name) => write!(f, "{}", name),
        }
    }
}

/// Organization, project and environment selection shared by job commands
#[derive(Debug, Clone, Default)]
pub struct ContextParams {
    pub organization: Option<String>,
    pub organization_id: Option<Uuid>,
    pub project: Option<String>,
    pub project_id: Option<Uuid>,
    pub environment: Option<String>,
    pub environment_id: Option<Uuid>,
}

/// Everything `lifecycle deploy` needs, in place of process-wide flag state
#[derive(Debug, Clone)]
pub struct DeployParams {
    pub context: ContextParams,
    /// Exact lifecycle job name
    pub lifecycle: String,
    /// Commit to deploy instead of the currently deployed one (git jobs only)
    pub commit_id: Option<String>,
    /// Block until the job reaches a terminal state
    pub watch: bool,
}
