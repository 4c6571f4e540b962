//! Terminal-state guard
//!
//! Refuses to enqueue a deployment while the environment is still busy with
//! another operation.

use skiff_core::domain::state::OperationState;
use tracing::debug;
use uuid::Uuid;

use crate::api::PlatformApi;
use crate::error::{DeployError, ResourceKind};

/// Fail unless the environment is in a terminal state
///
/// Only reads the environment status; never submits anything.
pub async fn assert_terminal(
    api: &dyn PlatformApi,
    environment_id: Uuid,
) -> Result<OperationState, DeployError> {
    let status = api
        .environment_status(environment_id)
        .await
        .map_err(|err| {
            if err.is_not_found() {
                DeployError::NotFound {
                    kind: ResourceKind::Environment,
                    name: environment_id.to_string(),
                    hint: None,
                }
            } else {
                err.into()
            }
        })?;

    debug!(%environment_id, state = %status.state, "environment state");

    if !status.state.is_terminal() {
        return Err(DeployError::NotTerminal {
            environment_id,
            state: status.state,
        });
    }

    Ok(status.state)
}
