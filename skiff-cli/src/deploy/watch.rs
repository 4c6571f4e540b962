//! Watch poller
//!
//! Polls a job's status until it reaches a terminal state or the caller's
//! cancellation future resolves, whichever comes first.

use std::future::Future;
use std::time::Duration;

use colored::*;
use skiff_core::domain::state::{OperationState, Status};
use tracing::debug;
use uuid::Uuid;

use crate::api::PlatformApi;
use crate::error::DeployError;

/// Default delay between two polls
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(3);

/// Job being watched and the environment it lives in
#[derive(Debug, Clone, Copy)]
pub struct WatchTarget {
    pub job_id: Uuid,
    pub environment_id: Uuid,
}

/// Poll until a terminal state is observed
///
/// `progress` is called once per poll, in the order states are reported.
/// A failed poll ends the watch with that error. When `cancel` resolves the
/// watch stops at once, without waiting for the current sleep or request.
pub async fn watch<C, P>(
    api: &dyn PlatformApi,
    target: WatchTarget,
    poll_interval: Duration,
    cancel: C,
    mut progress: P,
) -> Result<OperationState, DeployError>
where
    C: Future<Output = ()>,
    P: FnMut(&WatchTarget, &Status),
{
    tokio::pin!(cancel);

    loop {
        let status = tokio::select! {
            _ = &mut cancel => return Err(interrupted(&target)),
            status = api.job_status(target.job_id) => status?,
        };

        debug!(job_id = %target.job_id, state = %status.state, "polled job status");
        progress(&target, &status);

        if status.state.is_terminal() {
            return Ok(status.state);
        }

        tokio::select! {
            _ = &mut cancel => return Err(interrupted(&target)),
            _ = tokio::time::sleep(poll_interval) => {}
        }
    }
}

fn interrupted(target: &WatchTarget) -> DeployError {
    DeployError::Cancelled(format!(
        "watch of job {} interrupted; the deployment keeps running",
        target.job_id
    ))
}

/// Print one progress line
pub fn print_progress(target: &WatchTarget, status: &Status) {
    let line = format!(
        "  {} job {} in environment {}: {}",
        "▸".cyan(),
        target.job_id.to_string().dimmed(),
        target.environment_id.to_string().dimmed(),
        colorize_state(status.state)
    );
    match &status.message {
        Some(message) if !message.is_empty() => println!("{} ({})", line, message.dimmed()),
        _ => println!("{}", line),
    }
}

/// Colorize an operation state for display
pub fn colorize_state(state: OperationState) -> ColoredString {
    let state_str = state.as_str();
    if state.is_error() {
        state_str.red()
    } else if state.is_terminal() {
        state_str.green()
    } else if state == OperationState::Unknown {
        state_str.dimmed()
    } else {
        state_str.yellow()
    }
}
