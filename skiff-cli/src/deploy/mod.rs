//! Deploy pipeline
//!
//! Stages, in order: target resolution, terminal-state guard, request
//! building (jobs), dry-run gate (clusters), submission, optional watch.
//! Every stage is a plain function over the `api` traits; nothing is kept
//! between invocations.

pub mod cluster;
pub mod dry_run;
pub mod guard;
pub mod lifecycle;
pub mod request;
pub mod watch;

pub use cluster::{ClusterOutcome, ClusterSelection, deploy_clusters};
pub use lifecycle::deploy_lifecycle;
