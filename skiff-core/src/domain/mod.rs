//! Core domain types
//!
//! This module contains the domain structures used by the Skiff client and CLI.
//! Wire records from `dto` are converted into these types once validated, so the
//! rest of the pipeline only ever sees well-formed values.

pub mod auth;
pub mod job;
pub mod organization;
pub mod state;
pub mod target;

/// A platform resource addressable by id and human-readable name
pub trait Named {
    fn id(&self) -> uuid::Uuid;
    fn name(&self) -> &str;
}
