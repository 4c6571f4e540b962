//! Data Transfer Objects for the platform API
//!
//! This module contains the wire representations exchanged with the platform.
//! Responses are converted into `domain` types before the deploy pipeline
//! acts on them.

pub mod cluster;
pub mod job;

use serde::{Deserialize, Serialize};

/// Envelope used by every list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Results<T> {
    pub results: Vec<T>,
}

/// Reference to another resource by id
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReferenceObject {
    pub id: uuid::Uuid,
}
