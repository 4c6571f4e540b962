//! Skiff Core
//!
//! Core types and abstractions for the Skiff deployment CLI.
//!
//! This crate contains:
//! - Domain types: platform entities (Organization, Job, OperationState, etc.)
//! - DTOs: wire representations exchanged with the platform API

pub mod domain;
pub mod dto;
