//! Organization, project and environment domain types
//!
//! These form the naming hierarchy used to locate a job:
//! organization → project → environment.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Named;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Environment {
    pub id: Uuid,
    pub name: String,
    /// Environment mode (e.g. PRODUCTION, STAGING, DEVELOPMENT)
    #[serde(default)]
    pub mode: Option<String>,
}

macro_rules! impl_named {
    ($($ty:ty),*) => {
        $(impl Named for $ty {
            fn id(&self) -> Uuid {
                self.id
            }

            fn name(&self) -> &str {
                &self.name
            }
        })*
    };
}

impl_named!(Organization, Project, Environment);
