//! Role domain model.
//!
//! Server-backed roles are administrative data the roles slice manages
//! like any other collection; client-side authorization decisions are made
//! by the static catalog in `schedulix-access`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Role {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// Permission identifiers following the `resource.action` convention.
    pub permissions: Vec<String>,
    /// Number of users currently holding the role.
    pub user_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRole {
    pub name: String,
    pub description: String,
    pub permissions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateRole {
    pub name: Option<String>,
    pub description: Option<String>,
    pub permissions: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RoleFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}
