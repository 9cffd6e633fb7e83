//! Tenant/organization model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A tenant on the platform (a clinic or clinic group). Embedded in the
/// identity record when the authenticated user belongs to one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tenant {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
}
