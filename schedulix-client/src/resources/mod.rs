//! Resource-scoped API functions, one module per backend resource and one
//! function per (resource, verb) pair. Every function is a single round
//! trip through the shared [`ApiClient`](crate::ApiClient).

use schedulix_core::models::PageQuery;
use serde::Serialize;

pub mod analytics;
pub mod appointments;
pub mod auth;
pub mod company;
pub mod doctors;
pub mod invoices;
pub mod notifications;
pub mod patients;
pub mod payments;
pub mod roles;
pub mod users;

/// Filter + page window flattened into one query string.
#[derive(Serialize)]
pub(crate) struct ListParams<'a, F: Serialize> {
    #[serde(flatten)]
    pub filter: &'a F,
    #[serde(flatten)]
    pub page: PageQuery,
}
