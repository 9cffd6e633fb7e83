//! schedulix-client: REST client facade for the Schedulix client core.
//!
//! One shared [`ApiClient`] owns the HTTP connection pool, attaches the
//! bearer token to every outgoing request, enforces the per-request
//! timeout, and maps every response into either an envelope body or a
//! structured [`SchedulixError`](schedulix_core::SchedulixError). The
//! resource modules expose one function per (resource, verb) pair on top
//! of it.

pub mod client;
pub mod envelope;
pub mod resources;

pub use client::{ApiClient, BearerSource, NoBearer, UnauthorizedHandler};
