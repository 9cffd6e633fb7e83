//! Authentication endpoints.

use anyhow::Result;
use schedulix_core::models::Identity;
use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::envelope;

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Token + identity pair the backend issues on login and register.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub user: Identity,
}

pub async fn login(client: &ApiClient, request: &LoginRequest) -> Result<AuthSession> {
    let body = client.post("/auth/login", request).await?;
    envelope::unwrap_one(&body)
}

pub async fn register(client: &ApiClient, request: &RegisterRequest) -> Result<AuthSession> {
    let body = client.post("/auth/register", request).await?;
    envelope::unwrap_one(&body)
}

/// Fetch the identity behind the current bearer token. Safe to call on
/// startup to validate a persisted token.
pub async fn me(client: &ApiClient) -> Result<Identity> {
    let body = client.get("/auth/me").await?;
    envelope::unwrap_one(&body)
}

/// Best-effort server-side logout; the client-side session teardown does
/// not depend on this call succeeding.
pub async fn logout(client: &ApiClient) -> Result<()> {
    client.post_empty("/auth/logout").await?;
    Ok(())
}
