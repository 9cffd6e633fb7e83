//! Tenant/company profile endpoints.

use anyhow::Result;
use schedulix_core::models::Tenant;
use serde::Serialize;

use crate::client::ApiClient;
use crate::envelope;

#[derive(Debug, Clone, Serialize, Default)]
pub struct UpdateCompany {
    pub name: Option<String>,
    pub slug: Option<String>,
}

pub async fn profile(client: &ApiClient) -> Result<Tenant> {
    let body = client.get("/company").await?;
    envelope::unwrap_one(&body)
}

pub async fn update(client: &ApiClient, data: &UpdateCompany) -> Result<Tenant> {
    let body = client.put("/company", data).await?;
    envelope::unwrap_one(&body)
}
