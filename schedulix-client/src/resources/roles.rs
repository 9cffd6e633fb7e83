//! Role management endpoints.

use anyhow::Result;
use schedulix_core::models::{CreateRole, PageQuery, Pagination, Role, RoleFilter, UpdateRole};
use uuid::Uuid;

use crate::client::ApiClient;
use crate::envelope;
use crate::resources::ListParams;

pub async fn list(
    client: &ApiClient,
    filter: &RoleFilter,
    page: PageQuery,
) -> Result<(Vec<Role>, Option<Pagination>)> {
    let body = client
        .get_query("/roles", &ListParams { filter, page })
        .await?;
    envelope::unwrap_list(&body, "roles")
}

pub async fn get(client: &ApiClient, id: Uuid) -> Result<Role> {
    let body = client.get(&format!("/roles/{id}")).await?;
    envelope::unwrap_one(&body)
}

pub async fn create(client: &ApiClient, data: &CreateRole) -> Result<Role> {
    let body = client.post("/roles", data).await?;
    envelope::unwrap_one(&body)
}

pub async fn update(client: &ApiClient, id: Uuid, data: &UpdateRole) -> Result<Role> {
    let body = client.put(&format!("/roles/{id}"), data).await?;
    envelope::unwrap_one(&body)
}

pub async fn remove(client: &ApiClient, id: Uuid) -> Result<()> {
    client.delete(&format!("/roles/{id}")).await?;
    Ok(())
}
