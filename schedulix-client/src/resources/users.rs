//! User management endpoints.

use anyhow::Result;
use schedulix_core::models::{CreateUser, PageQuery, Pagination, UpdateUser, User, UserFilter};
use uuid::Uuid;

use crate::client::ApiClient;
use crate::envelope;
use crate::resources::ListParams;

pub async fn list(
    client: &ApiClient,
    filter: &UserFilter,
    page: PageQuery,
) -> Result<(Vec<User>, Option<Pagination>)> {
    let body = client
        .get_query("/users", &ListParams { filter, page })
        .await?;
    envelope::unwrap_list(&body, "users")
}

pub async fn get(client: &ApiClient, id: Uuid) -> Result<User> {
    let body = client.get(&format!("/users/{id}")).await?;
    envelope::unwrap_one(&body)
}

pub async fn create(client: &ApiClient, data: &CreateUser) -> Result<User> {
    let body = client.post("/users", data).await?;
    envelope::unwrap_one(&body)
}

pub async fn update(client: &ApiClient, id: Uuid, data: &UpdateUser) -> Result<User> {
    let body = client.put(&format!("/users/{id}"), data).await?;
    envelope::unwrap_one(&body)
}

pub async fn remove(client: &ApiClient, id: Uuid) -> Result<()> {
    client.delete(&format!("/users/{id}")).await?;
    Ok(())
}
