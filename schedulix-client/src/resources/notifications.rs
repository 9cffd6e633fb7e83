//! Notification endpoints.

use anyhow::Result;
use schedulix_core::models::{Notification, PageQuery, Pagination};
use uuid::Uuid;

use crate::client::ApiClient;
use crate::envelope;

pub async fn list(
    client: &ApiClient,
    page: PageQuery,
) -> Result<(Vec<Notification>, Option<Pagination>)> {
    let body = client.get_query("/notifications", &page).await?;
    envelope::unwrap_list(&body, "notifications")
}

pub async fn mark_read(client: &ApiClient, id: Uuid) -> Result<Notification> {
    let body = client.post_empty(&format!("/notifications/{id}/read")).await?;
    envelope::unwrap_one(&body)
}
