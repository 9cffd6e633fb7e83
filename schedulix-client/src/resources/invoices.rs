//! Invoice endpoints.

use anyhow::Result;
use schedulix_core::models::{Invoice, PageQuery, Pagination};
use uuid::Uuid;

use crate::client::ApiClient;
use crate::envelope;

pub async fn list(
    client: &ApiClient,
    page: PageQuery,
) -> Result<(Vec<Invoice>, Option<Pagination>)> {
    let body = client.get_query("/invoices", &page).await?;
    envelope::unwrap_list(&body, "invoices")
}

pub async fn get(client: &ApiClient, id: Uuid) -> Result<Invoice> {
    let body = client.get(&format!("/invoices/{id}")).await?;
    envelope::unwrap_one(&body)
}
