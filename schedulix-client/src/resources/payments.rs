//! Payment endpoints.

use anyhow::Result;
use schedulix_core::models::{PageQuery, Pagination, Payment, PaymentMethod};
use serde::Serialize;
use uuid::Uuid;

use crate::client::ApiClient;
use crate::envelope;

#[derive(Debug, Clone, Serialize)]
pub struct RecordPayment {
    pub patient_id: Uuid,
    pub invoice_id: Option<Uuid>,
    pub amount_cents: i64,
    pub method: PaymentMethod,
}

pub async fn list(
    client: &ApiClient,
    page: PageQuery,
) -> Result<(Vec<Payment>, Option<Pagination>)> {
    let body = client.get_query("/payments", &page).await?;
    envelope::unwrap_list(&body, "payments")
}

pub async fn record(client: &ApiClient, data: &RecordPayment) -> Result<Payment> {
    let body = client.post("/payments", data).await?;
    envelope::unwrap_one(&body)
}
