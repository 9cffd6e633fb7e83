//! Analytics endpoints.

use anyhow::Result;
use schedulix_core::models::DashboardStats;

use crate::client::ApiClient;
use crate::envelope;

/// Full dashboard figures computed server-side.
pub async fn dashboard_stats(client: &ApiClient) -> Result<DashboardStats> {
    let body = client.get("/analytics/dashboard").await?;
    envelope::unwrap_one(&body)
}
