//! Doctor management endpoints.

use anyhow::Result;
use schedulix_core::models::{
    CreateDoctor, Doctor, DoctorFilter, PageQuery, Pagination, UpdateDoctor,
};
use uuid::Uuid;

use crate::client::ApiClient;
use crate::envelope;
use crate::resources::ListParams;

pub async fn list(
    client: &ApiClient,
    filter: &DoctorFilter,
    page: PageQuery,
) -> Result<(Vec<Doctor>, Option<Pagination>)> {
    let body = client
        .get_query("/doctors", &ListParams { filter, page })
        .await?;
    envelope::unwrap_list(&body, "doctors")
}

pub async fn get(client: &ApiClient, id: Uuid) -> Result<Doctor> {
    let body = client.get(&format!("/doctors/{id}")).await?;
    envelope::unwrap_one(&body)
}

pub async fn create(client: &ApiClient, data: &CreateDoctor) -> Result<Doctor> {
    let body = client.post("/doctors", data).await?;
    envelope::unwrap_one(&body)
}

pub async fn update(client: &ApiClient, id: Uuid, data: &UpdateDoctor) -> Result<Doctor> {
    let body = client.put(&format!("/doctors/{id}"), data).await?;
    envelope::unwrap_one(&body)
}

pub async fn remove(client: &ApiClient, id: Uuid) -> Result<()> {
    client.delete(&format!("/doctors/{id}")).await?;
    Ok(())
}
