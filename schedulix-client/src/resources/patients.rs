//! Patient management endpoints.

use anyhow::Result;
use schedulix_core::models::{
    CreatePatient, PageQuery, Pagination, Patient, PatientFilter, UpdatePatient,
};
use uuid::Uuid;

use crate::client::ApiClient;
use crate::envelope;
use crate::resources::ListParams;

pub async fn list(
    client: &ApiClient,
    filter: &PatientFilter,
    page: PageQuery,
) -> Result<(Vec<Patient>, Option<Pagination>)> {
    let body = client
        .get_query("/patients", &ListParams { filter, page })
        .await?;
    envelope::unwrap_list(&body, "patients")
}

pub async fn get(client: &ApiClient, id: Uuid) -> Result<Patient> {
    let body = client.get(&format!("/patients/{id}")).await?;
    envelope::unwrap_one(&body)
}

pub async fn create(client: &ApiClient, data: &CreatePatient) -> Result<Patient> {
    let body = client.post("/patients", data).await?;
    envelope::unwrap_one(&body)
}

pub async fn update(client: &ApiClient, id: Uuid, data: &UpdatePatient) -> Result<Patient> {
    let body = client.put(&format!("/patients/{id}"), data).await?;
    envelope::unwrap_one(&body)
}

pub async fn remove(client: &ApiClient, id: Uuid) -> Result<()> {
    client.delete(&format!("/patients/{id}")).await?;
    Ok(())
}
