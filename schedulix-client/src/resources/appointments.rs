//! Appointment scheduling endpoints.

use anyhow::Result;
use schedulix_core::models::{
    Appointment, AppointmentFilter, CreateAppointment, PageQuery, Pagination, UpdateAppointment,
};
use uuid::Uuid;

use crate::client::ApiClient;
use crate::envelope;
use crate::resources::ListParams;

pub async fn list(
    client: &ApiClient,
    filter: &AppointmentFilter,
    page: PageQuery,
) -> Result<(Vec<Appointment>, Option<Pagination>)> {
    let body = client
        .get_query("/appointments", &ListParams { filter, page })
        .await?;
    envelope::unwrap_list(&body, "appointments")
}

pub async fn get(client: &ApiClient, id: Uuid) -> Result<Appointment> {
    let body = client.get(&format!("/appointments/{id}")).await?;
    envelope::unwrap_one(&body)
}

pub async fn create(client: &ApiClient, data: &CreateAppointment) -> Result<Appointment> {
    let body = client.post("/appointments", data).await?;
    envelope::unwrap_one(&body)
}

pub async fn update(client: &ApiClient, id: Uuid, data: &UpdateAppointment) -> Result<Appointment> {
    let body = client.put(&format!("/appointments/{id}"), data).await?;
    envelope::unwrap_one(&body)
}

pub async fn remove(client: &ApiClient, id: Uuid) -> Result<()> {
    client.delete(&format!("/appointments/{id}")).await?;
    Ok(())
}
