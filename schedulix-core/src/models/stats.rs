//! Dashboard statistics model.

use serde::{Deserialize, Serialize};

use crate::models::appointment::Appointment;

/// Aggregated figures for the admin dashboard.
///
/// Populated from two directions: the analytics endpoint fills the whole
/// record, while the admin aggregate merges `total_users`,
/// `total_appointments` and `recent_appointments` from its own fan-out
/// without touching the other fields.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DashboardStats {
    pub total_users: u64,
    pub total_appointments: u64,
    pub total_patients: u64,
    pub total_doctors: u64,
    pub revenue_cents: i64,
    pub recent_appointments: Vec<Appointment>,
}
