//! Admin dashboard aggregate slice.
//!
//! Composes the user and appointment list fetches into one
//! dashboard-statistics view. The fan-out is all-or-nothing: if either
//! fetch fails, nothing is merged and the previous stats survive intact.

use anyhow::Result;
use futures::future::try_join;
use schedulix_client::resources::{appointments, users};
use schedulix_core::models::{
    Appointment, AppointmentFilter, DashboardStats, PageQuery, User, UserFilter,
};
use schedulix_core::SchedulixError;

use crate::store::Store;

/// How many of the server-ordered appointments the dashboard previews.
pub const RECENT_APPOINTMENTS: usize = 5;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminState {
    pub stats: DashboardStats,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub enum AdminAction {
    Started,
    /// Joint success of the user + appointment fan-out. Merged into the
    /// existing stats; fields populated by other means are preserved.
    Merged {
        users: Vec<User>,
        appointments: Vec<Appointment>,
    },
    /// Full stats record from the analytics endpoint; replaces wholesale.
    StatsLoaded(DashboardStats),
    Failed { message: String },
}

pub fn reduce(state: &AdminState, action: &AdminAction) -> AdminState {
    match action {
        AdminAction::Started => AdminState {
            loading: true,
            error: None,
            ..state.clone()
        },
        AdminAction::Merged {
            users,
            appointments,
        } => {
            let mut stats = state.stats.clone();
            stats.total_users = users.len() as u64;
            stats.total_appointments = appointments.len() as u64;
            // Preview keeps the server's order; no re-sort by date.
            stats.recent_appointments = appointments
                .iter()
                .take(RECENT_APPOINTMENTS)
                .cloned()
                .collect();
            AdminState {
                stats,
                loading: false,
                error: None,
            }
        }
        AdminAction::StatsLoaded(stats) => AdminState {
            stats: stats.clone(),
            loading: false,
            error: None,
        },
        AdminAction::Failed { message } => AdminState {
            loading: false,
            error: Some(message.clone()),
            ..state.clone()
        },
    }
}

impl Store {
    /// Fetch users and appointments concurrently and merge the counts and
    /// recent-appointments preview into the dashboard stats.
    pub async fn refresh_dashboard(&self) -> Result<()> {
        self.dispatch_admin(AdminAction::Started);

        let page = PageQuery { page: 1, limit: 100 };
        let user_filter = UserFilter::default();
        let appointment_filter = AppointmentFilter::default();
        let users_fut = users::list(self.client(), &user_filter, page);
        let appointments_fut =
            appointments::list(self.client(), &appointment_filter, page);

        match try_join(users_fut, appointments_fut).await {
            Ok(((users, _), (appointments, _))) => {
                self.dispatch_admin(AdminAction::Merged {
                    users,
                    appointments,
                });
                Ok(())
            }
            Err(err) => {
                let message =
                    SchedulixError::display_message(&err, "Failed to load dashboard statistics");
                self.dispatch_admin(AdminAction::Failed { message });
                Err(err)
            }
        }
    }

    /// Load the server-computed dashboard figures from the analytics
    /// endpoint, replacing the stats record wholesale.
    pub async fn load_dashboard_stats(&self) -> Result<()> {
        self.dispatch_admin(AdminAction::Started);

        match schedulix_client::resources::analytics::dashboard_stats(self.client()).await {
            Ok(stats) => {
                self.dispatch_admin(AdminAction::StatsLoaded(stats));
                Ok(())
            }
            Err(err) => {
                let message =
                    SchedulixError::display_message(&err, "Failed to load dashboard statistics");
                self.dispatch_admin(AdminAction::Failed { message });
                Err(err)
            }
        }
    }
}
