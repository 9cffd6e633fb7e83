use chrono::{Duration, Utc};
use schedulix_core::models::{
    Appointment, AppointmentStatus, DashboardStats, User,
};
use schedulix_core::ClientOptions;
use schedulix_store::{AdminAction, Store};
use uuid::Uuid;

/// Test factory functions
fn user(n: u32) -> User {
    User {
        id: Uuid::new_v4(),
        email: format!("user{n}@clinic.test"),
        first_name: format!("User{n}"),
        last_name: "Example".to_string(),
        roles: vec!["Receptionist".to_string()],
        is_active: true,
        tenant_id: None,
        created_at: Utc::now(),
    }
}

/// Appointments dated so the later entries are the most recent; the
/// preview must still follow server order, not date order.
fn appointment(n: i64) -> Appointment {
    Appointment {
        id: Uuid::new_v4(),
        patient_id: Uuid::new_v4(),
        doctor_id: Uuid::new_v4(),
        scheduled_at: Utc::now() + Duration::hours(n),
        duration_min: 30,
        status: AppointmentStatus::Scheduled,
        reason: Some(format!("visit {n}")),
        notes: None,
    }
}

fn store() -> Store {
    Store::in_memory(ClientOptions::default()).unwrap()
}

#[test]
fn joint_success_merges_counts_and_a_five_item_preview() {
    let store = store();
    let users: Vec<User> = (0..12).map(user).collect();
    let appointments: Vec<Appointment> = (0..7).map(appointment).collect();
    let expected_preview: Vec<Appointment> = appointments[..5].to_vec();

    store.dispatch_admin(AdminAction::Started);
    store.dispatch_admin(AdminAction::Merged {
        users,
        appointments,
    });

    let state = store.admin_state();
    assert!(!state.loading);
    assert_eq!(state.stats.total_users, 12);
    assert_eq!(state.stats.total_appointments, 7);
    // First five in their original order, not re-sorted by date.
    assert_eq!(state.stats.recent_appointments, expected_preview);
}

#[test]
fn merge_preserves_fields_populated_by_other_means() {
    let store = store();
    store.dispatch_admin(AdminAction::StatsLoaded(DashboardStats {
        total_users: 1,
        total_appointments: 1,
        total_patients: 88,
        total_doctors: 9,
        revenue_cents: 1_250_00,
        recent_appointments: vec![],
    }));

    store.dispatch_admin(AdminAction::Merged {
        users: (0..3).map(user).collect(),
        appointments: (0..2).map(appointment).collect(),
    });

    let stats = store.admin_state().stats;
    assert_eq!(stats.total_users, 3);
    assert_eq!(stats.total_appointments, 2);
    assert_eq!(stats.total_patients, 88);
    assert_eq!(stats.total_doctors, 9);
    assert_eq!(stats.revenue_cents, 1_250_00);
}

#[test]
fn partial_failure_merges_nothing() {
    let store = store();
    let before = DashboardStats {
        total_users: 12,
        total_appointments: 7,
        total_patients: 40,
        total_doctors: 4,
        revenue_cents: 0,
        recent_appointments: vec![appointment(1)],
    };
    store.dispatch_admin(AdminAction::StatsLoaded(before.clone()));

    // Act: the aggregate dispatch fails as a whole (one leg failed)
    store.dispatch_admin(AdminAction::Started);
    store.dispatch_admin(AdminAction::Failed {
        message: "Failed to load dashboard statistics".to_string(),
    });

    let state = store.admin_state();
    assert!(!state.loading);
    assert_eq!(
        state.error.as_deref(),
        Some("Failed to load dashboard statistics")
    );
    // No partial merge of the successful half.
    assert_eq!(state.stats, before);
}

#[test]
fn fewer_than_five_appointments_previews_them_all() {
    let store = store();
    let appointments: Vec<Appointment> = (0..3).map(appointment).collect();

    store.dispatch_admin(AdminAction::Merged {
        users: vec![],
        appointments: appointments.clone(),
    });

    let stats = store.admin_state().stats;
    assert_eq!(stats.total_users, 0);
    assert_eq!(stats.recent_appointments, appointments);
}
