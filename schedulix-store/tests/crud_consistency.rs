use chrono::Utc;
use schedulix_core::models::{PatientFilter, Pagination, Patient};
use schedulix_core::ClientOptions;
use schedulix_store::{PatientsAction, Store};
use uuid::Uuid;

/// Test factory functions
fn patient(first_name: &str) -> Patient {
    Patient {
        id: Uuid::new_v4(),
        first_name: first_name.to_string(),
        last_name: "Example".to_string(),
        email: None,
        phone: None,
        date_of_birth: None,
        gender: None,
        blood_group: None,
        address: None,
        created_at: Utc::now(),
    }
}

fn store() -> Store {
    Store::in_memory(ClientOptions::default()).unwrap()
}

fn names(store: &Store) -> Vec<String> {
    store
        .patients_state()
        .items
        .iter()
        .map(|p| p.first_name.clone())
        .collect()
}

#[test]
fn create_update_delete_keep_list_and_current_consistent() {
    let store = store();
    let (a, b, c) = (patient("A"), patient("B"), patient("C"));

    // Arrange: list [A, B, C] with B selected
    store.dispatch_patients(PatientsAction::ListStarted { seq: 1 });
    store.dispatch_patients(PatientsAction::ListLoaded {
        seq: 1,
        items: vec![a.clone(), b.clone(), c.clone()],
        pagination: None,
    });
    store.dispatch_patients(PatientsAction::CurrentLoaded(b.clone()));

    // Create prepends
    let d = patient("D");
    store.dispatch_patients(PatientsAction::Created(d.clone()));
    assert_eq!(names(&store), ["D", "A", "B", "C"]);

    // Update replaces in place and follows the current pointer
    let mut b_prime = b.clone();
    b_prime.first_name = "B2".to_string();
    store.dispatch_patients(PatientsAction::Updated(b_prime.clone()));
    assert_eq!(names(&store), ["D", "A", "B2", "C"]);
    assert_eq!(store.patients_state().current, Some(b_prime));

    // Delete removes and clears the matching current pointer
    store.dispatch_patients(PatientsAction::Removed(b.id));
    assert_eq!(names(&store), ["D", "A", "C"]);
    assert_eq!(store.patients_state().current, None);
}

#[test]
fn updating_an_id_missing_from_the_list_is_a_silent_no_op() {
    let store = store();
    store.dispatch_patients(PatientsAction::ListStarted { seq: 1 });
    store.dispatch_patients(PatientsAction::ListLoaded {
        seq: 1,
        items: vec![patient("A")],
        pagination: None,
    });

    store.dispatch_patients(PatientsAction::Updated(patient("Ghost")));

    assert_eq!(names(&store), ["A"]);
    assert_eq!(store.patients_state().current, None);
    assert!(store.patients_state().error.is_none());
}

#[test]
fn deleting_an_unselected_record_leaves_current_alone() {
    let store = store();
    let (a, b) = (patient("A"), patient("B"));
    store.dispatch_patients(PatientsAction::ListStarted { seq: 1 });
    store.dispatch_patients(PatientsAction::ListLoaded {
        seq: 1,
        items: vec![a.clone(), b.clone()],
        pagination: None,
    });
    store.dispatch_patients(PatientsAction::CurrentLoaded(b.clone()));

    store.dispatch_patients(PatientsAction::Removed(a.id));

    assert_eq!(names(&store), ["B"]);
    assert_eq!(store.patients_state().current, Some(b));
}

#[test]
fn stale_list_responses_are_discarded() {
    let store = store();

    // Two list requests leave; the older one settles last.
    store.dispatch_patients(PatientsAction::ListStarted { seq: 1 });
    store.dispatch_patients(PatientsAction::ListStarted { seq: 2 });
    store.dispatch_patients(PatientsAction::ListLoaded {
        seq: 2,
        items: vec![patient("Fresh")],
        pagination: None,
    });
    store.dispatch_patients(PatientsAction::ListLoaded {
        seq: 1,
        items: vec![patient("Stale")],
        pagination: None,
    });

    assert_eq!(names(&store), ["Fresh"]);

    // A stale failure must not clobber the fresh result either.
    store.dispatch_patients(PatientsAction::ListFailed {
        seq: 1,
        message: "timed out".to_string(),
    });
    assert!(store.patients_state().error.is_none());
}

#[test]
fn list_failure_keeps_the_previous_list() {
    let store = store();
    store.dispatch_patients(PatientsAction::ListStarted { seq: 1 });
    store.dispatch_patients(PatientsAction::ListLoaded {
        seq: 1,
        items: vec![patient("A"), patient("B")],
        pagination: None,
    });

    store.dispatch_patients(PatientsAction::ListStarted { seq: 2 });
    let mid_flight = store.patients_state();
    assert!(mid_flight.loading);
    assert!(mid_flight.error.is_none());

    store.dispatch_patients(PatientsAction::ListFailed {
        seq: 2,
        message: "Failed to load patients".to_string(),
    });

    let state = store.patients_state();
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("Failed to load patients"));
    assert_eq!(names(&store), ["A", "B"]);
}

#[test]
fn pagination_updates_only_when_the_server_supplies_it() {
    let store = store();
    let pagination = Pagination {
        page: 3,
        limit: 25,
        total: 120,
        total_pages: 5,
    };

    store.dispatch_patients(PatientsAction::ListStarted { seq: 1 });
    store.dispatch_patients(PatientsAction::ListLoaded {
        seq: 1,
        items: vec![patient("A")],
        pagination: Some(pagination.clone()),
    });
    assert_eq!(store.patients_state().pagination, pagination);

    store.dispatch_patients(PatientsAction::ListStarted { seq: 2 });
    store.dispatch_patients(PatientsAction::ListLoaded {
        seq: 2,
        items: vec![patient("B")],
        pagination: None,
    });
    assert_eq!(store.patients_state().pagination, pagination);
}

#[test]
fn changing_the_filter_does_not_disturb_loaded_data() {
    let store = store();
    store.dispatch_patients(PatientsAction::ListStarted { seq: 1 });
    store.dispatch_patients(PatientsAction::ListLoaded {
        seq: 1,
        items: vec![patient("A")],
        pagination: None,
    });

    store.set_patient_filter(PatientFilter {
        search: Some("smith".to_string()),
        ..PatientFilter::default()
    });

    let state = store.patients_state();
    assert_eq!(state.filter.search.as_deref(), Some("smith"));
    assert_eq!(names(&store), ["A"]);
}
