//! schedulix-store: client-side state for the Schedulix platform.
//!
//! Five slices (auth session, users, patients, roles, appointments) plus
//! the admin dashboard aggregate, composed into a single [`Store`]. Each
//! slice is a pure reducer over a tagged action enum; the async action
//! creators on [`Store`] call the REST facade and turn every outcome,
//! success or failure, into a state transition. Failures are also
//! returned to the caller so forms can render field-level validation, but
//! the slice state is always settled first.

pub mod admin;
pub mod appointments;
pub mod auth;
pub mod collection;
pub mod observability;
pub mod patients;
pub mod roles;
pub mod storage;
pub mod store;
pub mod users;

pub use admin::{AdminAction, AdminState, RECENT_APPOINTMENTS};
pub use appointments::{AppointmentsAction, AppointmentsState};
pub use auth::{AuthAction, AuthPhase, AuthState};
pub use collection::{CollectionAction, CollectionState, EntityRecord};
pub use patients::{PatientsAction, PatientsState};
pub use roles::{RolesAction, RolesState};
pub use storage::{
    FileStore, MemoryStore, PersistedSession, SessionStore, StorageError, StorageResult,
    TENANT_KEY, TOKEN_KEY, USER_KEY,
};
pub use store::{Slice, Store, Subscriber};
pub use users::{UsersAction, UsersState};
